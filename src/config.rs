//! Site-wide constants.

use std::time::Duration;

pub const OWNER_NAME: &str = "Brian Do";

/// Address forwarded to the clipboard by every "Copy Email" button.
pub const CONTACT_EMAIL: &str = "brian.do@email.com";

/// Served from `public/`. Rendered as a small avatar on Home and a large portrait on About.
pub const PROFILE_PHOTO: &str = "/profile-photo.jpg";

/// Session storage key holding the last chosen [`Theme`](crate::theme::Theme).
pub const THEME_STORAGE_KEY: &str = "theme";

/// How long the copy button shows its outcome before returning to idle.
pub const COPY_FEEDBACK: Duration = Duration::from_millis(2000);

pub fn document_title(title: &str) -> String {
    format!("{OWNER_NAME} - {title}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_title() {
        assert_eq!(document_title("About"), "Brian Do - About");
    }
}

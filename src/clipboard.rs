//! Boundary to the platform copy-to-clipboard capability.

use thiserror::Error;

use crate::config::CONTACT_EMAIL;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard is not available")]
    Unavailable,
    #[error("Clipboard write was rejected: {0}")]
    Rejected(String),
}

#[allow(async_fn_in_trait)]
pub trait ClipboardBridge {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// `navigator.clipboard` of the current window.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClipboard;

impl ClipboardBridge for BrowserClipboard {
    #[cfg(feature = "hydrate")]
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| ClipboardError::Rejected(format!("{e:?}")))
    }

    #[cfg(not(feature = "hydrate"))]
    async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}

pub async fn copy_email<C: ClipboardBridge>(clipboard: &C) -> Result<(), ClipboardError> {
    let res = clipboard.write_text(CONTACT_EMAIL).await;
    match &res {
        Ok(()) => log::debug!("copied {CONTACT_EMAIL} to clipboard"),
        Err(e) => log::warn!("couldn't copy {CONTACT_EMAIL}: {e}"),
    }
    res
}

/// What the copy button currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyStatus {
    #[default]
    Idle,
    Copied,
    Failed,
}

impl CopyStatus {
    pub fn label(self) -> &'static str {
        match self {
            CopyStatus::Idle => "Copy Email",
            CopyStatus::Copied => "Copied!",
            CopyStatus::Failed => "Copy failed",
        }
    }
}

impl<T> From<&Result<T, ClipboardError>> for CopyStatus {
    fn from(res: &Result<T, ClipboardError>) -> Self {
        match res {
            Ok(_) => CopyStatus::Copied,
            Err(_) => CopyStatus::Failed,
        }
    }
}

/// Copy button state. Each outcome carries a stamp so the reset scheduled
/// by an earlier click can't clear the outcome of a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CopyFeedback {
    status: CopyStatus,
    stamp: u64,
}

impl CopyFeedback {
    pub fn status(&self) -> CopyStatus {
        self.status
    }

    /// Shows `status` and returns the stamp its reset has to present.
    pub fn show(&mut self, status: CopyStatus) -> u64 {
        self.stamp = self.stamp.wrapping_add(1);
        self.status = status;
        self.stamp
    }

    /// Back to idle, unless something newer was shown after `stamp`.
    pub fn expire(&mut self, stamp: u64) {
        if self.stamp == stamp {
            self.status = CopyStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        writes: Mutex<Vec<String>>,
        reject: bool,
    }

    impl ClipboardBridge for Recorder {
        async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            self.writes
                .lock()
                .expect("should be able to lock writes")
                .push(text.to_string());
            if self.reject {
                Err(ClipboardError::Rejected("NotAllowedError".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[tokio::test]
    async fn test_copy_email_forwards_literal_address() {
        let clipboard = Recorder::default();
        // one call per page that renders the button
        for _ in 0..5 {
            copy_email(&clipboard).await.expect("write should succeed");
        }
        let writes = clipboard.writes.lock().unwrap();
        assert_eq!(writes.len(), 5);
        assert!(writes.iter().all(|w| w == "brian.do@email.com"));
    }

    #[tokio::test]
    async fn test_rejection_is_surfaced() {
        let clipboard = Recorder {
            reject: true,
            ..Default::default()
        };
        let res = copy_email(&clipboard).await;
        assert_eq!(
            res,
            Err(ClipboardError::Rejected("NotAllowedError".to_string()))
        );
        assert_eq!(CopyStatus::from(&res), CopyStatus::Failed);
        assert_eq!(clipboard.writes.lock().unwrap().len(), 1);
    }

    #[cfg(not(feature = "hydrate"))]
    #[tokio::test]
    async fn test_browser_clipboard_unavailable_off_wasm() {
        let res = copy_email(&BrowserClipboard).await;
        assert_eq!(res, Err(ClipboardError::Unavailable));
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(CopyStatus::default().label(), "Copy Email");
        assert_eq!(CopyStatus::from(&Ok::<(), ClipboardError>(())), CopyStatus::Copied);
        assert_eq!(CopyStatus::Failed.label(), "Copy failed");
    }

    #[test]
    fn test_stale_reset_keeps_newer_outcome() {
        let mut feedback = CopyFeedback::default();
        let first = feedback.show(CopyStatus::Copied);
        // second click lands before the first reset fires
        let second = feedback.show(CopyStatus::Failed);

        feedback.expire(first);
        assert_eq!(feedback.status(), CopyStatus::Failed);

        feedback.expire(second);
        assert_eq!(feedback.status(), CopyStatus::Idle);
    }

    #[test]
    fn test_reset_after_single_click() {
        let mut feedback = CopyFeedback::default();
        assert_eq!(feedback.status(), CopyStatus::Idle);
        let stamp = feedback.show(CopyStatus::Copied);
        assert_eq!(feedback.status().label(), "Copied!");
        feedback.expire(stamp);
        assert_eq!(feedback.status(), CopyStatus::Idle);
        // a repeated reset is harmless
        feedback.expire(stamp);
        assert_eq!(feedback.status(), CopyStatus::Idle);
    }
}

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::content::IconTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Glyph on the toggle button: points at the theme a click switches to.
    pub fn toggle_icon(self) -> IconTag {
        match self {
            Theme::Light => IconTag::Moon,
            Theme::Dark => IconTag::Sun,
        }
    }
}

/// Owns the session's [`Theme`].
///
/// Reading [`ThemeController::theme`] inside a reactive scope subscribes that
/// scope; [`ThemeController::toggle`] re-runs every subscriber.
#[derive(Debug, Clone, Copy)]
pub struct ThemeController {
    theme: RwSignal<Theme>,
}

impl ThemeController {
    pub fn new(initial: Theme) -> Self {
        Self {
            theme: RwSignal::new(initial),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn theme_untracked(&self) -> Theme {
        self.theme.get_untracked()
    }

    pub fn set(&self, theme: Theme) {
        if self.theme.get_untracked() != theme {
            self.theme.set(theme);
        }
    }

    pub fn toggle(&self) {
        self.theme.update(|t| *t = t.toggled());
    }
}

/// Installs a [`ThemeController`] for the current component tree.
pub fn provide_theme(initial: Theme) -> ThemeController {
    let controller = ThemeController::new(initial);
    provide_context(controller);
    controller
}

pub fn use_theme() -> ThemeController {
    expect_context::<ThemeController>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_alternates() {
        let mut theme = Theme::Light;
        let mut seen = Vec::new();
        for _ in 0..6 {
            theme = theme.toggled();
            seen.push(theme);
        }
        assert_eq!(
            seen,
            vec![
                Theme::Dark,
                Theme::Light,
                Theme::Dark,
                Theme::Light,
                Theme::Dark,
                Theme::Light
            ]
        );
    }

    #[test]
    fn test_double_toggle_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn test_toggle_icon() {
        assert_eq!(Theme::Light.toggle_icon(), IconTag::Moon);
        assert_eq!(Theme::Dark.toggle_icon(), IconTag::Sun);
    }

    #[test]
    fn test_prefers_dark() {
        assert_eq!(Theme::from_prefers_dark(true), Theme::Dark);
        assert_eq!(Theme::from_prefers_dark(false), Theme::Light);
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_controller_toggle() {
        let owner = Owner::new();
        owner.set();

        let controller = ThemeController::new(Theme::Light);
        controller.toggle();
        assert_eq!(controller.theme_untracked(), Theme::Dark);
        controller.toggle();
        assert_eq!(controller.theme_untracked(), Theme::Light);

        controller.set(Theme::Dark);
        assert_eq!(controller.theme_untracked(), Theme::Dark);
    }

    #[test]
    fn test_context_round_trip() {
        let owner = Owner::new();
        owner.set();

        let provided = provide_theme(Theme::Dark);
        provided.toggle();
        assert_eq!(use_theme().theme_untracked(), Theme::Light);
    }

    #[test]
    fn test_toggle_leaves_route_and_cards_alone() {
        use crate::content::page_outline;
        use crate::route::{select_view, View};

        let owner = Owner::new();
        owner.set();

        let controller = ThemeController::new(Theme::Light);
        let path = "/projects";
        let before = match select_view(path) {
            View::Page(page) => page_outline(page),
            View::NotFound => unreachable!(),
        };
        controller.toggle();
        let after = match select_view(path) {
            View::Page(page) => page_outline(page),
            View::NotFound => unreachable!(),
        };
        assert_eq!(before, after);
    }

    #[test]
    fn test_stored_form() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), r#""dark""#);
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), r#""light""#);
        assert_eq!(serde_json::to_string(&None::<Theme>).unwrap(), "null");

        for theme in [Theme::Light, Theme::Dark] {
            let stored = serde_json::to_string(&Some(theme)).unwrap();
            let loaded: Option<Theme> = serde_json::from_str(&stored).unwrap();
            assert_eq!(loaded, Some(theme));
            assert_eq!(stored.trim_matches('"'), theme.class_name());
        }
        assert!(serde_json::from_str::<Theme>(r#""Dark""#).is_err());
    }

    #[test]
    fn test_class_names() {
        assert_eq!(Theme::Dark.class_name(), "dark");
        assert_eq!(Theme::Light.class_name(), "light");
    }
}

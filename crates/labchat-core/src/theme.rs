//! Light/dark mode toggle.
//!
//! The theme is an explicit enum held by [`ThemeState`]; views derive their
//! markup from [`ThemeState::render`] rather than inspecting class lists.

use labchat_types::config::AssetPaths;
use labchat_types::theme::Theme;

/// Class applied to the page body and chat container in dark mode.
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// What a view needs to reflect the current theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeRender {
    pub theme: Theme,
    /// Classes for the root containers (page body and chat container).
    pub root_classes: Vec<&'static str>,
    /// Source of the toggle icon: the sun offers light mode while dark, the
    /// moon offers dark mode while light.
    pub icon_src: String,
}

#[derive(Debug, Clone)]
pub struct ThemeState {
    theme: Theme,
    assets: AssetPaths,
}

impl ThemeState {
    pub fn new(theme: Theme, assets: AssetPaths) -> Self {
        Self { theme, assets }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip between light and dark, returning the new theme.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn render(&self) -> ThemeRender {
        let (root_classes, icon_src) = match self.theme {
            Theme::Dark => (vec![DARK_MODE_CLASS], self.assets.sun_icon.clone()),
            Theme::Light => (Vec::new(), self.assets.moon_icon.clone()),
        };
        ThemeRender {
            theme: self.theme,
            root_classes,
            icon_src,
        }
    }
}

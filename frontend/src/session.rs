use crate::config;
use gloo_storage::{LocalStorage, Storage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Stored preference wins, then the OS colour scheme.
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        stored.and_then(Theme::parse).unwrap_or(if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        })
    }
}

/// Per-page session state handed down to the components that need it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub theme: Theme,
}

impl Session {
    pub fn load() -> Self {
        let stored = LocalStorage::raw()
            .get_item(config::THEME_STORAGE_KEY)
            .ok()
            .flatten();
        let theme = Theme::resolve(stored.as_deref(), prefers_dark_scheme());
        log::info!("Using {} theme", theme.as_str());

        let session = Self { theme };
        session.apply();
        session
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Err(e) = LocalStorage::raw().set_item(config::THEME_STORAGE_KEY, self.theme.as_str()) {
            log::warn!("Failed to persist theme: {:?}", e);
        }
        self.apply();
    }

    fn apply(&self) {
        let root = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element());

        match root {
            Some(root) => {
                if let Err(e) = root.set_attribute(config::THEME_ATTRIBUTE, self.theme.as_str()) {
                    log::warn!("Failed to apply theme: {:?}", e);
                }
            }
            None => log::warn!("No document element to apply the theme to"),
        }
    }
}

fn prefers_dark_scheme() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

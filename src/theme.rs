use log::debug;
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Observable dark-mode flag. Starts light on every process start.
pub struct ThemePreference {
    dark: watch::Sender<bool>,
}

impl Default for ThemePreference {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemePreference {
    pub fn new() -> Self {
        let (dark, _) = watch::channel(false);
        Self { dark }
    }

    /// Set dark mode on or off. Subscribers are notified even if the value is unchanged.
    pub fn toggle_theme(&self, is_dark: bool) {
        self.dark.send_modify(|dark| *dark = is_dark);
        debug!("theme set to {}", self.theme().as_str());
    }

    pub fn is_dark(&self) -> bool {
        *self.dark.borrow()
    }

    pub fn theme(&self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.dark.subscribe()
    }
}

use crate::environment::types::Theme;
use crate::environment::Repository;

/// Light/dark preference. A saved choice wins over what the system
/// prefers; every change is written back.
#[derive(Clone, Debug)]
pub struct ThemeStore {
    theme: Theme,
    repository: Repository,
}

impl ThemeStore {
    /// `prefers_dark` is the host's system preference, only used when
    /// nothing was saved yet.
    pub fn new(repository: Repository, prefers_dark: bool) -> Self {
        let theme = repository
            .load_theme()
            .unwrap_or_else(|| Theme::from_dark(prefers_dark));
        log::debug!("Using {theme} theme");
        repository.save_theme(theme);
        Self { theme, repository }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled())
    }

    pub fn set(&mut self, theme: Theme) -> Theme {
        self.theme = theme;
        self.repository.save_theme(theme);
        theme
    }
}

use gpui::App;

use crate::theme::Theme;

/// Extension trait for installing and reading the theme carried by the app context.
pub trait ThemeExt {
    /// Installs the theme every component in this app resolves tokens from.
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T);

    /// Gets an immutable reference to the theme.
    ///
    /// Panics if no theme has been installed; call [`crate::init`] first.
    fn get_theme(&self) -> &Theme;
}

impl ThemeExt for App {
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T) {
        log::debug!("installing theme");
        self.set_global::<Theme>(theme.as_ref().clone())
    }

    fn get_theme(&self) -> &Theme {
        self.global()
    }
}

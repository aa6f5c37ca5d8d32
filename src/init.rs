use gpui::{App, Window};

use crate::theme::{DEFAULT_THEME, Theme, ThemeExt};

/// Installs the built-in theme unless the app already carries one.
pub fn init(cx: &mut App) {
    if !cx.has_global::<Theme>() {
        cx.set_theme(&DEFAULT_THEME);
    }
}

pub fn init_for_window(window: &mut Window, cx: &mut App) {
    window.set_rem_size(cx.get_theme().typography.base_size);
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::{TestAppContext, px};

    #[gpui::test]
    fn test_init_installs_default_theme(cx: &mut TestAppContext) {
        cx.update(|cx| {
            init(cx);
            assert_eq!(cx.get_theme(), &*DEFAULT_THEME);
        });
    }

    #[gpui::test]
    fn test_init_keeps_existing_theme(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let mut wide = Theme::clone(&DEFAULT_THEME);
            wide.breakpoints.xl = px(1440.);
            cx.set_theme(&wide);

            init(cx);
            assert_eq!(cx.get_theme().breakpoints.xl, px(1440.));
        });
    }
}

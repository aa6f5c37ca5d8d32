#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::{App, Pixels, Window};

use crate::theme::ThemeExt;

/// Palette roles with a full set of shades.
///
/// `resolve()` yields the main shade; `light()`, `dark()` and
/// `contrast_text()` yield the rest of the role.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Rgba)]
#[func(pub fn light(&self, cx: &App) -> gpui::Rgba)]
#[func(pub fn dark(&self, cx: &App) -> gpui::Rgba)]
#[func(pub fn contrast_text(&self, cx: &App) -> gpui::Rgba)]
pub enum ThemePaletteKind {
    /// Brand color for primary actions.
    #[assoc(resolve = cx.get_theme().colors.primary.main)]
    #[assoc(light = cx.get_theme().colors.primary.light)]
    #[assoc(dark = cx.get_theme().colors.primary.dark)]
    #[assoc(contrast_text = cx.get_theme().colors.primary.contrast_text)]
    Primary,
    /// Accent color for secondary actions.
    #[assoc(resolve = cx.get_theme().colors.secondary.main)]
    #[assoc(light = cx.get_theme().colors.secondary.light)]
    #[assoc(dark = cx.get_theme().colors.secondary.dark)]
    #[assoc(contrast_text = cx.get_theme().colors.secondary.contrast_text)]
    Secondary,
}

#[derive(Assoc)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Rgba)]
pub enum ThemeNeutralKind {
    #[assoc(resolve = cx.get_theme().colors.neutral.white)]
    White,
    #[assoc(resolve = cx.get_theme().colors.neutral.black)]
    Black,
    #[assoc(resolve = cx.get_theme().colors.neutral.gray)]
    Gray,
    #[assoc(resolve = cx.get_theme().colors.neutral.dark_gray)]
    DarkGray,
    #[assoc(resolve = cx.get_theme().colors.neutral.light_gray)]
    LightGray,
}

/// Surface colors.
#[derive(Assoc)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Rgba)]
pub enum ThemeBackgroundKind {
    /// Page background behind every surface.
    #[assoc(resolve = cx.get_theme().colors.background.default)]
    Default,
    /// Raised surfaces such as cards and menus.
    #[assoc(resolve = cx.get_theme().colors.background.paper)]
    Paper,
}

#[derive(Assoc)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Rgba)]
pub enum ThemeTextColorKind {
    #[assoc(resolve = cx.get_theme().colors.text.primary)]
    Primary,
    #[assoc(resolve = cx.get_theme().colors.text.secondary)]
    Secondary,
    #[assoc(resolve = cx.get_theme().colors.text.disabled)]
    Disabled,
}

/// Body text sizes.
#[derive(Assoc)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::AbsoluteLength)]
pub enum ThemeFontSizeKind {
    #[assoc(resolve = cx.get_theme().typography.font_size.small)]
    Small,
    #[assoc(resolve = cx.get_theme().typography.font_size.medium)]
    Medium,
    #[assoc(resolve = cx.get_theme().typography.font_size.large)]
    Large,
}

#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::FontWeight)]
pub enum ThemeFontWeightKind {
    #[assoc(resolve = gpui::FontWeight(cx.get_theme().typography.font_weight.light))]
    Light,
    #[assoc(resolve = gpui::FontWeight(cx.get_theme().typography.font_weight.regular))]
    Regular,
    #[assoc(resolve = gpui::FontWeight(cx.get_theme().typography.font_weight.medium))]
    Medium,
    #[assoc(resolve = gpui::FontWeight(cx.get_theme().typography.font_weight.bold))]
    Bold,
}

/// Line heights relative to the font size of the text they apply to.
#[derive(Assoc)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::DefiniteLength)]
pub enum ThemeLineHeightKind {
    #[assoc(resolve = gpui::relative(cx.get_theme().typography.line_height.small))]
    Small,
    #[assoc(resolve = gpui::relative(cx.get_theme().typography.line_height.medium))]
    Medium,
    #[assoc(resolve = gpui::relative(cx.get_theme().typography.line_height.large))]
    Large,
}

/// Heading levels, each with a size and the weight it is set in.
#[derive(Assoc)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::AbsoluteLength)]
#[func(pub fn font_weight(&self) -> ThemeFontWeightKind)]
pub enum ThemeHeadingKind {
    #[assoc(resolve = cx.get_theme().typography.heading_sizes.h1)]
    #[assoc(font_weight = ThemeFontWeightKind::Bold)]
    H1,
    #[assoc(resolve = cx.get_theme().typography.heading_sizes.h2)]
    #[assoc(font_weight = ThemeFontWeightKind::Bold)]
    H2,
    #[assoc(resolve = cx.get_theme().typography.heading_sizes.h3)]
    #[assoc(font_weight = ThemeFontWeightKind::Bold)]
    H3,
    #[assoc(resolve = cx.get_theme().typography.heading_sizes.h4)]
    #[assoc(font_weight = ThemeFontWeightKind::Medium)]
    H4,
    #[assoc(resolve = cx.get_theme().typography.heading_sizes.h5)]
    #[assoc(font_weight = ThemeFontWeightKind::Medium)]
    H5,
    #[assoc(resolve = cx.get_theme().typography.heading_sizes.h6)]
    #[assoc(font_weight = ThemeFontWeightKind::Medium)]
    H6,
}

/// Gaps and paddings from the spacing scale.
#[derive(Assoc)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Pixels)]
pub enum ThemeSpacingKind {
    #[assoc(resolve = cx.get_theme().spacing.small)]
    Small,
    #[assoc(resolve = cx.get_theme().spacing.medium)]
    Medium,
    #[assoc(resolve = cx.get_theme().spacing.large)]
    Large,
    #[assoc(resolve = cx.get_theme().spacing.xlarge)]
    Xlarge,
    #[assoc(resolve = cx.get_theme().spacing.xxlarge)]
    Xxlarge,
}

/// Layout tiers, from phones up to wide desktop monitors.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Pixels)]
pub enum ThemeBreakpointKind {
    #[assoc(resolve = cx.get_theme().breakpoints.xs)]
    Xs,
    #[assoc(resolve = cx.get_theme().breakpoints.sm)]
    Sm,
    #[assoc(resolve = cx.get_theme().breakpoints.md)]
    Md,
    #[assoc(resolve = cx.get_theme().breakpoints.lg)]
    Lg,
    #[assoc(resolve = cx.get_theme().breakpoints.xl)]
    Xl,
}

impl ThemeBreakpointKind {
    pub const ALL: [ThemeBreakpointKind; 5] = [Self::Xs, Self::Sm, Self::Md, Self::Lg, Self::Xl];

    /// The largest tier whose threshold `width` reaches. Anything narrower
    /// than the smallest threshold still lays out as `Xs`.
    pub fn for_width(width: Pixels, cx: &App) -> Self {
        Self::ALL
            .into_iter()
            .rev()
            .find(|kind| kind.resolve(cx) <= width)
            .unwrap_or(Self::Xs)
    }

    pub fn for_window(window: &Window, cx: &App) -> Self {
        Self::for_width(window.viewport_size().width, cx)
    }
}

#[derive(Assoc)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::BoxShadow)]
pub enum ThemeShadowKind {
    #[assoc(resolve = cx.get_theme().shadows.small.to_box_shadow())]
    Small,
    #[assoc(resolve = cx.get_theme().shadows.medium.to_box_shadow())]
    Medium,
    #[assoc(resolve = cx.get_theme().shadows.large.to_box_shadow())]
    Large,
}

#[derive(Assoc)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Pixels)]
pub enum ThemeRadiusKind {
    #[assoc(resolve = cx.get_theme().radius.small)]
    Small,
    #[assoc(resolve = cx.get_theme().radius.medium)]
    Medium,
    #[assoc(resolve = cx.get_theme().radius.large)]
    Large,
    /// Fully rounded ends.
    #[assoc(resolve = cx.get_theme().radius.full)]
    Full,
}

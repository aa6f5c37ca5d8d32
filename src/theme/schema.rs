use std::{fs, ops::Deref, path::Path, sync::LazyLock};

use gpui::{AbsoluteLength, BoxShadow, Global, Pixels, Rgba, SharedString, point};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{
    ThemeError,
    deserializers::{de_abs_length, de_pixels, de_string_or_non_empty_list, ser_abs_length, ser_pixels},
};

/// The composed design system: one field per token group.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Theme {
    pub colors: ThemeColors,
    pub typography: ThemeTypography,
    pub spacing: ThemeSpacing,
    pub breakpoints: ThemeBreakpoints,
    pub shadows: ThemeShadows,
    pub radius: ThemeRadius,
}

macro_rules! generate_builtin_themes {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            pub static $name: LazyLockTheme = LazyLockTheme::new(|| {
                Theme::from_string(include_str!($path))
                    .unwrap_or_else(|err| panic!("built-in theme {} is invalid: {err}", $path))
            });
        )+
    };
}

generate_builtin_themes!(["../../themes/default.json", DEFAULT_THEME]);

/// A theme parsed on first access and shared for the rest of the process.
pub struct LazyLockTheme(LazyLock<Theme>);

impl LazyLockTheme {
    #[inline(always)]
    const fn new(f: fn() -> Theme) -> Self {
        Self(LazyLock::new(f))
    }
}

impl Deref for LazyLockTheme {
    type Target = Theme;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Theme> for LazyLockTheme {
    fn as_ref(&self) -> &Theme {
        &self.0
    }
}

impl AsRef<Theme> for Theme {
    fn as_ref(&self) -> &Theme {
        self
    }
}

impl Theme {
    /// Parses a theme document and checks it with [`Theme::validate`].
    pub fn from_string<S: AsRef<str>>(str: S) -> Result<Theme, ThemeError> {
        let theme: Theme = serde_json::from_str(str.as_ref())?;

        if let Err(err) = theme.validate() {
            log::warn!("rejecting theme: {err}");
            return Err(err);
        }

        log::debug!("parsed theme with fonts {:?}", theme.typography.font_family);
        Ok(theme)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Theme, ThemeError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("loading theme from {}", path.display());
        Self::from_string(contents)
    }

    /// Serializes the theme in the same document format [`Theme::from_string`] reads.
    pub fn to_json(&self) -> Result<String, ThemeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Global for Theme {}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ThemeColors {
    pub primary: ThemePaletteColor,
    pub secondary: ThemePaletteColor,
    pub neutral: ThemeNeutralColors,
    pub background: ThemeBackgroundColors,
    pub text: ThemeTextColors,
}

/// A color role with its shades and the color readable on top of `main`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ThemePaletteColor {
    pub light: Rgba,
    pub main: Rgba,
    pub dark: Rgba,
    pub contrast_text: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ThemeNeutralColors {
    pub white: Rgba,
    pub black: Rgba,
    pub gray: Rgba,
    pub dark_gray: Rgba,
    pub light_gray: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ThemeBackgroundColors {
    pub default: Rgba,
    pub paper: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ThemeTextColors {
    pub primary: Rgba,
    pub secondary: Rgba,
    pub disabled: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ThemeTypography {
    /// Font families in fallback order.
    #[serde(deserialize_with = "de_string_or_non_empty_list")]
    pub font_family: SmallVec<[SharedString; 4]>,
    /// Pixel size of one rem.
    #[serde(deserialize_with = "de_pixels", serialize_with = "ser_pixels")]
    pub base_size: Pixels,
    pub font_size: ThemeFontSizes,
    pub font_weight: ThemeFontWeights,
    pub line_height: ThemeLineHeights,
    pub heading_sizes: ThemeHeadingSizes,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ThemeFontSizes {
    #[serde(deserialize_with = "de_abs_length", serialize_with = "ser_abs_length")]
    pub small: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length", serialize_with = "ser_abs_length")]
    pub medium: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length", serialize_with = "ser_abs_length")]
    pub large: AbsoluteLength,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ThemeFontWeights {
    pub light: f32,
    pub regular: f32,
    pub medium: f32,
    pub bold: f32,
}

impl ThemeFontWeights {
    pub fn all(&self) -> [(&'static str, f32); 4] {
        [
            ("light", self.light),
            ("regular", self.regular),
            ("medium", self.medium),
            ("bold", self.bold),
        ]
    }
}

/// Line heights as multiples of the font size.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ThemeLineHeights {
    pub small: f32,
    pub medium: f32,
    pub large: f32,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ThemeHeadingSizes {
    #[serde(deserialize_with = "de_abs_length", serialize_with = "ser_abs_length")]
    pub h1: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length", serialize_with = "ser_abs_length")]
    pub h2: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length", serialize_with = "ser_abs_length")]
    pub h3: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length", serialize_with = "ser_abs_length")]
    pub h4: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length", serialize_with = "ser_abs_length")]
    pub h5: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length", serialize_with = "ser_abs_length")]
    pub h6: AbsoluteLength,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ThemeSpacing {
    /// Base grid unit every other spacing value is a multiple or fraction of.
    #[serde(deserialize_with = "de_pixels", serialize_with = "ser_pixels")]
    pub unit: Pixels,
    #[serde(deserialize_with = "de_pixels", serialize_with = "ser_pixels")]
    pub small: Pixels,
    #[serde(deserialize_with = "de_pixels", serialize_with = "ser_pixels")]
    pub medium: Pixels,
    #[serde(deserialize_with = "de_pixels", serialize_with = "ser_pixels")]
    pub large: Pixels,
    #[serde(deserialize_with = "de_pixels", serialize_with = "ser_pixels")]
    pub xlarge: Pixels,
    #[serde(deserialize_with = "de_pixels", serialize_with = "ser_pixels")]
    pub xxlarge: Pixels,
}

impl ThemeSpacing {
    /// The named scale, smallest first. `unit` is not part of it.
    pub fn scale(&self) -> [(&'static str, Pixels); 5] {
        [
            ("small", self.small),
            ("medium", self.medium),
            ("large", self.large),
            ("xlarge", self.xlarge),
            ("xxlarge", self.xxlarge),
        ]
    }
}

/// Minimum viewport widths for each layout tier.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ThemeBreakpoints {
    #[serde(deserialize_with = "de_pixels", serialize_with = "ser_pixels")]
    pub xs: Pixels,
    #[serde(deserialize_with = "de_pixels", serialize_with = "ser_pixels")]
    pub sm: Pixels,
    #[serde(deserialize_with = "de_pixels", serialize_with = "ser_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels", serialize_with = "ser_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels", serialize_with = "ser_pixels")]
    pub xl: Pixels,
}

impl ThemeBreakpoints {
    pub fn all(&self) -> [(&'static str, Pixels); 5] {
        [
            ("xs", self.xs),
            ("sm", self.sm),
            ("md", self.md),
            ("lg", self.lg),
            ("xl", self.xl),
        ]
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ThemeShadows {
    pub small: ThemeShadow,
    pub medium: ThemeShadow,
    pub large: ThemeShadow,
}

impl ThemeShadows {
    pub fn all(&self) -> [(&'static str, ThemeShadow); 3] {
        [
            ("small", self.small),
            ("medium", self.medium),
            ("large", self.large),
        ]
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ThemeShadow {
    #[serde(deserialize_with = "de_pixels", serialize_with = "ser_pixels")]
    pub offset_x: Pixels,
    #[serde(deserialize_with = "de_pixels", serialize_with = "ser_pixels")]
    pub offset_y: Pixels,
    #[serde(deserialize_with = "de_pixels", serialize_with = "ser_pixels")]
    pub blur: Pixels,
    #[serde(deserialize_with = "de_pixels", serialize_with = "ser_pixels")]
    pub spread: Pixels,
    pub color: Rgba,
}

impl ThemeShadow {
    pub fn to_box_shadow(&self) -> BoxShadow {
        BoxShadow {
            color: self.color.into(),
            offset: point(self.offset_x, self.offset_y),
            blur_radius: self.blur,
            spread_radius: self.spread,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ThemeRadius {
    #[serde(deserialize_with = "de_pixels", serialize_with = "ser_pixels")]
    pub small: Pixels,
    #[serde(deserialize_with = "de_pixels", serialize_with = "ser_pixels")]
    pub medium: Pixels,
    #[serde(deserialize_with = "de_pixels", serialize_with = "ser_pixels")]
    pub large: Pixels,
    /// Large enough to turn any control into a pill or circle.
    #[serde(deserialize_with = "de_pixels", serialize_with = "ser_pixels")]
    pub full: Pixels,
}

impl ThemeRadius {
    pub fn all(&self) -> [(&'static str, Pixels); 4] {
        [
            ("small", self.small),
            ("medium", self.medium),
            ("large", self.large),
            ("full", self.full),
        ]
    }
}

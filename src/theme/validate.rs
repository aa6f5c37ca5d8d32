//! Load-time consistency checks for theme documents.
//!
//! Scales must grow strictly from their smallest to their largest step,
//! font weights must come from the declared set and the text color of each
//! palette role must stay readable on its main shade.

use gpui::Rgba;

use super::{Theme, ThemeError};

/// WCAG AA threshold for large text and UI components.
pub const MIN_CONTRAST_RATIO: f32 = 3.0;

/// The only font weights a theme may declare.
pub const FONT_WEIGHTS: [f32; 4] = [300., 400., 500., 700.];

impl Theme {
    pub fn validate(&self) -> Result<(), ThemeError> {
        ensure_increasing("breakpoints", &self.breakpoints.all())?;
        ensure_increasing("spacing", &self.spacing.scale())?;
        ensure_increasing("radius", &self.radius.all())?;
        ensure_increasing(
            "shadows",
            &self.shadows.all().map(|(name, shadow)| (name, shadow.blur)),
        )?;

        for (name, weight) in self.typography.font_weight.all() {
            if !FONT_WEIGHTS.contains(&weight) {
                return Err(ThemeError::InvalidFontWeight { name, weight });
            }
        }

        for (role, palette) in [
            ("primary", &self.colors.primary),
            ("secondary", &self.colors.secondary),
        ] {
            let ratio = contrast_ratio(palette.contrast_text, palette.main);
            if ratio < MIN_CONTRAST_RATIO {
                return Err(ThemeError::InsufficientContrast { role, ratio });
            }
        }

        Ok(())
    }
}

fn ensure_increasing<T: PartialOrd>(
    group: &'static str,
    steps: &[(&'static str, T)],
) -> Result<(), ThemeError> {
    for pair in steps.windows(2) {
        if let [(lower, smaller), (upper, larger)] = pair
            && !(smaller < larger)
        {
            return Err(ThemeError::NotIncreasing {
                group,
                lower: *lower,
                upper: *upper,
            });
        }
    }

    Ok(())
}

fn srgb_to_linear(channel: f32) -> f32 {
    if channel <= 0.04045 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG 2.1, in `[0, 1]`. Alpha is ignored.
pub fn relative_luminance(color: Rgba) -> f32 {
    0.2126 * srgb_to_linear(color.r) + 0.7152 * srgb_to_linear(color.g) + 0.0722 * srgb_to_linear(color.b)
}

/// WCAG 2.1 contrast ratio between two colors, in `[1, 21]` regardless of order.
pub fn contrast_ratio(a: Rgba, b: Rgba) -> f32 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

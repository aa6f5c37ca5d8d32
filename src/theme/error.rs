use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading, validating or querying a [`Theme`](super::Theme).
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("could not parse theme: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("could not read theme file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no theme token at \"{path}\"")]
    KeyNotFound { path: String },

    #[error("{group}.{upper} must be larger than {group}.{lower}")]
    NotIncreasing {
        group: &'static str,
        lower: &'static str,
        upper: &'static str,
    },

    #[error(
        "typography.font_weight.{name} is {weight}, expected one of {allowed:?}",
        allowed = super::FONT_WEIGHTS
    )]
    InvalidFontWeight { name: &'static str, weight: f32 },

    #[error("colors.{role}.contrast_text has a contrast ratio of {ratio:.2} against main")]
    InsufficientContrast { role: &'static str, ratio: f32 },
}

use serde_json::Value;

use super::{Theme, ThemeError};

impl Theme {
    /// Resolves a dotted token path such as `"breakpoints.md"`.
    ///
    /// Values come back in the theme document format, so lengths are
    /// strings with their unit.
    pub fn lookup(&self, path: &str) -> Result<Value, ThemeError> {
        let root = serde_json::to_value(self)?;

        let mut value = &root;
        for segment in path.split('.') {
            value = value.get(segment).ok_or_else(|| ThemeError::KeyNotFound {
                path: path.to_owned(),
            })?;
        }

        Ok(value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::DEFAULT_THEME;

    #[test]
    fn test_lookup_returns_tokens() {
        let theme = &DEFAULT_THEME;

        assert_eq!(theme.lookup("breakpoints.md").unwrap(), "768px");
        assert_eq!(theme.lookup("spacing.unit").unwrap(), "8px");
        assert_eq!(theme.lookup("typography.font_size.small").unwrap(), "0.875rem");
        assert_eq!(
            theme.lookup("typography.font_weight.bold").unwrap().as_f64(),
            Some(700.)
        );
    }

    #[test]
    fn test_theme_has_exactly_the_token_groups() {
        let root = serde_json::to_value(&*DEFAULT_THEME).unwrap();
        let mut groups: Vec<String> = root.as_object().unwrap().keys().cloned().collect();
        groups.sort();

        assert_eq!(
            groups,
            ["breakpoints", "colors", "radius", "shadows", "spacing", "typography"]
        );
    }

    #[test]
    fn test_lookup_returns_whole_groups() {
        let radius = DEFAULT_THEME.lookup("radius").unwrap();

        assert_eq!(radius["full"], "9999px");
    }

    #[test]
    fn test_lookup_unknown_key() {
        for path in ["colors.tertiary.main", "spacing.unit.half", "", "Spacing"] {
            match DEFAULT_THEME.lookup(path) {
                Err(ThemeError::KeyNotFound { path: missing }) => assert_eq!(missing, path),
                other => panic!("expected KeyNotFound for {path:?}, got {other:?}"),
            }
        }
    }
}

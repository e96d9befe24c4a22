// Theme colors for the fetch screen.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    // Anything other than "light" falls back to the dark theme.
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("light") {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn palette(self) -> ThemePalette {
        match self {
            Theme::Dark => ThemePalette::default_dark(),
            Theme::Light => ThemePalette::default_light(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub background: String,
    pub foreground: String,
    pub primary: String,
    pub secondary: String,
    pub error: String,
}

impl ThemePalette {
    pub fn default_dark() -> Self {
        Self {
            background: "#1e1e1e".to_string(),
            foreground: "#d1d4dc".to_string(),
            primary: "#007acc".to_string(),
            secondary: "#565656".to_string(),
            error: "#ef5350".to_string(),
        }
    }

    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            foreground: "#000000".to_string(),
            primary: "#007acc".to_string(),
            secondary: "#e0e0e0".to_string(),
            error: "#f44336".to_string(),
        }
    }

    // Page-level CSS injected once by the root component.
    pub fn stylesheet(&self) -> String {
        format!(
            "body {{ background: {bg}; color: {fg}; font-family: sans-serif; margin: 24px; }}
             button {{ background: {primary}; color: #ffffff; border: none; padding: 6px 14px; margin-right: 8px; }}
             button:disabled {{ background: {secondary}; }}
             table {{ border-collapse: collapse; margin-top: 12px; }}
             th, td {{ border: 1px solid {secondary}; padding: 4px 10px; text-align: right; }}
             .notice-error {{ color: {error}; }}",
            bg = self.background,
            fg = self.foreground,
            primary = self.primary,
            secondary = self.secondary,
            error = self.error,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_name() {
        assert_eq!(Theme::from_name("light"), Theme::Light);
        assert_eq!(Theme::from_name("LIGHT"), Theme::Light);
        assert_eq!(Theme::from_name("dark"), Theme::Dark);
        assert_eq!(Theme::from_name("solarized"), Theme::Dark);
    }

    #[test]
    fn test_stylesheet_uses_palette() {
        let css = Theme::Light.palette().stylesheet();
        assert!(css.contains("background: #ffffff"));
        assert!(css.contains(".notice-error { color: #f44336; }"));
    }
}

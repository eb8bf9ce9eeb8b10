use serde::{Deserialize, Serialize};

/// Colour scheme applied to charts and the HTML report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode { Theme::Dark } else { Theme::Light }
    }

    pub fn background(&self) -> &'static str {
        match self {
            Theme::Light => "#ffffff",
            Theme::Dark => "#1e1e1e",
        }
    }

    /// Background of cards and tables drawn on top of the page.
    pub fn panel(&self) -> &'static str {
        match self {
            Theme::Light => "#f5f5f5",
            Theme::Dark => "#333333",
        }
    }

    pub fn foreground(&self) -> &'static str {
        match self {
            Theme::Light => "#222222",
            Theme::Dark => "#ffffff",
        }
    }

    /// Axis lines and gridlines.
    pub fn muted(&self) -> &'static str {
        match self {
            Theme::Light => "#cccccc",
            Theme::Dark => "#666666",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_palette() {
        let theme = Theme::from_dark_mode(true);
        assert_eq!(theme, Theme::Dark);
        assert_eq!(theme.background(), "#1e1e1e");
        assert_eq!(theme.panel(), "#333333");
        assert_eq!(theme.foreground(), "#ffffff");
    }

    #[test]
    fn test_light_is_default() {
        assert_eq!(Theme::default(), Theme::from_dark_mode(false));
    }
}

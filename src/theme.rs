//! Binary display theme. The page always loads dark; the preference is not
//! persisted, so a reload resets it.

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Theme-dependent colors handed to the radar chart configuration.
pub struct ChartPalette {
    pub axis_name: &'static str,
    pub axis_name_background: &'static str,
    pub split_area: [&'static str; 4],
    pub grid_line: &'static str,
    pub series_area: &'static str,
    pub series_line: &'static str,
    pub series_point: &'static str,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Class applied to the component root; all themed styling keys off it
    /// rather than a document-wide marker.
    pub fn page_class(self) -> &'static str {
        match self {
            Self::Dark => "theme-dark",
            Self::Light => "theme-light",
        }
    }

    pub fn toggle_label(self) -> String {
        let next = match self.toggled() {
            Self::Dark => "dark",
            Self::Light => "light",
        };
        format!("Switch to {next} theme")
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Dark => "◑",
            Self::Light => "◐",
        }
    }

    pub fn chart_palette(self) -> ChartPalette {
        match self {
            Self::Dark => ChartPalette {
                axis_name: "#fff",
                axis_name_background: "#1f2937",
                split_area: [
                    "rgba(50, 50, 50, 0.3)",
                    "rgba(50, 50, 50, 0.2)",
                    "rgba(50, 50, 50, 0.1)",
                    "rgba(50, 50, 50, 0.05)",
                ],
                grid_line: "rgba(255, 255, 255, 0.2)",
                series_area: "rgba(79, 70, 229, 0.6)",
                series_line: "rgba(129, 140, 248, 0.8)",
                series_point: "#818cf8",
            },
            Self::Light => ChartPalette {
                axis_name: "#333",
                axis_name_background: "#f3f4f6",
                split_area: [
                    "rgba(250, 250, 250, 0.5)",
                    "rgba(240, 240, 240, 0.5)",
                    "rgba(230, 230, 230, 0.5)",
                    "rgba(220, 220, 220, 0.5)",
                ],
                grid_line: "rgba(0, 0, 0, 0.2)",
                series_area: "rgba(99, 102, 241, 0.6)",
                series_line: "rgba(79, 70, 229, 0.8)",
                series_point: "#4f46e5",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Theme;

    #[test]
    fn double_toggle_is_identity() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn even_toggle_count_returns_original() {
        let mut theme = Theme::default();
        for _ in 0..6 {
            theme = theme.toggled();
        }
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn loads_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn page_classes_are_distinct() {
        assert_ne!(Theme::Dark.page_class(), Theme::Light.page_class());
    }

    #[test]
    fn palettes_differ_per_theme() {
        let dark = Theme::Dark.chart_palette();
        let light = Theme::Light.chart_palette();
        assert_ne!(dark.axis_name, light.axis_name);
        assert_ne!(dark.series_area, light.series_area);
        assert_ne!(dark.split_area, light.split_area);
    }
}

use osshare_core::{ChartKind, SeriesMask, TimeRange, ViewState};
use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `osshare.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Window geometry and title.
    pub window: WindowConfig,
    /// Initial control selections.
    pub view: ViewConfig,
    /// Theme / visual settings.
    pub theme: ThemeConfig,
}

/// Main window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial width in logical pixels.
    pub width: f32,
    /// Initial height in logical pixels.
    pub height: f32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width:  1100.0,
            height: 860.0,
            title:  "OS Market Share 2001–2024".to_string(),
        }
    }
}

/// Control selections applied when the dashboard opens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub chart_type: ChartKind,
    /// `"all"` or a number of most recent years, e.g. `"10"`.
    pub time_range: TimeRange,
    pub windows: bool,
    pub linux:   bool,
    pub macos:   bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            chart_type: ChartKind::Line,
            time_range: TimeRange::All,
            windows:    true,
            linux:      true,
            macos:      true,
        }
    }
}

impl ViewConfig {
    pub fn initial_state(&self) -> ViewState {
        ViewState {
            visible:    SeriesMask::new(self.windows, self.linux, self.macos),
            chart_kind: self.chart_type,
            time_range: self.time_range,
        }
    }
}

/// Theme / styling configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Window background color (hex, e.g. `"#f5f7fa"`).
    pub background: String,
    /// Primary text/foreground color.
    pub foreground: String,
    /// Card and panel surface color.
    pub surface: String,
    /// Accent color for headings.
    pub accent: String,
    /// Color of a non-negative year-over-year change.
    pub positive: String,
    /// Color of a negative year-over-year change.
    pub negative: String,
    pub windows_color: String,
    pub linux_color:   String,
    pub macos_color:   String,
    /// Font size in points.
    pub font_size: f32,
    /// Corner radius for cards and panels (pixels).
    pub border_radius: f32,
    /// Inner padding for panels (pixels).
    pub padding: u16,
    /// Gap between panels (pixels).
    pub gap: u16,
    /// Chart line width (pixels).
    pub line_width: f32,
    /// Alpha of bar fills (0.0 – 1.0).
    pub fill_alpha: f32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background:    "#f5f7fa".to_string(),
            foreground:    "#2c3e50".to_string(),
            surface:       "#ffffff".to_string(),
            accent:        "#4a90e2".to_string(),
            positive:      "#27ae60".to_string(),
            negative:      "#e74c3c".to_string(),
            windows_color: "#4a90e2".to_string(),
            linux_color:   "#f39c12".to_string(),
            macos_color:   "#7f8c8d".to_string(),
            font_size:     14.0,
            border_radius: 8.0,
            padding:       16,
            gap:           16,
            line_width:    3.0,
            fill_alpha:    0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use osshare_core::Os;

    #[test]
    fn empty_document_yields_defaults() {
        let cfg: DashboardConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, DashboardConfig::default());
    }

    #[test]
    fn partial_view_section_keeps_other_defaults() {
        let cfg: DashboardConfig = toml::from_str(
            r#"
            [view]
            chart_type = "bar"
            time_range = "10"
            linux = false
            "#,
        )
        .unwrap();

        let state = cfg.view.initial_state();
        assert_eq!(state.chart_kind, ChartKind::Bar);
        assert_eq!(state.time_range, TimeRange::Last(10));
        assert!(state.visible.is_visible(Os::Windows));
        assert!(!state.visible.is_visible(Os::Linux));
        assert_eq!(cfg.theme, ThemeConfig::default());
    }

    #[test]
    fn invalid_time_range_is_rejected() {
        let res = toml::from_str::<DashboardConfig>("[view]\ntime_range = \"0\"\n");
        assert!(res.is_err());
    }

    #[test]
    fn serialized_defaults_parse_back() {
        let text = toml::to_string(&DashboardConfig::default()).unwrap();
        assert!(text.contains("time_range = \"all\""));
        let back: DashboardConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, DashboardConfig::default());
    }
}

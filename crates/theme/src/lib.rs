pub mod colors;

pub use colors::Color;

use osshare_config::ThemeConfig;
use osshare_core::{Os, Trend};

/// Compiled theme derived from [`ThemeConfig`].
///
/// All colors are pre-parsed from hex strings into normalised `[0, 1]` RGBA.
/// Calling [`Theme::from_config`] is infallible; invalid color strings fall
/// back to safe defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background:    Color,
    pub foreground:    Color,
    pub surface:       Color,
    pub accent:        Color,
    pub positive:      Color,
    pub negative:      Color,
    /// Series colors indexed by [`Os::index`].
    pub series:        [Color; 3],
    pub font_size:     f32,
    pub border_radius: f32,
    pub padding:       u16,
    pub gap:           u16,
    pub line_width:    f32,
    /// Alpha applied to bar fills.
    pub fill_alpha:    f32,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        Self {
            background: Color::from_hex(&cfg.background).unwrap_or(Color::CLOUD),
            foreground: Color::from_hex(&cfg.foreground).unwrap_or(Color::SLATE),
            surface:    Color::from_hex(&cfg.surface).unwrap_or(Color::WHITE),
            accent:     Color::from_hex(&cfg.accent).unwrap_or(Color::BLUE),
            positive:   Color::from_hex(&cfg.positive).unwrap_or(Color::GREEN),
            negative:   Color::from_hex(&cfg.negative).unwrap_or(Color::RED),
            series: [
                Color::from_hex(&cfg.windows_color).unwrap_or(Color::BLUE),
                Color::from_hex(&cfg.linux_color).unwrap_or(Color::ORANGE),
                Color::from_hex(&cfg.macos_color).unwrap_or(Color::GREY),
            ],
            font_size:     cfg.font_size.max(6.0),
            border_radius: cfg.border_radius.max(0.0),
            padding:       cfg.padding,
            gap:           cfg.gap,
            line_width:    cfg.line_width.max(0.5),
            fill_alpha:    cfg.fill_alpha.clamp(0.0, 1.0),
        }
    }

    #[inline]
    pub fn series_color(&self, os: Os) -> Color {
        self.series[os.index()]
    }

    pub fn trend_color(&self, trend: Trend) -> Color {
        match trend {
            Trend::Positive => self.positive,
            Trend::Negative => self.negative,
        }
    }

    /// Grid lines and other chart furniture.
    pub fn grid(&self) -> Color {
        self.foreground.with_alpha(0.08)
    }

    /// Secondary text: axis labels, captions.
    pub fn muted(&self) -> Color {
        self.foreground.with_alpha(0.65)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_series_palette() {
        let theme = Theme::default();
        assert_eq!(theme.series_color(Os::Windows), Color::BLUE);
        assert_eq!(theme.series_color(Os::Linux), Color::ORANGE);
        assert_eq!(theme.series_color(Os::MacOs), Color::GREY);
    }

    #[test]
    fn invalid_colors_fall_back() {
        let cfg = ThemeConfig {
            linux_color: "not-a-color".into(),
            negative: String::new(),
            ..ThemeConfig::default()
        };
        let theme = Theme::from_config(&cfg);
        assert_eq!(theme.series_color(Os::Linux), Color::ORANGE);
        assert_eq!(theme.trend_color(Trend::Negative), Color::RED);
    }

    #[test]
    fn fill_alpha_is_clamped() {
        let cfg = ThemeConfig { fill_alpha: 3.0, ..ThemeConfig::default() };
        assert_eq!(Theme::from_config(&cfg).fill_alpha, 1.0);
    }
}

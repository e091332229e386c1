/// Normalised RGBA colour (each channel in `[0.0, 1.0]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE:       Self = Self::from_rgb8(0xff, 0xff, 0xff);
    pub const SLATE:       Self = Self::from_rgb8(0x2c, 0x3e, 0x50); // text
    pub const CLOUD:       Self = Self::from_rgb8(0xf5, 0xf7, 0xfa); // page
    pub const BLUE:        Self = Self::from_rgb8(0x4a, 0x90, 0xe2); // Windows
    pub const ORANGE:      Self = Self::from_rgb8(0xf3, 0x9c, 0x12); // Linux
    pub const GREY:        Self = Self::from_rgb8(0x7f, 0x8c, 0x8d); // macOS
    pub const GREEN:       Self = Self::from_rgb8(0x27, 0xae, 0x60);
    pub const RED:         Self = Self::from_rgb8(0xe7, 0x4c, 0x3c);

    /// Opaque colour from 8-bit channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Parse a CSS-style hex color string (`#RRGGBB` or `#RRGGBBAA`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        let byte = |s: &str| -> Option<u8> { u8::from_str_radix(s, 16).ok() };

        match hex.len() {
            6 => Some(Self::from_rgb8(
                byte(&hex[0..2])?,
                byte(&hex[2..4])?,
                byte(&hex[4..6])?,
            )),
            8 => Some(
                Self::from_rgb8(byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?)
                    .with_alpha(byte(&hex[6..8])? as f32 / 255.0),
            ),
            _ => None,
        }
    }

    /// Convert to an [`iced::Color`] for use in Iced widgets and canvases.
    #[inline]
    pub fn to_iced(self) -> iced::Color {
        iced::Color::from_rgba(self.r, self.g, self.b, self.a)
    }

    /// Relative luminance above the midpoint (alpha ignored).
    pub fn is_light(self) -> bool {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b > 0.5
    }

    /// Return a copy with the alpha channel set to `alpha`.
    #[inline]
    #[must_use]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha.clamp(0.0, 1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(Color::from_hex("#4a90e2"), Some(Color::BLUE));
        assert_eq!(Color::from_hex("f39c12"), Some(Color::ORANGE));
    }

    #[test]
    fn parses_alpha_channel() {
        let c = Color::from_hex("#ffffff00").unwrap();
        assert_eq!(c.a, 0.0);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#zzzzzz"), None);
        assert_eq!(Color::from_hex("#ééé"), None);
    }

    #[test]
    fn light_and_dark_backgrounds() {
        assert!(Color::CLOUD.is_light());
        assert!(!Color::SLATE.is_light());
    }

    #[test]
    fn with_alpha_clamps() {
        assert_eq!(Color::BLUE.with_alpha(2.0).a, 1.0);
        assert_eq!(Color::BLUE.with_alpha(-1.0).a, 0.0);
    }
}

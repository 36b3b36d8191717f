//! Line colors, dash styles, and the two fixed series.

use serde::{Serialize, Serializer};

/// A named RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    name: &'static str,
    rgb: [u8; 3],
}

impl Color {
    /// Pure blue.
    pub const BLUE: Color = Color::new("blue", [0x00, 0x00, 0xFF]);
    /// CSS orange.
    pub const ORANGE: Color = Color::new("orange", [0xFF, 0xA5, 0x00]);
    /// Black.
    pub const BLACK: Color = Color::new("black", [0x00, 0x00, 0x00]);
    /// White.
    pub const WHITE: Color = Color::new("white", [0xFF, 0xFF, 0xFF]);

    /// Creates a color from a name and RGB components.
    #[must_use]
    pub const fn new(name: &'static str, rgb: [u8; 3]) -> Self {
        Self { name, rgb }
    }

    /// CSS color name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// `#RRGGBB` form.
    #[must_use]
    pub fn hex(&self) -> String {
        let [r, g, b] = self.rgb;
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    /// Relative luminance, `0.2126 R + 0.7152 G + 0.0722 B` on `[0, 1]` channels.
    #[must_use]
    pub fn luminance(&self) -> f64 {
        let [r, g, b] = self.rgb.map(|c| f64::from(c) / 255.0);
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    /// True when dark text reads better on this color.
    #[must_use]
    pub fn is_light(&self) -> bool {
        self.luminance() > 0.5
    }

    /// Black on light colors, white on dark ones.
    #[must_use]
    pub fn contrasting_text(&self) -> Color {
        if self.is_light() {
            Self::BLACK
        } else {
            Self::WHITE
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

/// Line dash pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineDash {
    /// Continuous line.
    Solid,
    /// Dotted line.
    Dot,
}

/// How a line is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Dash pattern.
    pub dash: LineDash,
}

/// The two series the dashboard knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    /// Forward-filled bank rate.
    BankRate,
    /// Synthetic random walk.
    RandomWalk,
}

impl SeriesKind {
    /// Legend name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::BankRate => "Bank Rate",
            Self::RandomWalk => "Random Walk",
        }
    }

    /// Fixed line style.
    #[must_use]
    pub fn style(self) -> LineStyle {
        match self {
            Self::BankRate => LineStyle {
                color: Color::BLUE,
                dash: LineDash::Solid,
            },
            Self::RandomWalk => LineStyle {
                color: Color::ORANGE,
                dash: LineDash::Dot,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hex() {
        assert_eq!(Color::BLUE.hex(), "#0000FF");
        assert_eq!(Color::ORANGE.hex(), "#FFA500");
    }

    #[test]
    fn test_luminance() {
        assert_relative_eq!(Color::WHITE.luminance(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(Color::BLACK.luminance(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(Color::BLUE.luminance(), 0.0722, epsilon = 1e-12);
    }

    #[test]
    fn test_contrasting_text() {
        assert_eq!(Color::BLUE.contrasting_text(), Color::WHITE);
        assert_eq!(Color::ORANGE.contrasting_text(), Color::BLACK);
        assert_eq!(Color::WHITE.contrasting_text(), Color::BLACK);
    }

    #[test]
    fn test_series_styles_are_distinct() {
        let rate = SeriesKind::BankRate.style();
        let walk = SeriesKind::RandomWalk.style();
        assert_eq!(rate.dash, LineDash::Solid);
        assert_eq!(walk.dash, LineDash::Dot);
        assert_ne!(rate.color, walk.color);
    }

    #[test]
    fn test_color_serializes_as_name() {
        assert_eq!(serde_json::to_string(&Color::ORANGE).unwrap(), "\"orange\"");
    }
}

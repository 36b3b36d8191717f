//! Chart requests: index range, series selection, theme.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use ratescope_core::{ScopeError, ScopeResult};

/// Which lines to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SeriesSelection {
    /// The forward-filled bank rate only.
    Rate,
    /// The synthetic random walk only.
    RandomWalk,
    /// Both lines, bank rate first.
    #[default]
    Both,
}

impl SeriesSelection {
    /// All selections in dropdown order.
    pub const ALL: [SeriesSelection; 3] = [Self::Rate, Self::RandomWalk, Self::Both];

    /// True when the bank rate line is drawn.
    #[must_use]
    pub fn includes_rate(self) -> bool {
        matches!(self, Self::Rate | Self::Both)
    }

    /// True when the random walk line is drawn.
    #[must_use]
    pub fn includes_random_walk(self) -> bool {
        matches!(self, Self::RandomWalk | Self::Both)
    }

    /// Dropdown label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Rate => "Bank Rate",
            Self::RandomWalk => "Random Walk",
            Self::Both => "Both",
        }
    }
}

impl fmt::Display for SeriesSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Self::Rate => "Rate",
            Self::RandomWalk => "Random Walk",
            Self::Both => "Both",
        };
        write!(f, "{value}")
    }
}

impl FromStr for SeriesSelection {
    type Err = ScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rate" | "bank rate" | "bank-rate" => Ok(Self::Rate),
            "random walk" | "random-walk" | "random_walk" | "randomwalk" => Ok(Self::RandomWalk),
            "both" => Ok(Self::Both),
            _ => Err(ScopeError::input(format!("unknown series selection: {s}"))),
        }
    }
}

impl TryFrom<String> for SeriesSelection {
    type Error = ScopeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SeriesSelection> for String {
    fn from(selection: SeriesSelection) -> Self {
        selection.to_string()
    }
}

/// Visual theme. Affects only the template identifier, never the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Light background.
    #[default]
    Light,
    /// Dark background.
    Dark,
}

impl Theme {
    /// Maps the dark-mode switch to a theme.
    #[must_use]
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Chart template name.
    #[must_use]
    pub fn template(self) -> &'static str {
        match self {
            Self::Light => "plotly_white",
            Self::Dark => "plotly_dark",
        }
    }

    /// True for [`Theme::Dark`].
    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// One user interaction: an inclusive index range plus display options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChartRequest {
    /// First index, inclusive.
    pub start_index: usize,
    /// Last index, inclusive.
    pub end_index: usize,
    /// Lines to draw.
    pub selection: SeriesSelection,
    /// Dark-mode switch.
    pub dark_theme: bool,
}

impl ChartRequest {
    /// Creates a request. No validation happens here; the projector checks
    /// the range against the series.
    #[must_use]
    pub fn new(
        start_index: usize,
        end_index: usize,
        selection: SeriesSelection,
        dark_theme: bool,
    ) -> Self {
        Self {
            start_index,
            end_index,
            selection,
            dark_theme,
        }
    }

    /// Request covering a whole series of length `len` (the initial slider position).
    ///
    /// # Errors
    ///
    /// Returns `ScopeError::RangeError` if `len` is zero.
    pub fn full(len: usize, selection: SeriesSelection, dark_theme: bool) -> ScopeResult<Self> {
        let end = len.checked_sub(1).ok_or_else(|| ScopeError::range(0, 0, len))?;
        Ok(Self::new(0, end, selection, dark_theme))
    }

    /// Builds a request from raw widget values, ordering and clamping them
    /// into `0..len`.
    ///
    /// This is the caller-side correction for untrusted input; the projector
    /// itself rejects bad ranges instead of correcting them.
    ///
    /// # Errors
    ///
    /// Returns `ScopeError::RangeError` if `len` is zero.
    pub fn clamped(
        raw_start: i64,
        raw_end: i64,
        len: usize,
        selection: SeriesSelection,
        dark_theme: bool,
    ) -> ScopeResult<Self> {
        let last = len.checked_sub(1).ok_or_else(|| ScopeError::range(0, 0, len))?;
        let clamp = |raw: i64| usize::try_from(raw.max(0)).unwrap_or(usize::MAX).min(last);
        let (lo, hi) = if raw_start <= raw_end {
            (raw_start, raw_end)
        } else {
            (raw_end, raw_start)
        };
        Ok(Self::new(clamp(lo), clamp(hi), selection, dark_theme))
    }

    /// Theme implied by the dark-mode switch.
    #[must_use]
    pub fn theme(&self) -> Theme {
        Theme::from_dark_flag(self.dark_theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_membership() {
        assert!(SeriesSelection::Rate.includes_rate());
        assert!(!SeriesSelection::Rate.includes_random_walk());
        assert!(!SeriesSelection::RandomWalk.includes_rate());
        assert!(SeriesSelection::RandomWalk.includes_random_walk());
        assert!(SeriesSelection::Both.includes_rate());
        assert!(SeriesSelection::Both.includes_random_walk());
    }

    #[test]
    fn test_selection_parse_roundtrip() {
        for selection in SeriesSelection::ALL {
            let parsed: SeriesSelection = selection.to_string().parse().unwrap();
            assert_eq!(parsed, selection);
        }
        assert_eq!(
            "random-walk".parse::<SeriesSelection>().unwrap(),
            SeriesSelection::RandomWalk
        );
        assert!("neither".parse::<SeriesSelection>().is_err());
        assert_eq!(SeriesSelection::default(), SeriesSelection::Both);
    }

    #[test]
    fn test_selection_serde_routes_through_parsing() {
        let json = serde_json::to_string(&SeriesSelection::RandomWalk).unwrap();
        assert_eq!(json, "\"Random Walk\"");

        for (text, expected) in [
            ("\"Random Walk\"", SeriesSelection::RandomWalk),
            ("\"random-walk\"", SeriesSelection::RandomWalk),
            ("\"rate\"", SeriesSelection::Rate),
            ("\"BOTH\"", SeriesSelection::Both),
        ] {
            let parsed: SeriesSelection = serde_json::from_str(text).unwrap();
            assert_eq!(parsed, expected, "{text}");
        }
        assert!(serde_json::from_str::<SeriesSelection>("\"lines\"").is_err());
    }

    #[test]
    fn test_theme() {
        assert_eq!(Theme::from_dark_flag(true), Theme::Dark);
        assert_eq!(Theme::from_dark_flag(false), Theme::Light);
        assert_eq!(Theme::Dark.template(), "plotly_dark");
        assert_eq!(Theme::Light.template(), "plotly_white");
        assert!(Theme::Dark.is_dark());
    }

    #[test]
    fn test_full_request() {
        let req = ChartRequest::full(10, SeriesSelection::Both, true).unwrap();
        assert_eq!((req.start_index, req.end_index), (0, 9));
        assert_eq!(req.theme(), Theme::Dark);
        assert!(ChartRequest::full(0, SeriesSelection::Both, true).is_err());
    }

    #[test]
    fn test_clamped_request() {
        let req = ChartRequest::clamped(-5, 50, 10, SeriesSelection::Rate, false).unwrap();
        assert_eq!((req.start_index, req.end_index), (0, 9));

        let req = ChartRequest::clamped(7, 2, 10, SeriesSelection::Rate, false).unwrap();
        assert_eq!((req.start_index, req.end_index), (2, 7));

        let req = ChartRequest::clamped(12, 15, 10, SeriesSelection::Rate, false).unwrap();
        assert_eq!((req.start_index, req.end_index), (9, 9));

        assert!(ChartRequest::clamped(0, 0, 0, SeriesSelection::Rate, false).is_err());
    }
}

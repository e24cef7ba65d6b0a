//! Qualitative accuracy bands and the feedback shown for each.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Ordered accuracy band, worst first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccuracyBand {
    Poor,
    Fair,
    Good,
    Excellent,
}

/// Band and feedback phrase for one score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub band: AccuracyBand,
    pub feedback: &'static str,
}

/// Classify an accuracy score.
///
/// Bands are left-closed: `[90, 100]` excellent, `[70, 90)` good,
/// `[50, 70)` fair, `[0, 50)` poor. Out-of-range values clamp to the
/// nearest band; NaN is poor.
pub fn classify(score: f64) -> Classification {
    let band = AccuracyBand::from_score(score);
    Classification {
        band,
        feedback: band.feedback(),
    }
}

impl AccuracyBand {
    /// All bands, best first.
    pub const ALL: [AccuracyBand; 4] = [
        AccuracyBand::Excellent,
        AccuracyBand::Good,
        AccuracyBand::Fair,
        AccuracyBand::Poor,
    ];

    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            AccuracyBand::Excellent
        } else if score >= 70.0 {
            AccuracyBand::Good
        } else if score >= 50.0 {
            AccuracyBand::Fair
        } else {
            AccuracyBand::Poor
        }
    }

    pub fn feedback(self) -> &'static str {
        match self {
            AccuracyBand::Excellent => "🌟 Xuất sắc!",
            AccuracyBand::Good => "✨ Tốt lắm!",
            AccuracyBand::Fair => "👍 Có tiến bộ",
            AccuracyBand::Poor => "💪 Hãy cố gắng thêm",
        }
    }

    /// Display color name used by the renderers.
    pub fn color(self) -> &'static str {
        match self {
            AccuracyBand::Excellent => "green",
            AccuracyBand::Good => "blue",
            AccuracyBand::Fair => "yellow",
            AccuracyBand::Poor => "red",
        }
    }
}

impl fmt::Display for AccuracyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccuracyBand::Excellent => write!(f, "excellent"),
            AccuracyBand::Good => write!(f, "good"),
            AccuracyBand::Fair => write!(f, "fair"),
            AccuracyBand::Poor => write!(f, "poor"),
        }
    }
}

impl FromStr for AccuracyBand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "excellent" => Ok(AccuracyBand::Excellent),
            "good" => Ok(AccuracyBand::Good),
            "fair" => Ok(AccuracyBand::Fair),
            "poor" => Ok(AccuracyBand::Poor),
            other => Err(format!("unknown accuracy band: {other}")),
        }
    }
}

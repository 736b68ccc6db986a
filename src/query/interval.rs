use tracing::debug;
use crate::{IntervalKind, IntervalSpec, DEFAULT_INTERVAL};

pub const CALENDAR_INTERVALS: [&str; 7] = ["1m", "1h", "1d", "1w", "1M", "1q", "1y"];

pub const FIXED_INTERVALS: [&str; 21] = [
    "1m", "2m", "5m", "10m", "15m", "20m", "30m",
    "1h", "2h", "3h", "4h", "5h", "6h", "8h", "12h",
    "1d", "2d", "3d", "7d",
    "1w", "2w",
];

pub struct IntervalClassifier;

impl IntervalClassifier {
    /// Maps a requested interval onto a whitelisted token. Anything unknown
    /// (or missing) becomes the hourly calendar interval.
    pub fn classify(token: Option<&str>) -> IntervalSpec {
        match token.unwrap_or_default() {
            token @ ("1m" | "1h" | "1d" | "1w" | "1M" | "1q" | "1y") => IntervalSpec {
                token: token.to_string(),
                kind: IntervalKind::Calendar,
            },
            token @ ("2m" | "5m" | "10m" | "15m" | "20m" | "30m"
            | "2h" | "3h" | "4h" | "5h" | "6h" | "8h" | "12h"
            | "2d" | "3d" | "7d"
            | "2w") => IntervalSpec {
                token: token.to_string(),
                kind: IntervalKind::Fixed,
            },
            "" => Self::default_spec(),
            other => {
                debug!("Unsupported interval '{}', falling back to {}", other, DEFAULT_INTERVAL);
                Self::default_spec()
            }
        }
    }

    pub fn default_spec() -> IntervalSpec {
        IntervalSpec { token: DEFAULT_INTERVAL.to_string(), kind: IntervalKind::Calendar }
    }
}

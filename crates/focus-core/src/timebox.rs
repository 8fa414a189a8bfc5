//! Timebox durations such as `"3h"`, `"90m"` or `"2h30m"`.

use chrono::Duration;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeboxError {
    #[error("Timebox is empty")]
    Empty,

    #[error("Invalid timebox '{input}': {reason}")]
    Invalid { input: String, reason: String },

    #[error("Unknown unit '{unit}' in timebox '{input}' (use h, m, s or ms)")]
    UnknownUnit { input: String, unit: String },

    #[error("Timebox '{input}' must be longer than zero")]
    Zero { input: String },
}

impl crate::errors::FocusError for TimeboxError {
    fn error_code(&self) -> &'static str {
        match self {
            TimeboxError::Empty => "TIMEBOX_EMPTY",
            TimeboxError::Invalid { .. } => "TIMEBOX_INVALID",
            TimeboxError::UnknownUnit { .. } => "TIMEBOX_UNKNOWN_UNIT",
            TimeboxError::Zero { .. } => "TIMEBOX_ZERO",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}

/// A parsed timebox. Keeps the text the user typed for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timebox {
    raw: String,
    duration: Duration,
}

impl Timebox {
    /// Parse a sequence of `<number><unit>` pairs. Numbers may be
    /// fractional (`"1.5h"`); units are `h`, `m`, `s` and `ms`.
    pub fn parse(input: &str) -> Result<Self, TimeboxError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(TimeboxError::Empty);
        }

        let invalid = |reason: &str| TimeboxError::Invalid {
            input: trimmed.to_string(),
            reason: reason.to_string(),
        };

        let is_numeric = |c: char| c.is_ascii_digit() || c == '.';

        let mut total_ms = 0.0_f64;
        let mut rest = trimmed;
        while !rest.is_empty() {
            let number_len = rest.find(|c: char| !is_numeric(c)).unwrap_or(rest.len());
            if number_len == 0 {
                return Err(invalid("expected a number"));
            }
            let (number, tail) = rest.split_at(number_len);
            let value: f64 = number.parse().map_err(|_| invalid("malformed number"))?;

            let unit_len = tail.find(is_numeric).unwrap_or(tail.len());
            if unit_len == 0 {
                return Err(invalid("missing unit"));
            }
            let (unit, next) = tail.split_at(unit_len);
            let unit_ms = match unit {
                "h" => 3_600_000.0,
                "m" => 60_000.0,
                "s" => 1_000.0,
                "ms" => 1.0,
                other => {
                    return Err(TimeboxError::UnknownUnit {
                        input: trimmed.to_string(),
                        unit: other.to_string(),
                    });
                }
            };

            total_ms += value * unit_ms;
            rest = next;
        }

        let millis = total_ms.round() as i64;
        if millis <= 0 {
            return Err(TimeboxError::Zero {
                input: trimmed.to_string(),
            });
        }

        Ok(Self {
            raw: trimmed.to_string(),
            duration: Duration::milliseconds(millis),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl std::fmt::Display for Timebox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl std::str::FromStr for Timebox {
    type Err = TimeboxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Render a duration as `"1h 5m"`, or `"12m"` under an hour.
/// Negative durations render as `"0m"`.
pub fn format_elapsed(duration: Duration) -> String {
    let duration = duration.max(Duration::zero());
    let hours = duration.num_hours();
    let minutes = duration.num_minutes() % 60;

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

//! Relative duration formatting
//!
//! Picks the longest unit the duration reaches at least once, falling back to
//! the last (one-second) unit.

use serde::Deserialize;

use super::WashError;

/// One unit of a [`DurationSpec`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DurationUnit {
    /// Single-character form used when the unit column is one wide
    pub abbreviation: char,
    pub singular: String,
    pub plural: String,
    /// Length of the unit in seconds
    pub seconds: u64,
}

impl DurationUnit {
    pub fn new(abbreviation: char, singular: &str, plural: &str, seconds: u64) -> Self {
        Self {
            abbreviation,
            singular: singular.to_string(),
            plural: plural.to_string(),
            seconds,
        }
    }
}

/// Ordered unit table, longest unit first, ending in a one-second unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationSpec {
    units: Vec<DurationUnit>,
}

impl Default for DurationSpec {
    /// Year down to second; year and month use average Gregorian lengths
    fn default() -> Self {
        Self {
            units: vec![
                DurationUnit::new('Y', "year", "years", 31_556_952),
                DurationUnit::new('M', "month", "months", 2_629_746),
                DurationUnit::new('w', "week", "weeks", 604_800),
                DurationUnit::new('d', "day", "days", 86_400),
                DurationUnit::new('h', "hour", "hours", 3_600),
                DurationUnit::new('m', "minute", "minutes", 60),
                DurationUnit::new('s', "second", "seconds", 1),
            ],
        }
    }
}

impl DurationSpec {
    /// Validate and build a unit table
    pub fn new(units: Vec<DurationUnit>) -> Result<Self, WashError> {
        let Some(last) = units.last() else {
            return Err(WashError::InvalidDurationSpec(
                "at least one unit is required".to_string(),
            ));
        };
        if last.seconds != 1 {
            return Err(WashError::InvalidDurationSpec(format!(
                "last unit '{}' must be one second long, got {}",
                last.singular, last.seconds
            )));
        }
        for pair in units.windows(2) {
            if pair[0].seconds <= pair[1].seconds {
                return Err(WashError::InvalidDurationSpec(format!(
                    "units must be strictly descending: '{}' ({}) before '{}' ({})",
                    pair[0].singular, pair[0].seconds, pair[1].singular, pair[1].seconds
                )));
            }
        }
        Ok(Self { units })
    }

    pub fn units(&self) -> &[DurationUnit] {
        &self.units
    }

    /// Length of the longest unit name, singular or plural
    pub fn longest_name(&self) -> usize {
        self.units
            .iter()
            .flat_map(|u| [u.singular.chars().count(), u.plural.chars().count()])
            .max()
            .unwrap_or(0)
    }
}

/// Format `duration` seconds as a count and unit
///
/// With `width == 1` the unit is its abbreviation (`  3d`); otherwise the
/// count is right-aligned in three columns and the unit name left-aligned in
/// `width` columns (`  3 days   `). Negative durations render as zero.
pub fn format_duration(duration: i64, spec: &DurationSpec, width: usize) -> String {
    format_with(duration.max(0) as u64, spec.units(), width)
}

fn format_with(duration: u64, units: &[DurationUnit], width: usize) -> String {
    let Some((unit, rest)) = units.split_first() else {
        return String::new();
    };

    let ratio = duration as f64 / unit.seconds as f64;
    if !rest.is_empty() && ratio < 1.0 {
        return format_with(duration, rest, width);
    }

    let count = ratio.round() as u64;
    if width == 1 {
        format!("{:>3}{}", count, unit.abbreviation)
    } else {
        let name = if count == 1 { &unit.singular } else { &unit.plural };
        format!("{:>3} {:<width$}", count, name, width = width)
    }
}

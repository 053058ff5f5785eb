//! Range and mean of a finished entropy map.

use crate::field::EntropyField;
use serde::Serialize;

/// Smallest, largest and mean normalized entropy of one map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSummary {
    pub min: f32,
    pub max: f32,
    pub mean: f64,
}

impl FieldSummary {
    /// One pass over `field`; `None` for an empty field.
    pub fn of(field: &EntropyField) -> Option<Self> {
        let mut values = field.as_slice().iter().copied();
        let first = values.next()?;

        let (mut min, mut max, mut sum) = (first, first, f64::from(first));
        for value in values {
            min = min.min(value);
            max = max.max(value);
            sum += f64::from(value);
        }

        Some(Self {
            min,
            max,
            mean: sum / field.len() as f64,
        })
    }

    /// True when every window held a single value.
    pub fn is_flat(&self) -> bool {
        self.max == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_ramp() {
        let field = EntropyField::new(2, 2, vec![0.0, 0.25, 0.75, 1.0]).unwrap();
        let summary = FieldSummary::of(&field).unwrap();

        assert_eq!(summary.min, 0.0);
        assert_eq!(summary.max, 1.0);
        assert_eq!(summary.mean, 0.5);
        assert!(!summary.is_flat());
    }

    #[test]
    fn test_zero_map_is_flat() {
        let summary = FieldSummary::of(&EntropyField::filled(3, 2, 0.0)).unwrap();
        assert!(summary.is_flat());
        assert_eq!(summary.mean, 0.0);
    }

    #[test]
    fn test_empty_field_has_no_summary() {
        assert!(FieldSummary::of(&EntropyField::filled(0, 0, 0.0)).is_none());
    }
}

//! Conversion between calendar dates and model time.
//!
//! Model time is measured in days since a reference date: with a reference of 2019-01-01,
//! 2019-02-01 is day `31.0`.
use time::{Date, Duration};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Epoch {
    ref_date: Date,
}

impl Epoch {
    #[must_use]
    pub fn new(ref_date: Date) -> Self {
        Epoch { ref_date }
    }

    #[must_use]
    pub fn ref_date(&self) -> Date {
        self.ref_date
    }

    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn date_to_number(&self, date: Date) -> f64 {
        (date - self.ref_date).whole_days() as f64
    }

    /// The date containing model time `t`. Returns `None` outside the range `time::Date`
    /// represents.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn number_to_date(&self, t: f64) -> Option<Date> {
        if !t.is_finite() {
            return None;
        }
        let days = t.floor();
        if days.abs() > f64::from(i32::MAX) {
            return None;
        }
        self.ref_date.checked_add(Duration::days(days as i64))
    }
}

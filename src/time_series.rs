use time::Date;

use crate::error::ModelError;

/// A named series of values indexed by strictly increasing dates.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    name: String,
    index: Vec<Date>,
    values: Vec<f64>,
}

impl TimeSeries {
    /// # Errors
    /// Returns `ModelError::UnorderedIndex` if a date does not come strictly after the previous
    /// one, and `ModelError::ModelError` if `index` and `values` differ in length.
    pub fn new(name: &str, index: Vec<Date>, values: Vec<f64>) -> Result<Self, ModelError> {
        if index.len() != values.len() {
            return Err(format!(
                "series `{name}` has {} dates but {} values",
                index.len(),
                values.len()
            )
            .into());
        }
        if let Some(pair) = index.windows(2).find(|pair| pair[1] <= pair[0]) {
            return Err(ModelError::UnorderedIndex(format!(
                "series `{name}`: {} follows {}",
                pair[1], pair[0]
            )));
        }
        Ok(TimeSeries {
            name: name.to_string(),
            index,
            values,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn index(&self) -> &[Date] {
        &self.index
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    #[must_use]
    pub fn get(&self, date: Date) -> Option<f64> {
        self.index
            .binary_search(&date)
            .ok()
            .map(|position| self.values[position])
    }

    #[must_use]
    pub fn first(&self) -> Option<(Date, f64)> {
        self.iter().next()
    }

    #[must_use]
    pub fn last(&self) -> Option<(Date, f64)> {
        self.iter().last()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Date, f64)> + '_ {
        self.index.iter().copied().zip(self.values.iter().copied())
    }
}

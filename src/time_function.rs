//! Functions of model time.
use crate::error::ModelError;
use crate::parameters::{Parameters, Value};

/// A step function defined by ordered breakpoints and the constant level between them.
///
/// With breakpoints `b` and levels `l`, the function is `l[0]` before `b[0]`, `l[i]` on
/// `[b[i-1], b[i])` and `l[n]` from `b[n-1]` on. Breakpoints and levels may refer to
/// parameters and are resolved on every evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewiseFunction {
    breakpoints: Vec<Value>,
    levels: Vec<Value>,
}

impl PiecewiseFunction {
    /// # Errors
    /// Returns `ModelError::InvalidFunction` unless there is exactly one more level than
    /// breakpoints.
    pub fn new(breakpoints: Vec<Value>, levels: Vec<Value>) -> Result<Self, ModelError> {
        if levels.len() != breakpoints.len() + 1 {
            return Err(ModelError::InvalidFunction(format!(
                "piecewise function needs {} levels for {} breakpoints, got {}",
                breakpoints.len() + 1,
                breakpoints.len(),
                levels.len()
            )));
        }
        Ok(PiecewiseFunction {
            breakpoints,
            levels,
        })
    }

    #[must_use]
    pub fn breakpoints(&self) -> &[Value] {
        &self.breakpoints
    }

    #[must_use]
    pub fn levels(&self) -> &[Value] {
        &self.levels
    }

    /// # Errors
    /// Returns `ModelError::InvalidFunction` if the resolved breakpoints decrease.
    pub fn evaluate(&self, t: f64, parameters: &Parameters) -> Result<f64, ModelError> {
        let resolved: Vec<f64> = self
            .breakpoints
            .iter()
            .map(|breakpoint| breakpoint.resolve(parameters))
            .collect();
        if let Some(pair) = resolved.windows(2).find(|pair| pair[1] < pair[0]) {
            return Err(ModelError::InvalidFunction(format!(
                "breakpoints must not decrease, found {} after {}",
                pair[1], pair[0]
            )));
        }
        let index = resolved.partition_point(|breakpoint| *breakpoint <= t);
        Ok(self.levels[index].resolve(parameters))
    }
}

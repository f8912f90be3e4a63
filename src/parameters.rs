//! Named model parameters.
//!
//! Rates and breakpoints are declared against a [`Value`], which may refer to a parameter by
//! name. Nothing is resolved until a [`Parameters`] record is supplied, so one model declaration
//! can be evaluated under many parameter sets.
//!
//! ```rust
//! use learningmodel::parameters::{param, ParamName, Parameters};
//!
//! let seed_end = param(ParamName::SeedStart) + 7.0;
//! let parameters = Parameters {
//!     seed_start: 31.0,
//!     ..Parameters::default()
//! };
//! assert_eq!(seed_end.resolve(&parameters), 38.0);
//! ```
use std::fs::File;
use std::io::BufReader;
use std::ops::Add;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::ModelError;

/// The parameters a model may refer to by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ParamName {
    SeedStart,
    SeedRate,
    ContactRate,
    RecoveryRate,
}

/// Concrete values for every [`ParamName`]. Loaded from JSON, any field missing from the file
/// keeps its default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Parameters {
    /// Time the seeding window opens, in days since the model's reference date.
    pub seed_start: f64,
    /// Imported infections per day while seeding.
    pub seed_rate: f64,
    pub contact_rate: f64,
    pub recovery_rate: f64,
}

impl Parameters {
    #[must_use]
    pub fn get(&self, name: ParamName) -> f64 {
        match name {
            ParamName::SeedStart => self.seed_start,
            ParamName::SeedRate => self.seed_rate,
            ParamName::ContactRate => self.contact_rate,
            ParamName::RecoveryRate => self.recovery_rate,
        }
    }

    /// Reads parameters from a JSON object such as `{"seed_rate": 3.0}`.
    ///
    /// # Errors
    /// Returns `ModelError::IoError` if the file cannot be opened and `ModelError::JsonError` if
    /// it is not a JSON object of known parameter names with numeric values.
    pub fn from_json_file(path: &Path) -> Result<Self, ModelError> {
        info!("Loading parameters from {}", path.display());
        let reader = BufReader::new(File::open(path)?);
        let parameters: Parameters = serde_json::from_reader(reader)?;
        Ok(parameters)
    }
}

/// A number that is either known now or looked up in [`Parameters`] later.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Constant(f64),
    Param(ParamName),
    Sum(Box<Value>, Box<Value>),
}

impl Value {
    #[must_use]
    pub fn resolve(&self, parameters: &Parameters) -> f64 {
        match self {
            Value::Constant(value) => *value,
            Value::Param(name) => parameters.get(*name),
            Value::Sum(lhs, rhs) => lhs.resolve(parameters) + rhs.resolve(parameters),
        }
    }
}

/// Shorthand for `Value::Param(name)`.
#[must_use]
pub fn param(name: ParamName) -> Value {
    Value::Param(name)
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Constant(value)
    }
}

impl From<ParamName> for Value {
    fn from(name: ParamName) -> Self {
        Value::Param(name)
    }
}

impl Add for Value {
    type Output = Value;

    fn add(self, rhs: Value) -> Value {
        Value::Sum(Box::new(self), Box::new(rhs))
    }
}

impl Add<f64> for Value {
    type Output = Value;

    fn add(self, rhs: f64) -> Value {
        self + Value::Constant(rhs)
    }
}

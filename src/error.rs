use std::fmt::{self, Debug, Display};
use std::io;

/// Provides `ModelError` and maps other errors to
/// convert to a `ModelError`
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum ModelError {
    IoError(io::Error),
    JsonError(serde_json::Error),
    CSVError(csv::Error),
    DateError(time::error::Parse),
    /// A flow, output or initial value names a compartment the model does not declare.
    UnknownCompartment(String),
    /// An output refers to a flow the model does not declare.
    UnknownFlow(String),
    /// Flow, output and compartment names are unique within a model.
    DuplicateName(String),
    InvalidPopulation { compartment: String, value: f64 },
    /// A time series index must be strictly increasing.
    UnorderedIndex(String),
    InvalidFunction(String),
    ModelError(String),
}

impl From<io::Error> for ModelError {
    fn from(error: io::Error) -> Self {
        ModelError::IoError(error)
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(error: serde_json::Error) -> Self {
        ModelError::JsonError(error)
    }
}

impl From<csv::Error> for ModelError {
    fn from(error: csv::Error) -> Self {
        ModelError::CSVError(error)
    }
}

impl From<time::error::Parse> for ModelError {
    fn from(error: time::error::Parse) -> Self {
        ModelError::DateError(error)
    }
}

impl From<String> for ModelError {
    fn from(error: String) -> Self {
        ModelError::ModelError(error)
    }
}

impl From<&str> for ModelError {
    fn from(error: &str) -> Self {
        ModelError::ModelError(error.to_string())
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::IoError(e) => Some(e),
            ModelError::JsonError(e) => Some(e),
            ModelError::CSVError(e) => Some(e),
            ModelError::DateError(e) => Some(e),
            _ => None,
        }
    }
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ModelError::UnknownCompartment(name) => {
                write!(f, "Error: compartment `{name}` is not declared in the model")
            }
            ModelError::UnknownFlow(name) => {
                write!(f, "Error: flow `{name}` is not declared in the model")
            }
            ModelError::DuplicateName(name) => write!(f, "Error: `{name}` is already declared"),
            ModelError::InvalidPopulation { compartment, value } => write!(
                f,
                "Error: initial population {value} for compartment `{compartment}` must be finite and non-negative"
            ),
            _ => write!(f, "Error: {self:?}"),
        }
    }
}

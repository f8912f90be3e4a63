//! A seeded SIR transmission model and the infection data it is compared against
//!
//! The crate has three layers:
//! * [`model`] declares compartmental models: compartments, an initial population, flows between
//!   compartments and requested outputs. Rates may be constants, references to named
//!   [`parameters`], or functions of time from [`time_function`].
//! * [`sir`] uses it to declare the seeded SIR model with [`sir::build_model`], together with its
//!   default parameters. The seeding window comes from [`seeding::get_seed_function`].
//! * [`data`] loads the bundled daily infection counts as a date-indexed
//!   [`time_series::TimeSeries`].
//!
//! The model is a declaration plus its right-hand side; integrating it over time is left to the
//! caller.
pub mod data;
pub mod epoch;
pub mod error;
pub mod log;
pub mod model;
pub mod numeric;
pub mod parameters;
pub mod seeding;
pub mod sir;
pub mod time_function;
pub mod time_series;

pub use error::ModelError;
pub use model::CompartmentalModel;
pub use parameters::{param, ParamName, Parameters, Value};
pub use sir::{build_model, default_parameters};

// Logging macros
pub use crate::log::{debug, error, info, trace, warn};

use crate::error::ModelError;
use crate::parameters::{ParamName, Parameters, Value};
use crate::time_function::PiecewiseFunction;

/// How fast a flow moves people, either a (possibly parameterized) number or a function of time.
#[derive(Debug, Clone, PartialEq)]
pub enum Rate {
    Value(Value),
    Function(PiecewiseFunction),
}

impl Rate {
    /// # Errors
    /// Propagates errors from evaluating a time function.
    pub fn evaluate(&self, t: f64, parameters: &Parameters) -> Result<f64, ModelError> {
        match self {
            Rate::Value(value) => Ok(value.resolve(parameters)),
            Rate::Function(function) => function.evaluate(t, parameters),
        }
    }
}

impl From<Value> for Rate {
    fn from(value: Value) -> Self {
        Rate::Value(value)
    }
}

impl From<f64> for Rate {
    fn from(value: f64) -> Self {
        Rate::Value(Value::Constant(value))
    }
}

impl From<ParamName> for Rate {
    fn from(name: ParamName) -> Self {
        Rate::Value(Value::Param(name))
    }
}

impl From<PiecewiseFunction> for Rate {
    fn from(function: PiecewiseFunction) -> Self {
        Rate::Function(function)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowKind {
    /// People enter the destination from outside the model at an absolute rate. With
    /// `split_imports`, the rate is shared among all compartments carrying the destination name
    /// instead of applied to each; unstratified models have exactly one such compartment.
    Importation { split_imports: bool },
    /// Rate per susceptible scales with the infectious share of the population.
    InfectionFrequency,
    /// Rate per person in the source compartment.
    Transition,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Flow {
    pub(crate) name: String,
    pub(crate) kind: FlowKind,
    pub(crate) rate: Rate,
    pub(crate) source: Option<usize>,
    pub(crate) dest: usize,
}

impl Flow {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> FlowKind {
        self.kind
    }

    #[must_use]
    pub fn rate(&self) -> &Rate {
        &self.rate
    }

    /// Index of the source compartment; `None` for importation flows.
    #[must_use]
    pub fn source(&self) -> Option<usize> {
        self.source
    }

    #[must_use]
    pub fn dest(&self) -> usize {
        self.dest
    }
}

#[cfg(test)]
mod tests {
    use super::Rate;
    use crate::parameters::{ParamName, Parameters};
    use crate::seeding::get_seed_function;

    #[test]
    fn rates_resolve_parameters_and_time() {
        let parameters = Parameters {
            seed_start: 1.0,
            seed_rate: 2.0,
            contact_rate: 0.4,
            recovery_rate: 0.1,
        };
        assert_eq!(
            Rate::from(ParamName::RecoveryRate)
                .evaluate(50.0, &parameters)
                .unwrap(),
            0.1
        );
        assert_eq!(Rate::from(0.7).evaluate(0.0, &parameters).unwrap(), 0.7);

        let seed = Rate::from(get_seed_function(1.0, 1.0, ParamName::SeedRate));
        assert_eq!(seed.evaluate(1.5, &parameters).unwrap(), 2.0);
        assert_eq!(seed.evaluate(2.0, &parameters).unwrap(), 0.0);
    }
}

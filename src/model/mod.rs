//! Declarative compartmental models.
//!
//! A [`CompartmentalModel`] is built up step by step: declare the compartments, set the initial
//! population, add flows between compartments and request outputs. Every declaration is checked
//! against what the model already knows, so a flow into an undeclared compartment fails when it
//! is added rather than when the model is evaluated.
//!
//! The model does not integrate itself. It provides the right-hand side of its ODE system
//! through [`CompartmentalModel::flow_rates`] and [`CompartmentalModel::derivatives`], and turns a
//! trajectory produced by an integrator into the requested outputs with
//! [`CompartmentalModel::derived_outputs`].
//!
//! ```rust
//! use learningmodel::model::CompartmentalModel;
//! use learningmodel::parameters::ParamName;
//!
//! let mut model = CompartmentalModel::new((0.0, 50.0), &["S", "I", "R"], &["I"], None)?;
//! model.set_initial_population(&[("S", 99.0), ("I", 1.0)])?;
//! model.add_infection_frequency_flow("infection", ParamName::ContactRate, "S", "I")?;
//! model.add_transition_flow("recovery", ParamName::RecoveryRate, "I", "R")?;
//! assert!(model.add_transition_flow("death", 0.01, "I", "D").is_err());
//! # Ok::<(), learningmodel::error::ModelError>(())
//! ```
mod flow;
mod outputs;

pub use flow::{Flow, FlowKind, Rate};
pub use outputs::{DerivedOutput, OutputRequest, OutputSource};

use log::debug;
use time::Date;

use crate::epoch::Epoch;
use crate::error::ModelError;
use crate::numeric::{almost_eq, ACC};
use crate::parameters::Parameters;

#[derive(Debug, Clone)]
pub struct CompartmentalModel {
    times: (f64, f64),
    compartments: Vec<String>,
    infectious: Vec<usize>,
    ref_date: Option<Date>,
    initial_population: Vec<f64>,
    flows: Vec<Flow>,
    outputs: Vec<OutputRequest>,
}

impl CompartmentalModel {
    /// Declares a model over `times = (start, end)` with the given compartments, of which
    /// `infectious` drive frequency-dependent infection. `ref_date` anchors model time to the
    /// calendar.
    ///
    /// # Errors
    /// - `ModelError::ModelError` if there are no compartments or `start > end`
    /// - `ModelError::DuplicateName` if a compartment is declared twice
    /// - `ModelError::UnknownCompartment` if an infectious compartment is not declared
    pub fn new(
        times: (f64, f64),
        compartments: &[&str],
        infectious: &[&str],
        ref_date: Option<Date>,
    ) -> Result<Self, ModelError> {
        if compartments.is_empty() {
            return Err("a model needs at least one compartment".into());
        }
        if times.0.is_nan() || times.1.is_nan() || times.0 > times.1 {
            return Err(format!("invalid time span [{}, {}]", times.0, times.1).into());
        }

        let mut model = CompartmentalModel {
            times,
            compartments: Vec::with_capacity(compartments.len()),
            infectious: Vec::new(),
            ref_date,
            initial_population: vec![0.0; compartments.len()],
            flows: Vec::new(),
            outputs: Vec::new(),
        };
        for name in compartments {
            if model.compartments.iter().any(|c| c == name) {
                return Err(ModelError::DuplicateName((*name).to_string()));
            }
            model.compartments.push((*name).to_string());
        }
        model.infectious = infectious
            .iter()
            .map(|name| model.compartment_index(name))
            .collect::<Result<_, _>>()?;

        debug!(
            "Declared model over [{}, {}] with compartments {:?}",
            times.0, times.1, model.compartments
        );
        Ok(model)
    }

    /// Sets the starting size of the named compartments. Compartments left out start empty.
    ///
    /// # Errors
    /// Returns `ModelError::UnknownCompartment` or `ModelError::InvalidPopulation` and leaves the
    /// current initial population untouched.
    pub fn set_initial_population(
        &mut self,
        population: &[(&str, f64)],
    ) -> Result<(), ModelError> {
        let mut initial = vec![0.0; self.compartments.len()];
        for (name, value) in population {
            let index = self.compartment_index(name)?;
            if !value.is_finite() || *value < 0.0 {
                return Err(ModelError::InvalidPopulation {
                    compartment: (*name).to_string(),
                    value: *value,
                });
            }
            initial[index] = *value;
        }
        debug!("Initial population {:?}", initial);
        self.initial_population = initial;
        Ok(())
    }

    /// Adds people to `dest` from outside the model at `rate` people per unit time.
    ///
    /// # Errors
    /// Returns `ModelError::DuplicateName` or `ModelError::UnknownCompartment`.
    pub fn add_importation_flow(
        &mut self,
        name: &str,
        rate: impl Into<Rate>,
        dest: &str,
        split_imports: bool,
    ) -> Result<(), ModelError> {
        self.add_flow(
            name,
            FlowKind::Importation { split_imports },
            rate.into(),
            None,
            dest,
        )
    }

    /// Moves people from `source` to `dest` at `contact_rate * source * infectious / N`.
    ///
    /// # Errors
    /// Returns `ModelError::DuplicateName` or `ModelError::UnknownCompartment`.
    pub fn add_infection_frequency_flow(
        &mut self,
        name: &str,
        contact_rate: impl Into<Rate>,
        source: &str,
        dest: &str,
    ) -> Result<(), ModelError> {
        self.add_flow(
            name,
            FlowKind::InfectionFrequency,
            contact_rate.into(),
            Some(source),
            dest,
        )
    }

    /// Moves people from `source` to `dest` at `rate * source`.
    ///
    /// # Errors
    /// Returns `ModelError::DuplicateName` or `ModelError::UnknownCompartment`.
    pub fn add_transition_flow(
        &mut self,
        name: &str,
        rate: impl Into<Rate>,
        source: &str,
        dest: &str,
    ) -> Result<(), ModelError> {
        self.add_flow(name, FlowKind::Transition, rate.into(), Some(source), dest)
    }

    fn add_flow(
        &mut self,
        name: &str,
        kind: FlowKind,
        rate: Rate,
        source: Option<&str>,
        dest: &str,
    ) -> Result<(), ModelError> {
        if self.flows.iter().any(|flow| flow.name == name) {
            return Err(ModelError::DuplicateName(name.to_string()));
        }
        let source = source.map(|s| self.compartment_index(s)).transpose()?;
        let dest = self.compartment_index(dest)?;

        debug!(
            "Adding {:?} flow `{}` into {} at {:?}",
            kind, name, self.compartments[dest], rate
        );
        self.flows.push(Flow {
            name: name.to_string(),
            kind,
            rate,
            source,
            dest,
        });
        Ok(())
    }

    /// Requests an output tracking the rate of the flow named `flow_name`.
    ///
    /// # Errors
    /// Returns `ModelError::DuplicateName` or `ModelError::UnknownFlow`.
    pub fn request_output_for_flow(
        &mut self,
        name: &str,
        flow_name: &str,
    ) -> Result<(), ModelError> {
        let flow = self
            .flows
            .iter()
            .position(|flow| flow.name == flow_name)
            .ok_or_else(|| ModelError::UnknownFlow(flow_name.to_string()))?;
        self.add_output(name, OutputSource::Flow(flow))
    }

    /// Requests an output tracking the summed size of `compartments`.
    ///
    /// # Errors
    /// Returns `ModelError::DuplicateName` or `ModelError::UnknownCompartment`.
    pub fn request_output_for_compartments(
        &mut self,
        name: &str,
        compartments: &[&str],
    ) -> Result<(), ModelError> {
        let compartments = compartments
            .iter()
            .map(|c| self.compartment_index(c))
            .collect::<Result<_, _>>()?;
        self.add_output(name, OutputSource::Compartments(compartments))
    }

    fn add_output(&mut self, name: &str, source: OutputSource) -> Result<(), ModelError> {
        if self.outputs.iter().any(|output| output.name == name) {
            return Err(ModelError::DuplicateName(name.to_string()));
        }
        debug!("Requesting output `{}` from {:?}", name, source);
        self.outputs.push(OutputRequest {
            name: name.to_string(),
            source,
        });
        Ok(())
    }

    fn compartment_index(&self, name: &str) -> Result<usize, ModelError> {
        self.compartments
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| ModelError::UnknownCompartment(name.to_string()))
    }

    #[must_use]
    pub fn times(&self) -> (f64, f64) {
        self.times
    }

    #[must_use]
    pub fn compartments(&self) -> &[String] {
        &self.compartments
    }

    #[must_use]
    pub fn infectious_compartments(&self) -> Vec<&str> {
        self.infectious
            .iter()
            .map(|i| self.compartments[*i].as_str())
            .collect()
    }

    #[must_use]
    pub fn ref_date(&self) -> Option<Date> {
        self.ref_date
    }

    #[must_use]
    pub fn epoch(&self) -> Option<Epoch> {
        self.ref_date.map(Epoch::new)
    }

    /// Initial compartment sizes, in declaration order.
    #[must_use]
    pub fn initial_population(&self) -> &[f64] {
        &self.initial_population
    }

    #[must_use]
    pub fn flows(&self) -> &[Flow] {
        &self.flows
    }

    #[must_use]
    pub fn flow(&self, name: &str) -> Option<&Flow> {
        self.flows.iter().find(|flow| flow.name == name)
    }

    #[must_use]
    pub fn outputs(&self) -> &[OutputRequest] {
        &self.outputs
    }

    /// The number of people each flow moves per unit time at time `t` in `state`.
    ///
    /// # Errors
    /// Returns `ModelError::ModelError` if `state` does not have one entry per compartment, and
    /// propagates errors from evaluating time functions.
    pub fn flow_rates(
        &self,
        t: f64,
        state: &[f64],
        parameters: &Parameters,
    ) -> Result<Vec<f64>, ModelError> {
        if state.len() != self.compartments.len() {
            return Err(format!(
                "state has {} values for {} compartments",
                state.len(),
                self.compartments.len()
            )
            .into());
        }
        let total: f64 = state.iter().sum();
        let infectious: f64 = self.infectious.iter().map(|i| state[*i]).sum();
        let infectious_share = if almost_eq(total, 0.0, ACC) {
            0.0
        } else {
            infectious / total
        };

        self.flows
            .iter()
            .map(|flow| -> Result<f64, ModelError> {
                let rate = flow.rate.evaluate(t, parameters)?;
                Ok(match (flow.kind, flow.source) {
                    (FlowKind::Importation { .. }, _) | (_, None) => rate,
                    (FlowKind::InfectionFrequency, Some(source)) => {
                        rate * state[source] * infectious_share
                    }
                    (FlowKind::Transition, Some(source)) => rate * state[source],
                })
            })
            .collect()
    }

    /// Net rate of change of every compartment at time `t` in `state`.
    ///
    /// # Errors
    /// See [`CompartmentalModel::flow_rates`].
    pub fn derivatives(
        &self,
        t: f64,
        state: &[f64],
        parameters: &Parameters,
    ) -> Result<Vec<f64>, ModelError> {
        let rates = self.flow_rates(t, state, parameters)?;
        let mut derivatives = vec![0.0; self.compartments.len()];
        for (flow, rate) in self.flows.iter().zip(rates) {
            if let Some(source) = flow.source {
                derivatives[source] -= rate;
            }
            derivatives[flow.dest] += rate;
        }
        Ok(derivatives)
    }
}

//! Requested outputs and their evaluation over a trajectory computed elsewhere.
use crate::error::ModelError;
use crate::model::CompartmentalModel;
use crate::parameters::Parameters;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSource {
    /// The rate of one flow, by index into the model's flows.
    Flow(usize),
    /// The summed size of compartments, by index.
    Compartments(Vec<usize>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRequest {
    pub(crate) name: String,
    pub(crate) source: OutputSource,
}

impl OutputRequest {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn source(&self) -> &OutputSource {
        &self.source
    }
}

/// One requested output evaluated at every time of a trajectory.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedOutput {
    pub name: String,
    pub values: Vec<f64>,
}

impl CompartmentalModel {
    /// Evaluates every requested output along `trajectory`, where `trajectory[i]` holds the
    /// compartment sizes at `times[i]`. Flow outputs give the instantaneous flow rate.
    ///
    /// # Errors
    /// Returns `ModelError::ModelError` if `times` and `trajectory` differ in length or a state
    /// has the wrong width, and propagates errors from evaluating flow rates.
    pub fn derived_outputs(
        &self,
        times: &[f64],
        trajectory: &[Vec<f64>],
        parameters: &Parameters,
    ) -> Result<Vec<DerivedOutput>, ModelError> {
        if times.len() != trajectory.len() {
            return Err(format!(
                "{} times given for a trajectory of {} states",
                times.len(),
                trajectory.len()
            )
            .into());
        }

        let mut outputs: Vec<DerivedOutput> = self
            .outputs
            .iter()
            .map(|request| DerivedOutput {
                name: request.name.clone(),
                values: Vec::with_capacity(times.len()),
            })
            .collect();

        for (&t, state) in times.iter().zip(trajectory) {
            let flow_rates = self.flow_rates(t, state, parameters)?;
            for (request, output) in self.outputs.iter().zip(outputs.iter_mut()) {
                let value = match &request.source {
                    OutputSource::Flow(flow) => flow_rates[*flow],
                    OutputSource::Compartments(compartments) => {
                        compartments.iter().map(|c| state[*c]).sum::<f64>()
                    }
                };
                output.values.push(value);
            }
        }
        Ok(outputs)
    }
}

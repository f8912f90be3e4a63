//! The seeded SIR model.
//!
//! A closed population of 1000 susceptible people is seeded with imported infections for one
//! week, starting on a parameterized day, after which transmission is frequency dependent and
//! infectious people recover at a constant rate.
use log::info;
use time::macros::date;
use time::Date;

use crate::epoch::Epoch;
use crate::error::ModelError;
use crate::model::CompartmentalModel;
use crate::parameters::{param, ParamName, Parameters};
use crate::seeding::get_seed_function;

/// Day zero of model time.
pub const REF_DATE: Date = date!(2019 - 01 - 01);

/// Days of seeding.
pub const SEED_DURATION: f64 = 7.0;

pub const COMPARTMENTS: [&str; 3] = ["S", "I", "R"];

const TIMES: (f64, f64) = (0.0, 100.0);
const POPULATION: f64 = 1000.0;

/// Declares the seeded SIR model. Rates refer to [`Parameters`] by name and are resolved when
/// the model is evaluated.
///
/// # Errors
/// Only if a declaration is inconsistent, which would be a bug in this function.
pub fn build_model() -> Result<CompartmentalModel, ModelError> {
    let mut model = CompartmentalModel::new(TIMES, &COMPARTMENTS, &["I"], Some(REF_DATE))?;

    model.set_initial_population(&[("S", POPULATION)])?;

    // Seed at seed_rate from a parameterized start time for a fixed length of time
    let seed = get_seed_function(
        param(ParamName::SeedStart),
        SEED_DURATION,
        param(ParamName::SeedRate),
    );
    model.add_importation_flow("seed", seed, "I", true)?;

    model.add_infection_frequency_flow("infection", ParamName::ContactRate, "S", "I")?;
    model.add_transition_flow("recovery", ParamName::RecoveryRate, "I", "R")?;

    model.request_output_for_flow("infection", "infection")?;
    for compartment in COMPARTMENTS {
        model.request_output_for_compartments(compartment, &[compartment])?;
    }

    info!(
        "Built SIR model with {} flows and {} outputs",
        model.flows().len(),
        model.outputs().len()
    );
    Ok(model)
}

/// Seeding starts on 1 February; R0 is `contact_rate / recovery_rate = 4`.
#[must_use]
pub fn default_parameters() -> Parameters {
    Parameters {
        seed_start: Epoch::new(REF_DATE).date_to_number(date!(2019 - 02 - 01)),
        seed_rate: 2.0,
        contact_rate: 0.4,
        recovery_rate: 0.1,
    }
}

impl Default for Parameters {
    fn default() -> Self {
        default_parameters()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FlowKind, OutputSource};
    use std::collections::HashSet;

    #[test]
    fn default_seeding_starts_on_day_31() {
        let parameters = Parameters::default();
        assert_eq!(parameters.seed_start, 31.0);
        assert_eq!(parameters.seed_rate, 2.0);
        assert_eq!(parameters.contact_rate, 0.4);
        assert_eq!(parameters.recovery_rate, 0.1);
    }

    #[test]
    fn model_declares_sir() {
        let model = build_model().unwrap();
        assert_eq!(model.times(), (0.0, 100.0));
        assert_eq!(model.compartments(), &["S", "I", "R"]);
        assert_eq!(model.infectious_compartments(), vec!["I"]);
        assert_eq!(model.initial_population(), &[1000.0, 0.0, 0.0]);
        assert_eq!(model.ref_date(), Some(REF_DATE));
    }

    #[test]
    fn model_declares_three_flows() {
        let model = build_model().unwrap();
        let names: HashSet<&str> = model.flows().iter().map(|flow| flow.name()).collect();
        assert_eq!(names, HashSet::from(["seed", "infection", "recovery"]));

        let seed = model.flow("seed").unwrap();
        assert_eq!(seed.kind(), FlowKind::Importation { split_imports: true });
        assert_eq!(seed.source(), None);
        assert_eq!(seed.dest(), 1);

        let infection = model.flow("infection").unwrap();
        assert_eq!(infection.kind(), FlowKind::InfectionFrequency);
        assert_eq!((infection.source(), infection.dest()), (Some(0), 1));

        let recovery = model.flow("recovery").unwrap();
        assert_eq!(recovery.kind(), FlowKind::Transition);
        assert_eq!((recovery.source(), recovery.dest()), (Some(1), 2));
    }

    #[test]
    fn model_requests_incidence_and_sizes() {
        let model = build_model().unwrap();
        let outputs: Vec<(&str, &OutputSource)> = model
            .outputs()
            .iter()
            .map(|output| (output.name(), output.source()))
            .collect();
        assert_eq!(
            outputs,
            vec![
                ("infection", &OutputSource::Flow(1)),
                ("S", &OutputSource::Compartments(vec![0])),
                ("I", &OutputSource::Compartments(vec![1])),
                ("R", &OutputSource::Compartments(vec![2])),
            ]
        );
    }

    #[test]
    fn seed_flow_follows_seed_parameters() {
        let model = build_model().unwrap();
        let seed = model.flow("seed").unwrap().rate();
        let parameters = Parameters::default();
        assert_eq!(seed.evaluate(30.0, &parameters).unwrap(), 0.0);
        for t in 31..=37 {
            assert_eq!(seed.evaluate(f64::from(t), &parameters).unwrap(), 2.0);
        }
        assert_eq!(seed.evaluate(38.0, &parameters).unwrap(), 0.0);
    }
}

use std::io::Write;

use assert_approx_eq::assert_approx_eq;
use learningmodel::data::load_infection_data;
use learningmodel::parameters::Parameters;
use learningmodel::sir::{build_model, REF_DATE};
use learningmodel::CompartmentalModel;

// Unit daily steps, enough to line the model up with daily data.
fn daily_trajectory(
    model: &CompartmentalModel,
    parameters: &Parameters,
) -> (Vec<f64>, Vec<Vec<f64>>) {
    let (start, end) = model.times();
    let mut times = vec![start];
    let mut trajectory = vec![model.initial_population().to_vec()];
    let mut t = start;
    while t < end {
        let state = trajectory.last().unwrap();
        let change = model.derivatives(t, state, parameters).unwrap();
        let next = state.iter().zip(&change).map(|(x, dx)| x + dx).collect();
        t += 1.0;
        times.push(t);
        trajectory.push(next);
    }
    (times, trajectory)
}

#[test]
fn nothing_happens_before_seeding() {
    let model = build_model().unwrap();
    let parameters = Parameters::default();
    let derivatives = model
        .derivatives(0.0, model.initial_population(), &parameters)
        .unwrap();
    assert_eq!(derivatives, vec![0.0, 0.0, 0.0]);
}

#[test]
fn seeding_adds_one_week_of_imports() {
    let model = build_model().unwrap();
    let parameters = Parameters::default();
    let (_, trajectory) = daily_trajectory(&model, &parameters);

    let total: f64 = trajectory.last().unwrap().iter().sum();
    assert_approx_eq!(total, 1000.0 + 7.0 * 2.0, 1e-9);
    assert!(trajectory.iter().flatten().all(|x| *x >= 0.0));
}

#[test]
fn incidence_tracks_the_bundled_data() {
    let model = build_model().unwrap();
    let parameters = Parameters::default();
    let (times, trajectory) = daily_trajectory(&model, &parameters);
    let outputs = model.derived_outputs(&times, &trajectory, &parameters).unwrap();
    let incidence = outputs
        .iter()
        .find(|output| output.name == "infection")
        .unwrap();

    let epoch = model.epoch().unwrap();
    assert_eq!(epoch.ref_date(), REF_DATE);
    let data = load_infection_data().unwrap();
    for (date, observed) in data.iter() {
        let day = epoch.date_to_number(date);
        let modelled = incidence.values[times.iter().position(|t| *t == day).unwrap()];
        assert!(
            (modelled - observed).abs() <= 0.5 + 1e-9,
            "{date}: modelled {modelled}, observed {observed}"
        );
    }
}

#[test]
fn compartment_outputs_are_compartment_sizes() {
    let model = build_model().unwrap();
    let parameters = Parameters::default();
    let (times, trajectory) = daily_trajectory(&model, &parameters);
    let outputs = model.derived_outputs(&times, &trajectory, &parameters).unwrap();

    for (position, name) in ["S", "I", "R"].iter().enumerate() {
        let output = outputs.iter().find(|output| output.name == *name).unwrap();
        let expected: Vec<f64> = trajectory.iter().map(|state| state[position]).collect();
        assert_eq!(output.values, expected);
    }
}

#[test]
fn parameters_from_file_move_the_seeding_window() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"seed_start": 10.0, "seed_rate": 5.0}}"#).unwrap();
    let parameters = Parameters::from_json_file(file.path()).unwrap();

    let model = build_model().unwrap();
    let seed = model.flow("seed").unwrap().rate();
    assert_eq!(seed.evaluate(9.0, &parameters).unwrap(), 0.0);
    assert_eq!(seed.evaluate(10.0, &parameters).unwrap(), 5.0);
    assert_eq!(seed.evaluate(16.5, &parameters).unwrap(), 5.0);
    assert_eq!(seed.evaluate(17.0, &parameters).unwrap(), 0.0);
}

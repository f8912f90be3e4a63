use crate::parameters::Value;
use crate::time_function::PiecewiseFunction;

/// Builds the importation rate for a seeding window: `rate` on `[start, start + duration)` and 0
/// elsewhere. A negative duration is treated as zero, which leaves the window empty.
#[must_use]
pub fn get_seed_function(
    start: impl Into<Value>,
    duration: f64,
    rate: impl Into<Value>,
) -> PiecewiseFunction {
    let start = start.into();
    let end = start.clone() + duration.max(0.0);
    PiecewiseFunction::new(vec![start, end], vec![0.0.into(), rate.into(), 0.0.into()])
        .expect("two breakpoints always take three levels")
}

use thiserror::Error;

/// Parameter validation failures, raised before any sampling starts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamError {
    #[error("time step must be finite and positive, got {0}")]
    NonPositiveStep(f64),

    #[error("time step {0} leaves no full step inside the unit horizon")]
    StepTooCoarse(f64),

    #[error("step count 1/{0} is not representable as a positive integer")]
    StepCountOverflow(f64),

    #[error("sample count must be positive")]
    ZeroSamples,
}

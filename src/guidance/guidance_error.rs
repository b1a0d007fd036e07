use strum_macros::Display;

#[derive(Debug, Display, Clone, Copy, PartialEq)]
pub enum GuidanceError {
    #[strum(to_string = "gain matrix must be 3x6, got {rows}x{cols}")]
    GainShape { rows: usize, cols: usize },
    #[strum(to_string = "gain matrix contains non-finite entries")]
    GainNotFinite,
    #[strum(to_string = "attitude bounds are inverted: min {min} > max {max}")]
    BoundsInverted { min: f64, max: f64 },
    #[strum(to_string = "attitude bound max must not be negative, got {max}")]
    NegativeMaxBound { max: f64 },
    #[strum(to_string = "neither attRefInMsg nor attStateInMsg is linked, no base attitude available")]
    NoBaseAttitude,
    #[strum(to_string = "hillStateInMsg is not linked")]
    HillStateNotLinked,
    #[strum(to_string = "hillStateInMsg was never written")]
    HillStateNotWritten,
    #[strum(to_string = "update requested before a successful reset")]
    NotReset,
}

impl std::error::Error for GuidanceError {}

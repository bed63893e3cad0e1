use std::fmt::{self, Display};

/// a utilization percentage, as reported by a metrics source.
///
/// the value is stored exactly as sampled. rounding only happens when it is displayed.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Percent(f64);

// === impl Percent ===

impl Percent {
    pub const ZERO: Self = Self(0.0);

    pub fn get(self) -> f64 {
        let Self(value) = self;
        value
    }
}

impl From<f64> for Percent {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Percent> for f64 {
    fn from(Percent(value): Percent) -> Self {
        value
    }
}

impl Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(value) = self;
        write!(f, "{value:.2}%")
    }
}

use core::fmt;

use thiserror::Error;

/// The dial quantity a computation was producing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    SubStyleDistance,
    StyleHeight,
    LongitudeDifference,
    AngleAv,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Quantity::SubStyleDistance => "sub-style distance",
            Quantity::StyleHeight => "style height",
            Quantity::LongitudeDifference => "longitude difference",
            Quantity::AngleAv => "angle AV",
        };
        f.write_str(name)
    }
}

/// Which part of a trigonometric identity has no finite value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Singularity {
    /// cot(x) with x a multiple of 180°.
    UndefinedCotangent,
    /// tan(x) with x an odd multiple of 90°.
    UndefinedTangent,
    /// 1 / x with x exactly zero.
    ZeroReciprocal,
    /// asin argument outside [-1, 1].
    ArcsineOutOfRange,
    /// NaN or infinite latitude/declination.
    NonFiniteInput,
}

impl fmt::Display for Singularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Singularity::UndefinedCotangent => "cotangent is undefined",
            Singularity::UndefinedTangent => "tangent is undefined",
            Singularity::ZeroReciprocal => "reciprocal of zero",
            Singularity::ArcsineOutOfRange => "arcsine argument outside [-1, 1]",
            Singularity::NonFiniteInput => "input is not finite",
        };
        f.write_str(text)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SundialError {
    #[error("{quantity} undefined for latitude {latitude}°, declination {declination}°: {singularity}")]
    Domain {
        quantity: Quantity,
        latitude: f64,
        declination: f64,
        singularity: Singularity,
    },
    #[error("Invalid hour-line configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl SundialError {
    pub fn domain(
        quantity: Quantity,
        latitude: f64,
        declination: f64,
        singularity: Singularity,
    ) -> Self {
        log::debug!(
            "{} degenerate at latitude={}, declination={}: {}",
            quantity,
            latitude,
            declination,
            singularity
        );
        SundialError::Domain {
            quantity,
            latitude,
            declination,
            singularity,
        }
    }

    pub fn invalid_config(reason: impl Into<String>) -> Self {
        SundialError::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// The degenerate identity, for domain errors.
    pub fn singularity(&self) -> Option<Singularity> {
        match self {
            SundialError::Domain { singularity, .. } => Some(*singularity),
            SundialError::InvalidConfig { .. } => None,
        }
    }
}

pub type SundialResult<T> = Result<T, SundialError>;

//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias.
//! Variants cover invalid configuration, invalid zones, malformed schematizations and geometry
//! failures while projecting zones onto the dike profile.
use thiserror::Error;

use crate::schematization::SlopeSide;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid {zone}: {reason}")]
    InvalidZone { zone: String, reason: String },

    #[error("invalid dike schematization: {0}")]
    InvalidSchematization(String),

    #[error("{zone}: {source}")]
    Geometry {
        zone: String,
        #[source]
        source: GeometryError,
    },

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}

/// Failures raised while interpolating on one side of the dike profile.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("no profile vertices on the {side} slope of crest x={crest}")]
    EmptySlope { side: SlopeSide, crest: f64 },

    #[error("elevations on the {side} slope are not monotonic at vertex {index}")]
    NonMonotonicSlope { side: SlopeSide, index: usize },

    #[error(
        "zone elevations [{z_min}, {z_max}] lie outside the {side} slope range [{lowest}, {highest}]"
    )]
    ZoneOutsideSlope {
        side: SlopeSide,
        z_min: f64,
        z_max: f64,
        lowest: f64,
        highest: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_string_uses_other_variant() {
        let err: Error = String::from("boom").into();
        matches!(err, Error::Other(_))
            .then_some(())
            .expect("expected Other variant");
    }

    #[test]
    fn from_str_allocates_owned_message() {
        let err: Error = "issue".into();
        assert!(matches!(err, Error::Other(ref msg) if msg == "issue"));
    }

    #[test]
    fn geometry_error_message_names_zone_and_side() {
        let err = Error::Geometry {
            zone: "vertical zone z=[2, 9]".into(),
            source: GeometryError::EmptySlope {
                side: SlopeSide::Outer,
                crest: 150.0,
            },
        };
        assert_eq!(
            err.to_string(),
            "vertical zone z=[2, 9]: no profile vertices on the outer slope of crest x=150"
        );
    }
}

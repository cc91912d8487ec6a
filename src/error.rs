// std-Variante: Fehler mit thiserror; ohne std ein manuelles Display
use alloc::string::String;
use crate::adapters::decimal::Decimal;
#[cfg(feature = "std")]
use thiserror::Error;

/// Caller-input errors raised at construction or build time.
///
/// Values outside the validated domain of a model are not errors; those
/// operations return `None` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Error))]
pub enum HydroError {
    #[cfg_attr(feature = "std", error("salinity can't be negative: {0} kg/kg"))]
    InvalidSalinity(Decimal),

    #[cfg_attr(feature = "std", error("no volume/mass pair is defined"))]
    EmptyBuilder,

    #[cfg_attr(feature = "std", error("a composite solid needs at least one constituent"))]
    NoConstituents,

    #[cfg_attr(
        feature = "std",
        error("shell material density must be positive: {0} kg/m^3")
    )]
    InvalidMaterialDensity(Decimal),

    #[cfg_attr(feature = "std", error("invalid decimal value '{0}'"))]
    InvalidNumber(String),
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for HydroError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidSalinity(s) => write!(f, "salinity can't be negative: {s} kg/kg"),
            Self::EmptyBuilder => f.write_str("no volume/mass pair is defined"),
            Self::NoConstituents => f.write_str("a composite solid needs at least one constituent"),
            Self::InvalidMaterialDensity(d) => {
                write!(f, "shell material density must be positive: {d} kg/m^3")
            }
            Self::InvalidNumber(v) => write!(f, "invalid decimal value '{v}'"),
        }
    }
}

#[cfg(feature = "std")]
#[derive(Error, Debug)]
pub enum AppError {
    #[cfg(feature = "cli")]
    #[error("Error reading from stdin: {source}")]
    ReadStdin {
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Error reading file '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON in scenario document: {source}")]
    ParseScenarioJson {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Could not serialize output to JSON: {source}")]
    SerializeOutput {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Missing input data: provide --piece or --input")]
    MissingInputData,

    #[cfg(feature = "cli")]
    #[error("Invalid piece '{value}': expected VOLUME:MASS")]
    InvalidPiece { value: String },

    #[error(transparent)]
    Hydro(#[from] HydroError),

    #[error("Unexpected error: {0}")]
    Other(String),
}

//! Error type definitions.
//!
//! One enum per failure domain. The policy boundaries are:
//! - extraction and scoring failures are collapsed to an `Error` verdict at
//!   the detector boundary, never raised to the caller;
//! - WHOIS failures on the classification path are absorbed into an absent
//!   domain-age field;
//! - artifact-loading failures are fatal at startup.

mod types;

pub use types::{
    ClassifyError, ExtractionError, InitializationError, ModelLoadError, ScoringError, WhoisError,
};

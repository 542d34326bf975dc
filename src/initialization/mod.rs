//! Application initialization.
//!
//! Logger setup lives here; model-artifact loading is in [`crate::model`]
//! and is invoked from [`crate::Detector::from_config`].

mod logger;

pub use logger::init_logger_with;

//! arehab-core
//!
//! Pure domain types for podiatric/postural assessments: the clinical record,
//! its enumerations, and the exercise catalog vocabulary. No I/O; this is the
//! shared vocabulary of the A-Rehab Med tools.

pub mod error;
pub mod models;

pub use error::CoreError;

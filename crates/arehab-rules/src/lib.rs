//! arehab-rules
//!
//! The assessment evaluator. Pure functions over a clinical record and an
//! immutable [`ExerciseCatalog`]: rule-based treatment suggestions and a
//! bounded, de-duplicated exercise plan.

pub mod catalog;
pub mod error;
mod keywords;
pub mod plan;
pub mod suggestions;

pub use catalog::ExerciseCatalog;
pub use plan::{select_exercise_plan, ExercisePlan, PlanMode, MAX_PLAN_LEN};
pub use suggestions::derive_suggestions;

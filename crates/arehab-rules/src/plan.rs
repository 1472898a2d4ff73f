use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use arehab_core::models::exercise::{Category, ExerciseCatalogEntry, PrescribedExercise, Tier};
use arehab_core::models::record::{ClinicalRecord, FootArch, FootStrike};

use crate::catalog::ExerciseCatalog;
use crate::keywords;

/// Upper bound on the number of exercises in a plan.
pub const MAX_PLAN_LEN: usize = 6;

/// Pain below this lets the patient start on the advanced tier.
const ADVANCED_PAIN_CEILING: u8 = 4;

/// Categories used when no clinical finding selects any.
const FALLBACK_CATEGORIES: [Category; 2] = [Category::Stability, Category::PronationPosteriorTibial];

/// How the plan's candidate exercises are chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PlanMode {
    /// Derive categories from the record's findings.
    #[default]
    Automatic,
    /// Use the practitioner's categories; an empty set means the whole catalog.
    ManualFilter(BTreeSet<Category>),
}

/// A bounded, de-duplicated selection of catalog exercises.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExercisePlan<'a> {
    pub exercises: Vec<&'a ExerciseCatalogEntry>,
    pub tier: Tier,
}

impl ExercisePlan<'_> {
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Owned copies of the selected exercises, ready for adjustment and export.
    pub fn prescribe(&self) -> Vec<PrescribedExercise> {
        self.exercises.iter().map(|e| PrescribedExercise::from(*e)).collect()
    }
}

/// Select an exercise plan for a record.
pub fn select_exercise_plan<'a>(
    record: &ClinicalRecord,
    catalog: &'a ExerciseCatalog,
    mode: &PlanMode,
) -> ExercisePlan<'a> {
    let (candidates, tier) = match mode {
        PlanMode::Automatic => (automatic_candidates(record, catalog), automatic_tier(record)),
        PlanMode::ManualFilter(categories) => {
            let candidates: Vec<_> = catalog
                .entries()
                .iter()
                .filter(|e| categories.is_empty() || categories.contains(&e.category))
                .collect();
            (candidates, Tier::Custom)
        }
    };

    let exercises = bound(candidates);
    tracing::debug!(count = exercises.len(), %tier, "exercise plan selected");
    ExercisePlan { exercises, tier }
}

fn automatic_candidates<'a>(
    record: &ClinicalRecord,
    catalog: &'a ExerciseCatalog,
) -> Vec<&'a ExerciseCatalogEntry> {
    let wanted = [
        (Category::Equinus, record.ankle_equinus_test.is_positive()),
        (
            Category::PronationPosteriorTibial,
            record.foot_strike == FootStrike::Pronated
                || record.posterior_tibial_test.is_positive()
                || record.foot_arch == FootArch::Flat,
        ),
        (
            Category::Stability,
            keywords::mentions_any(record.gait_deviations.as_deref(), keywords::INSTABILITY),
        ),
        (
            Category::HipCore,
            keywords::mentions_any(record.other_segments_note.as_deref(), keywords::HIP),
        ),
    ];

    let mut candidates: Vec<&ExerciseCatalogEntry> = wanted
        .into_iter()
        .filter(|(_, matched)| *matched)
        .flat_map(|(category, _)| catalog.in_category(category))
        .collect();

    if candidates.is_empty() {
        tracing::debug!("no finding selected a category, using default plan");
        candidates = catalog
            .entries()
            .iter()
            .filter(|e| FALLBACK_CATEGORIES.contains(&e.category))
            .collect();
    }

    candidates
}

fn automatic_tier(record: &ClinicalRecord) -> Tier {
    match record.pain_value() {
        Some(pain) if pain < ADVANCED_PAIN_CEILING => Tier::Advanced,
        _ => Tier::Basic,
    }
}

/// Drop repeated names (first occurrence wins) and cap at [`MAX_PLAN_LEN`].
fn bound(candidates: Vec<&ExerciseCatalogEntry>) -> Vec<&ExerciseCatalogEntry> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|e| seen.insert(e.name.as_str()))
        .take(MAX_PLAN_LEN)
        .collect()
}

use std::collections::HashSet;
use std::sync::LazyLock;

use arehab_core::models::exercise::{Category, ExerciseCatalogEntry};

use crate::error::RulesError;

/// Read-only set of exercises the plan selector draws from.
///
/// Entry order is significant: plans list exercises of a category in the
/// order they appear here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseCatalog {
    entries: Vec<ExerciseCatalogEntry>,
}

impl ExerciseCatalog {
    /// The built-in podiatric exercise library.
    pub fn standard() -> &'static ExerciseCatalog {
        static STANDARD: LazyLock<ExerciseCatalog> = LazyLock::new(|| ExerciseCatalog {
            entries: vec![
                entry(
                    Category::Equinus,
                    "Wall calf stretch",
                    "Heel down, knee straight, pelvis forward.",
                    "3x30-45s per side, 2-3 times a day",
                    "Longer holds, then knee bent",
                ),
                entry(
                    Category::Equinus,
                    "Lunge ankle mobility",
                    "Knee travels past the toes while the heel stays down.",
                    "3x12 per side, 1-2 times a day",
                    "More range, then add load",
                ),
                entry(
                    Category::PronationPosteriorTibial,
                    "Short foot",
                    "Actively lift the arch without curling the toes.",
                    "3x10 holds of 5s, daily",
                    "Longer holds, then standing",
                ),
                entry(
                    Category::PronationPosteriorTibial,
                    "Controlled heel raise",
                    "Slow rise and lower keeping the hindfoot aligned.",
                    "3x12, 3-4 times a week",
                    "Single leg, then on a step",
                ),
                entry(
                    Category::Stability,
                    "Single-leg balance",
                    "Fixed gaze, slight knee flexion.",
                    "3x30s per side, 5-6 times a week",
                    "Eyes closed or foam surface",
                ),
                entry(
                    Category::Metatarsalgia,
                    "Towel curl metatarsal offload",
                    "Curl a towel while keeping the foot neutral.",
                    "3x12, 4-5 times a week",
                    "Longer end-range isometric",
                ),
                entry(
                    Category::HipCore,
                    "Banded clamshell",
                    "Neutral hip, controlled opening.",
                    "3x15, 3-4 times a week",
                    "Stronger band",
                ),
            ],
        });
        &STANDARD
    }

    /// Build a catalog, rejecting duplicate exercise names.
    pub fn from_entries(entries: Vec<ExerciseCatalogEntry>) -> Result<Self, RulesError> {
        let mut seen = HashSet::new();
        for e in &entries {
            if !seen.insert(e.name.as_str()) {
                return Err(RulesError::DuplicateExercise(e.name.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Load a catalog from a JSON array of entries.
    pub fn from_json(json: &str) -> Result<Self, RulesError> {
        let entries: Vec<ExerciseCatalogEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    pub fn entries(&self) -> &[ExerciseCatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ExerciseCatalogEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &ExerciseCatalogEntry> {
        self.entries.iter().filter(move |e| e.category == category)
    }

    /// Distinct categories present in the catalog, sorted.
    pub fn categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = self.entries.iter().map(|e| e.category).collect();
        categories.sort();
        categories.dedup();
        categories
    }
}

fn entry(
    category: Category,
    name: &str,
    description: &str,
    dosage: &str,
    progression: &str,
) -> ExerciseCatalogEntry {
    ExerciseCatalogEntry {
        category,
        name: name.to_string(),
        description: description.to_string(),
        dosage: dosage.to_string(),
        progression: progression.to_string(),
        demo_url: None,
    }
}

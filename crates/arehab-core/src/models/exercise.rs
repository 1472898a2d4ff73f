use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Grouping tag on catalog exercises, used to select and filter entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Category {
    Equinus,
    PronationPosteriorTibial,
    Stability,
    Metatarsalgia,
    HipCore,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Self::Equinus,
        Self::PronationPosteriorTibial,
        Self::Stability,
        Self::Metatarsalgia,
        Self::HipCore,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Equinus => "equinus",
            Self::PronationPosteriorTibial => "pronation_posterior_tibial",
            Self::Stability => "stability",
            Self::Metatarsalgia => "metatarsalgia",
            Self::HipCore => "hip_core",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Equinus => "Equinus",
            Self::PronationPosteriorTibial => "Pronation/PosteriorTibial",
            Self::Stability => "Stability",
            Self::Metatarsalgia => "Metatarsalgia",
            Self::HipCore => "Hip/Core",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Accepts either the id (`hip_core`) or the label (`Hip/Core`), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.id().eq_ignore_ascii_case(wanted) || c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown exercise category: {wanted}"))
    }
}

/// One exercise in the catalog. Names are unique within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExerciseCatalogEntry {
    pub category: Category,
    pub name: String,
    pub description: String,
    pub dosage: String,
    pub progression: String,
    #[serde(default)]
    pub demo_url: Option<String>,
}

/// Difficulty level assigned to an exercise plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Tier {
    Basic,
    Advanced,
    /// The practitioner picked categories by hand.
    Custom,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Basic => "Basic",
            Self::Advanced => "Advanced",
            Self::Custom => "Custom",
        })
    }
}

/// An exercise as it will be printed on the patient's sheet.
///
/// Starts as a copy of the catalog entry; dosage, progression and demo link
/// may be adjusted by the practitioner before export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PrescribedExercise {
    pub name: String,
    pub category: Category,
    pub description: String,
    pub dosage: String,
    pub progression: String,
    #[serde(default)]
    pub demo_url: Option<String>,
}

impl From<&ExerciseCatalogEntry> for PrescribedExercise {
    fn from(entry: &ExerciseCatalogEntry) -> Self {
        Self {
            name: entry.name.clone(),
            category: entry.category,
            description: entry.description.clone(),
            dosage: entry.dosage.clone(),
            progression: entry.progression.clone(),
            demo_url: entry.demo_url.clone(),
        }
    }
}

/// Practitioner adjustments to a prescribed exercise, matched by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ExerciseAdjustment {
    pub name: String,
    pub dosage: Option<String>,
    pub progression: Option<String>,
    pub demo_url: Option<String>,
}

impl PrescribedExercise {
    pub fn adjust(&mut self, adjustment: &ExerciseAdjustment) {
        if let Some(dosage) = &adjustment.dosage {
            self.dosage.clone_from(dosage);
        }
        if let Some(progression) = &adjustment.progression {
            self.progression.clone_from(progression);
        }
        if adjustment.demo_url.is_some() {
            self.demo_url.clone_from(&adjustment.demo_url);
        }
    }
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::patient::Patient;
use crate::error::CoreError;

/// Patient-reported pain on the visual analog scale, always within 0–10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "i64", into = "u8")]
#[ts(export)]
pub struct PainScore(u8);

impl PainScore {
    pub const MAX: u8 = 10;

    pub fn new(value: i64) -> Result<Self, CoreError> {
        if (0..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(CoreError::PainScoreOutOfRange { value })
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for PainScore {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PainScore> for u8 {
    fn from(score: PainScore) -> Self {
        score.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FootArch {
    Flat,
    Cavus,
    Normal,
    #[default]
    Unset,
}

impl FootArch {
    pub fn label(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Cavus => "cavus",
            Self::Normal => "normal",
            Self::Unset => "",
        }
    }
}

/// How the foot loads during stance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FootStrike {
    Pronated,
    Supinated,
    Neutral,
    #[default]
    Unset,
}

impl FootStrike {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pronated => "pronated",
            Self::Supinated => "supinated",
            Self::Neutral => "neutral",
            Self::Unset => "",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Hindfoot {
    Valgus,
    Varus,
    Neutral,
    #[default]
    Unset,
}

impl Hindfoot {
    pub fn label(self) -> &'static str {
        match self {
            Self::Valgus => "valgus",
            Self::Varus => "varus",
            Self::Neutral => "neutral",
            Self::Unset => "",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Forefoot {
    Adducted,
    Abducted,
    Neutral,
    #[default]
    Unset,
}

impl Forefoot {
    pub fn label(self) -> &'static str {
        match self {
            Self::Adducted => "adducted",
            Self::Abducted => "abducted",
            Self::Neutral => "neutral",
            Self::Unset => "",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum HalluxValgus {
    No,
    Mild,
    Moderate,
    Severe,
    #[default]
    Unset,
}

impl HalluxValgus {
    pub fn label(self) -> &'static str {
        match self {
            Self::No => "no",
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
            Self::Unset => "",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TestResult {
    Positive,
    Negative,
    #[default]
    Unset,
}

impl TestResult {
    pub fn is_positive(self) -> bool {
        self == Self::Positive
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Unset => "",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ArchFlexibility {
    Good,
    Reduced,
    Rigid,
    #[default]
    Unset,
}

impl ArchFlexibility {
    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Reduced => "reduced",
            Self::Rigid => "rigid",
            Self::Unset => "",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Onset {
    Acute,
    Chronic,
    Recurrent,
    #[default]
    Unset,
}

impl Onset {
    pub fn label(self) -> &'static str {
        match self {
            Self::Acute => "acute",
            Self::Chronic => "chronic",
            Self::Recurrent => "recurrent",
            Self::Unset => "",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Side {
    Right,
    Left,
    Bilateral,
    #[default]
    Unset,
}

impl Side {
    pub fn label(self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Left => "left",
            Self::Bilateral => "bilateral",
            Self::Unset => "",
        }
    }
}

/// Tri-state answer for yes/no findings such as limb-length discrepancy.
///
/// Deserializes from its ids or, failing that, from a free-text answer via
/// [`Affirmation::from_free_text`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Affirmation {
    Yes,
    No,
    #[default]
    Unset,
}

impl Affirmation {
    const AFFIRMATIVE: [&'static str; 5] = ["yes", "y", "sì", "si", "true"];
    const NEGATIVE: [&'static str; 3] = ["no", "n", "false"];

    /// Translate a free-text answer ("sì, 5 mm", "No") into a tri-state.
    ///
    /// Matches on the first word, case-insensitively. Anything that is neither
    /// affirmative nor negative is `Unset`.
    pub fn from_free_text(text: &str) -> Self {
        let lowered = text.trim().to_lowercase();
        let first_word = lowered
            .split(|c: char| !c.is_alphanumeric())
            .next()
            .unwrap_or_default();

        if Self::AFFIRMATIVE.contains(&first_word) {
            Self::Yes
        } else if Self::NEGATIVE.contains(&first_word) {
            Self::No
        } else {
            Self::Unset
        }
    }

    /// Parse an id (`yes`/`no`/`unset`) or fall back to a free-text answer.
    pub fn parse(text: &str) -> Self {
        match text.trim() {
            "yes" => Self::Yes,
            "no" => Self::No,
            "" | "unset" => Self::Unset,
            other => Self::from_free_text(other),
        }
    }

    pub fn is_yes(self) -> bool {
        self == Self::Yes
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Unset => "",
        }
    }
}

impl<'de> Deserialize<'de> for Affirmation {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = Option::<String>::deserialize(deserializer)?;
        Ok(text.as_deref().map(Self::parse).unwrap_or_default())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MedicalHistory {
    pub conditions: Option<String>,
    pub surgeries_and_trauma: Option<String>,
    pub medications: Option<String>,
    pub allergies: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Baropodometry {
    pub static_load: Option<String>,
    pub dynamic: Option<String>,
    pub peak_pressures: Option<String>,
}

/// Practitioner's conclusions and free-form treatment plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TreatmentPlan {
    pub diagnosis: Option<String>,
    pub goals: Option<String>,
    pub orthotics: Option<String>,
    pub exercise_notes: Option<String>,
    pub footwear: Option<String>,
    pub education: Option<String>,
    #[serde(default = "default_follow_up_weeks")]
    pub follow_up_weeks: u8,
}

pub const DEFAULT_FOLLOW_UP_WEEKS: u8 = 6;

fn default_follow_up_weeks() -> u8 {
    DEFAULT_FOLLOW_UP_WEEKS
}

impl Default for TreatmentPlan {
    fn default() -> Self {
        Self {
            diagnosis: None,
            goals: None,
            orthotics: None,
            exercise_notes: None,
            footwear: None,
            education: None,
            follow_up_weeks: DEFAULT_FOLLOW_UP_WEEKS,
        }
    }
}

/// A single podiatric/postural assessment as entered by the practitioner.
///
/// Every finding is optional. Enumerated findings default to `Unset`, free
/// text to `None`. The only invariant is the pain score range, enforced by
/// [`PainScore`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ClinicalRecord {
    pub assessed_on: Option<jiff::civil::Date>,
    pub patient: Patient,

    // Reason for visit
    pub visit_reasons: Vec<String>,
    pub pain_score: Option<PainScore>,
    pub onset: Onset,
    pub side: Side,

    pub history: MedicalHistory,

    // Static examination
    pub foot_strike: FootStrike,
    pub hindfoot: Hindfoot,
    pub forefoot: Forefoot,
    pub foot_arch: FootArch,
    pub limb_length_discrepancy: Affirmation,
    pub hallux_valgus: HalluxValgus,
    pub hammer_toes: Affirmation,

    // Gait
    pub cadence: Option<String>,
    pub step_length: Option<String>,
    pub gait_deviations: Option<String>,

    pub baropodometry: Baropodometry,

    // Clinical tests
    pub ankle_equinus_test: TestResult,
    pub posterior_tibial_test: TestResult,
    pub arch_flexibility: ArchFlexibility,
    pub ankle_rom: Option<String>,
    pub test_notes: Option<String>,

    // Global posture
    pub posture: Option<String>,
    pub other_segments_note: Option<String>,

    pub treatment: TreatmentPlan,
}

impl ClinicalRecord {
    /// Parse a record from JSON, reporting an out-of-range pain score as
    /// [`CoreError::PainScoreOutOfRange`] rather than a generic parse error.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if let Some(score) = value.get("pain_score").and_then(|v| v.as_i64()) {
            PainScore::new(score)?;
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Set the pain score, rejecting values outside 0–10.
    pub fn with_pain_score(mut self, value: i64) -> Result<Self, CoreError> {
        self.pain_score = Some(PainScore::new(value)?);
        Ok(self)
    }

    pub fn pain_value(&self) -> Option<u8> {
        self.pain_score.map(PainScore::value)
    }
}

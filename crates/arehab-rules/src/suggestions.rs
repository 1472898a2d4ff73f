use arehab_core::models::record::{ClinicalRecord, FootArch, FootStrike, Hindfoot};

use crate::keywords;

/// Pain score at or above which a valgus hindfoot warrants a medial wedge.
const WEDGE_PAIN_THRESHOLD: u8 = 5;

/// A fixed suggestion emitted whenever its predicate holds.
pub struct SuggestionRule {
    pub id: &'static str,
    pub text: &'static str,
    pub applies: fn(&ClinicalRecord) -> bool,
}

/// All suggestion rules, in document order. Rules are independent: every
/// rule is checked against every record.
pub static RULES: [SuggestionRule; 7] = [
    SuggestionRule {
        id: "medial_support_orthotic",
        text: "Consider orthotics with medial support and pronation control.",
        applies: |r| r.foot_strike == FootStrike::Pronated || r.foot_arch == FootArch::Flat,
    },
    SuggestionRule {
        id: "cushioning_orthotic",
        text: "Consider cushioning orthotics with metatarsal head offload.",
        applies: |r| r.foot_strike == FootStrike::Supinated || r.foot_arch == FootArch::Cavus,
    },
    SuggestionRule {
        id: "medial_wedge",
        text: "Add a medial hindfoot wedge to reduce valgus.",
        applies: |r| {
            r.hindfoot == Hindfoot::Valgus
                && r.pain_value().is_some_and(|p| p >= WEDGE_PAIN_THRESHOLD)
        },
    },
    SuggestionRule {
        id: "heel_lift",
        text: "Consider a contralateral heel lift (3-5 mm progression).",
        applies: |r| r.limb_length_discrepancy.is_yes(),
    },
    SuggestionRule {
        id: "calf_stretch",
        text: "Calf (triceps surae) stretching + ankle mobility.",
        applies: |r| r.ankle_equinus_test.is_positive(),
    },
    SuggestionRule {
        id: "posterior_tibial",
        text: "Posterior tibial strengthening and pronation control.",
        applies: |r| r.posterior_tibial_test.is_positive(),
    },
    SuggestionRule {
        id: "rotational_control",
        text: "Rotational control and lateral chain work.",
        applies: |r| keywords::mentions_any(r.gait_deviations.as_deref(), keywords::INTERNAL_ROTATION),
    },
];

/// Derive the clinical suggestions for a record, in rule order.
pub fn derive_suggestions(record: &ClinicalRecord) -> Vec<String> {
    RULES
        .iter()
        .filter(|rule| (rule.applies)(record))
        .map(|rule| rule.text.to_string())
        .collect()
}

/// Ids of the rules that fired, in rule order.
pub fn matched_rule_ids(record: &ClinicalRecord) -> Vec<&'static str> {
    RULES
        .iter()
        .filter(|rule| (rule.applies)(record))
        .map(|rule| rule.id)
        .collect()
}

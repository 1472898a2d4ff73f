use arehab_core::models::record::{
    Affirmation, ClinicalRecord, FootArch, FootStrike, Hindfoot, TestResult,
};
use arehab_rules::derive_suggestions;
use arehab_rules::suggestions::{matched_rule_ids, RULES};

fn record_with_pain(pain: i64) -> ClinicalRecord {
    ClinicalRecord::default().with_pain_score(pain).unwrap()
}

#[test]
fn unset_record_has_no_suggestions() {
    assert!(derive_suggestions(&record_with_pain(0)).is_empty());
    assert!(derive_suggestions(&ClinicalRecord::default()).is_empty());
}

#[test]
fn equinus_positive_suggests_calf_stretch() {
    let mut record = record_with_pain(7);
    record.ankle_equinus_test = TestResult::Positive;

    assert_eq!(matched_rule_ids(&record), vec!["calf_stretch"]);
    let suggestions = derive_suggestions(&record);
    assert_eq!(suggestions.len(), 1);
    assert!(suggestions[0].contains("Calf"));
    assert!(suggestions[0].contains("ankle mobility"));
}

#[test]
fn pronated_valgus_with_pain_suggests_orthotic_and_wedge() {
    let mut record = record_with_pain(6);
    record.foot_strike = FootStrike::Pronated;
    record.hindfoot = Hindfoot::Valgus;

    assert_eq!(
        matched_rule_ids(&record),
        vec!["medial_support_orthotic", "medial_wedge"]
    );
    let suggestions = derive_suggestions(&record);
    assert!(suggestions[0].contains("medial support"));
    assert!(suggestions[1].contains("medial hindfoot wedge"));
}

#[test]
fn wedge_needs_pain_of_at_least_five() {
    let mut record = record_with_pain(4);
    record.hindfoot = Hindfoot::Valgus;
    assert!(derive_suggestions(&record).is_empty());

    record.pain_score = None;
    assert!(derive_suggestions(&record).is_empty());

    let mut record = record_with_pain(5);
    record.hindfoot = Hindfoot::Valgus;
    assert_eq!(matched_rule_ids(&record), vec!["medial_wedge"]);
}

#[test]
fn flat_arch_and_cavus_rules_are_independent() {
    let mut record = ClinicalRecord::default();
    record.foot_arch = FootArch::Flat;
    record.foot_strike = FootStrike::Supinated;

    assert_eq!(
        matched_rule_ids(&record),
        vec!["medial_support_orthotic", "cushioning_orthotic"]
    );

    record.foot_arch = FootArch::Cavus;
    record.foot_strike = FootStrike::Unset;
    assert_eq!(matched_rule_ids(&record), vec!["cushioning_orthotic"]);
}

#[test]
fn limb_length_discrepancy_needs_yes() {
    let mut record = ClinicalRecord::default();
    record.limb_length_discrepancy = Affirmation::No;
    assert!(derive_suggestions(&record).is_empty());

    record.limb_length_discrepancy = Affirmation::from_free_text("Sì, 4 mm a destra");
    assert_eq!(matched_rule_ids(&record), vec!["heel_lift"]);
    assert!(derive_suggestions(&record)[0].contains("3-5 mm"));
}

#[test]
fn internal_rotation_matched_case_insensitively() {
    let mut record = ClinicalRecord::default();
    record.gait_deviations = Some("Marked INTERNAL Rotation of the left knee".to_string());
    assert_eq!(matched_rule_ids(&record), vec!["rotational_control"]);

    record.gait_deviations = Some("Intrarotazione ginocchio dx".to_string());
    assert_eq!(matched_rule_ids(&record), vec!["rotational_control"]);

    record.gait_deviations = Some("external rotation".to_string());
    assert!(derive_suggestions(&record).is_empty());
}

#[test]
fn every_rule_fires_in_declared_order() {
    let mut record = record_with_pain(8);
    record.foot_strike = FootStrike::Pronated;
    record.foot_arch = FootArch::Cavus;
    record.hindfoot = Hindfoot::Valgus;
    record.limb_length_discrepancy = Affirmation::Yes;
    record.ankle_equinus_test = TestResult::Positive;
    record.posterior_tibial_test = TestResult::Positive;
    record.gait_deviations = Some("internal rotation".to_string());

    let expected: Vec<String> = RULES.iter().map(|r| r.text.to_string()).collect();
    assert_eq!(derive_suggestions(&record), expected);
}

#[test]
fn suggestions_are_deterministic() {
    let mut record = record_with_pain(6);
    record.foot_strike = FootStrike::Pronated;
    record.posterior_tibial_test = TestResult::Positive;

    assert_eq!(derive_suggestions(&record), derive_suggestions(&record));
}

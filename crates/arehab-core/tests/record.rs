use arehab_core::CoreError;
use arehab_core::models::exercise::{Category, ExerciseAdjustment, ExerciseCatalogEntry, PrescribedExercise};
use arehab_core::models::record::{
    Affirmation, ClinicalRecord, FootStrike, PainScore, TestResult, DEFAULT_FOLLOW_UP_WEEKS,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn pain_score_accepts_zero_to_ten(value in 0i64..=10) {
        let score = PainScore::new(value).unwrap();
        prop_assert_eq!(i64::from(score.value()), value);
    }

    #[test]
    fn pain_score_rejects_everything_else(value in prop_oneof![i64::MIN..0i64, 11i64..=i64::MAX]) {
        let err = PainScore::new(value).unwrap_err();
        prop_assert!(
            matches!(err, CoreError::PainScoreOutOfRange { value: v } if v == value),
            "unexpected error: {err:?}"
        );
    }
}

#[test]
fn with_pain_score_rejects_out_of_range() {
    assert!(ClinicalRecord::default().with_pain_score(11).is_err());
    assert!(ClinicalRecord::default().with_pain_score(-1).is_err());

    let record = ClinicalRecord::default().with_pain_score(10).unwrap();
    assert_eq!(record.pain_value(), Some(10));
}

#[test]
fn from_json_reports_out_of_range_pain_score() {
    let err = ClinicalRecord::from_json(r#"{ "pain_score": 12 }"#).unwrap_err();
    assert!(matches!(err, CoreError::PainScoreOutOfRange { value: 12 }));
}

#[test]
fn deserialising_out_of_range_pain_score_fails() {
    let result: Result<ClinicalRecord, _> = serde_json::from_str(r#"{ "pain_score": 42 }"#);
    assert!(result.is_err());
}

#[test]
fn from_json_fills_unset_defaults() {
    let record = ClinicalRecord::from_json(
        r#"{
            "patient": { "first_name": "Anna", "last_name": "Rossi" },
            "pain_score": 3,
            "foot_strike": "pronated",
            "ankle_equinus_test": "positive"
        }"#,
    )
    .unwrap();

    assert_eq!(record.patient.full_name(), "Anna Rossi");
    assert_eq!(record.pain_value(), Some(3));
    assert_eq!(record.foot_strike, FootStrike::Pronated);
    assert_eq!(record.ankle_equinus_test, TestResult::Positive);
    assert_eq!(record.posterior_tibial_test, TestResult::Unset);
    assert_eq!(record.limb_length_discrepancy, Affirmation::Unset);
    assert_eq!(record.gait_deviations, None);
    assert_eq!(record.treatment.follow_up_weeks, DEFAULT_FOLLOW_UP_WEEKS);
}

#[test]
fn pain_score_serialises_as_plain_number() {
    let record = ClinicalRecord::default().with_pain_score(7).unwrap();
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["pain_score"], 7);
}

#[test]
fn affirmation_from_free_text() {
    assert_eq!(Affirmation::from_free_text("sì (5 mm)"), Affirmation::Yes);
    assert_eq!(Affirmation::from_free_text("Si, destra"), Affirmation::Yes);
    assert_eq!(Affirmation::from_free_text("YES"), Affirmation::Yes);
    assert_eq!(Affirmation::from_free_text("  no"), Affirmation::No);
    assert_eq!(Affirmation::from_free_text(""), Affirmation::Unset);
    assert_eq!(Affirmation::from_free_text("5 mm"), Affirmation::Unset);
    assert_eq!(Affirmation::from_free_text("sinistra"), Affirmation::Unset);
}

#[test]
fn from_json_accepts_free_text_affirmations() {
    let record = ClinicalRecord::from_json(
        r#"{"limb_length_discrepancy": "sì, 4 mm", "hammer_toes": "Yes"}"#,
    )
    .unwrap();
    assert_eq!(record.limb_length_discrepancy, Affirmation::Yes);
    assert_eq!(record.hammer_toes, Affirmation::Yes);

    let record = ClinicalRecord::from_json(
        r#"{"limb_length_discrepancy": "no", "hammer_toes": "not checked"}"#,
    )
    .unwrap();
    assert_eq!(record.limb_length_discrepancy, Affirmation::No);
    assert_eq!(record.hammer_toes, Affirmation::Unset);

    let record = ClinicalRecord::from_json(r#"{"hammer_toes": null}"#).unwrap();
    assert_eq!(record.hammer_toes, Affirmation::Unset);
}

#[test]
fn category_parses_id_and_label() {
    assert_eq!("hip_core".parse::<Category>().unwrap(), Category::HipCore);
    assert_eq!("Hip/Core".parse::<Category>().unwrap(), Category::HipCore);
    assert_eq!(
        "pronation/posteriortibial".parse::<Category>().unwrap(),
        Category::PronationPosteriorTibial
    );
    assert!("knee".parse::<Category>().is_err());
}

#[test]
fn adjustment_overrides_only_given_fields() {
    let entry = ExerciseCatalogEntry {
        category: Category::Stability,
        name: "Single-leg balance".to_string(),
        description: "Fixed gaze.".to_string(),
        dosage: "3x30s".to_string(),
        progression: "Eyes closed".to_string(),
        demo_url: None,
    };
    let mut prescribed = PrescribedExercise::from(&entry);
    prescribed.adjust(&ExerciseAdjustment {
        name: entry.name.clone(),
        dosage: Some("2x20s".to_string()),
        progression: None,
        demo_url: Some("https://example.org/balance".to_string()),
    });

    assert_eq!(prescribed.dosage, "2x20s");
    assert_eq!(prescribed.progression, "Eyes closed");
    assert_eq!(prescribed.demo_url.as_deref(), Some("https://example.org/balance"));
}

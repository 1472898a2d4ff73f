use std::collections::HashSet;

use arehab_core::models::exercise::{Category, ExerciseCatalogEntry};
use arehab_rules::error::RulesError;
use arehab_rules::ExerciseCatalog;

fn exercise(category: Category, name: &str) -> ExerciseCatalogEntry {
    ExerciseCatalogEntry {
        category,
        name: name.to_string(),
        description: String::new(),
        dosage: "3x10".to_string(),
        progression: String::new(),
        demo_url: None,
    }
}

#[test]
fn standard_catalog_has_unique_names() {
    let catalog = ExerciseCatalog::standard();
    let names: HashSet<_> = catalog.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names.len(), catalog.len());
    assert_eq!(catalog.len(), 7);
}

#[test]
fn standard_catalog_covers_every_category() {
    assert_eq!(ExerciseCatalog::standard().categories(), Category::ALL.to_vec());
}

#[test]
fn duplicate_names_are_rejected() {
    let result = ExerciseCatalog::from_entries(vec![
        exercise(Category::Stability, "Balance"),
        exercise(Category::HipCore, "Balance"),
    ]);
    assert!(matches!(result, Err(RulesError::DuplicateExercise(name)) if name == "Balance"));
}

#[test]
fn catalog_loads_from_json() {
    let catalog = ExerciseCatalog::from_json(
        r#"[
            {
                "category": "hip_core",
                "name": "Side plank",
                "description": "Elbow under shoulder.",
                "dosage": "3x20s",
                "progression": "Lift top leg",
                "demo_url": "https://example.org/side-plank"
            },
            {
                "category": "stability",
                "name": "Tandem stance",
                "description": "Heel to toe.",
                "dosage": "3x30s",
                "progression": "Eyes closed"
            }
        ]"#,
    )
    .unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.categories(), vec![Category::Stability, Category::HipCore]);
    assert_eq!(
        catalog.get("Side plank").and_then(|e| e.demo_url.as_deref()),
        Some("https://example.org/side-plank")
    );
    assert!(catalog.get("Tandem stance").unwrap().demo_url.is_none());
}

#[test]
fn malformed_json_is_a_catalog_error() {
    let result = ExerciseCatalog::from_json(r#"[{ "category": "knee", "name": "Squat" }]"#);
    assert!(matches!(result, Err(RulesError::Catalog(_))));
}

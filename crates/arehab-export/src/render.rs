use serde::Serialize;
use tera::{Context, Tera};

use arehab_core::models::exercise::{PrescribedExercise, Tier};
use arehab_core::models::patient::Patient;
use arehab_core::models::record::ClinicalRecord;

use crate::error::ExportError;
use crate::styles::Letterhead;
use crate::templates;

/// Render a Tera template against any serialisable context.
///
/// The `template_content` is the raw template string (Jinja2 syntax). Template
/// names without an `.html`/`.xml` suffix are rendered without autoescaping.
pub fn render_template<T: Serialize>(
    template_name: &str,
    template_content: &str,
    context: &T,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(context)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

/// Render the clinical record, with its automatic suggestions, as Markdown.
pub fn render_clinical_record(
    record: &ClinicalRecord,
    suggestions: &[String],
    letterhead: &Letterhead,
) -> Result<String, ExportError> {
    let view = ClinicalRecordView::new(record, suggestions, letterhead);
    render_template(
        templates::CLINICAL_RECORD_NAME,
        templates::CLINICAL_RECORD,
        &view,
    )
}

/// Everything printed on a patient's exercise sheet.
#[derive(Debug, Clone)]
pub struct ExerciseSheet<'a> {
    pub patient: &'a Patient,
    pub exercises: &'a [PrescribedExercise],
    pub tier: Tier,
    pub notes: Option<&'a str>,
    /// Link to open the sheet on a phone.
    pub share_link: Option<&'a str>,
}

/// Render the exercise sheet as Markdown.
pub fn render_exercise_sheet(
    sheet: &ExerciseSheet<'_>,
    letterhead: &Letterhead,
) -> Result<String, ExportError> {
    let view = ExerciseSheetView {
        letterhead,
        patient_name: inline(&sheet.patient.full_name()),
        tier: sheet.tier.to_string(),
        exercises: sheet
            .exercises
            .iter()
            .enumerate()
            .map(|(i, e)| ExerciseRow {
                number: i + 1,
                name: cell(&e.name),
                category: e.category.label(),
                description: inline(&e.description),
                dosage: cell(&e.dosage),
                progression: cell(&e.progression),
                link: e.demo_url.as_deref().map(cell).unwrap_or_default(),
            })
            .collect(),
        notes: sheet.notes.map(standalone).unwrap_or_default(),
        share_link: sheet.share_link.map(standalone).unwrap_or_default(),
    };
    render_template(
        templates::EXERCISE_SHEET_NAME,
        templates::EXERCISE_SHEET,
        &view,
    )
}

#[derive(Serialize)]
struct ExerciseSheetView<'a> {
    letterhead: &'a Letterhead,
    patient_name: String,
    tier: String,
    exercises: Vec<ExerciseRow>,
    notes: String,
    share_link: String,
}

#[derive(Serialize)]
struct ExerciseRow {
    number: usize,
    name: String,
    category: &'static str,
    description: String,
    dosage: String,
    progression: String,
    link: String,
}

#[derive(Serialize)]
struct ClinicalRecordView<'a> {
    letterhead: &'a Letterhead,
    suggestions: Vec<String>,
    assessed_on: String,
    patient: Vec<(&'static str, String)>,

    visit_reasons: String,
    pain: String,
    onset: &'static str,
    side: &'static str,

    conditions: String,
    surgeries_and_trauma: String,
    medications: String,
    allergies: String,

    foot_strike: &'static str,
    hindfoot: &'static str,
    forefoot: &'static str,
    foot_arch: &'static str,
    limb_length_discrepancy: &'static str,
    hallux_valgus: &'static str,
    hammer_toes: &'static str,

    cadence: String,
    step_length: String,
    gait_deviations: String,

    static_load: String,
    dynamic_load: String,
    peak_pressures: String,

    ankle_equinus_test: &'static str,
    posterior_tibial_test: &'static str,
    arch_flexibility: &'static str,
    ankle_rom: String,
    test_notes: String,

    posture: String,
    other_segments_note: String,

    diagnosis: String,
    goals: String,
    orthotics: String,
    exercise_notes: String,
    footwear: String,
    education: String,
    follow_up_weeks: u8,
}

impl<'a> ClinicalRecordView<'a> {
    fn new(record: &ClinicalRecord, suggestions: &[String], letterhead: &'a Letterhead) -> Self {
        let p = &record.patient;
        let assessed_on = record
            .assessed_on
            .unwrap_or_else(|| jiff::Zoned::now().date());

        Self {
            letterhead,
            suggestions: suggestions.iter().map(|s| inline(s)).collect(),
            assessed_on: assessed_on.to_string(),
            patient: vec![
                ("Date", assessed_on.to_string()),
                ("Patient", cell(&p.full_name())),
                (
                    "Date of birth",
                    p.date_of_birth.map(|d| d.to_string()).unwrap_or_default(),
                ),
                ("Sex", opt_cell(&p.sex)),
                ("Phone", opt_cell(&p.phone)),
                ("Email", opt_cell(&p.email)),
                ("Sport", opt_cell(&p.sport)),
                ("Profession", opt_cell(&p.profession)),
            ],

            visit_reasons: inline(&record.visit_reasons.join(", ")),
            pain: record
                .pain_value()
                .map(|v| v.to_string())
                .unwrap_or_default(),
            onset: record.onset.label(),
            side: record.side.label(),

            conditions: opt_inline(&record.history.conditions),
            surgeries_and_trauma: opt_inline(&record.history.surgeries_and_trauma),
            medications: opt_inline(&record.history.medications),
            allergies: opt_inline(&record.history.allergies),

            foot_strike: record.foot_strike.label(),
            hindfoot: record.hindfoot.label(),
            forefoot: record.forefoot.label(),
            foot_arch: record.foot_arch.label(),
            limb_length_discrepancy: record.limb_length_discrepancy.label(),
            hallux_valgus: record.hallux_valgus.label(),
            hammer_toes: record.hammer_toes.label(),

            cadence: opt_inline(&record.cadence),
            step_length: opt_inline(&record.step_length),
            gait_deviations: opt_inline(&record.gait_deviations),

            static_load: opt_inline(&record.baropodometry.static_load),
            dynamic_load: opt_inline(&record.baropodometry.dynamic),
            peak_pressures: opt_inline(&record.baropodometry.peak_pressures),

            ankle_equinus_test: record.ankle_equinus_test.label(),
            posterior_tibial_test: record.posterior_tibial_test.label(),
            arch_flexibility: record.arch_flexibility.label(),
            ankle_rom: opt_inline(&record.ankle_rom),
            test_notes: opt_inline(&record.test_notes),

            posture: record.posture.as_deref().map(standalone).unwrap_or_default(),
            other_segments_note: opt_inline(&record.other_segments_note),

            diagnosis: opt_inline(&record.treatment.diagnosis),
            goals: opt_inline(&record.treatment.goals),
            orthotics: opt_inline(&record.treatment.orthotics),
            exercise_notes: opt_inline(&record.treatment.exercise_notes),
            footwear: opt_inline(&record.treatment.footwear),
            education: opt_inline(&record.treatment.education),
            follow_up_weeks: record.treatment.follow_up_weeks,
        }
    }
}

/// Collapse free text onto one line.
fn inline(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Like [`inline`], for text rendered at the start of a line: a leading
/// markup character is escaped so it stays body text.
fn standalone(text: &str) -> String {
    let line = inline(text);
    if line.starts_with(['#', '-', '|', '*', '\\']) {
        format!("\\{line}")
    } else {
        line
    }
}

fn opt_inline(text: &Option<String>) -> String {
    text.as_deref().map(inline).unwrap_or_default()
}

/// Like [`inline`], but also safe inside a `| ... |` table cell.
fn cell(text: &str) -> String {
    inline(text).replace('|', "/")
}

fn opt_cell(text: &Option<String>) -> String {
    text.as_deref().map(cell).unwrap_or_default()
}

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use arehab_core::models::exercise::{Category, ExerciseAdjustment, PrescribedExercise};
use arehab_core::models::record::ClinicalRecord;
use arehab_core::CoreError;
use arehab_export::documents::{clinical_record_docx, exercise_sheet_docx};
use arehab_export::naming::{clinical_record_filename, exercise_sheet_filename};
use arehab_export::render::ExerciseSheet;
use arehab_export::share::{mailto_link, whatsapp_link, ShareMessage};
use arehab_rules::{derive_suggestions, select_exercise_plan, ExerciseCatalog, ExercisePlan, PlanMode};
use lettre::Message;

use crate::config::ArehabConfig;
use crate::mail::{self, OutgoingMail, SmtpSettings};

/// The configured catalog, or the built-in one.
pub fn load_catalog(path: Option<&Path>) -> eyre::Result<Cow<'static, ExerciseCatalog>> {
    let Some(path) = path else {
        return Ok(Cow::Borrowed(ExerciseCatalog::standard()));
    };
    let json = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read catalog at {}: {e}", path.display()))?;
    let catalog = ExerciseCatalog::from_json(&json)?;
    tracing::info!(path = %path.display(), entries = catalog.len(), "catalog loaded");
    Ok(Cow::Owned(catalog))
}

pub fn read_record(path: &Path) -> eyre::Result<ClinicalRecord> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read record at {}: {e}", path.display()))?;
    match ClinicalRecord::from_json(&json) {
        Ok(record) => Ok(record),
        Err(e @ CoreError::PainScoreOutOfRange { .. }) => Err(eyre::eyre!(
            "{e}; correct the pain score in {} and try again",
            path.display()
        )),
        Err(e) => Err(e.into()),
    }
}

pub fn read_adjustments(path: &Path) -> eyre::Result<Vec<ExerciseAdjustment>> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read adjustments at {}: {e}", path.display()))?;
    Ok(serde_json::from_str(&json)?)
}

/// Any category, or `manual`, switches off automatic derivation.
pub fn plan_mode(manual: bool, categories: &[Category]) -> PlanMode {
    if manual || !categories.is_empty() {
        PlanMode::ManualFilter(categories.iter().copied().collect::<BTreeSet<_>>())
    } else {
        PlanMode::Automatic
    }
}

/// Copy the plan's exercises and apply the practitioner's adjustments by name.
pub fn prescribe(plan: &ExercisePlan<'_>, adjustments: &[ExerciseAdjustment]) -> Vec<PrescribedExercise> {
    let mut prescribed = plan.prescribe();
    for adjustment in adjustments {
        match prescribed.iter_mut().find(|p| p.name == adjustment.name) {
            Some(p) => p.adjust(adjustment),
            None => tracing::warn!(name = %adjustment.name, "adjustment for exercise not in plan"),
        }
    }
    prescribed
}

pub fn format_catalog(catalog: &ExerciseCatalog) -> String {
    let mut out = String::new();
    for category in catalog.categories() {
        let _ = writeln!(out, "{category} [{}]", category.id());
        for e in catalog.in_category(category) {
            let _ = writeln!(out, "  - {}: {} ({})", e.name, e.dosage, e.progression);
        }
    }
    out
}

pub fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        return "No specific suggestions.\n".to_string();
    }
    suggestions.iter().map(|s| format!("- {s}\n")).collect()
}

pub fn format_plan(plan: &ExercisePlan<'_>) -> String {
    let mut out = format!("{} exercises proposed - Level: {}\n", plan.len(), plan.tier);
    for (i, e) in plan.exercises.iter().enumerate() {
        let _ = writeln!(out, "{}. {} ({})", i + 1, e.name, e.category);
        let _ = writeln!(out, "   {}", e.description);
        let _ = writeln!(out, "   Dosage: {} | Progression: {}", e.dosage, e.progression);
    }
    out
}

/// A generated document and the file name it is saved or attached under.
#[derive(Debug, Clone)]
pub struct NamedDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Everything produced for one assessment.
#[derive(Debug, Clone)]
pub struct Documents {
    pub clinical_record: NamedDocument,
    pub exercise_sheet: NamedDocument,
    pub mailto: String,
    pub whatsapp: String,
}

/// Evaluate the record and generate both documents in memory.
pub fn build_documents(
    record: &ClinicalRecord,
    catalog: &ExerciseCatalog,
    mode: &PlanMode,
    adjustments: &[ExerciseAdjustment],
    config: &ArehabConfig,
) -> eyre::Result<Documents> {
    let suggestions = derive_suggestions(record);
    let plan = select_exercise_plan(record, catalog, mode);
    let exercises = prescribe(&plan, adjustments);

    let message = ShareMessage::exercise_sheet(
        &record.patient.full_name(),
        record.treatment.follow_up_weeks,
    );
    let mailto = mailto_link(record.patient.email.as_deref(), &message);
    let whatsapp = whatsapp_link(&message);

    let clinical_record = NamedDocument {
        file_name: clinical_record_filename(&record.patient),
        bytes: clinical_record_docx(record, &suggestions, &config.letterhead, &config.styles)?,
    };

    let sheet = ExerciseSheet {
        patient: &record.patient,
        exercises: &exercises,
        tier: plan.tier,
        notes: record.treatment.exercise_notes.as_deref(),
        share_link: Some(&whatsapp),
    };
    let exercise_sheet = NamedDocument {
        file_name: exercise_sheet_filename(&record.patient),
        bytes: exercise_sheet_docx(&sheet, &config.letterhead, &config.styles)?,
    };

    Ok(Documents {
        clinical_record,
        exercise_sheet,
        mailto,
        whatsapp,
    })
}

/// Files written and links built by [`export`].
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub clinical_record: PathBuf,
    pub exercise_sheet: PathBuf,
    pub mailto: String,
    pub whatsapp: String,
}

/// Evaluate the record and write both documents into `out_dir`.
pub fn export(
    record: &ClinicalRecord,
    catalog: &ExerciseCatalog,
    mode: &PlanMode,
    adjustments: &[ExerciseAdjustment],
    config: &ArehabConfig,
    out_dir: &Path,
) -> eyre::Result<ExportSummary> {
    let documents = build_documents(record, catalog, mode, adjustments, config)?;
    std::fs::create_dir_all(out_dir)?;

    let clinical_record = out_dir.join(&documents.clinical_record.file_name);
    std::fs::write(&clinical_record, &documents.clinical_record.bytes)?;
    let exercise_sheet = out_dir.join(&documents.exercise_sheet.file_name);
    std::fs::write(&exercise_sheet, &documents.exercise_sheet.bytes)?;

    tracing::info!(
        clinical_record = %clinical_record.display(),
        exercise_sheet = %exercise_sheet.display(),
        "documents exported"
    );

    Ok(ExportSummary {
        clinical_record,
        exercise_sheet,
        mailto: documents.mailto,
        whatsapp: documents.whatsapp,
    })
}

/// Which document `send` attaches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Attach {
    #[default]
    ExerciseSheet,
    ClinicalRecord,
}

/// Recipient and SMTP settings for `send`, checked before any document is built.
pub fn mail_route<'a>(
    record: &'a ClinicalRecord,
    config: &'a ArehabConfig,
    to: Option<&'a str>,
) -> eyre::Result<(&'a SmtpSettings, &'a str)> {
    let smtp = config
        .smtp
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no smtp section in the config; add host, port and username"))?;
    let recipient = to
        .or(record.patient.email.as_deref())
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .ok_or_else(|| eyre::eyre!("no recipient: pass --to or record the patient's e-mail"))?;
    Ok((smtp, recipient))
}

/// Build the message carrying the chosen document.
pub fn compose_mail(
    record: &ClinicalRecord,
    documents: &Documents,
    attach: Attach,
    smtp: &SmtpSettings,
    recipient: &str,
) -> eyre::Result<Message> {
    let name = record.patient.full_name();
    let (document, message) = match attach {
        Attach::ExerciseSheet => (
            &documents.exercise_sheet,
            ShareMessage::exercise_sheet(&name, record.treatment.follow_up_weeks),
        ),
        Attach::ClinicalRecord => (&documents.clinical_record, ShareMessage::clinical_record(&name)),
    };

    let outgoing = OutgoingMail {
        to: recipient,
        subject: &message.subject,
        body: &message.body,
        file_name: &document.file_name,
        document: &document.bytes,
    };
    Ok(mail::build_message(smtp, &outgoing)?)
}

use arehab_core::models::record::ClinicalRecord;

use crate::docx::generate_docx;
use crate::error::ExportError;
use crate::render::{render_clinical_record, render_exercise_sheet, ExerciseSheet};
use crate::styles::{DocumentStyles, Letterhead};

/// Render the clinical record and pack it as DOCX.
pub fn clinical_record_docx(
    record: &ClinicalRecord,
    suggestions: &[String],
    letterhead: &Letterhead,
    styles: &DocumentStyles,
) -> Result<Vec<u8>, ExportError> {
    let rendered = render_clinical_record(record, suggestions, letterhead)?;
    let logo = read_logo(letterhead)?;
    let bytes = generate_docx(&rendered, styles, logo.as_deref())?;
    tracing::info!(
        suggestions = suggestions.len(),
        bytes = bytes.len(),
        "clinical record document generated"
    );
    Ok(bytes)
}

/// Render the exercise sheet and pack it as DOCX.
pub fn exercise_sheet_docx(
    sheet: &ExerciseSheet<'_>,
    letterhead: &Letterhead,
    styles: &DocumentStyles,
) -> Result<Vec<u8>, ExportError> {
    let rendered = render_exercise_sheet(sheet, letterhead)?;
    let logo = read_logo(letterhead)?;
    let bytes = generate_docx(&rendered, styles, logo.as_deref())?;
    tracing::info!(
        exercises = sheet.exercises.len(),
        tier = %sheet.tier,
        bytes = bytes.len(),
        "exercise sheet document generated"
    );
    Ok(bytes)
}

fn read_logo(letterhead: &Letterhead) -> Result<Option<Vec<u8>>, ExportError> {
    let Some(path) = &letterhead.logo_path else {
        return Ok(None);
    };
    std::fs::read(path)
        .map(Some)
        .map_err(|e| ExportError::Logo(format!("failed to read {}: {e}", path.display())))
}

use arehab_core::models::patient::Patient;

pub const DOCX_EXTENSION: &str = "docx";

/// e.g. `clinical_record_rossi_anna.docx`
pub fn clinical_record_filename(patient: &Patient) -> String {
    format!("clinical_record_{}.{DOCX_EXTENSION}", patient_slug(patient))
}

/// e.g. `exercises_rossi_anna.docx`
pub fn exercise_sheet_filename(patient: &Patient) -> String {
    format!("exercises_{}.{DOCX_EXTENSION}", patient_slug(patient))
}

/// Last and first name, lowercased, with anything but letters and digits
/// replaced by `_`. Falls back to `patient` when both are blank.
fn patient_slug(patient: &Patient) -> String {
    let parts: Vec<String> = [&patient.last_name, &patient.first_name]
        .into_iter()
        .map(|part| slug(part))
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        "patient".to_string()
    } else {
        parts.join("_")
    }
}

fn slug(text: &str) -> String {
    let replaced: String = text
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    replaced
        .split('_')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

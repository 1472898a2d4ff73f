//! Built-in document templates.
//!
//! Output is the Markdown subset understood by [`crate::docx::generate_docx`].

pub const CLINICAL_RECORD_NAME: &str = "clinical_record.md";

pub const CLINICAL_RECORD: &str = r#"# {{ letterhead.clinic_name }}
**{{ letterhead.slogan }}**

{% for row in patient -%}
| {{ row.0 }} | {{ row.1 }} |
{% endfor %}
## Reason for visit
Reasons: {{ visit_reasons }}
VAS: {% if pain %}{{ pain }}/10{% endif %}
Onset: {{ onset }} | Side: {{ side }}

## History
Conditions: {{ conditions }}
Surgeries/trauma: {{ surgeries_and_trauma }}
Medications: {{ medications }}
Allergies: {{ allergies }}

## Examination: static
Foot strike: {{ foot_strike }} | Hindfoot: {{ hindfoot }} | Forefoot: {{ forefoot }}
Arch: {{ foot_arch }} | Limb-length discrepancy: {{ limb_length_discrepancy }}
Hallux valgus: {{ hallux_valgus }} | Hammer toes: {{ hammer_toes }}

## Gait
Cadence: {{ cadence }} | Step length: {{ step_length }}
Deviations: {{ gait_deviations }}

## Baropodometry
Static: {{ static_load }}
Dynamic: {{ dynamic_load }}
Peak pressures: {{ peak_pressures }}

## Clinical tests
Ankle equinus: {{ ankle_equinus_test }} | Posterior tibial: {{ posterior_tibial_test }} | Arch flexibility: {{ arch_flexibility }}
Ankle ROM: {{ ankle_rom }}
Notes: {{ test_notes }}

## Global postural assessment
{{ posture }}
Other segments: {{ other_segments_note }}

## Diagnosis / goals
Diagnosis: {{ diagnosis }}
Goals: {{ goals }}

## Treatment
Orthotics: {{ orthotics }}
Exercises (general notes): {{ exercise_notes }}
Footwear: {{ footwear }}
Education: {{ education }}
Follow-up: {{ follow_up_weeks }} weeks
{% if suggestions %}
## Automatic suggestions
{% for s in suggestions -%}
- {{ s }}
{% endfor %}{% endif %}
## Notes/Disclaimer
{{ letterhead.disclaimer }}
"#;

pub const EXERCISE_SHEET_NAME: &str = "exercise_sheet.md";

pub const EXERCISE_SHEET: &str = r#"# Podopostural Exercise Sheet
**{{ letterhead.clinic_name }}** - {{ letterhead.slogan }}
Patient: {{ patient_name }}
Level: {{ tier }}

| # | Exercise | Dosage | Progression | Link |
{% for e in exercises -%}
| {{ e.number }} | {{ e.name }} | {{ e.dosage }} | {{ e.progression }} | {{ e.link }} |
{% endfor %}{% if exercises %}
### How to perform
{% for e in exercises -%}
- **{{ e.name }}** ({{ e.category }}): {{ e.description }}
{% endfor %}{% endif %}{% if notes %}
### Notes
{{ notes }}
{% endif %}{% if share_link %}
### Open on your phone
{{ share_link }}
{% endif %}
Perform the exercises pain-free (>3/10 = stop).
"#;

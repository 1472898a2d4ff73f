use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Document styling configuration for exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyles {
    /// Font for body text (e.g. "Calibri").
    pub body_font: String,

    /// Font for headings.
    pub heading_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    pub heading1_size: usize,
    pub heading2_size: usize,
    pub heading3_size: usize,

    /// Page margin in inches (applied uniformly).
    pub margin_inches: f64,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Calibri".to_string(),
            heading_font: "Arial".to_string(),
            body_size: 11,
            heading1_size: 18,
            heading2_size: 14,
            heading3_size: 12,
            margin_inches: 0.5,
        }
    }
}

/// Practice branding printed at the top and bottom of every document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Letterhead {
    pub clinic_name: String,
    pub slogan: String,
    pub disclaimer: String,
    /// PNG or JPEG printed at the top of every document.
    pub logo_path: Option<PathBuf>,
}

impl Default for Letterhead {
    fn default() -> Self {
        Self {
            clinic_name: "A-Rehab Med".to_string(),
            slogan: "A step towards your health".to_string(),
            disclaimer: "This document is intended solely for the patient named above. \
                         If pain exceeds 3/10 or new symptoms appear, stop and contact \
                         your practitioner."
                .to_string(),
            logo_path: None,
        }
    }
}

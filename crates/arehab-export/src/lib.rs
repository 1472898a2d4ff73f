//! arehab-export
//!
//! Printable documents for an assessment: Tera templates render the clinical
//! record and the exercise sheet to a Markdown subset, which is then packed
//! into DOCX. Also builds share links and output file names.

pub mod docx;
pub mod documents;
pub mod error;
pub mod naming;
pub mod render;
pub mod share;
pub mod styles;
mod templates;

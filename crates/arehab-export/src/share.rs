use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// RFC 3986 unreserved characters pass through; everything else is encoded.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// An address in a `mailto:` link keeps its `@`.
const ADDRESS: &AsciiSet = &UNRESERVED.remove(b'@');

/// Subject and body of a message pointing the patient at their documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareMessage {
    pub subject: String,
    pub body: String,
}

impl ShareMessage {
    pub fn exercise_sheet(patient_name: &str, follow_up_weeks: u8) -> Self {
        Self {
            subject: "Exercise sheet".to_string(),
            body: format!(
                "Exercise sheet for {}. Follow-up in {follow_up_weeks} weeks.",
                patient_name.trim()
            ),
        }
    }

    pub fn clinical_record(patient_name: &str) -> Self {
        Self {
            subject: "Podopostural assessment".to_string(),
            body: format!("Assessment report for {}, attached.", patient_name.trim()),
        }
    }
}

/// `mailto:` link that opens the practitioner's mail client pre-filled.
pub fn mailto_link(recipient: Option<&str>, message: &ShareMessage) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        utf8_percent_encode(recipient.map(str::trim).unwrap_or_default(), ADDRESS),
        percent_encode(&message.subject),
        percent_encode(&message.body),
    )
}

/// WhatsApp click-to-chat link carrying the message body.
pub fn whatsapp_link(message: &ShareMessage) -> String {
    format!("https://wa.me/?text={}", percent_encode(&message.body))
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
pub fn percent_encode(text: &str) -> String {
    utf8_percent_encode(text, UNRESERVED).to_string()
}

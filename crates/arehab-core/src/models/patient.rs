use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Patient {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<jiff::civil::Date>,
    pub sex: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub sport: Option<String>,
    pub profession: Option<String>,
}

impl Patient {
    /// "First Last", trimmed when either part is missing.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

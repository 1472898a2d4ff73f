/// Gait deviations describing internal rotation.
pub const INTERNAL_ROTATION: &[&str] = &["internal rotation", "intrarotazione"];

/// Gait deviations describing balance problems.
pub const INSTABILITY: &[&str] = &["instability", "imbalance", "sway", "instabilità", "basculamento"];

/// Other-segment notes pointing at the hip.
pub const HIP: &[&str] = &["hip", "anca"];

/// Case-insensitive substring match against any keyword. `None` never matches.
pub fn mentions_any(text: Option<&str>, keywords: &[&str]) -> bool {
    let Some(text) = text else {
        return false;
    };
    let lowered = text.to_lowercase();
    keywords.iter().any(|k| lowered.contains(k))
}

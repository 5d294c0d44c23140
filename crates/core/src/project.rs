//! Project input normalization and metadata completeness rules.
//!
//! The project creation input still accepts the legacy single `hackatimeName`
//! field alongside the newer `hackatimeProjects` list; both are collapsed
//! into one canonical list here, before any persistence logic runs.

/// Metadata fields a project must fill in before it can be submitted for
/// review, in the order they are reported back to the user.
pub const REQUIRED_METADATA_FIELDS: &[&str] = &["codeUrl", "playableUrl", "screenshot"];

/// Merge the legacy single tracked-project name into the tracked-project
/// list, producing the canonical list used for link creation.
///
/// The legacy name is appended only when it is non-empty and not already
/// present. Matching is exact string comparison with no trimming or
/// case-folding, mirroring how existing links were recorded.
pub fn merge_hackatime_projects(
    hackatime_name: Option<String>,
    mut hackatime_projects: Vec<String>,
) -> Vec<String> {
    if let Some(name) = hackatime_name {
        if !name.is_empty() && !hackatime_projects.contains(&name) {
            hackatime_projects.push(name);
        }
    }
    hackatime_projects
}

/// Return the names of required metadata fields that are blank after
/// trimming. An empty result means the project is review-ready.
pub fn missing_metadata(
    code_url: &str,
    playable_url: &str,
    screenshot: &str,
) -> Vec<&'static str> {
    let values = [code_url, playable_url, screenshot];
    REQUIRED_METADATA_FIELDS
        .iter()
        .zip(values)
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| *field)
        .collect()
}

//! URL detector. Maps a job posting URL to the ATS that hosts it.
//!
//! Heuristic only: lower-case the URL and take the first profile (table order)
//! whose pattern is a substring. No protocol stripping, no trailing-slash handling.
//! False negatives are expected.

use tracing::debug;

use crate::ats::profiles::{all_profiles, AtsProfile};

/// Returns the first profile whose URL pattern occurs in `url`, ignoring case.
pub fn detect(url: &str) -> Option<&'static AtsProfile> {
    if url.is_empty() {
        return None;
    }

    let url_lower = url.to_lowercase();
    let detected = all_profiles()
        .iter()
        .find(|profile| url_lower.contains(&profile.url_pattern.to_lowercase()));

    match detected {
        Some(profile) => debug!(ats = profile.id, "Detected ATS from URL"),
        None => debug!("No ATS pattern matched URL"),
    }

    detected
}

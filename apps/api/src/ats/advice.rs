//! Download advice: what to tell a candidate right before they export a resume.
//!
//! Combines the chosen format's guidance with the recommendation for the
//! target ATS (if any) and flags when the two disagree.

use serde::Serialize;

use crate::ats::profiles::{get_profile, AtsProfile, Difficulty};
use crate::ats::recommend::{recommend, ResumeFormat};

pub const OPTIMIZATION_GUIDE_PATH: &str = "/tips/ats-optimization";
pub const DETECTOR_PATH: &str = "/tips/ats-detector";

const PRO_TIP: &str =
    "Keep both DOCX and PDF versions ready. Use DOCX for job applications, PDF for networking.";

const PDF_USE_CASES: [&str; 3] = [
    "Emailing recruiters directly",
    "Networking and LinkedIn",
    "When job posting specifically requests PDF",
];

/// Compact view of a profile for listings and advice payloads.
#[derive(Debug, Clone, Serialize)]
pub struct AtsSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub market_share: &'static str,
    pub difficulty: Difficulty,
    pub difficulty_label: &'static str,
    pub format_label: &'static str,
    pub url_pattern: &'static str,
    pub guide_path: String,
}

impl From<&AtsProfile> for AtsSummary {
    fn from(profile: &AtsProfile) -> Self {
        AtsSummary {
            id: profile.id,
            name: profile.name,
            emoji: profile.emoji,
            market_share: profile.market_share,
            difficulty: profile.difficulty,
            difficulty_label: profile.difficulty.label(),
            format_label: profile.format_preference.label(),
            url_pattern: profile.url_pattern,
            guide_path: profile.guide_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DownloadAdvice {
    pub format: ResumeFormat,
    pub headline: &'static str,
    pub guidance: &'static str,
    /// Only populated for PDF downloads.
    pub pdf_use_cases: Vec<&'static str>,
    pub ats: Option<AtsSummary>,
    pub recommended_format: ResumeFormat,
    pub matches_recommendation: bool,
    pub tips: Vec<String>,
    pub pro_tip: &'static str,
    pub links: Vec<String>,
}

/// Builds the advice shown when downloading `format` for an optional target ATS.
pub fn download_advice(format: ResumeFormat, ats_id: Option<&str>) -> DownloadAdvice {
    let profile = ats_id.and_then(get_profile);
    let recommendation = recommend(ats_id);

    let (headline, guidance, pdf_use_cases) = match format {
        ResumeFormat::Docx => (
            "Great choice for ATS!",
            "DOCX is the safest format for online job applications. \
             98.4% of Fortune 500 companies use ATS systems, and Word files parse most reliably.",
            Vec::new(),
        ),
        ResumeFormat::Pdf => (
            "Good for humans, riskier for ATS",
            "PDF works well with modern ATS, but older systems may struggle.",
            PDF_USE_CASES.to_vec(),
        ),
    };

    let mut links = Vec::with_capacity(3);
    if let Some(profile) = profile {
        links.push(profile.guide_path());
    }
    links.push(OPTIMIZATION_GUIDE_PATH.to_string());
    links.push(DETECTOR_PATH.to_string());

    DownloadAdvice {
        format,
        headline,
        guidance,
        pdf_use_cases,
        ats: profile.map(AtsSummary::from),
        recommended_format: recommendation.format,
        matches_recommendation: format == recommendation.format,
        tips: recommendation.tips,
        pro_tip: PRO_TIP,
        links,
    }
}

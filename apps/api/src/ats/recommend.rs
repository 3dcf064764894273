//! Recommendation engine: format plus top tips for a (possibly unknown) ATS.
//!
//! Total over its input: an absent or unresolved identifier falls back to the
//! default DOCX recommendation. A profile that accepts both formats resolves to
//! PDF; this tie-break is a product choice, not a parsing constraint.

use serde::{Deserialize, Serialize};

use crate::ats::profiles::{get_profile, AtsProfile, FormatPreference};

/// Maximum tips carried in a recommendation.
pub const MAX_TIPS: usize = 4;

pub const DEFAULT_REASONING: &str =
    "DOCX is the safest choice when the ATS system is unknown. It works with 98% of systems.";

pub const DEFAULT_TIPS: [&str; MAX_TIPS] = [
    "Use standard fonts (Arial, Calibri, Times New Roman)",
    "Simple, single-column layout",
    "Standard section headings",
    "Include both PDF and DOCX versions for flexibility",
];

/// Resume file format a candidate can download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeFormat {
    Pdf,
    Docx,
}

impl From<FormatPreference> for ResumeFormat {
    fn from(pref: FormatPreference) -> Self {
        match pref {
            FormatPreference::Docx => ResumeFormat::Docx,
            FormatPreference::Pdf | FormatPreference::Both => ResumeFormat::Pdf,
        }
    }
}

/// Derived suggestion, computed fresh per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub format: ResumeFormat,
    pub reasoning: String,
    pub tips: Vec<String>, // ≤ MAX_TIPS
}

/// Recommends a format and tips for the given ATS identifier.
pub fn recommend(ats_id: Option<&str>) -> Recommendation {
    match ats_id.and_then(get_profile) {
        Some(profile) => recommend_for_profile(profile),
        None => default_recommendation(),
    }
}

fn recommend_for_profile(profile: &AtsProfile) -> Recommendation {
    let phrase = match profile.format_preference {
        FormatPreference::Docx => "strongly prefers DOCX format for best parsing results",
        FormatPreference::Pdf => "works well with PDF format",
        FormatPreference::Both => "accepts both PDF and DOCX equally well",
    };

    Recommendation {
        format: profile.format_preference.into(),
        reasoning: format!("{} {}.", profile.name, phrase),
        tips: profile
            .optimization_tips
            .iter()
            .take(MAX_TIPS)
            .map(|t| t.to_string())
            .collect(),
    }
}

fn default_recommendation() -> Recommendation {
    Recommendation {
        format: ResumeFormat::Docx,
        reasoning: DEFAULT_REASONING.to_string(),
        tips: DEFAULT_TIPS.iter().map(|t| t.to_string()).collect(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::profiles::all_profiles;

    fn assert_is_default(rec: &Recommendation) {
        assert_eq!(rec.format, ResumeFormat::Docx);
        assert_eq!(rec.reasoning, DEFAULT_REASONING);
        assert_eq!(rec.tips, DEFAULT_TIPS.to_vec());
    }

    #[test]
    fn test_workday_recommends_docx() {
        let rec = recommend(Some("workday"));
        assert_eq!(rec.format, ResumeFormat::Docx);
        assert!(rec.reasoning.contains("Workday"));
        assert!(rec.reasoning.contains("DOCX"));
        assert_eq!(rec.tips.len(), 4);
        assert!(rec.tips[0].starts_with("Use DOCX format"));
    }

    #[test]
    fn test_absent_id_returns_default() {
        let rec = recommend(None);
        assert_is_default(&rec);
        assert!(rec.reasoning.contains("safest choice"));
    }

    #[test]
    fn test_unknown_id_returns_default() {
        assert_is_default(&recommend(Some("nope")));
        assert_is_default(&recommend(Some("")));
    }

    #[test]
    fn test_format_follows_preference_with_both_as_pdf() {
        for profile in all_profiles() {
            let rec = recommend(Some(profile.id));
            let expected = match profile.format_preference {
                FormatPreference::Docx => ResumeFormat::Docx,
                FormatPreference::Pdf | FormatPreference::Both => ResumeFormat::Pdf,
            };
            assert_eq!(rec.format, expected, "{}", profile.id);
        }
    }

    #[test]
    fn test_tips_are_prefix_of_profile_tips() {
        for profile in all_profiles() {
            let rec = recommend(Some(profile.id));
            assert!(rec.tips.len() <= MAX_TIPS);
            assert_eq!(rec.tips.len(), profile.optimization_tips.len().min(MAX_TIPS));
            for (tip, original) in rec.tips.iter().zip(profile.optimization_tips) {
                assert_eq!(tip, original);
            }
        }
    }

    #[test]
    fn test_both_preference_reasoning() {
        let rec = recommend(Some("greenhouse"));
        assert_eq!(rec.reasoning, "Greenhouse accepts both PDF and DOCX equally well.");
        assert_eq!(rec.format, ResumeFormat::Pdf);
    }

    #[test]
    fn test_docx_preference_reasoning() {
        let rec = recommend(Some("taleo"));
        assert_eq!(
            rec.reasoning,
            "Taleo (Oracle) strongly prefers DOCX format for best parsing results."
        );
    }

    #[test]
    fn test_pdf_preference_maps_to_pdf() {
        assert_eq!(ResumeFormat::from(FormatPreference::Pdf), ResumeFormat::Pdf);
    }

    #[test]
    fn test_recommendation_serializes_lowercase_format() {
        let json = serde_json::to_value(recommend(None)).unwrap();
        assert_eq!(json["format"], "docx");
        assert_eq!(json["tips"].as_array().unwrap().len(), 4);
    }
}

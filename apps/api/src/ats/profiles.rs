//! Static ATS profile table: the reference data behind detection, recommendation and the guide pages.
//!
//! Profiles are `'static` and never mutated. Declaration order is significant:
//! URL detection walks the table in this order and returns the first match.
//! `id` is a routing key for `/tips/ats/{id}` and must stay stable.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Classification enums
// ────────────────────────────────────────────────────────────────────────────

/// How hard it is to get a resume through this ATS intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    VeryHard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::VeryHard => "Very Hard",
        }
    }
}

/// File format the ATS handles best, as stated by the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatPreference {
    Docx,
    Pdf,
    Both,
}

impl FormatPreference {
    /// Badge text shown next to a profile.
    pub fn label(self) -> &'static str {
        match self {
            FormatPreference::Docx => "DOCX",
            FormatPreference::Pdf => "PDF",
            FormatPreference::Both => "PDF/DOCX",
        }
    }
}

/// Quality of the ATS's own resume parser. Declared worst to best, so `Ord` ranks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParsingQuality {
    None,
    Poor,
    Fair,
    Good,
    Excellent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeywordMatching {
    Exact,
    Fuzzy,
    AiPowered,
    Manual,
}

// ────────────────────────────────────────────────────────────────────────────
// Profile record
// ────────────────────────────────────────────────────────────────────────────

/// Descriptive record for one named ATS product.
#[derive(Debug, Serialize)]
pub struct AtsProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub market_share: &'static str,
    pub difficulty: Difficulty,
    pub format_preference: FormatPreference,
    /// Substring matched (case-insensitively) against job posting URLs.
    pub url_pattern: &'static str,
    pub example_url: &'static str,
    pub parsing_quality: ParsingQuality,
    pub allows_creative_formatting: bool,
    pub keyword_matching: KeywordMatching,
    pub unique_quirks: &'static [&'static str],
    pub optimization_tips: &'static [&'static str],
    pub common_complaints: &'static [&'static str],
    pub best_for: &'static str,
}

static MARKET_SHARE_PERCENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+\.?\d*)%").expect("Invalid regex pattern"));

impl AtsProfile {
    /// First `<number>%` in the market-share text, or 0.0 when the text has none.
    pub fn market_share_percent(&self) -> f64 {
        MARKET_SHARE_PERCENT
            .captures(self.market_share)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .unwrap_or(0.0)
    }

    /// Path of the full guide page for this ATS.
    pub fn guide_path(&self) -> String {
        format!("/tips/ats/{}", self.id)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Lookup
// ────────────────────────────────────────────────────────────────────────────

/// All known profiles in declaration order.
pub fn all_profiles() -> &'static [AtsProfile] {
    &ATS_PROFILES
}

/// Looks up a profile by identifier. Unknown identifiers yield `None`.
pub fn get_profile(id: &str) -> Option<&'static AtsProfile> {
    ATS_PROFILES.iter().find(|p| p.id == id)
}

/// Profiles ordered by market-share percentage, highest first.
///
/// Stable sort: profiles with equal (or no) percentage keep declaration order.
pub fn profiles_by_market_share() -> Vec<&'static AtsProfile> {
    let mut profiles: Vec<&'static AtsProfile> = ATS_PROFILES.iter().collect();
    profiles.sort_by(|a, b| b.market_share_percent().total_cmp(&a.market_share_percent()));
    profiles
}

// ────────────────────────────────────────────────────────────────────────────
// Static profile table
// ────────────────────────────────────────────────────────────────────────────

static ATS_PROFILES: [AtsProfile; 10] = [
    AtsProfile {
        id: "workday",
        name: "Workday",
        emoji: "🏢",
        market_share: "39%+ of Fortune 500",
        difficulty: Difficulty::Hard,
        format_preference: FormatPreference::Docx,
        url_pattern: "wd5.myworkdayjobs.com",
        example_url: "company.wd5.myworkdayjobs.com/careers",
        parsing_quality: ParsingQuality::Fair,
        allows_creative_formatting: false,
        keyword_matching: KeywordMatching::Exact,
        unique_quirks: &[
            "Extremely sensitive to formatting consistency",
            "Cannot properly read headers and footers 25% of the time",
            "Requires manual input if parsing fails",
            "Forces users to create new account for every application",
            "Biased toward standard section headings - creative headings = automatic rejection",
        ],
        optimization_tips: &[
            "Use DOCX format (strongly preferred over PDF)",
            "Use standard fonts: Arial, Times New Roman, or Calibri (11-12 pt)",
            "Standard section headers REQUIRED: \"Education,\" \"Experience,\" \"Skills\"",
            "8-12 core keywords from job description (15+ looks spammy)",
            "Mirror exact language from job posting",
            "Avoid headers/footers for contact information",
            "Provide examples of skills - don't just list them",
            "Keep formatting simple: No columns, no tables, no graphics",
        ],
        common_complaints: &[
            "Issues with resume parsing, requiring manual data entry multiple times",
            "Requiring users to create a new account for every job application",
            "Complicated, time-consuming application process",
            "System times out frequently",
        ],
        best_for: "Large enterprise applications",
    },
    AtsProfile {
        id: "greenhouse",
        name: "Greenhouse",
        emoji: "🌱",
        market_share: "Growing (+5 pts since 2019)",
        difficulty: Difficulty::Medium,
        format_preference: FormatPreference::Both,
        url_pattern: "boards.greenhouse.io",
        example_url: "job-boards.greenhouse.io/company",
        parsing_quality: ParsingQuality::Good,
        allows_creative_formatting: true,
        keyword_matching: KeywordMatching::Fuzzy,
        unique_quirks: &[
            "DOES NOT USE TRADITIONAL RESUME PARSING (Major differentiator)",
            "Hiring managers see full image of your resume exactly as submitted",
            "No algorithmic scoring or automated ranking",
            "Human review-focused rather than algorithm-focused",
            "Uses scorecards where hiring managers manually rate qualifications",
        ],
        optimization_tips: &[
            "PDF or Word both work equally well",
            "Keywords still critical - hiring managers search by job titles, skills, experience",
            "Visual clarity matters for human reviewers",
            "Customize for job description - scorecards rate alignment with requirements",
            "Creative formatting allowed but keep it professional and readable",
            "Focus on content quality over ATS gaming",
            "Word stemming in search (\"manage\" matches \"management\")",
        ],
        common_complaints: &[
            "Some confusion about whether formatting matters (it does for readability, not parsing)",
            "Fewer complaints overall - human review provides better candidate experience",
        ],
        best_for: "Tech/growth companies that value human review",
    },
    AtsProfile {
        id: "taleo",
        name: "Taleo (Oracle)",
        emoji: "⚠️",
        market_share: "13.2% of Fortune 500 (declining)",
        difficulty: Difficulty::VeryHard,
        format_preference: FormatPreference::Docx,
        url_pattern: "taleo.net/careersection",
        example_url: "company.taleo.net/careersection/jobsearch",
        parsing_quality: ParsingQuality::Poor,
        allows_creative_formatting: false,
        keyword_matching: KeywordMatching::Fuzzy,
        unique_quirks: &[
            "Proprietary parsing algorithm strips HTML tags, special characters, certain fonts",
            "Cannot handle tables, columns, headers, footers, excessive styling",
            "4-criteria scoring system: Profile, Education, Experience, Skills (0-3 stars each)",
            "Automatic candidate scoring visible to recruiters (not candidates)",
            "\"Invisible scoring\" is major complaint",
            "Legacy system with outdated UX",
        ],
        optimization_tips: &[
            "DOCX strongly recommended (PDF only if text-based)",
            "Clean, structured formatting REQUIRED - no tables, columns, headers, footers",
            "Mirror exact job description language for keywords",
            "10-15 high-impact keywords from job description",
            "Personalize resume for each job - CRITICAL for Taleo success",
            "Tailor Professional Summary and Skills to each posting",
            "Clear section headings with bullet points",
            "Consistent date formats",
            "Avoid creative formatting entirely",
        ],
        common_complaints: &[
            "Rigid and outdated user experience",
            "Invisible scoring system feels unfair",
            "Rejects qualified candidates for formatting reasons",
            "Most frustrating ATS to work with",
            "75%+ rejection rate even for qualified candidates",
        ],
        best_for: "Legacy enterprise systems (avoid if possible)",
    },
    AtsProfile {
        id: "icims",
        name: "iCIMS",
        emoji: "🤖",
        market_share: "10.7% overall market share",
        difficulty: Difficulty::Medium,
        format_preference: FormatPreference::Both,
        url_pattern: "icims.com/jobs",
        example_url: "company.icims.com/jobs",
        parsing_quality: ParsingQuality::Excellent,
        allows_creative_formatting: false,
        keyword_matching: KeywordMatching::AiPowered,
        unique_quirks: &[
            "Advanced AI capabilities (more sophisticated than many competitors)",
            "Automatically profiles candidates by skill matching from resumes",
            "Autogenerates skills lists for each candidate",
            "Intelligent scoring system adjusts parameters per job",
            "90% of CVs can be processed without human intervention",
            "Strong CRM capabilities for high-volume recruitment",
        ],
        optimization_tips: &[
            "Word or PDF documents both work well",
            "Use standard formatting for best results",
            "Keyword optimization critical - uses keyword matching to identify candidates",
            "Skills-focused resume benefits from autogenerated skills detection",
            "Clean PDF or DOCX format",
            "Benefits from ATS-optimized resume builders (98% parsing success rate)",
        ],
        common_complaints: &[
            "High-volume recruitment can feel impersonal",
            "Generally positive feedback on parsing accuracy (fewer complaints than others)",
        ],
        best_for: "High-volume hiring at scale",
    },
    AtsProfile {
        id: "lever",
        name: "Lever",
        emoji: "🔄",
        market_share: "Growing (+11 pts since 2019)",
        difficulty: Difficulty::Medium,
        format_preference: FormatPreference::Both,
        url_pattern: "jobs.lever.co",
        example_url: "jobs.lever.co/company",
        parsing_quality: ParsingQuality::Good,
        allows_creative_formatting: false,
        keyword_matching: KeywordMatching::Fuzzy,
        unique_quirks: &[
            "Combines ATS + CRM capabilities (unified platform)",
            "Parsing feeds integrated CRM for long-term candidate nurturing",
            "Higher accuracy with keyword searches due to word stemming",
            "Structures resume data into rich candidate profiles",
            "Ideal for proactive pipeline building",
        ],
        optimization_tips: &[
            "PDF or Word both supported",
            "Keep formatting simple and readable (tables/columns can affect format)",
            "Avoid image-based content entirely",
            "Use keywords strategically - benefits from word stemming",
            "Standard fonts and structure recommended",
            "Optimized for long-term candidate relationship building",
        ],
        common_complaints: &[
            "Browser capability requirements can be confusing",
            "Formatting can be affected in columns/tables",
            "Generally positive user feedback on functionality",
        ],
        best_for: "Relationship building and talent pipeline development",
    },
    AtsProfile {
        id: "smartrecruiters",
        name: "SmartRecruiters",
        emoji: "🧠",
        market_share: "Growing market presence",
        difficulty: Difficulty::Medium,
        format_preference: FormatPreference::Both,
        url_pattern: "jobs.smartrecruiters.com",
        example_url: "jobs.smartrecruiters.com/company",
        parsing_quality: ParsingQuality::Good,
        allows_creative_formatting: false,
        keyword_matching: KeywordMatching::AiPowered,
        unique_quirks: &[
            "Built-in AI resume screening with candidate ranking",
            "Cloud-based ATS with strong screening features",
            "Designed for high-volume hiring",
            "Processes resumes to establish candidate rankings automatically",
            "Saves recruiters significant time with automation",
        ],
        optimization_tips: &[
            "PDF or Word both supported",
            "Keyword optimization critical - AI ranks candidates",
            "Standard formatting for best AI interpretation",
            "Align with job description requirements",
            "Quantify achievements for better ranking",
            "Clean, professional structure",
        ],
        common_complaints: &[
            "Some concerns about AI bias in ranking",
            "Relatively fewer complaints (newer, more modern system)",
        ],
        best_for: "Companies hiring at scale with AI-powered screening",
    },
    AtsProfile {
        id: "successfactors",
        name: "SAP SuccessFactors",
        emoji: "💼",
        market_share: "13.2% of Fortune 500",
        difficulty: Difficulty::Hard,
        format_preference: FormatPreference::Both,
        url_pattern: "successfactors.com/career",
        // Real postings live under /career?company=...; the bare host would not match the pattern.
        example_url: "career4.successfactors.com/career?company=company",
        parsing_quality: ParsingQuality::Good,
        allows_creative_formatting: false,
        keyword_matching: KeywordMatching::Exact,
        unique_quirks: &[
            "Uses third-party TextKernel for parsing",
            "Complex configuration requirements",
            "Picklist fields don't work with resume parsing",
            "Won't parse API-submitted or agency candidate resumes",
            "Mobile Apply limitation: Only parses when background fields are empty",
            "Pre-populates work experience, current employer, contact address",
        ],
        optimization_tips: &[
            "PDF or Word both supported",
            "Standard formatting essential due to TextKernel parsing",
            "Complete profile before application for best results",
            "Avoid mobile apply if possible (parsing limitations)",
            "Simple structure works best",
            "Not ideal for agency-submitted candidates",
        ],
        common_complaints: &[
            "Complex configuration requirements",
            "Mobile apply parsing doesn't work well",
            "Won't parse certain candidate types (agency, API-submitted)",
            "Picklist field limitations",
        ],
        best_for: "Large enterprise with SAP ecosystem",
    },
    AtsProfile {
        id: "bamboohr",
        name: "BambooHR",
        emoji: "🎋",
        market_share: "Small to mid-sized businesses",
        difficulty: Difficulty::Easy,
        format_preference: FormatPreference::Both,
        url_pattern: "bamboohr.com/careers",
        example_url: "company.bamboohr.com/careers",
        parsing_quality: ParsingQuality::None,
        allows_creative_formatting: true,
        keyword_matching: KeywordMatching::Manual,
        unique_quirks: &[
            "NO NATIVE RESUME PARSING (major limitation)",
            "Requires manual data input for candidate information",
            "Third-party integrations required for parsing",
            "ATS without automated parsing (unusual for modern systems)",
            "Focused on applicant tracking and interview scheduling",
            "Better suited for low-to-moderate application volumes",
        ],
        optimization_tips: &[
            "Format matters less than content clarity",
            "Make information easy to find for manual data entry",
            "Standard resume structure helps recruiters input data quickly",
            "Clear contact information prominently displayed",
            "Focus on readability for human review",
        ],
        common_complaints: &[
            "Lack of automatic parsing is a notable limitation",
            "Manual data entry is time-consuming for recruiters",
            "Not suitable for high application volumes",
        ],
        best_for: "Small businesses with lower application volumes",
    },
    AtsProfile {
        id: "jazzhr",
        name: "JazzHR",
        emoji: "🎵",
        market_share: "Small to mid-sized businesses",
        difficulty: Difficulty::Medium,
        format_preference: FormatPreference::Both,
        url_pattern: "applytojob.com/apply",
        example_url: "company.applytojob.com/apply",
        parsing_quality: ParsingQuality::Fair,
        allows_creative_formatting: false,
        keyword_matching: KeywordMatching::Exact,
        unique_quirks: &[
            "Works best with LinkedIn/Indeed integration",
            "Resume parsing extracts and populates data fields",
            "Manual correction often needed for file attachment uploads",
            "Flaws when fetching from file attachments - fields not appropriated correctly",
            "Lacks advanced AI-powered parsing",
            "Recognized as Top Performer in 2025 Hackett Group rankings",
        ],
        optimization_tips: &[
            "Apply through LinkedIn/Indeed when possible for better auto-fill",
            "Standard formatting for file uploads",
            "Double-check auto-populated fields for accuracy",
            "Simple, clean resume structure",
            "PDF or Word both work",
        ],
        common_complaints: &[
            "Auto-fill doesn't work well with file attachments",
            "Fields not mapped correctly from resumes",
            "Lacks advanced automation features",
        ],
        best_for: "Small to mid-sized companies with basic needs",
    },
    AtsProfile {
        id: "phenom",
        name: "Phenom People",
        emoji: "🚀",
        market_share: "8.7% of Fortune 500 (fastest growing)",
        difficulty: Difficulty::Medium,
        format_preference: FormatPreference::Both,
        url_pattern: "phenompeople.com/careers",
        example_url: "company.phenompeople.com/careers",
        parsing_quality: ParsingQuality::Good,
        allows_creative_formatting: false,
        keyword_matching: KeywordMatching::AiPowered,
        unique_quirks: &[
            "Fastest-growing ATS among Fortune 500 (usage nearly doubled)",
            "Focus on talent experience and AI-powered personalization",
            "Modern platform with advanced features",
            "Strong candidate experience focus",
        ],
        optimization_tips: &[
            "Standard ATS best practices apply",
            "Modern AI likely means better semantic understanding",
            "Clean formatting recommended",
            "PDF or Word both work",
            "Keyword optimization important",
        ],
        common_complaints: &["Newer system with limited user feedback available"],
        best_for: "Modern companies focused on candidate experience",
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_has_ten_profiles_in_declaration_order() {
        let ids: Vec<&str> = all_profiles().iter().map(|p| p.id).collect();
        assert_eq!(
            ids,
            vec![
                "workday",
                "greenhouse",
                "taleo",
                "icims",
                "lever",
                "smartrecruiters",
                "successfactors",
                "bamboohr",
                "jazzhr",
                "phenom",
            ]
        );
    }

    #[test]
    fn test_profile_ids_are_unique() {
        let ids: HashSet<&str> = all_profiles().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), all_profiles().len());
    }

    #[test]
    fn test_every_example_url_contains_its_own_pattern() {
        for profile in all_profiles() {
            assert!(
                profile
                    .example_url
                    .to_lowercase()
                    .contains(&profile.url_pattern.to_lowercase()),
                "{} example URL does not contain its pattern",
                profile.id
            );
        }
    }

    #[test]
    fn test_every_profile_has_tips() {
        for profile in all_profiles() {
            assert!(!profile.optimization_tips.is_empty(), "{}", profile.id);
        }
    }

    #[test]
    fn test_get_profile_known_id() {
        let profile = get_profile("workday").unwrap();
        assert_eq!(profile.name, "Workday");
        assert_eq!(profile.format_preference, FormatPreference::Docx);
    }

    #[test]
    fn test_get_profile_unknown_id_is_none() {
        assert!(get_profile("nope").is_none());
        assert!(get_profile("").is_none());
        // Lookup is exact; no case folding on identifiers.
        assert!(get_profile("Workday").is_none());
    }

    #[test]
    fn test_market_share_percent_extraction() {
        assert_eq!(get_profile("workday").unwrap().market_share_percent(), 39.0);
        assert_eq!(get_profile("taleo").unwrap().market_share_percent(), 13.2);
        assert_eq!(get_profile("icims").unwrap().market_share_percent(), 10.7);
        assert_eq!(get_profile("greenhouse").unwrap().market_share_percent(), 0.0);
    }

    #[test]
    fn test_profiles_by_market_share_descending_and_stable() {
        let ids: Vec<&str> = profiles_by_market_share().iter().map(|p| p.id).collect();
        assert_eq!(
            ids,
            vec![
                "workday",
                "taleo",
                "successfactors",
                "icims",
                "phenom",
                "greenhouse",
                "lever",
                "smartrecruiters",
                "bamboohr",
                "jazzhr",
            ]
        );
    }

    #[test]
    fn test_difficulty_labels() {
        assert_eq!(Difficulty::Easy.label(), "Easy");
        assert_eq!(Difficulty::VeryHard.label(), "Very Hard");
    }

    #[test]
    fn test_format_preference_labels() {
        assert_eq!(FormatPreference::Both.label(), "PDF/DOCX");
        assert_eq!(FormatPreference::Docx.label(), "DOCX");
        assert_eq!(FormatPreference::Pdf.label(), "PDF");
    }

    #[test]
    fn test_enum_serde_kebab_case() {
        assert_eq!(
            serde_json::to_string(&Difficulty::VeryHard).unwrap(),
            r#""very-hard""#
        );
        assert_eq!(
            serde_json::to_string(&KeywordMatching::AiPowered).unwrap(),
            r#""ai-powered""#
        );
        let quality: ParsingQuality = serde_json::from_str(r#""excellent""#).unwrap();
        assert_eq!(quality, ParsingQuality::Excellent);
    }

    #[test]
    fn test_parsing_quality_orders_worst_to_best() {
        assert!(ParsingQuality::None < ParsingQuality::Poor);
        assert!(ParsingQuality::Good < ParsingQuality::Excellent);
    }

    #[test]
    fn test_guide_path() {
        assert_eq!(get_profile("lever").unwrap().guide_path(), "/tips/ats/lever");
    }
}

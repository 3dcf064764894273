// ATS reference data and the rule-based logic over it.
// Everything here is pure and synchronous; handlers call straight in, no spawn_blocking.

pub mod advice;
pub mod detect;
pub mod handlers;
pub mod profiles;
pub mod recommend;

// Re-export the public API consumed by handlers.
pub use advice::{download_advice, AtsSummary, DownloadAdvice};
pub use detect::detect;
pub use profiles::{all_profiles, get_profile, profiles_by_market_share, AtsProfile};
pub use recommend::{recommend, Recommendation, ResumeFormat};

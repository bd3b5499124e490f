//! Challenge entity <-> model mapper

use challet_core::entities::{Challenge, ChallengeStatus};
use challet_core::value_objects::Snowflake;

use crate::models::ChallengeModel;

/// Column representation of a challenge status
pub fn challenge_status_to_str(status: ChallengeStatus) -> &'static str {
    match status {
        ChallengeStatus::Recruiting => "RECRUITING",
        ChallengeStatus::Progressing => "PROGRESSING",
        ChallengeStatus::End => "END",
    }
}

/// Parse a stored status; unknown values fall back to `End` so stale
/// rows never look joinable.
pub fn challenge_status_from_str(s: &str) -> ChallengeStatus {
    match s {
        "RECRUITING" => ChallengeStatus::Recruiting,
        "PROGRESSING" => ChallengeStatus::Progressing,
        _ => ChallengeStatus::End,
    }
}

impl From<ChallengeModel> for Challenge {
    fn from(model: ChallengeModel) -> Self {
        Challenge {
            id: Snowflake::new(model.id),
            title: model.title,
            category: model.category,
            status: challenge_status_from_str(&model.status),
            spending_limit: model.spending_limit,
            created_at: model.created_at,
        }
    }
}

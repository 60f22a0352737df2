pub mod outcome;
pub mod progress;
pub mod score_result;
pub mod session;

pub use outcome::OutcomeCategory;
pub use progress::{format_duration_ms, LeaderboardEntry, UserProgress};
pub use score_result::{Breakdown, ImageRef, ScoreResult, MAX_PERCENTAGE, MIN_PERCENTAGE};
pub use session::UserSession;

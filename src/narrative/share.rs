use crate::core::ScoreResult;
use crate::error::Result;

/// Text shared for a result, with an optional invite line (e.g. the app URL)
pub fn share_text(result: &ScoreResult, invite: Option<&str>) -> String {
    let mut text = format!(
        "🔥 FLAREUP Result: {} & {} are {} with {}% compatibility! {}",
        result.name1,
        result.name2,
        result.outcome,
        result.primary_percentage,
        result.outcome.emoji()
    );
    if let Some(invite) = invite {
        text.push_str("\n\nTry FLAREUP at ");
        text.push_str(invite);
    }
    text
}

/// One way of handing share text to the outside world
pub trait ShareChannel {
    fn share(&self, text: &str) -> Result<()>;

    /// Get channel name for logging
    fn name(&self) -> &str;
}

/// Where the share text ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Delivered through the named channel
    Shared(String),
    /// Every channel failed; the caller must show the text for manual copying
    Manual(String),
}

/// Try each channel in order, ending with manual display when all fail
pub fn share_with_fallback(channels: &[&dyn ShareChannel], text: &str) -> ShareOutcome {
    for channel in channels {
        match channel.share(text) {
            Ok(()) => {
                tracing::debug!("Shared result via {}", channel.name());
                return ShareOutcome::Shared(channel.name().to_string());
            }
            Err(e) => tracing::warn!("Share via {} failed: {}", channel.name(), e),
        }
    }
    ShareOutcome::Manual(text.to_string())
}

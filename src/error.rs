//! Error surface of the subscription write path.
//!
//! Read operations collapse every failure into `None` at the gateway
//! boundary, so only the write path exposes a typed error: the UI needs
//! the upstream status and message to show something more specific than
//! a generic failure banner.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubscribeError {
    /// The request never produced an HTTP response.
    #[error("failed to connect to the CMS: {0}")]
    Network(#[from] reqwest::Error),

    /// The CMS rejected the subscription and returned its error envelope.
    #[error("subscription rejected ({status} {name}): {message}")]
    Upstream {
        status: u16,
        name: String,
        message: String,
    },

    /// A response arrived but its body was not the expected shape.
    #[error("unexpected subscription response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl SubscribeError {
    /// Whether this failure means the email is already subscribed.
    ///
    /// The CMS signals a duplicate with a 400 whose message mentions
    /// "already exists" rather than a structured code. The brittle
    /// string match lives only here; if the CMS ever grows a proper
    /// duplicate-entry code, this is the single place to change.
    pub fn is_duplicate(&self) -> bool {
        matches!(
            self,
            SubscribeError::Upstream { status: 400, message, .. }
                if message.contains("already exists")
        )
    }

    /// The upstream message, when one exists and is non-empty.
    pub fn upstream_message(&self) -> Option<&str> {
        match self {
            SubscribeError::Upstream { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

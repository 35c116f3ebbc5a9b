//! Newsletter subscription slice.
//!
//! Lifecycle: Idle -> Pending -> Succeeded | Failed -> Idle (manual reset).
//! `subscribed_emails` is session-local history populated only by
//! successful subscribes in this session; it backs a dedup guard that
//! fails fast without touching the network. The CMS still enforces
//! uniqueness server-side for emails subscribed in earlier sessions.

use std::collections::HashSet;

use tracing::warn;

use crate::error::SubscribeError;
use crate::gateway::ContentGateway;

/// Canned user-facing message for both the local guard and the
/// server-side duplicate rejection.
pub const ALREADY_SUBSCRIBED_MESSAGE: &str =
    "This email is already subscribed to our newsletter.";

const NETWORK_FAILURE_MESSAGE: &str = "Failed to connect to the server.";
const GENERIC_FAILURE_MESSAGE: &str = "Failed to subscribe. Please try again.";

#[derive(Debug, Default)]
pub struct SubscriptionState {
    pub is_loading: bool,
    pub is_success: bool,
    pub error: Option<String>,
    pub subscribed_emails: HashSet<String>,
    pub last_subscription_id: Option<String>,
}

impl SubscriptionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the full subscribe flow against the gateway.
    ///
    /// Emails already seen this session short-circuit to Failed without
    /// an HTTP call. Otherwise the state passes through Pending while the
    /// gateway call is in flight, then settles on Succeeded or Failed.
    pub async fn subscribe_user(&mut self, gateway: &ContentGateway, email: &str) {
        if self.subscribed_emails.contains(email) {
            self.fail(ALREADY_SUBSCRIBED_MESSAGE.to_string());
            return;
        }

        self.begin();
        match gateway.subscribe(email).await {
            Ok(receipt) => {
                self.last_subscription_id = Some(receipt.document_id);
                self.subscribed_emails.insert(receipt.email);
                self.is_loading = false;
                self.is_success = true;
                self.error = None;
            }
            Err(err) => {
                warn!("subscription failed for {}: {}", email, err);
                self.fail(failure_message(&err));
            }
        }
    }

    /// Back to Idle. History fields (`subscribed_emails`,
    /// `last_subscription_id`) are preserved.
    pub fn reset(&mut self) {
        self.is_loading = false;
        self.is_success = false;
        self.error = None;
    }

    /// Dismiss the error banner without touching anything else.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    fn begin(&mut self) {
        self.is_loading = true;
        self.is_success = false;
        self.error = None;
    }

    fn fail(&mut self, message: String) {
        self.is_loading = false;
        self.is_success = false;
        self.error = Some(message);
    }
}

/// Map a gateway failure to the message the UI shows. The duplicate
/// heuristic is rewritten to the canned message; other upstream messages
/// pass through.
fn failure_message(err: &SubscribeError) -> String {
    if err.is_duplicate() {
        return ALREADY_SUBSCRIBED_MESSAGE.to_string();
    }
    match err {
        SubscribeError::Network(_) => NETWORK_FAILURE_MESSAGE.to_string(),
        _ => err
            .upstream_message()
            .unwrap_or(GENERIC_FAILURE_MESSAGE)
            .to_string(),
    }
}

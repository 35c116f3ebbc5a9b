//! Client State Store: the per-session state the UI mutates.
//!
//! One [`SiteStore`] is constructed at page load and handed to the UI
//! layer; its action methods are the only mutation surface. Two
//! independent slices live here:
//!
//! - `navigation`: transient menu/search toggle state, reset on route change
//! - `subscription`: the newsletter subscribe lifecycle and its
//!   session-local history of subscribed emails
//!
//! A [`ViewEpoch`] rides along so views can discard fetch results that
//! settle after the view they were issued for is gone.

mod epoch;
mod navigation;
mod subscription;

pub use epoch::{ViewEpoch, ViewTicket};
pub use navigation::NavigationState;
pub use subscription::{SubscriptionState, ALREADY_SUBSCRIBED_MESSAGE};

/// The single per-session state container.
#[derive(Debug, Default)]
pub struct SiteStore {
    pub navigation: NavigationState,
    pub subscription: SubscriptionState,
    pub epoch: ViewEpoch,
}

impl SiteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route-change hook: collapse transient navigation UI and invalidate
    /// any fetches issued by the outgoing view. Subscription history is
    /// session-scoped and survives.
    pub fn route_changed(&mut self) {
        self.navigation.reset();
        self.epoch.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_initial() {
        let store = SiteStore::new();
        assert!(!store.navigation.is_menu_open);
        assert!(!store.subscription.is_loading);
        assert!(store.subscription.subscribed_emails.is_empty());
    }

    #[test]
    fn test_route_change_resets_navigation_only() {
        let mut store = SiteStore::new();
        store.navigation.toggle_menu();
        store.navigation.set_search_query("lawyers");
        store
            .subscription
            .subscribed_emails
            .insert("a@x.com".to_string());

        store.route_changed();

        assert!(!store.navigation.is_menu_open);
        assert!(store.navigation.search_query.is_empty());
        assert!(store.subscription.subscribed_emails.contains("a@x.com"));
    }

    #[test]
    fn test_route_change_invalidates_in_flight_tickets() {
        let mut store = SiteStore::new();
        let ticket = store.epoch.issue();
        assert!(store.epoch.is_current(&ticket));

        store.route_changed();
        assert!(!store.epoch.is_current(&ticket));
    }
}

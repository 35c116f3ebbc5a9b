//! Navigation UI slice: four independent toggle fields, no ordering
//! constraints between them. Closing the search also clears its query.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub is_menu_open: bool,
    pub is_services_open: bool,
    pub is_search_open: bool,
    pub search_query: String,
}

impl NavigationState {
    pub fn toggle_menu(&mut self) {
        self.is_menu_open = !self.is_menu_open;
    }

    pub fn close_menu(&mut self) {
        self.is_menu_open = false;
    }

    pub fn toggle_services(&mut self) {
        self.is_services_open = !self.is_services_open;
    }

    pub fn close_services(&mut self) {
        self.is_services_open = false;
    }

    /// Flips the search panel; when the flip closes it, the query is
    /// cleared so a reopened search starts blank.
    pub fn toggle_search(&mut self) {
        self.is_search_open = !self.is_search_open;
        if !self.is_search_open {
            self.search_query.clear();
        }
    }

    pub fn close_search(&mut self) {
        self.is_search_open = false;
        self.search_query.clear();
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Back to the initial state. Used on route change.
    pub fn reset(&mut self) {
        *self = NavigationState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let nav = NavigationState::default();
        assert!(!nav.is_menu_open);
        assert!(!nav.is_services_open);
        assert!(!nav.is_search_open);
        assert!(nav.search_query.is_empty());
    }

    #[test]
    fn test_toggle_menu_flips() {
        let mut nav = NavigationState::default();
        nav.toggle_menu();
        assert!(nav.is_menu_open);
        nav.toggle_menu();
        assert!(!nav.is_menu_open);
    }

    #[test]
    fn test_close_menu_is_idempotent() {
        let mut nav = NavigationState::default();
        nav.toggle_menu();

        nav.close_menu();
        let after_once = nav.clone();
        nav.close_menu();

        assert!(!nav.is_menu_open);
        assert_eq!(nav, after_once);
    }

    #[test]
    fn test_toggle_services_and_close() {
        let mut nav = NavigationState::default();
        nav.toggle_services();
        assert!(nav.is_services_open);
        nav.close_services();
        assert!(!nav.is_services_open);
        nav.close_services();
        assert!(!nav.is_services_open);
    }

    #[test]
    fn test_toggle_search_preserves_query_on_open() {
        let mut nav = NavigationState {
            search_query: "x".to_string(),
            ..NavigationState::default()
        };

        nav.toggle_search();
        assert!(nav.is_search_open);
        assert_eq!(nav.search_query, "x");
    }

    #[test]
    fn test_toggle_search_clears_query_on_close() {
        let mut nav = NavigationState {
            is_search_open: true,
            search_query: "x".to_string(),
            ..NavigationState::default()
        };

        nav.toggle_search();
        assert!(!nav.is_search_open);
        assert!(nav.search_query.is_empty());
    }

    #[test]
    fn test_close_search_clears_query() {
        let mut nav = NavigationState {
            is_search_open: true,
            search_query: "corporate law".to_string(),
            ..NavigationState::default()
        };

        nav.close_search();
        assert!(!nav.is_search_open);
        assert!(nav.search_query.is_empty());
    }

    #[test]
    fn test_set_search_query_unvalidated() {
        let mut nav = NavigationState::default();
        nav.set_search_query("  <anything> goes  ");
        assert_eq!(nav.search_query, "  <anything> goes  ");
    }

    #[test]
    fn test_reset_restores_initial_values() {
        let mut nav = NavigationState::default();
        nav.toggle_menu();
        nav.toggle_services();
        nav.toggle_search();
        nav.set_search_query("query");

        nav.reset();
        assert_eq!(nav, NavigationState::default());
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut nav = NavigationState::default();
        nav.toggle_menu();
        nav.toggle_search();

        nav.close_services();
        assert!(nav.is_menu_open);
        assert!(nav.is_search_open);
    }
}

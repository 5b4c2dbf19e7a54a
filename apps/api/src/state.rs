use propdesk_application::{AccessPolicy, NavigationService};

/// Shared application state.
#[derive(Clone, Default)]
pub struct AppState {
    pub navigation_service: NavigationService,
}

impl AppState {
    pub fn new(navigation_service: NavigationService) -> Self {
        Self { navigation_service }
    }

    pub fn access_policy(&self) -> &AccessPolicy {
        self.navigation_service.policy()
    }
}

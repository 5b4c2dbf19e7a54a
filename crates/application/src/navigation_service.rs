use propdesk_domain::NavigationSection;

use crate::{AccessPolicy, SessionContext, fallback_path_for_user, route_path};

/// Resolves sidebar entries and guarded landing paths for a session.
#[derive(Debug, Clone, Default)]
pub struct NavigationService {
    policy: AccessPolicy,
}

impl NavigationService {
    /// Creates a navigation service over an access policy.
    #[must_use]
    pub fn new(policy: AccessPolicy) -> Self {
        Self { policy }
    }

    /// Returns the access policy used by this service.
    #[must_use]
    pub fn policy(&self) -> &AccessPolicy {
        &self.policy
    }

    /// Returns the sidebar sections the session may open, in sidebar order.
    #[must_use]
    pub fn visible_sections(&self, session: &SessionContext) -> Vec<NavigationSection> {
        NavigationSection::all()
            .iter()
            .filter(|section| self.policy.can_session_access(session, section.path()))
            .copied()
            .collect()
    }

    /// Returns `requested_path` when the session may open it, otherwise the
    /// fallback landing path.
    #[must_use]
    pub fn landing_path<'a>(&self, session: &SessionContext, requested_path: &'a str) -> &'a str {
        let path = route_path(requested_path);

        if !path.is_empty() && self.policy.can_session_access(session, path) {
            requested_path
        } else {
            fallback_path_for_user()
        }
    }
}

#[cfg(test)]
mod tests {
    use propdesk_domain::{NavigationSection, Permission};

    use super::NavigationService;
    use crate::SessionContext;

    fn section_keys(sections: &[NavigationSection]) -> Vec<&'static str> {
        sections.iter().map(NavigationSection::key).collect()
    }

    #[test]
    fn admin_sees_every_section() {
        let service = NavigationService::default();
        let sections = service.visible_sections(&SessionContext::admin());

        assert_eq!(sections.len(), NavigationSection::all().len());
    }

    #[test]
    fn manager_without_permissions_sees_open_sections() {
        let service = NavigationService::default();
        let session = SessionContext::manager(Vec::<Permission>::new());

        assert_eq!(
            section_keys(&service.visible_sections(&session)),
            vec!["dashboard", "permissions"]
        );
    }

    #[test]
    fn manager_sections_follow_granted_permissions() {
        let service = NavigationService::default();
        let session = SessionContext::manager([Permission::EnquiryRead, Permission::MessageInteract]);

        assert_eq!(
            section_keys(&service.visible_sections(&session)),
            vec!["dashboard", "permissions", "enquiries", "messages"]
        );
    }

    #[test]
    fn landing_path_keeps_accessible_request() {
        let service = NavigationService::default();
        let session = SessionContext::manager([Permission::BrokerRead]);

        assert_eq!(
            service.landing_path(&session, "/brokers/9?tab=kyc"),
            "/brokers/9?tab=kyc"
        );
    }

    #[test]
    fn landing_path_falls_back_for_denied_request() {
        let service = NavigationService::default();
        let session = SessionContext::manager([Permission::BrokerRead]);

        assert_eq!(service.landing_path(&session, "/managers"), "/");
        assert_eq!(service.landing_path(&session, "/unknown"), "/");
        assert_eq!(service.landing_path(&session, ""), "/");
    }
}

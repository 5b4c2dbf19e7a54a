use propdesk_domain::{Permission, PermissionSet, UserType};

/// Explicit caller identity passed to the resolvers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    user_type: UserType,
    permissions: PermissionSet,
}

impl SessionContext {
    /// Creates a session context.
    #[must_use]
    pub fn new(user_type: UserType, permissions: PermissionSet) -> Self {
        Self {
            user_type,
            permissions,
        }
    }

    /// Creates an administrator session.
    #[must_use]
    pub fn admin() -> Self {
        Self::new(UserType::Admin, PermissionSet::empty())
    }

    /// Creates a manager session holding `permissions`.
    #[must_use]
    pub fn manager(permissions: impl IntoIterator<Item = Permission>) -> Self {
        Self::new(UserType::Manager, permissions.into_iter().collect())
    }

    /// Builds a session from transport values.
    ///
    /// Returns the permission tokens that were not recognized so callers can
    /// report them.
    #[must_use]
    pub fn from_transport<'a, I>(user_type: Option<&str>, permissions: I) -> (Self, Vec<String>)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let (permissions, unknown) = PermissionSet::from_transport_tokens(permissions);
        (
            Self::new(UserType::from_transport(user_type), permissions),
            unknown,
        )
    }

    /// Returns the session user type.
    #[must_use]
    pub fn user_type(&self) -> UserType {
        self.user_type
    }

    /// Returns the held permissions.
    #[must_use]
    pub fn permissions(&self) -> &PermissionSet {
        &self.permissions
    }
}

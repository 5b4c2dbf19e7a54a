use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use propdesk_core::AppError;
use serde::{Deserialize, Serialize};

/// Capability tokens granted to console managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Permission {
    /// Allows listing and viewing brokers.
    #[serde(rename = "broker:read")]
    BrokerRead,
    /// Allows editing broker profiles.
    #[serde(rename = "broker:update")]
    BrokerUpdate,
    /// Allows changing broker status.
    #[serde(rename = "broker:status")]
    BrokerStatus,
    /// Allows listing and viewing companies.
    #[serde(rename = "company:read")]
    CompanyRead,
    /// Allows changing company status.
    #[serde(rename = "company:status")]
    CompanyStatus,
    /// Allows listing and viewing properties.
    #[serde(rename = "property:read")]
    PropertyRead,
    /// Allows changing property status.
    #[serde(rename = "property:status")]
    PropertyStatus,
    /// Allows listing and viewing enquiries.
    #[serde(rename = "enquiry:read")]
    EnquiryRead,
    /// Allows changing enquiry status.
    #[serde(rename = "enquiry:status")]
    EnquiryStatus,
    /// Allows reading message threads.
    #[serde(rename = "message:read")]
    MessageRead,
    /// Allows replying in message threads.
    #[serde(rename = "message:interact")]
    MessageInteract,
}

impl Permission {
    /// Returns the stable transport value for this permission.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BrokerRead => "broker:read",
            Self::BrokerUpdate => "broker:update",
            Self::BrokerStatus => "broker:status",
            Self::CompanyRead => "company:read",
            Self::CompanyStatus => "company:status",
            Self::PropertyRead => "property:read",
            Self::PropertyStatus => "property:status",
            Self::EnquiryRead => "enquiry:read",
            Self::EnquiryStatus => "enquiry:status",
            Self::MessageRead => "message:read",
            Self::MessageInteract => "message:interact",
        }
    }

    /// Returns all known permissions.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Permission] = &[
            Permission::BrokerRead,
            Permission::BrokerUpdate,
            Permission::BrokerStatus,
            Permission::CompanyRead,
            Permission::CompanyStatus,
            Permission::PropertyRead,
            Permission::PropertyStatus,
            Permission::EnquiryRead,
            Permission::EnquiryStatus,
            Permission::MessageRead,
            Permission::MessageInteract,
        ];

        ALL
    }

    /// Parses a transport value into a permission.
    pub fn from_transport(value: &str) -> Result<Self, AppError> {
        Self::from_str(value)
    }
}

impl Display for Permission {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|permission| permission.as_str() == value)
            .ok_or_else(|| AppError::Validation(format!("unknown permission value '{value}'")))
    }
}

/// Console user categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    /// Holds every permission and bypasses route rules.
    #[default]
    Admin,
    /// Constrained by granted permissions and the route table.
    Manager,
}

impl UserType {
    /// Returns the stable transport value for this user type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
        }
    }

    /// Resolves an optional transport value.
    ///
    /// A missing or blank value resolves to [`UserType::Admin`]. Anything other
    /// than `admin` is treated as a manager so unknown roles never gain the
    /// administrator bypass.
    #[must_use]
    pub fn from_transport(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => Self::Admin,
            Some(value) if value.eq_ignore_ascii_case("admin") => Self::Admin,
            Some(_) => Self::Manager,
        }
    }

    /// Returns whether this user type bypasses permission checks.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// Unordered set of held permissions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(BTreeSet<Permission>);

impl PermissionSet {
    /// Creates an empty permission set.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a set from transport tokens, returning the tokens that were not
    /// recognized alongside it.
    #[must_use]
    pub fn from_transport_tokens<'a, I>(tokens: I) -> (Self, Vec<String>)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut permissions = BTreeSet::new();
        let mut unknown = Vec::new();

        for token in tokens {
            match Permission::from_transport(token.trim()) {
                Ok(permission) => {
                    permissions.insert(permission);
                }
                Err(_) => unknown.push(token.to_owned()),
            }
        }

        (Self(permissions), unknown)
    }

    /// Returns whether the set holds the permission.
    #[must_use]
    pub fn contains(&self, permission: Permission) -> bool {
        self.0.contains(&permission)
    }

    /// Returns whether the set holds at least one of the permissions.
    #[must_use]
    pub fn contains_any(&self, permissions: &[Permission]) -> bool {
        permissions
            .iter()
            .any(|permission| self.0.contains(permission))
    }

    /// Iterates the held permissions in stable order.
    pub fn iter(&self) -> impl Iterator<Item = Permission> + '_ {
        self.0.iter().copied()
    }

    /// Returns the number of held permissions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether no permission is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = Permission>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

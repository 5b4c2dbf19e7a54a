use std::borrow::Cow;

use propdesk_core::{AppError, AppResult};

use crate::Permission;

/// Access requirements for one top-level console section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRule {
    base_path: Cow<'static, str>,
    admin_only: bool,
    required_any: Cow<'static, [Permission]>,
}

impl RouteRule {
    /// Creates a validated route rule.
    ///
    /// The base path must start with `/`, must not be the root path and must
    /// not end with `/`.
    pub fn new(
        base_path: impl Into<String>,
        admin_only: bool,
        required_any: Vec<Permission>,
    ) -> AppResult<Self> {
        let base_path = base_path.into();
        validate_base_path(&base_path)?;

        Ok(Self {
            base_path: Cow::Owned(base_path),
            admin_only,
            required_any: Cow::Owned(required_any),
        })
    }

    /// Rule open to every authenticated user type.
    #[must_use]
    pub const fn open(base_path: &'static str) -> Self {
        Self {
            base_path: Cow::Borrowed(base_path),
            admin_only: false,
            required_any: Cow::Borrowed(&[]),
        }
    }

    /// Rule reserved for administrators.
    #[must_use]
    pub const fn admin_only(base_path: &'static str) -> Self {
        Self {
            base_path: Cow::Borrowed(base_path),
            admin_only: true,
            required_any: Cow::Borrowed(&[]),
        }
    }

    /// Rule granted by holding any one of `required_any`.
    #[must_use]
    pub const fn requires_any(
        base_path: &'static str,
        required_any: &'static [Permission],
    ) -> Self {
        Self {
            base_path: Cow::Borrowed(base_path),
            admin_only: false,
            required_any: Cow::Borrowed(required_any),
        }
    }

    /// Returns the section base path.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns whether only administrators may open the section.
    #[must_use]
    pub fn is_admin_only(&self) -> bool {
        self.admin_only
    }

    /// Returns the permissions of which at least one grants access.
    #[must_use]
    pub fn required_any(&self) -> &[Permission] {
        &self.required_any
    }

    /// Returns whether `path` is this section or lies below it.
    ///
    /// Matching respects segment boundaries: `/brokers` matches `/brokers` and
    /// `/brokers/42` but not `/brokersomething`.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        match path.strip_prefix(self.base_path()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }

    fn overlaps(&self, other: &Self) -> bool {
        self.matches(other.base_path()) || other.matches(self.base_path())
    }
}

/// Ordered, immutable set of route rules with at most one match per path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    rules: Cow<'static, [RouteRule]>,
}

const ADMIN_CONSOLE_RULES: &[RouteRule] = &[
    RouteRule::open("/permissions"),
    RouteRule::requires_any("/brokers", &[Permission::BrokerRead]),
    RouteRule::requires_any("/companies", &[Permission::CompanyRead]),
    RouteRule::requires_any("/properties", &[Permission::PropertyRead]),
    RouteRule::requires_any("/enquiries", &[Permission::EnquiryRead]),
    RouteRule::requires_any(
        "/messages",
        &[Permission::MessageRead, Permission::MessageInteract],
    ),
    RouteRule::admin_only("/managers"),
    RouteRule::admin_only("/developers"),
    RouteRule::admin_only("/projects"),
    RouteRule::admin_only("/packs"),
    RouteRule::admin_only("/jda-forms"),
    RouteRule::admin_only("/calendar"),
    RouteRule::admin_only("/notifications"),
];

static ADMIN_CONSOLE: RouteTable = RouteTable {
    rules: Cow::Borrowed(ADMIN_CONSOLE_RULES),
};

impl RouteTable {
    /// Creates a validated table.
    ///
    /// Rejects rules whose base paths overlap: at most one rule may govern a
    /// path.
    pub fn new(rules: Vec<RouteRule>) -> AppResult<Self> {
        for (index, rule) in rules.iter().enumerate() {
            validate_base_path(rule.base_path())?;

            if let Some(other) = rules[..index].iter().find(|other| other.overlaps(rule)) {
                return Err(AppError::Validation(format!(
                    "route rule '{}' overlaps route rule '{}'",
                    rule.base_path(),
                    other.base_path()
                )));
            }
        }

        Ok(Self {
            rules: Cow::Owned(rules),
        })
    }

    /// Returns the built-in route table of the admin console.
    #[must_use]
    pub fn admin_console() -> &'static Self {
        &ADMIN_CONSOLE
    }

    /// Returns the rules in declaration order.
    #[must_use]
    pub fn rules(&self) -> &[RouteRule] {
        &self.rules
    }

    /// Returns the rule governing `path`, if any.
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<&RouteRule> {
        self.rules.iter().find(|rule| rule.matches(path))
    }
}

fn validate_base_path(base_path: &str) -> AppResult<()> {
    if !base_path.starts_with('/') {
        return Err(AppError::Validation(format!(
            "route base path '{base_path}' must start with '/'"
        )));
    }

    if base_path == "/" || base_path.ends_with('/') {
        return Err(AppError::Validation(format!(
            "route base path '{base_path}' must name a section without a trailing '/'"
        )));
    }

    if base_path.contains(['?', '#']) {
        return Err(AppError::Validation(format!(
            "route base path '{base_path}' must not carry a query or fragment"
        )));
    }

    Ok(())
}

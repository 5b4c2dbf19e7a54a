/// Sidebar entry of the admin console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationSection {
    key: &'static str,
    label: &'static str,
    path: &'static str,
}

impl NavigationSection {
    const fn new(key: &'static str, label: &'static str, path: &'static str) -> Self {
        Self { key, label, path }
    }

    /// Returns the stable section key.
    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Returns the sidebar label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Returns the section landing path.
    #[must_use]
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Returns all console sections in sidebar order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[NavigationSection] = &[
            NavigationSection::new("dashboard", "Dashboard", "/"),
            NavigationSection::new("permissions", "Permissions", "/permissions"),
            NavigationSection::new("brokers", "Brokers", "/brokers"),
            NavigationSection::new("companies", "Companies", "/companies"),
            NavigationSection::new("properties", "Properties", "/properties"),
            NavigationSection::new("enquiries", "Enquiries", "/enquiries"),
            NavigationSection::new("messages", "Messages", "/messages"),
            NavigationSection::new("managers", "Managers", "/managers"),
            NavigationSection::new("developers", "Developers", "/developers"),
            NavigationSection::new("projects", "Projects", "/projects"),
            NavigationSection::new("packs", "Packs", "/packs"),
            NavigationSection::new("jda_forms", "JDA Forms", "/jda-forms"),
            NavigationSection::new("calendar", "Calendar", "/calendar"),
            NavigationSection::new("notifications", "Notifications", "/notifications"),
        ];

        ALL
    }
}

// Cartridge usage records

use serde::Serialize;

/// Insertion-ordered set of strings; re-inserting a value is a no-op
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UsageSet {
    values: Vec<String>,
}

impl UsageSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value if absent. Returns `true` when it was new.
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.contains(&value) {
            return false;
        }
        self.values.push(value);
        true
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.values
    }
}

impl<S: Into<String>> FromIterator<S> for UsageSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = UsageSet::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

/// A template as declared by its definition document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateRecord {
    pub id: String,
    pub description: String,
}

/// Where one cartridge template is used
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartridgeUsage {
    id: String,
    description: String,
    rules: UsageSet,
    sites: UsageSet,
    pages: UsageSet,
}

impl CartridgeUsage {
    pub fn new(template: TemplateRecord, rules: UsageSet) -> Self {
        Self {
            id: template.id,
            description: template.description,
            rules,
            sites: UsageSet::new(),
            pages: UsageSet::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn rules(&self) -> &UsageSet {
        &self.rules
    }

    pub fn sites(&self) -> &UsageSet {
        &self.sites
    }

    pub fn pages(&self) -> &UsageSet {
        &self.pages
    }

    pub fn add_site(&mut self, site: &str) -> bool {
        self.sites.insert(site)
    }

    pub fn add_page(&mut self, page: &str) -> bool {
        self.pages.insert(page)
    }

    /// Record a use on `page` of `site`
    pub fn add_usage(&mut self, site: &str, page: &str) {
        self.add_site(site);
        self.add_page(page);
    }

    pub fn is_used(&self) -> bool {
        !self.sites.is_empty()
    }
}

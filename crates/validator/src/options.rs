//! Execution options.
//!
//! Options change how a rule list runs, never the value itself.

use std::fmt;

/// A flag collected from a rule specification or passed directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RuleOption {
    /// Run the checks even when the value is empty.
    Required,
    /// Skip validation entirely.
    Ignore,
    /// Stop at the first failure.
    Lazy,
    /// An application-registered option, visible to custom validators.
    Custom(String),
}

impl RuleOption {
    /// Maps a built-in option name. Custom names are resolved by the registry.
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "required" => Some(Self::Required),
            "ignore" => Some(Self::Ignore),
            "lazy" => Some(Self::Lazy),
            _ => None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Required => "required",
            Self::Ignore => "ignore",
            Self::Lazy => "lazy",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for RuleOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Options active for one validation call. Insertion order is kept; duplicates
/// are collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet {
    items: Vec<RuleOption>,
}

impl OptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, option: RuleOption) {
        if !self.items.contains(&option) {
            self.items.push(option);
        }
    }

    pub fn has(&self, option: &RuleOption) -> bool {
        self.items.contains(option)
    }

    /// Checks by name, so custom validators can look for their own options.
    pub fn has_named(&self, name: &str) -> bool {
        self.items.iter().any(|o| o.name() == name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RuleOption> {
        self.items.iter()
    }
}

impl FromIterator<RuleOption> for OptionSet {
    fn from_iter<I: IntoIterator<Item = RuleOption>>(iter: I) -> Self {
        let mut set = Self::new();
        for option in iter {
            set.insert(option);
        }
        set
    }
}

//! Rule name resolution across validators, options and actions.
//!
//! Names resolve in a fixed order: built-in validators, application
//! validators, options, actions. The first namespace holding the name wins,
//! so a name registered in two namespaces is only reachable through the
//! earlier one.
//!
//! The process-wide registry is an immutable snapshot behind an [`ArcSwap`].
//! Registration clones the current snapshot, modifies the copy and swaps it
//! in; a validation call keeps using the snapshot it started with.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;

use crate::actions::{self, Action};
use crate::error::{Error, Result};
use crate::messages::MessageTable;
use crate::options::RuleOption;
use crate::validators::{self, BuiltinTable, Validator};

/// Default record tag read by the batch driver.
pub const DEFAULT_TAG: &str = "valid";

static BUILTINS: LazyLock<BuiltinTable> = LazyLock::new(validators::builtins);

static GLOBAL: LazyLock<ArcSwap<Registry>> =
    LazyLock::new(|| ArcSwap::from_pointee(Registry::new()));

/// What a rule name refers to.
#[derive(Debug, Clone)]
pub enum Resolved {
    /// A check. `builtin` validators receive the normalized value.
    Validator { validator: Validator, builtin: bool },
    Option(RuleOption),
    Action(Action),
}

/// Application-extensible rule namespaces plus messages and the default tag.
#[derive(Debug, Clone)]
pub struct Registry {
    validators: HashMap<String, Validator>,
    options: HashSet<String>,
    actions: HashMap<String, Action>,
    messages: MessageTable,
    default_tag: String,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// A registry seeded with the built-in actions, default messages and the
    /// `valid` tag. Built-in validators and options are always present.
    pub fn new() -> Self {
        Self {
            validators: HashMap::new(),
            options: HashSet::new(),
            actions: actions::builtins()
                .into_iter()
                .map(|(name, action)| (name.to_owned(), action))
                .collect(),
            messages: MessageTable::default(),
            default_tag: DEFAULT_TAG.to_owned(),
        }
    }

    /// Resolves a rule name, or fails with [`Error::UnknownRule`].
    pub fn resolve(&self, name: &str) -> Result<Resolved> {
        if let Some(validator) = BUILTINS.get(name) {
            return Ok(Resolved::Validator {
                validator: validator.clone(),
                builtin: true,
            });
        }
        if let Some(validator) = self.validators.get(name) {
            return Ok(Resolved::Validator {
                validator: validator.clone(),
                builtin: false,
            });
        }
        if let Some(option) = RuleOption::builtin(name) {
            return Ok(Resolved::Option(option));
        }
        if self.options.contains(name) {
            return Ok(Resolved::Option(RuleOption::Custom(name.to_owned())));
        }
        if let Some(action) = self.actions.get(name) {
            return Ok(Resolved::Action(action.clone()));
        }
        Err(Error::UnknownRule(name.to_owned()))
    }

    pub fn is_builtin(name: &str) -> bool {
        BUILTINS.contains_key(name)
    }

    pub fn has_validator(&self, name: &str) -> bool {
        Self::is_builtin(name) || self.validators.contains_key(name)
    }

    pub fn has_option(&self, name: &str) -> bool {
        RuleOption::builtin(name).is_some() || self.options.contains(name)
    }

    pub fn has_action(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    /// Registers an application validator.
    pub fn add_validator(&mut self, name: impl Into<String>, validator: Validator) {
        let name = name.into();
        if Self::is_builtin(&name) {
            tracing::warn!(rule = %name, "validator is shadowed by a built-in and will never run");
        }
        if self.validators.insert(name.clone(), validator).is_some() {
            tracing::warn!(rule = %name, "replacing registered validator");
        } else {
            tracing::debug!(rule = %name, "registered validator");
        }
    }

    /// Registers an application option name.
    pub fn add_option(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.has_validator(&name) {
            tracing::warn!(option = %name, "option is shadowed by a validator and will never apply");
        }
        if RuleOption::builtin(&name).is_none() && self.options.insert(name.clone()) {
            tracing::debug!(option = %name, "registered option");
        }
    }

    /// Registers or replaces a named action.
    pub fn add_action(&mut self, name: impl Into<String>, action: Action) {
        let name = name.into();
        if self.has_validator(&name) || self.has_option(&name) {
            tracing::warn!(
                action = %name,
                "action is shadowed by a validator or option and will never apply"
            );
        }
        let action = action.named(name.as_str());
        if self.actions.insert(name.clone(), action).is_some() {
            tracing::warn!(action = %name, "replacing registered action");
        } else {
            tracing::debug!(action = %name, "registered action");
        }
    }

    pub fn messages(&self) -> &MessageTable {
        &self.messages
    }

    pub fn messages_mut(&mut self) -> &mut MessageTable {
        &mut self.messages
    }

    /// Adds or replaces message templates.
    pub fn update_messages<I, K, V>(&mut self, templates: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.messages.update(templates);
    }

    pub fn default_tag(&self) -> &str {
        &self.default_tag
    }

    pub fn set_default_tag(&mut self, tag: impl Into<String>) {
        self.default_tag = tag.into();
    }
}

// ============================================================================
// GLOBAL REGISTRY
// ============================================================================

/// Current snapshot of the process-wide registry.
pub fn global() -> Arc<Registry> {
    GLOBAL.load_full()
}

/// Applies `update` to a copy of the global registry and publishes it.
///
/// Concurrent `configure` calls are serialized; none of their updates is lost.
pub fn configure<F>(update: F)
where
    F: Fn(&mut Registry),
{
    GLOBAL.rcu(|current| {
        let mut next = Registry::clone(current);
        update(&mut next);
        next
    });
    tracing::debug!("global registry updated");
}

pub fn add_validator(name: impl Into<String>, validator: Validator) {
    let name = name.into();
    configure(|registry| registry.add_validator(name.clone(), validator.clone()));
}

pub fn add_option(name: impl Into<String>) {
    let name = name.into();
    configure(|registry| registry.add_option(name.clone()));
}

pub fn add_action(name: impl Into<String>, action: Action) {
    let name = name.into();
    configure(|registry| registry.add_action(name.clone(), action.clone()));
}

pub fn update_messages<I, K, V>(templates: I)
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let templates: Vec<(String, String)> = templates
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect();
    configure(|registry| registry.update_messages(templates.iter().cloned()));
}

pub fn set_default_tag(tag: impl Into<String>) {
    let tag = tag.into();
    configure(|registry| registry.set_default_tag(tag.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(resolved: &Resolved) -> &'static str {
        match resolved {
            Resolved::Validator { builtin: true, .. } => "builtin",
            Resolved::Validator { builtin: false, .. } => "custom",
            Resolved::Option(_) => "option",
            Resolved::Action(_) => "action",
        }
    }

    #[test]
    fn resolves_each_namespace() {
        let registry = Registry::new();
        assert_eq!(kind(&registry.resolve("email").unwrap()), "builtin");
        assert_eq!(kind(&registry.resolve("lazy").unwrap()), "option");
        assert_eq!(kind(&registry.resolve("trim").unwrap()), "action");
    }

    #[test]
    fn unknown_and_empty_names_fail() {
        let registry = Registry::new();
        assert_eq!(
            registry.resolve("emial").unwrap_err(),
            Error::UnknownRule("emial".into())
        );
        assert!(registry.resolve("").is_err());
    }

    #[test]
    fn validators_win_over_options_and_actions() {
        let mut registry = Registry::new();
        registry.add_option("strict");
        registry.add_action("strict", Action::infallible(|v| v));
        assert_eq!(kind(&registry.resolve("strict").unwrap()), "option");

        registry.add_validator("strict", Validator::predicate(|_| true));
        assert_eq!(kind(&registry.resolve("strict").unwrap()), "custom");
    }

    #[test]
    fn builtins_cannot_be_overridden() {
        let mut registry = Registry::new();
        registry.add_validator("email", Validator::predicate(|_| true));
        assert_eq!(kind(&registry.resolve("email").unwrap()), "builtin");
    }

    #[test]
    fn registered_actions_carry_their_name() {
        let mut registry = Registry::new();
        registry.add_action("double", Action::infallible(|v| v));
        match registry.resolve("double").unwrap() {
            Resolved::Action(action) => assert_eq!(action.name(), Some("double")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn global_snapshots_are_isolated() {
        let before = global();
        add_validator(
            "registry_test_positive",
            Validator::predicate(|v| v.as_f64().is_some_and(|n| n > 0.0)),
        );
        assert!(!before.has_validator("registry_test_positive"));
        assert!(global().has_validator("registry_test_positive"));
        assert!(matches!(
            global().resolve("registry_test_positive"),
            Ok(Resolved::Validator { builtin: false, .. })
        ));
    }
}

//! Execution orchestrator.
//!
//! A call turns its arguments into a [`Plan`] (ordered validation steps, the
//! active options and the queued actions) and runs it:
//!
//! 1. apply actions in order, each feeding the next;
//! 2. `ignore` ends the call with no failures;
//! 3. without `required`, an empty value ends the call with no failures
//!    (a set optional is not empty, whatever it holds);
//! 4. run the steps in order, stopping after the first failure under `lazy`.
//!
//! Fatal errors from any stage abort the call. A built-in that cannot inspect
//! an unset value reports an ordinary failure instead.

use crate::actions::Action;
use crate::error::{CheckError, Error, Result};
use crate::failure::ValidationErrors;
use crate::metrics;
use crate::options::{OptionSet, RuleOption};
use crate::registry::{Registry, Resolved};
use crate::rule::{self, Rule};
use crate::validators::{Check, Validator};
use crate::value::Value;

/// Rule name reported for direct validators.
pub const CUSTOM_RULE: &str = "custom";

/// One argument to a validation call.
#[derive(Debug, Clone)]
pub enum Arg {
    /// A rule specification such as `"required|max:255"`.
    Rules(String),
    /// A validator passed by value, with its positional parameters.
    Validator {
        validator: Validator,
        params: Vec<String>,
    },
    Option(RuleOption),
    Action(Action),
    /// A rule built without parsing, e.g. from [`crate::is`].
    Rule(Rule),
}

/// Attaches parameters to a direct validator.
pub fn by<I, S>(validator: Validator, params: I) -> Arg
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Arg::Validator {
        validator,
        params: params.into_iter().map(Into::into).collect(),
    }
}

impl From<&str> for Arg {
    fn from(spec: &str) -> Self {
        Self::Rules(spec.to_owned())
    }
}

impl From<String> for Arg {
    fn from(spec: String) -> Self {
        Self::Rules(spec)
    }
}

impl From<&String> for Arg {
    fn from(spec: &String) -> Self {
        Self::Rules(spec.clone())
    }
}

impl From<Rule> for Arg {
    fn from(rule: Rule) -> Self {
        Self::Rule(rule)
    }
}

impl From<RuleOption> for Arg {
    fn from(option: RuleOption) -> Self {
        Self::Option(option)
    }
}

impl From<Validator> for Arg {
    fn from(validator: Validator) -> Self {
        Self::Validator {
            validator,
            params: Vec::new(),
        }
    }
}

impl From<Action> for Arg {
    fn from(action: Action) -> Self {
        Self::Action(action)
    }
}

#[derive(Debug, Clone)]
struct Step {
    rule: String,
    params: Vec<String>,
    validator: Validator,
    builtin: bool,
}

/// Resolved work for a single validation call.
#[derive(Debug, Clone)]
pub struct Plan<'r> {
    registry: &'r Registry,
    steps: Vec<Step>,
    options: OptionSet,
    actions: Vec<Action>,
}

impl<'r> Plan<'r> {
    /// Resolves every argument against `registry`.
    pub fn build<I>(registry: &'r Registry, args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        let mut plan = Self {
            registry,
            steps: Vec::new(),
            options: OptionSet::new(),
            actions: Vec::new(),
        };

        for arg in args {
            match arg.into() {
                Arg::Rules(spec) => {
                    for rule in rule::parse(&spec) {
                        plan.add_rule(rule)?;
                    }
                }
                Arg::Rule(rule) => plan.add_rule(rule)?,
                Arg::Validator { validator, params } => plan.steps.push(Step {
                    rule: CUSTOM_RULE.to_owned(),
                    params,
                    validator,
                    builtin: false,
                }),
                Arg::Option(option) => plan.options.insert(option),
                Arg::Action(action) => plan.actions.push(action),
            }
        }

        tracing::debug!(
            steps = plan.steps.len(),
            options = plan.options.len(),
            actions = plan.actions.len(),
            "built validation plan"
        );
        Ok(plan)
    }

    fn add_rule(&mut self, rule: Rule) -> Result<()> {
        match self.registry.resolve(&rule.name)? {
            Resolved::Validator { validator, builtin } => self.steps.push(Step {
                rule: rule.name,
                params: rule.params,
                validator,
                builtin,
            }),
            Resolved::Option(option) => self.options.insert(option),
            Resolved::Action(action) => self.actions.push(action),
        }
        Ok(())
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Rule names of the validation steps, in run order.
    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|s| s.rule.as_str())
    }

    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    /// Runs the plan against `value`.
    pub fn run(&self, value: Value) -> Result<ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let mut value = value;
        for action in &self.actions {
            value = action.apply(value)?;
        }

        if self.options.has(&RuleOption::Ignore) {
            tracing::trace!("ignored");
            return Ok(errors);
        }

        if !self.options.has(&RuleOption::Required) && metrics::is_empty(&value) {
            tracing::trace!("empty value without `required`, skipping checks");
            return Ok(errors);
        }

        let normalized = value.resolved();
        let lazy = self.options.has(&RuleOption::Lazy);
        let messages = self.registry.messages();
        for step in &self.steps {
            let check = Check::new(&step.rule, &step.params, &self.options, messages);
            let target = if step.builtin { normalized } else { &value };
            let outcome = match step.validator.call(target, &check) {
                // Nothing to inspect: an unset value fails the rule instead of aborting.
                Err(CheckError::Fatal(Error::TypeMismatch { .. })) if target.is_null() => {
                    Err(CheckError::Invalid(check.fail()))
                }
                outcome => outcome,
            };
            match outcome {
                Ok(()) => {}
                Err(CheckError::Invalid(failure)) => {
                    tracing::trace!(rule = %step.rule, message = %failure.message, "check failed");
                    errors.push(failure);
                    if lazy {
                        break;
                    }
                }
                Err(CheckError::Fatal(err)) => return Err(err),
            }
        }

        Ok(errors)
    }
}

/// Validates `value` against `args` using `registry`.
pub fn validate_with<I>(registry: &Registry, value: Value, args: I) -> Result<ValidationErrors>
where
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    Plan::build(registry, args)?.run(value)
}

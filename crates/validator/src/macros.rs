//! Argument list macro.

/// Builds a `Vec<Arg>` from mixed validation arguments.
///
/// Each element may be anything convertible into [`Arg`](crate::engine::Arg):
/// a rule specification string, a [`Rule`](crate::rule::Rule), a
/// [`RuleOption`](crate::options::RuleOption), a
/// [`Validator`](crate::validators::Validator), an
/// [`Action`](crate::actions::Action) or the result of [`by`](crate::engine::by).
///
/// ```rust,ignore
/// use tagcheck_validator::{is, rules, validate, Action};
///
/// let shout = Action::infallible(|v| v);
/// let errors = validate(&"hi", rules!["required|min:2", is::alpha(), shout])?;
/// assert!(errors.is_empty());
/// ```
#[macro_export]
macro_rules! rules {
    () => {
        ::std::vec::Vec::<$crate::engine::Arg>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::engine::Arg::from($arg)),+]
    };
}

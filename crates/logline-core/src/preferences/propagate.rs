//! Copy a caller's preferences into the scope of a nested call

use std::collections::BTreeSet;

use super::catalog::{self, CATALOG};
use super::scope::PreferenceScope;

/// The invoking call: its scope plus the parameters it bound explicitly
#[derive(Debug, Clone, Default)]
pub struct Invocation {
    scope: PreferenceScope,
    bound: BTreeSet<String>,
}

impl Invocation {
    pub fn new(scope: PreferenceScope) -> Self {
        Self {
            scope,
            bound: BTreeSet::new(),
        }
    }

    /// Mark a parameter as explicitly supplied in this call
    pub fn bind(mut self, parameter: impl AsRef<str>) -> Self {
        self.bound.insert(parameter.as_ref().to_ascii_lowercase());
        self
    }

    pub fn is_bound(&self, parameter: &str) -> bool {
        self.bound.contains(&parameter.to_ascii_lowercase())
    }

    pub fn scope(&self) -> &PreferenceScope {
        &self.scope
    }

    pub fn scope_mut(&mut self) -> &mut PreferenceScope {
        &mut self.scope
    }
}

/// Copy the caller's preference variables into `target`
///
/// A catalog variable is copied when
/// `(it has no alias || its alias is not bound) && (no filter || filter names it)`.
/// An explicitly bound parameter already states the caller's intent, so the
/// ambient variable must not override it. With a filter, names outside the
/// catalog are looked up and copied too. Variables missing from the caller
/// scope are skipped.
///
/// Returns the names that were copied, in copy order.
///
/// # Example
///
/// ```
/// use logline_core::preferences::{
///     propagate_caller_preferences, ActionPreference, Invocation, PreferenceScope,
/// };
///
/// let mut caller_scope = PreferenceScope::new();
/// caller_scope.set("VerbosePreference", ActionPreference::Continue);
/// let caller = Invocation::new(caller_scope);
///
/// let mut local = PreferenceScope::session_defaults();
/// propagate_caller_preferences(&caller, &mut local, None);
/// assert_eq!(local.action("VerbosePreference"), Some(ActionPreference::Continue));
/// ```
pub fn propagate_caller_preferences(
    caller: &Invocation,
    target: &mut PreferenceScope,
    filter: Option<&[&str]>,
) -> Vec<String> {
    let filter: Option<BTreeSet<String>> =
        filter.map(|names| names.iter().map(|n| n.to_ascii_lowercase()).collect());
    let in_filter = |name: &str| match &filter {
        None => true,
        Some(names) => names.contains(&name.to_ascii_lowercase()),
    };

    let mut copied = Vec::new();

    for entry in CATALOG {
        let not_overridden = match entry.bound_alias {
            None => true,
            Some(alias) => !caller.is_bound(alias),
        };
        if not_overridden && in_filter(entry.name) {
            if let Some(value) = caller.scope.get(entry.name) {
                target.set(entry.name, value.clone());
                copied.push(entry.name.to_string());
            }
        }
    }

    if let Some(names) = &filter {
        for name in names {
            if catalog::is_catalog_variable(name) {
                continue;
            }
            if let Some(value) = caller.scope.get(name) {
                let display = caller
                    .scope
                    .names()
                    .find(|n| n.eq_ignore_ascii_case(name))
                    .unwrap_or(name.as_str())
                    .to_string();
                target.set(display.clone(), value.clone());
                copied.push(display);
            }
        }
    }

    copied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::ActionPreference;
    use serde_json::json;

    fn caller_scope() -> PreferenceScope {
        let mut scope = PreferenceScope::new();
        scope.set("VerbosePreference", ActionPreference::Continue);
        scope.set("ErrorActionPreference", ActionPreference::Stop);
        scope.set("MaximumHistoryCount", 512);
        scope.set("DeployTarget", "staging");
        scope
    }

    #[test]
    fn test_copies_catalog_variables() {
        let caller = Invocation::new(caller_scope());
        let mut local = PreferenceScope::session_defaults();

        let copied = propagate_caller_preferences(&caller, &mut local, None);

        assert_eq!(local.action("VerbosePreference"), Some(ActionPreference::Continue));
        assert_eq!(local.action("ErrorActionPreference"), Some(ActionPreference::Stop));
        assert_eq!(local.get("MaximumHistoryCount"), Some(&json!(512)));
        assert!(copied.contains(&"VerbosePreference".to_string()));
        assert_eq!(copied.len(), 3);
    }

    #[test]
    fn test_non_catalog_names_need_a_filter() {
        let caller = Invocation::new(caller_scope());
        let mut local = PreferenceScope::new();

        propagate_caller_preferences(&caller, &mut local, None);
        assert!(!local.contains("DeployTarget"));

        propagate_caller_preferences(&caller, &mut local, Some(&["deploytarget"][..]));
        assert_eq!(local.get("DeployTarget"), Some(&json!("staging")));
        assert_eq!(local.names().find(|n| n.starts_with('D')), Some("DeployTarget"));
    }

    #[test]
    fn test_bound_parameter_is_not_overridden() {
        let caller = Invocation::new(caller_scope()).bind("Verbose");
        let mut local = PreferenceScope::session_defaults();

        let copied = propagate_caller_preferences(&caller, &mut local, None);

        assert_eq!(local.action("VerbosePreference"), Some(ActionPreference::SilentlyContinue));
        assert_eq!(local.action("ErrorActionPreference"), Some(ActionPreference::Stop));
        assert!(!copied.contains(&"VerbosePreference".to_string()));
    }

    #[test]
    fn test_bound_parameter_blocks_even_when_filtered_in() {
        let caller = Invocation::new(caller_scope()).bind("erroraction");
        let mut local = PreferenceScope::new();

        let copied =
            propagate_caller_preferences(&caller, &mut local, Some(&["ErrorActionPreference"][..]));

        assert!(copied.is_empty());
        assert!(!local.contains("ErrorActionPreference"));
    }

    #[test]
    fn test_filter_limits_catalog_copies() {
        let caller = Invocation::new(caller_scope());
        let mut local = PreferenceScope::new();

        let copied = propagate_caller_preferences(&caller, &mut local, Some(&["VerbosePreference"][..]));

        assert_eq!(copied, vec!["VerbosePreference".to_string()]);
        assert!(!local.contains("ErrorActionPreference"));
        assert!(!local.contains("MaximumHistoryCount"));
    }

    #[test]
    fn test_absent_variables_are_skipped() {
        let caller = Invocation::new(PreferenceScope::new());
        let mut local = PreferenceScope::session_defaults();
        let before = local.clone();

        let copied = propagate_caller_preferences(&caller, &mut local, Some(&["Missing", "OFS"][..]));

        assert!(copied.is_empty());
        assert_eq!(local, before);
    }

    #[test]
    fn test_unaliased_variable_copied_regardless_of_bindings() {
        let mut scope = PreferenceScope::new();
        scope.set("OFS", "|");
        let caller = Invocation::new(scope).bind("OFS");
        let mut local = PreferenceScope::new();

        propagate_caller_preferences(&caller, &mut local, None);
        assert_eq!(local.get("OFS"), Some(&json!("|")));
    }
}

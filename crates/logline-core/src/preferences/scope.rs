//! Preference scopes and action preferences

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::LogError;

/// How a stream reacts to a write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionPreference {
    SilentlyContinue,
    Stop,
    Continue,
    Inquire,
    Ignore,
    Suspend,
    Break,
}

impl ActionPreference {
    const ALL: [ActionPreference; 7] = [
        ActionPreference::SilentlyContinue,
        ActionPreference::Stop,
        ActionPreference::Continue,
        ActionPreference::Inquire,
        ActionPreference::Ignore,
        ActionPreference::Suspend,
        ActionPreference::Break,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionPreference::SilentlyContinue => "SilentlyContinue",
            ActionPreference::Stop => "Stop",
            ActionPreference::Continue => "Continue",
            ActionPreference::Inquire => "Inquire",
            ActionPreference::Ignore => "Ignore",
            ActionPreference::Suspend => "Suspend",
            ActionPreference::Break => "Break",
        }
    }

    /// Whether content written under this preference reaches the host
    pub fn is_visible(&self) -> bool {
        !matches!(self, ActionPreference::SilentlyContinue | ActionPreference::Ignore)
    }

    /// Interpret a stored value: a name or its numeric code
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => s.parse().ok(),
            Value::Number(n) => n
                .as_u64()
                .and_then(|code| Self::ALL.get(usize::try_from(code).ok()?).copied()),
            _ => None,
        }
    }
}

impl fmt::Display for ActionPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionPreference {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LogError::UnknownPreference(s.to_string()))
    }
}

impl From<ActionPreference> for Value {
    fn from(pref: ActionPreference) -> Value {
        Value::String(pref.as_str().to_string())
    }
}

/// Named settings visible to a call
///
/// Names are case-insensitive; the spelling of the most recent `set` is
/// kept for display. Values are arbitrary JSON so numeric limits, strings
/// and flags all fit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferenceScope {
    vars: BTreeMap<String, (String, Value)>,
}

impl PreferenceScope {
    /// Create an empty scope
    ///
    /// Streams whose preference is unset are shown, so an empty scope
    /// echoes every level.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope seeded with the usual interactive-session defaults
    ///
    /// Verbose and debug output are silent, warnings and errors continue.
    pub fn session_defaults() -> Self {
        let mut scope = Self::new();
        scope.set("ErrorActionPreference", ActionPreference::Continue);
        scope.set("WarningPreference", ActionPreference::Continue);
        scope.set("VerbosePreference", ActionPreference::SilentlyContinue);
        scope.set("DebugPreference", ActionPreference::SilentlyContinue);
        scope.set("ProgressPreference", ActionPreference::Continue);
        scope.set("ConfirmPreference", "High");
        scope.set("WhatIfPreference", false);
        scope
    }

    /// Build a scope from a name/value map, e.g. a config file section
    pub fn from_map<I, K>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let mut scope = Self::new();
        for (name, value) in vars {
            scope.set(name.into(), value);
        }
        scope
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(&name.to_ascii_lowercase()).map(|(_, value)| value)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        self.vars.insert(name.to_ascii_lowercase(), (name, value.into()));
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.vars.remove(&name.to_ascii_lowercase()).map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(&name.to_ascii_lowercase())
    }

    /// Variable names as they were last set
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vars.values().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Typed view of an action preference; unparseable values read as unset
    pub fn action(&self, name: &str) -> Option<ActionPreference> {
        self.get(name).and_then(ActionPreference::from_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_action_preference_parse() {
        assert_eq!("stop".parse::<ActionPreference>().unwrap(), ActionPreference::Stop);
        assert_eq!(
            "SILENTLYCONTINUE".parse::<ActionPreference>().unwrap(),
            ActionPreference::SilentlyContinue
        );
        assert!(matches!(
            "loud".parse::<ActionPreference>(),
            Err(LogError::UnknownPreference(_))
        ));
    }

    #[test]
    fn test_action_preference_from_numeric_code() {
        assert_eq!(ActionPreference::from_value(&json!(0)), Some(ActionPreference::SilentlyContinue));
        assert_eq!(ActionPreference::from_value(&json!(2)), Some(ActionPreference::Continue));
        assert_eq!(ActionPreference::from_value(&json!(42)), None);
        assert_eq!(ActionPreference::from_value(&json!(true)), None);
    }

    #[test]
    fn test_scope_is_case_insensitive() {
        let mut scope = PreferenceScope::new();
        scope.set("VerbosePreference", ActionPreference::Continue);
        assert!(scope.contains("verbosepreference"));
        assert_eq!(scope.action("VERBOSEPREFERENCE"), Some(ActionPreference::Continue));

        scope.set("verbosepreference", "Stop");
        assert_eq!(scope.len(), 1);
        assert_eq!(scope.names().collect::<Vec<_>>(), vec!["verbosepreference"]);
        assert_eq!(scope.action("VerbosePreference"), Some(ActionPreference::Stop));

        assert_eq!(scope.remove("VERBOSEPreference"), Some(json!("Stop")));
        assert!(scope.is_empty());
    }

    #[test]
    fn test_session_defaults() {
        let scope = PreferenceScope::session_defaults();
        assert_eq!(scope.action("VerbosePreference"), Some(ActionPreference::SilentlyContinue));
        assert_eq!(scope.action("DebugPreference"), Some(ActionPreference::SilentlyContinue));
        assert_eq!(scope.action("WarningPreference"), Some(ActionPreference::Continue));
        assert_eq!(scope.get("WhatIfPreference"), Some(&json!(false)));
    }

    #[test]
    fn test_from_map() {
        let scope = PreferenceScope::from_map([
            ("MaximumHistoryCount", json!(4096)),
            ("OFS", json!(",")),
        ]);
        assert_eq!(scope.get("maximumhistorycount"), Some(&json!(4096)));
        assert_eq!(scope.action("OFS"), None);
    }
}

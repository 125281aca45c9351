//! Catalog of preference variables a caller passes down to nested calls

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// A known preference variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferenceVariable {
    /// Variable name, e.g. `VerbosePreference`
    pub name: &'static str,
    /// Call parameter that sets the same behaviour explicitly, e.g. `Verbose`
    pub bound_alias: Option<&'static str>,
}

const fn var(name: &'static str) -> PreferenceVariable {
    PreferenceVariable { name, bound_alias: None }
}

const fn aliased(name: &'static str, alias: &'static str) -> PreferenceVariable {
    PreferenceVariable { name, bound_alias: Some(alias) }
}

/// Every variable copied by default
pub static CATALOG: &[PreferenceVariable] = &[
    var("ErrorView"),
    var("FormatEnumerationLimit"),
    var("LogCommandHealthEvent"),
    var("LogCommandLifecycleEvent"),
    var("LogEngineHealthEvent"),
    var("LogEngineLifecycleEvent"),
    var("LogProviderHealthEvent"),
    var("LogProviderLifecycleEvent"),
    var("MaximumAliasCount"),
    var("MaximumDriveCount"),
    var("MaximumErrorCount"),
    var("MaximumFunctionCount"),
    var("MaximumHistoryCount"),
    var("MaximumVariableCount"),
    var("OFS"),
    var("OutputEncoding"),
    var("ProgressPreference"),
    var("PSDefaultParameterValues"),
    var("PSEmailServer"),
    var("PSModuleAutoLoadingPreference"),
    var("PSSessionApplicationName"),
    var("PSSessionConfigurationName"),
    var("PSSessionOption"),
    aliased("ErrorActionPreference", "ErrorAction"),
    aliased("DebugPreference", "Debug"),
    aliased("ConfirmPreference", "Confirm"),
    aliased("WhatIfPreference", "WhatIf"),
    aliased("VerbosePreference", "Verbose"),
    aliased("WarningPreference", "WarningAction"),
];

/// Case-insensitive index into `CATALOG`
static INDEX: Lazy<HashMap<String, &'static PreferenceVariable>> = Lazy::new(|| {
    CATALOG
        .iter()
        .map(|entry| (entry.name.to_ascii_lowercase(), entry))
        .collect()
});

/// Look up a catalog entry by name, ignoring case
pub fn lookup(name: &str) -> Option<&'static PreferenceVariable> {
    INDEX.get(&name.to_ascii_lowercase()).copied()
}

/// Whether `name` is one of the catalog variables
pub fn is_catalog_variable(name: &str) -> bool {
    lookup(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size_and_uniqueness() {
        assert_eq!(CATALOG.len(), 29);
        assert_eq!(INDEX.len(), CATALOG.len());
    }

    #[test]
    fn test_catalog_aliases() {
        assert_eq!(lookup("verbosepreference").unwrap().bound_alias, Some("Verbose"));
        assert_eq!(lookup("ErrorActionPreference").unwrap().bound_alias, Some("ErrorAction"));
        assert_eq!(lookup("WarningPreference").unwrap().bound_alias, Some("WarningAction"));
        assert_eq!(lookup("OFS").unwrap().bound_alias, None);
        assert!(!is_catalog_variable("MyCustomSetting"));
    }
}

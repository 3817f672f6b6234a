use crate::error::ConfigError;
use crate::name::JAVA_LANG;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for planning the imports of one generated compilation unit.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(default)]
pub struct PlannerConfig {
    /// Package of the unit being generated; empty for the unnamed package.
    pub package: String,
    /// Packages whose classes are visible without an import.
    pub implicit_packages: Vec<String>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            package: String::new(),
            implicit_packages: vec![JAVA_LANG.to_string()],
        }
    }
}

impl PlannerConfig {
    pub fn for_package(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            ..Self::default()
        }
    }

    /// Read a JSON configuration file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: PlannerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_package_name(&self.package, true) {
            return Err(ConfigError::Invalid(format!(
                "bad package name `{}`",
                self.package
            )));
        }
        if let Some(bad) = self
            .implicit_packages
            .iter()
            .find(|p| !is_package_name(p, false))
        {
            return Err(ConfigError::Invalid(format!(
                "bad implicit package `{}`",
                bad
            )));
        }
        Ok(())
    }

    pub fn is_implicit(&self, package: &str) -> bool {
        self.implicit_packages.iter().any(|p| p == package)
    }
}

fn is_package_name(s: &str, allow_empty: bool) -> bool {
    if s.is_empty() {
        return allow_empty;
    }
    s.split('.').all(|segment| {
        let mut chars = segment.chars();
        chars
            .next()
            .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
            && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
    })
}

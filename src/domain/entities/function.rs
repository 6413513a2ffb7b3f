//! Remote function state as reported by the runtime

use std::fmt;

/// An existing function in the runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionHandle {
    pub name: String,
    pub arn: String,
    pub runtime: Option<String>,
}

/// A function version: `$LATEST` or an immutable published number
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionVersion(String);

impl FunctionVersion {
    pub const LATEST: &'static str = "$LATEST";

    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_latest(&self) -> bool {
        self.0 == Self::LATEST
    }

    /// Published version number, `None` for `$LATEST`
    pub fn number(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for FunctionVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An alias and the version it currently points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasInfo {
    pub name: String,
    pub function_version: FunctionVersion,
}

impl AliasInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            function_version: FunctionVersion::new(version),
        }
    }
}

/// What syncing an alias did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AliasSync {
    /// The alias did not exist and was created
    Created,
    /// The alias was moved away from the given version
    Moved { from: FunctionVersion },
    /// The alias already pointed at the version
    Unchanged,
}

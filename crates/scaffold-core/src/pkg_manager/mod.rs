//! Package manager detection and command rewriting
//!
//! This module provides:
//! - Detection of the invoking package manager from its user-agent string
//! - Rewriting of npm-generic command templates into the detected manager's
//!   concrete invocation syntax

pub mod command;

pub use command::{rewrite, split_with_target};

/// Package manager assumed when the user agent is absent or unreadable
pub const DEFAULT_PKG_MANAGER: &str = "npm";

/// Name and version of the package manager that invoked this run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PkgManagerInfo {
    pub name: String,
    pub version: String,
}

impl PkgManagerInfo {
    /// Parse a package-manager user-agent string of the form
    /// `"<name>/<version> ..."`. Only the first whitespace-delimited token is
    /// read; a token without a `/` yields an empty version. Empty or absent
    /// input yields `None`.
    pub fn from_user_agent(user_agent: Option<&str>) -> Option<Self> {
        let ua = user_agent?;
        if ua.is_empty() {
            return None;
        }
        let first = ua.split(' ').next()?;
        let (name, version) = first.split_once('/').unwrap_or((first, ""));
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            version: version.to_string(),
        })
    }

    /// Whether this is yarn at major version 1 (classic yarn)
    pub fn is_yarn1(&self) -> bool {
        self.name == "yarn" && self.version.starts_with("1.")
    }
}

/// Effective manager name for an optional detection result
pub fn name_or_default(info: Option<&PkgManagerInfo>) -> &str {
    info.map_or(DEFAULT_PKG_MANAGER, |i| i.name.as_str())
}

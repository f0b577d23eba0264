//! Scaffold Core - Shared library for the create-loom scaffolding CLI
//!
//! This library provides the core functionality for materializing projects
//! from a compiled-in template catalog. It is organized into layers:
//!
//! - **Layer 1: Pure resolution** - Name normalization, catalog lookup, and
//!   package-manager detection/command rewriting
//! - **Layer 2: Filesystem operations** - Target directory classification and
//!   clearing, template materialization with rename rules
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompt flow
//!   (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompt flow
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffold_core::{name, templates};
//!
//! let target = name::format_target_dir("my-app/");
//! let variant = templates::find_variant("vue").expect("known template");
//! templates::materialize(&template_dir, &target_dir, "my-app")?;
//! ```

pub mod error;
pub mod name;
pub mod pkg_manager;
pub mod templates;
pub mod workdir;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::{is_cancelled, ScaffoldError};
pub use pkg_manager::{PkgManagerInfo, DEFAULT_PKG_MANAGER};
pub use templates::{find_variant, list_template_ids, Framework, TemplateVariant, FRAMEWORKS};
pub use workdir::DirState;

#[cfg(feature = "tui")]
pub use tui::{run, CreateArgs};

/// Target directory used when the user submits nothing at the prompt
pub const DEFAULT_TARGET_DIR: &str = "loom-project";

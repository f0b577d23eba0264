//! Template catalog and materialization
//!
//! This module provides:
//! - The compiled-in framework/variant catalog
//! - File materialization with rename rules and `package.json` patching

pub mod catalog;
pub mod materialize;

pub use catalog::{find_variant, list_template_ids, Framework, TemplateVariant, FRAMEWORKS};
pub use materialize::{copy_entry, materialize, RENAME_FILES};

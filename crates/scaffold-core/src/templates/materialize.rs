//! Copying a template directory into the target project
//!
//! Materialization is two-phase: every top-level entry except `package.json`
//! is bulk-copied with rename rules applied, then `package.json` is parsed,
//! its `name` field replaced with the resolved package name, and the result
//! written separately. The derived name therefore never leaks into any other
//! copied file, and `package.json` is never naively byte-copied.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Source filenames renamed on disk. npm strips certain dotfiles from
/// published packages, so templates ship them under a reserved name.
pub const RENAME_FILES: &[(&str, &str)] = &[("_gitignore", ".gitignore")];

/// Destination name for a template source filename
fn renamed(file_name: &str) -> &str {
    RENAME_FILES
        .iter()
        .find(|(from, _)| *from == file_name)
        .map(|(_, to)| *to)
        .unwrap_or(file_name)
}

/// Copy a file or an entire directory tree. Files overwrite an existing
/// destination; directories are created with their ancestors as needed.
pub fn copy_entry(src: &Path, dest: &Path) -> Result<()> {
    if src.is_dir() {
        copy_dir(src, dest)
    } else {
        fs::copy(src, dest)
            .with_context(|| format!("Failed to copy {}", src.display()))?;
        Ok(())
    }
}

fn copy_dir(src: &Path, dest: &Path) -> Result<()> {
    for entry in WalkDir::new(src) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .context("walked entry outside template root")?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("Failed to create directory: {}", target.display()))?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            fs::copy(entry.path(), &target)
                .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
        }
    }
    Ok(())
}

/// Write one top-level template entry into the target, resolving the rename
/// map. `content` replaces the source file when given (used only for the
/// patched `package.json`).
fn write_entry(
    template_dir: &Path,
    target_dir: &Path,
    file_name: &str,
    content: Option<&str>,
) -> Result<()> {
    let dest = target_dir.join(renamed(file_name));
    match content {
        Some(text) => fs::write(&dest, text)
            .with_context(|| format!("Failed to write {}", dest.display())),
        None => copy_entry(&template_dir.join(file_name), &dest),
    }
}

/// Materialize `template_dir` into `target_dir`, patching `package.json`
/// with the resolved package name. Returns the written top-level names with
/// rename rules applied.
pub fn materialize(
    template_dir: &Path,
    target_dir: &Path,
    package_name: &str,
) -> Result<Vec<String>> {
    fs::create_dir_all(target_dir)
        .with_context(|| format!("Failed to create {}", target_dir.display()))?;

    let mut written = Vec::new();

    for entry in fs::read_dir(template_dir)
        .with_context(|| format!("Failed to read template {}", template_dir.display()))?
    {
        let entry = entry?;
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if file_name == "package.json" {
            continue;
        }
        write_entry(template_dir, target_dir, &file_name, None)?;
        written.push(renamed(&file_name).to_string());
    }

    written.push(patch_package_json(template_dir, target_dir, package_name)?);

    Ok(written)
}

/// Parse the template's `package.json`, replace its `name`, and write it
/// with 2-space indentation and a trailing newline. A malformed manifest is
/// a template-authoring defect and fails the run.
fn patch_package_json(
    template_dir: &Path,
    target_dir: &Path,
    package_name: &str,
) -> Result<String> {
    let manifest_path = template_dir.join("package.json");
    let raw = fs::read_to_string(&manifest_path)
        .with_context(|| format!("Failed to read {}", manifest_path.display()))?;
    let mut manifest: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("Malformed template manifest: {}", manifest_path.display()))?;

    match manifest.as_object_mut() {
        Some(fields) => {
            fields.insert(
                "name".to_string(),
                serde_json::Value::String(package_name.to_string()),
            );
        }
        None => bail!(
            "Malformed template manifest: {} is not a JSON object",
            manifest_path.display()
        ),
    }

    let rendered = format!("{}\n", serde_json::to_string_pretty(&manifest)?);
    write_entry(template_dir, target_dir, "package.json", Some(&rendered))?;

    Ok("package.json".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_template(dir: &Path) {
        fs::write(
            dir.join("package.json"),
            r#"{"name":"template-placeholder","version":"0.0.0","scripts":{"dev":"vite"}}"#,
        )
        .unwrap();
        fs::write(dir.join("index.html"), "<html></html>").unwrap();
        fs::write(dir.join("_gitignore"), "node_modules\ndist\n").unwrap();
        fs::create_dir_all(dir.join("src/assets")).unwrap();
        fs::write(dir.join("src/main.js"), "console.log('hi')\n").unwrap();
        fs::write(dir.join("src/assets/logo.svg"), "<svg/>").unwrap();
    }

    #[test]
    fn test_renamed() {
        assert_eq!(renamed("_gitignore"), ".gitignore");
        assert_eq!(renamed("index.html"), "index.html");
    }

    #[test]
    fn test_materialize_copies_tree_with_renames() {
        let template = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        fake_template(template.path());

        let written = materialize(template.path(), target.path(), "my-app").unwrap();

        assert!(target.path().join("index.html").exists());
        assert!(target.path().join(".gitignore").exists());
        assert!(!target.path().join("_gitignore").exists());
        assert!(target.path().join("src/assets/logo.svg").exists());
        assert!(written.contains(&".gitignore".to_string()));
        assert!(written.contains(&"package.json".to_string()));
    }

    #[test]
    fn test_materialize_patches_package_name() {
        let template = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        fake_template(template.path());

        materialize(template.path(), target.path(), "my-app").unwrap();

        let rendered = fs::read_to_string(target.path().join("package.json")).unwrap();
        assert!(rendered.contains("\"name\": \"my-app\""));
        // Other fields survive the patch untouched.
        assert!(rendered.contains("\"version\": \"0.0.0\""));
        assert!(rendered.contains("\"dev\": \"vite\""));
        // 2-space indentation, trailing newline.
        assert!(rendered.starts_with("{\n  \""));
        assert!(rendered.ends_with("}\n"));
    }

    #[test]
    fn test_materialize_into_existing_contents() {
        let template = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        fake_template(template.path());
        fs::write(target.path().join("KEEP.md"), "keep me").unwrap();

        materialize(template.path(), target.path(), "my-app").unwrap();

        assert!(target.path().join("KEEP.md").exists());
        assert!(target.path().join("index.html").exists());
    }

    #[test]
    fn test_materialize_creates_missing_target() {
        let template = tempfile::tempdir().unwrap();
        let parent = tempfile::tempdir().unwrap();
        fake_template(template.path());
        let target = parent.path().join("deep/my-app");

        materialize(template.path(), &target, "my-app").unwrap();

        assert!(target.join("package.json").exists());
    }

    #[test]
    fn test_malformed_manifest_is_fatal() {
        let template = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        fake_template(template.path());
        fs::write(template.path().join("package.json"), "{not json").unwrap();

        let err = materialize(template.path(), target.path(), "my-app").unwrap_err();
        assert!(err.to_string().contains("Malformed template manifest"));
    }

    #[test]
    fn test_copy_entry_overwrites_files() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("a.txt");
        let dest = dir.path().join("b.txt");
        fs::write(&src, "new").unwrap();
        fs::write(&dest, "old").unwrap();

        copy_entry(&src, &dest).unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
    }
}

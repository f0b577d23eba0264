//! Interactive scaffolding flow using cliclack
//!
//! The flow is a linear state machine: resolve the target directory, settle
//! any conflict with its existing contents, resolve the package name, pick a
//! template, then either hand off to an external generator or materialize a
//! bundled template and print next steps. Prompts may be cancelled at any
//! step; cancellation terminates the run cleanly without rolling back files
//! already written.

use crate::error::{is_cancelled, ScaffoldError};
use crate::name;
use crate::pkg_manager::{self, command, PkgManagerInfo};
use crate::templates::{self, catalog, TemplateVariant};
use crate::workdir::{self, DirState};
use crate::DEFAULT_TARGET_DIR;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// CLI arguments for a scaffolding run, captured once at entry
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Directory to create the project in
    pub target_dir: Option<String>,

    /// Template id to use, validated against the catalog
    pub template: Option<String>,

    /// Clear a non-empty target directory without prompting
    pub overwrite: bool,

    /// Directory holding the `template-<id>` directories, instead of the
    /// executable's own location (for development use)
    pub template_root: Option<PathBuf>,
}

/// Run the scaffolding flow with interactive prompts.
///
/// Cancellation is reported with a closing message and surfaced to the
/// caller, which decides the exit code.
pub async fn run(args: CreateArgs) -> Result<()> {
    match run_flow(args).await {
        Err(err) if is_cancelled(&err) => {
            cliclack::outro_cancel("Operation cancelled")?;
            Err(err)
        }
        other => other,
    }
}

async fn run_flow(args: CreateArgs) -> Result<()> {
    cliclack::intro("create-loom")?;

    let pkg_info = PkgManagerInfo::from_user_agent(
        std::env::var("npm_config_user_agent").ok().as_deref(),
    );

    // Step 1: target directory
    let target_dir = select_target_dir(&args)?;
    let root = std::env::current_dir()?.join(&target_dir);

    // Step 2: conflict with existing contents
    resolve_conflict(&root, &target_dir, args.overwrite)?;

    // Step 3: package name
    let package_name = select_package_name(&root)?;

    // Step 4: template
    let variant = select_variant(args.template.as_deref())?;

    // Step 5: delegate or materialize
    if let Some(delegate) = variant.delegate_command {
        return run_delegate(delegate, pkg_info.as_ref(), &target_dir).await;
    }

    create_project(&args, variant, &root, &package_name)?;

    // Step 6: next steps
    print_next_steps(&target_dir, &root, pkg_manager::name_or_default(pkg_info.as_ref()))?;

    Ok(())
}

fn select_target_dir(args: &CreateArgs) -> Result<String> {
    let raw = match &args.target_dir {
        Some(dir) => dir.clone(),
        None => cliclack::input("Project name:")
            .placeholder(DEFAULT_TARGET_DIR)
            .default_input(DEFAULT_TARGET_DIR)
            .interact()?,
    };

    let formatted = name::format_target_dir(&raw);
    if formatted.is_empty() {
        Ok(DEFAULT_TARGET_DIR.to_string())
    } else {
        Ok(formatted)
    }
}

fn resolve_conflict(root: &Path, target_dir: &str, overwrite: bool) -> Result<()> {
    match workdir::classify(root)? {
        DirState::Absent | DirState::Empty => return Ok(()),
        DirState::NonEmpty => {}
    }

    if overwrite {
        workdir::clear(root)?;
        return Ok(());
    }

    let label = if target_dir == "." {
        "Current directory".to_string()
    } else {
        format!("Target directory \"{target_dir}\"")
    };

    let action: &str =
        cliclack::select(format!("{label} is not empty. Please choose how to proceed:"))
            .item("cancel", "Cancel operation", "")
            .item("clear", "Remove existing files and continue", "")
            .item("ignore", "Ignore files and continue", "")
            .interact()?;

    match action {
        "cancel" => Err(ScaffoldError::Cancelled.into()),
        "clear" => workdir::clear(root),
        _ => Ok(()),
    }
}

fn select_package_name(root: &Path) -> Result<String> {
    let project_name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_TARGET_DIR.to_string());

    if name::is_valid_package_name(&project_name) {
        return Ok(project_name);
    }

    // An all-symbols directory name can normalize to an empty or still
    // invalid suggestion; the validator keeps prompting until the name fits.
    let suggestion = name::to_valid_package_name(&project_name);
    let package_name: String = cliclack::input("Package name:")
        .default_input(&suggestion)
        .validate(|input: &String| {
            if name::is_valid_package_name(input) {
                Ok(())
            } else {
                Err("Invalid package.json name")
            }
        })
        .interact()?;

    Ok(package_name)
}

fn select_variant(specified_template: Option<&str>) -> Result<&'static TemplateVariant> {
    if let Some(template_id) = specified_template {
        if let Some(variant) = catalog::find_variant(template_id) {
            return Ok(variant);
        }
        let available = catalog::list_template_ids().join(", ");
        cliclack::log::warning(format!(
            "\"{template_id}\" isn't a valid template. Please choose from below. Available: {available}"
        ))?;
    }

    // Two-level selection: framework first, then its variant. Use indices as
    // select values to avoid borrow issues.
    let mut framework_select = cliclack::select("Select a framework:");
    for (idx, framework) in catalog::FRAMEWORKS.iter().enumerate() {
        framework_select =
            framework_select.item(idx, framework.display_name.color(framework.color), "");
    }
    let framework = &catalog::FRAMEWORKS[framework_select.interact()?];

    if let [only] = framework.variants {
        return Ok(only);
    }

    let mut variant_select = cliclack::select("Select a variant:");
    for (idx, variant) in framework.variants.iter().enumerate() {
        variant_select = variant_select.item(idx, variant.display_name.color(variant.color), "");
    }
    let variant = &framework.variants[variant_select.interact()?];

    Ok(variant)
}

/// Hand the terminal over to an external generator and terminate with its
/// exit status. Materialization is skipped entirely for delegate variants.
async fn run_delegate(
    delegate: &str,
    pkg_info: Option<&PkgManagerInfo>,
    target_dir: &str,
) -> Result<()> {
    let rewritten = command::rewrite(delegate, pkg_info);
    let (program, cmd_args) = command::split_with_target(&rewritten, target_dir);

    cliclack::log::info(format!("Running: {} {}", program, cmd_args.join(" ")))?;
    let _ = console::Term::stderr().show_cursor();

    let status = tokio::process::Command::new(&program)
        .args(&cmd_args)
        .status()
        .await
        .with_context(|| format!("Failed to run {program}"))?;

    std::process::exit(status.code().unwrap_or(0));
}

fn create_project(
    args: &CreateArgs,
    variant: &TemplateVariant,
    root: &Path,
    package_name: &str,
) -> Result<()> {
    let template_root = match &args.template_root {
        Some(path) => path.clone(),
        None => default_template_root()?,
    };
    let template_dir = template_root.join(format!("template-{}", variant.id));
    anyhow::ensure!(
        template_dir.is_dir(),
        "Template directory not found: {}",
        template_dir.display()
    );

    let spinner = cliclack::spinner();
    spinner.start("Scaffolding project...");

    let written = templates::materialize(&template_dir, root, package_name)?;

    spinner.stop(format!(
        "Created {} entries in {}",
        written.len(),
        root.display()
    ));

    Ok(())
}

/// Bundled templates live as `template-<id>` siblings of the installed
/// binary.
fn default_template_root() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    let dir = exe
        .parent()
        .context("Executable has no parent directory")?;
    Ok(dir.to_path_buf())
}

fn print_next_steps(target_dir: &str, root: &Path, pkg_manager: &str) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let mut steps = Vec::new();

    if root != cwd {
        let dir = if target_dir.contains(' ') {
            format!("\"{target_dir}\"")
        } else {
            target_dir.to_string()
        };
        steps.push(format!("cd {dir}"));
    }

    match pkg_manager {
        "yarn" => {
            steps.push("yarn".to_string());
            steps.push("yarn dev".to_string());
        }
        manager => {
            steps.push(format!("{manager} install"));
            steps.push(format!("{manager} run dev"));
        }
    }

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step.as_str().cyan());
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}

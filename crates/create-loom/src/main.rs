//! create-loom - Scaffold web application projects from built-in templates

use anyhow::Result;
use clap::Parser;
use scaffold_core::tui::CreateArgs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "create-loom")]
#[command(about = "Scaffold a new web application project from a built-in template")]
#[command(version)]
pub struct Args {
    /// Directory to create the project in
    pub target_dir: Option<String>,

    /// Template to use (run without this flag to pick interactively)
    #[arg(short, long)]
    pub template: Option<String>,

    /// Clear the target directory without prompting if it is not empty
    #[arg(long)]
    pub overwrite: bool,

    /// Directory containing the `template-<id>` directories (for development use)
    #[arg(long = "template-root")]
    pub template_root: Option<PathBuf>,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            target_dir: args.target_dir,
            template: args.template,
            overwrite: args.overwrite,
            template_root: args.template_root,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let result = scaffold_core::run(args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match result {
        // Cancellation ends the run cleanly: message already printed, exit 0.
        Err(err) if scaffold_core::is_cancelled(&err) => Ok(()),
        other => other,
    }
}

//! `ax create` command handler
//!
//! Linear workflow: select template → Node.js gate → conflict resolution →
//! fetch → install. Each stage returns a Result and any failure aborts the
//! remainder; the Node.js gate runs before anything destructive so a version
//! mismatch leaves a pre-existing target directory untouched.

use anyhow::{anyhow, Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use dialoguer::Select;

use ax_scaffold::{fetch, install, runtime, Template, TemplateRegistry};

use crate::cli::CreateArgs;
use crate::output;

/// Package manager used to install template dependencies
const INSTALL_COMMAND: &str = "pnpm";
const INSTALL_ARGS: &[&str] = &["install"];

/// Create a new project from a remote template
pub async fn run(args: CreateArgs) -> Result<()> {
    let registry = TemplateRegistry::builtin();
    let target = resolve_target(&args.name)?;

    output::banner();

    let template = select_template(&registry)?.clone();
    tracing::debug!("Selected template {} ({})", template.name, template.repo);

    runtime::check_node(&template).await?;

    resolve_conflict(&target, args.force).await?;

    println!();
    output::info(&format!("Creating project in {}", target));
    println!();

    let pb = output::spinner("Downloading template...");
    match fetch::fetch_template(&template, &target).await {
        Ok(()) => pb.finish_with_message("Download template succeed!"),
        Err(err) => {
            pb.finish_and_clear();
            output::error(&format!("Failed fetching remote template {}", template.name));
            return Err(err.into());
        }
    }

    println!();
    output::info("Installing additional dependencies...");
    println!();
    install::install_dependencies(INSTALL_COMMAND, INSTALL_ARGS, &target).await?;

    println!();
    output::success(&format!("Successfully created project {}", args.name));
    output::info("Get started with the following commands:");
    println!();
    println!("  $ cd {}", args.name);
    println!("  $ {} run dev", INSTALL_COMMAND);
    output::boxed("AX CLI", "Thanks For Using!");

    Ok(())
}

/// Resolve the target directory as an absolute UTF-8 path under cwd
fn resolve_target(name: &str) -> Result<Utf8PathBuf> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let cwd = Utf8PathBuf::from_path_buf(cwd)
        .map_err(|p| anyhow!("Current directory is not valid UTF-8: {}", p.display()))?;
    Ok(cwd.join(name))
}

/// Pick a template from the registry via a single-choice interactive list
fn select_template(registry: &TemplateRegistry) -> Result<&Template> {
    let names = registry.names();

    let selection = Select::new()
        .with_prompt("Please pick a template")
        .items(&names)
        .default(0)
        .interact()?;

    Ok(&registry.templates()[selection])
}

/// Ensure the target directory does not exist before the fetch stage
///
/// With `--force` an existing directory is removed without prompting.
/// Otherwise the user picks Overwrite or Cancel; Cancel (or dismissing the
/// prompt) aborts with no side effects.
async fn resolve_conflict(target: &Utf8Path, force: bool) -> Result<()> {
    if !target.exists() {
        return Ok(());
    }

    let choice = if force {
        Some(0)
    } else {
        let selection = Select::new()
            .with_prompt(format!(
                "Target directory {} already exists. Pick an action",
                target
            ))
            .items(&["Overwrite", "Cancel"])
            .default(0)
            .interact_opt()?;

        if selection == Some(0) {
            println!();
        }
        selection
    };

    apply_conflict_choice(target, choice).await?;
    Ok(())
}

/// Act on the overwrite prompt's outcome
///
/// Only an explicit "Overwrite" removes the directory; "Cancel" or a
/// dismissed prompt aborts before any filesystem change.
async fn apply_conflict_choice(target: &Utf8Path, choice: Option<usize>) -> ax_scaffold::Result<()> {
    if choice != Some(0) {
        return Err(ax_scaffold::Error::Cancelled);
    }

    output::info(&format!("Removing {}", target));
    tokio::fs::remove_dir_all(target).await?;
    Ok(())
}

//! Plan command implementation
//!
//! Prints what an export would do. Reads the profile only; the source tree
//! is not scanned and the destination is never touched.

use colored::Colorize;
use export_core::ExportPlan;

use super::{profile_label, resolve_selection};
use crate::cli::SelectionArgs;
use crate::error::Result;

/// Run the plan command
pub fn run_plan(selection: &SelectionArgs, json: bool) -> Result<()> {
    let (source, allow) = resolve_selection(selection)?;
    let plan = ExportPlan::new(&source, &allow);

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!(
        "{} Export plan for {} (profile: {})",
        "=>".blue().bold(),
        plan.source.cyan(),
        profile_label(selection.profile.as_deref()).yellow()
    );
    println!();
    println!("{}/ {}", plan.dependencies.bold(), "(copied recursively)".dimmed());
    print_section("lib", &plan.library);
    print_section("utilities", &plan.utilities);
    println!();
    println!("{}", "Generated:".bold());
    for manifest in &plan.manifests {
        println!("   {}", manifest);
    }
    println!("   {}", plan.readme);
    println!();
    println!(
        "{} {} files selected",
        "OK".green().bold(),
        plan.selected_files()
    );
    Ok(())
}

fn print_section(dir: &str, files: &[String]) {
    println!("{}/ {}", dir.bold(), format!("({} files)", files.len()).dimmed());
    for file in files {
        println!("   {}", file);
    }
}

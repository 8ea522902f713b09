//! Logogen - synthetic logo template generator.

mod cli;
mod config;
mod error;
mod output;
mod render;
mod template;
mod text;

use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::TemplateError;
use crate::template::TemplateSpec;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), TemplateError> {
    // Load config
    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path).map_err(TemplateError::Config)?;

    // CLI flags win over config values
    let output_dir = cli.output_dir.map_or_else(|| config.output_dir.clone(), PathBuf::from);
    let angle = cli.angle.unwrap_or(config.angle);
    if !angle.is_finite() {
        return Err(TemplateError::InvalidArgument(format!("Angle must be finite, got {angle}")));
    }

    // Resolve the template batch: config list, else the built-in three
    let templates = resolve_templates(&config)?;

    if cli.verbose {
        eprintln!("Output dir: {}", output_dir.display());
        eprintln!("Angle: {angle} degrees");
        eprintln!("Templates: {}", templates.len());
    }

    output::ensure_output_dir(&output_dir)?;

    for spec in &templates {
        println!("Creating template: {}", spec.name);

        let image = render::synthesize(spec);
        let path = output::save_png(&image, &output_dir, &output::template_filename(&spec.name))?;
        println!("  Saved: {}", path.display());

        let rotated = render::rotate(&image, angle);
        let path = output::save_png(&rotated, &output_dir, &output::rotated_filename(&spec.name))?;
        println!("  Saved rotated: {}", path.display());
    }

    println!(
        "Created {} templates ({} files) in {}",
        templates.len(),
        templates.len() * 2,
        output_dir.display()
    );

    Ok(())
}

/// Resolve and validate the effective template list.
fn resolve_templates(config: &Config) -> Result<Vec<TemplateSpec>, TemplateError> {
    if config.templates.is_empty() {
        return Ok(template::builtin_templates());
    }
    config
        .templates
        .iter()
        .map(|entry| entry.resolve().map_err(TemplateError::InvalidArgument))
        .collect()
}

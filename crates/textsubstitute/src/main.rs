//! `textsub` - CLI for textsubstitute
//!
//! This binary runs text through the substitution filter and inspects the
//! filter's configuration.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use textsubstitute::cli::{ApplyCommand, Cli, Command, ConfigCommand, FormatsCommand};
use textsubstitute::{
    init_logging, Config, FilterOutcome, FilterRequest, SubstitutionFilter, TextFormat,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Execute the command; configuration is loaded only where it is read
    match cli.command {
        Command::Apply(apply_cmd) => handle_apply(cli.config, apply_cmd),
        Command::Formats(formats_cmd) => handle_formats(&formats_cmd),
        Command::Config(config_cmd) => handle_config(cli.config, config_cmd),
    }
}

fn handle_apply(config_path: Option<PathBuf>, cmd: ApplyCommand) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let text = read_input(&cmd)?;

    let mut settings = config.filter;
    if let Some(search) = cmd.search {
        settings.searchterm = search;
    }
    if let Some(replace) = cmd.replace {
        settings.substituteterm = replace;
    }
    if let Some(formats) = cmd.formats {
        settings.formats = formats;
    }

    debug!(
        search = %settings.searchterm,
        formats = %settings.formats,
        "Applying substitution filter"
    );

    let filter = SubstitutionFilter::new(settings);
    let request = FilterRequest::new(&text, cmd.format.map(TextFormat::from));
    let outcome = filter.evaluate(&request);

    if cmd.json {
        let reason = match &outcome {
            FilterOutcome::Skipped(reason) => Some(*reason),
            FilterOutcome::Substituted { .. } => None,
        };
        let body = serde_json::json!({
            "applied": outcome.is_substituted(),
            "reason": reason,
            "replacements": outcome.replacements(),
            "text": outcome.into_text(&text),
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        let output = outcome.into_text(&text);
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        // Text given on the command line carries no trailing newline of its own.
        if cmd.text.is_some() {
            stdout.write_all(b"\n")?;
        }
        stdout.flush()?;
    }
    Ok(())
}

fn read_input(cmd: &ApplyCommand) -> Result<String> {
    if let Some(text) = &cmd.text {
        return Ok(text.clone());
    }

    if let Some(path) = &cmd.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }

    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read text from stdin")?;
    Ok(buf)
}

fn handle_formats(cmd: &FormatsCommand) -> Result<()> {
    if cmd.json {
        let formats: Vec<_> = TextFormat::ALL
            .iter()
            .map(|format| serde_json::json!({ "id": format.id(), "name": format.name() }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&formats)?);
    } else {
        println!("ID  NAME");
        for format in TextFormat::ALL {
            println!("{:<3} {}", format.id(), format.name());
        }
    }
    Ok(())
}

fn handle_config(config_path: Option<PathBuf>, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            let config = Config::load_from(config_path)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                let allowed_formats = config.allowed_formats();
                let allowed = allowed_formats
                    .iter()
                    .map(TextFormat::name)
                    .collect::<Vec<_>>()
                    .join(", ");

                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Filter]");
                println!("  Search term:        {:?}", config.filter.searchterm);
                println!("  Substitute term:    {:?}", config.filter.substituteterm);
                println!("  Formats:            {:?}", config.filter.formats);
                println!("  Normalised:         {allowed_formats}");
                println!("  Applies to:         {allowed}");
            }
        }
        ConfigCommand::Path => {
            let path = config_path.unwrap_or_else(Config::default_config_path);
            println!("{}", path.display());
        }
        ConfigCommand::Validate { file } => {
            let path = file
                .or(config_path)
                .unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            Config::load_from(Some(path.clone()))
                .and_then(|loaded| loaded.validate())
                .with_context(|| format!("configuration {} is invalid", path.display()))?;
            println!("Configuration is valid.");
        }
    }
    Ok(())
}

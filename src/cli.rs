use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::debug;

use crate::config::BindConfig;
use crate::utils::logger;
use crate::{FunctionDescriptor, Group};

#[derive(Parser, Debug)]
#[command(name = "sdyn", version, about = "Inspect and load the sokol-dyn bindings")]
pub struct SdynCli {
    #[command(subcommand)]
    command: Command,
}

impl SdynCli {
    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Lists every forwarded function with its signature.
    List {
        /// Only list one group (app, gfx or glue).
        #[arg(short, long, value_parser = parse_group)]
        group: Option<Group>,
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Checks that a library exports every forwarded function, without binding.
    Check {
        /// Library to check; defaults to the configured one.
        library: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Binds every forwarded function from a library, aborting on failure.
    Load { library: Option<String> },
}

fn parse_group(value: &str) -> Result<Group, String> {
    Group::builtin(value)
        .ok_or_else(|| format!("unknown group `{value}` (expected app, gfx or glue)"))
}

pub fn run() -> Result<()> {
    logger::init_logging();
    let cli = SdynCli::parse();
    execute(&cli)
}

pub fn execute(cli: &SdynCli) -> Result<()> {
    match cli.command() {
        Command::List { group, json } => handle_list(*group, *json),
        Command::Check { library, json } => handle_check(library.as_deref(), *json),
        Command::Load { library } => handle_load(library.as_deref()),
    }
}

fn handle_list(group: Option<Group>, json: bool) -> Result<()> {
    let registry = crate::registry();
    if let Some(group) = group.filter(|group| !registry.contains_group(*group)) {
        bail!("group `{group}` is not part of this build");
    }

    let descriptors: Vec<&FunctionDescriptor> = match group {
        Some(group) => registry.group(group).collect(),
        None => registry.iter().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&descriptors)?);
        return Ok(());
    }

    for descriptor in &descriptors {
        println!("{:>4}  {descriptor}", descriptor.group().to_string().cyan());
    }
    println!("{} functions", descriptors.len().to_string().bold());
    Ok(())
}

fn handle_check(library: Option<&str>, json: bool) -> Result<()> {
    let config = BindConfig::resolve(library)?;
    debug!(library = %config.library, source = %config.source, "checking library");
    let report = crate::table()
        .audit(&config.library)
        .with_context(|| format!("failed to check {}", config.library))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for descriptor in &report.missing {
            println!("{} {}", "missing".red().bold(), descriptor.name());
        }
        println!(
            "{} {}/{} functions exported by {}",
            if report.is_complete() { "ok".green().bold() } else { "incomplete".red().bold() },
            report.resolved.len(),
            report.resolved.len() + report.missing.len(),
            report.library
        );
    }

    if !report.is_complete() {
        bail!(
            "{} of {} functions missing from {}",
            report.missing.len(),
            report.resolved.len() + report.missing.len(),
            report.library
        );
    }
    Ok(())
}

fn handle_load(library: Option<&str>) -> Result<()> {
    let config = BindConfig::resolve(library)?;
    let loaded = crate::load(&config.library);
    println!(
        "{} {} functions from {} ({})",
        "bound".green().bold(),
        loaded.bound(),
        loaded.identifier(),
        config.source
    );
    Ok(())
}

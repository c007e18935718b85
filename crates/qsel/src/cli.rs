//! Command line interface
//!
//! ```text
//! qsel [--config PATH] list [--json]
//! qsel [--config PATH] resolve [-q QUALIFIER]... [--strict] [--all] [--ignore-primary] [--name NAME]
//! ```
//!
//! Command output goes to the given writer; logs go to stderr.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use qsel_application::ports::registry::find_component;
use qsel_application::{ResolvedView, SelectionMode};
use qsel_domain::{InjectionPoint, Qualifier};
use qsel_infrastructure::di::init_app_with_registry;
use qsel_infrastructure::{AppConfig, AppContext, ComponentRegistry, ConfigLoader};
use serde::Serialize;
use tracing::debug;

use crate::demo::Greeter;

/// Command line interface for qsel
#[derive(Parser, Debug)]
#[command(name = "qsel")]
#[command(about = "Qualified provider selection over the demo greeter registry")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every registered component
    List(ListArgs),
    /// Resolve the greeter capability and greet someone
    Resolve(ResolveArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Required qualifier, repeatable; `a,b` lists are accepted too
    #[arg(short = 'q', long = "qualifier", value_name = "QUALIFIER")]
    pub qualifiers: Vec<String>,

    /// Fail instead of falling back to the first of several tied candidates
    #[arg(long)]
    pub strict: bool,

    /// Greet with every matching greeter instead of the default one
    #[arg(long)]
    pub all: bool,

    /// Register every component as non-primary
    #[arg(long)]
    pub ignore_primary: bool,

    /// Who to greet
    #[arg(long, default_value = "World")]
    pub name: String,
}

/// One row of `qsel list`
#[derive(Debug, Serialize)]
pub struct ComponentSummary {
    pub name: String,
    pub description: String,
    pub type_name: String,
    pub primary: bool,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

/// Load configuration from `path`, or from the default locations
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = path {
        loader = loader.with_config_path(path);
    }
    loader.load().context("Failed to load configuration")
}

/// Run `command` under `config`, writing command output to `out`
pub fn run<W: Write>(command: &Command, config: AppConfig, out: &mut W) -> Result<()> {
    match command {
        Command::List(args) => list(args, config, out),
        Command::Resolve(args) => resolve(args, config, out),
    }
}

/// Every registered component, in registration order
pub fn summarize(registry: &ComponentRegistry) -> Vec<ComponentSummary> {
    registry
        .providers()
        .iter()
        .map(|provider| {
            let metadata = provider.object.metadata();
            ComponentSummary {
                name: provider.name.clone(),
                description: find_component(&provider.name)
                    .map(|entry| entry.description.to_string())
                    .unwrap_or_default(),
                type_name: provider.object.type_name().to_string(),
                primary: provider.primary,
                tags: metadata.tags.iter().map(ToString::to_string).collect(),
                order: metadata.order,
                priority: metadata.priority,
            }
        })
        .collect()
}

fn context(config: AppConfig, ignore_primary: bool) -> Result<AppContext> {
    let mut registry = ComponentRegistry::linked().context("Failed to register components")?;
    if ignore_primary {
        registry.clear_primary_flags();
    }
    Ok(init_app_with_registry(config, registry))
}

fn list<W: Write>(args: &ListArgs, config: AppConfig, out: &mut W) -> Result<()> {
    let context = context(config, false)?;
    let summaries = summarize(context.registry());

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &summaries)?;
        writeln!(out)?;
        return Ok(());
    }

    for summary in &summaries {
        let mut ranking = Vec::new();
        if let Some(order) = summary.order {
            ranking.push(format!("order={order}"));
        }
        if let Some(priority) = summary.priority {
            ranking.push(format!("priority={priority}"));
        }
        let tags = format!("[{}]", summary.tags.join(", "));
        writeln!(
            out,
            "{:<24} {:<8} {:<28} {:<16} {}",
            summary.name,
            if summary.primary { "primary" } else { "-" },
            tags,
            ranking.join(" "),
            summary.description
        )?;
    }
    Ok(())
}

fn resolve<W: Write>(args: &ResolveArgs, mut config: AppConfig, out: &mut W) -> Result<()> {
    if args.strict {
        config.resolution.mode = SelectionMode::Strict;
    }

    let mut point = InjectionPoint::of::<dyn Greeter>();
    for text in &args.qualifiers {
        for qualifier in Qualifier::parse_list(text)? {
            point = point.with_qualifier(qualifier);
        }
    }
    debug!(injection_point = %point, "Resolving from the command line");

    let context = context(config, args.ignore_primary)?;
    let view = context.resolver().resolve::<dyn Greeter>(&point)?;

    writeln!(out, "candidates: {}", view.names().collect::<Vec<_>>().join(", "))?;
    writeln!(out, "unsatisfied: {}", view.is_unsatisfied())?;
    writeln!(out, "ambiguous: {}", view.is_ambiguous())?;

    let greeted = greet(args, &view, out);
    let disposed = dispose_all(&view);
    greeted?;
    disposed
}

fn greet<W: Write>(args: &ResolveArgs, view: &ResolvedView<dyn Greeter>, out: &mut W) -> Result<()> {
    if args.all {
        for candidate in view.candidates() {
            writeln!(out, "{}: {}", candidate.name(), candidate.instance().greet(&args.name))?;
        }
        return Ok(());
    }

    let greeter = view.get()?;
    let chosen = view
        .default_selection()
        .map(|selection| view.candidates()[selection.index].name())
        .unwrap_or_default();
    writeln!(out, "default: {chosen} ({greeter})")?;
    writeln!(out, "{}", greeter.greet(&args.name))?;
    Ok(())
}

fn dispose_all(view: &ResolvedView<dyn Greeter>) -> Result<()> {
    for greeter in view {
        view.destroy(greeter.as_ref())?;
    }
    Ok(())
}

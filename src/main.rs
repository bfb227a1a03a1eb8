//! orgflow CLI entry point.
//!
//! Loads agent and branch payload files, builds the diagram for the
//! requested view, and prints it as a text outline or JSON.

use std::fs;
use std::process;

use clap::Parser;

use orgflow::builder::build_diagram;
use orgflow::config::LayoutConfig;
use orgflow::records::source::{decode_agents, decode_branches};
use orgflow::render::render_outline;
use orgflow::state::{RevealState, ViewState};

/// Organizational chart to positioned node/edge diagram.
#[derive(Parser, Debug)]
#[command(
    name = "orgflow",
    about = "Organizational chart to positioned node/edge diagram"
)]
struct Cli {
    /// Agents payload file (JSON: {ok, items} envelope or bare array)
    #[arg(long = "agents")]
    agents: String,

    /// Branches payload file (JSON: {ok, items} envelope or bare array)
    #[arg(long = "branches")]
    branches: String,

    /// Branch id to expand (repeatable)
    #[arg(short = 'e', long = "expand")]
    expand: Vec<u64>,

    /// Name search query
    #[arg(short = 'q', long = "query", default_value = "")]
    query: String,

    /// Show every role, not just agents and managers
    #[arg(long = "all-roles")]
    all_roles: bool,

    /// Initial reveal limit per expanded branch (clamped to 6..=60)
    #[arg(short = 'l', long = "limit")]
    limit: Option<usize>,

    /// Track reveal limits per branch instead of one shared limit
    #[arg(long = "per-branch")]
    per_branch: bool,

    /// Output format: text or json
    #[arg(short = 'f', long = "format", default_value = "text")]
    format: String,
}

fn read_file(path: &str) -> String {
    match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: cannot read '{}': {}", path, e);
            process::exit(1);
        }
    }
}

fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let agents = decode_agents(&read_file(&cli.agents));
    let branches = decode_branches(&read_file(&cli.branches));

    let mut view = ViewState::new();
    view.query = cli.query;
    view.only_staff = !cli.all_roles;
    if cli.per_branch {
        view.reveal = RevealState::per_branch(orgflow::state::DEFAULT_LIMIT);
    }
    if let Some(limit) = cli.limit {
        view.reveal.set_limit(limit);
    }
    for branch_id in cli.expand {
        view.expansion = view.expansion.toggle(branch_id);
    }

    let diagram = build_diagram(&agents, &branches, &view, &LayoutConfig::default());

    match cli.format.as_str() {
        "text" => print!("{}", render_outline(&diagram)),
        "json" => match serde_json::to_string_pretty(&diagram) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("error: {}", e);
                process::exit(1);
            }
        },
        other => {
            eprintln!("error: unknown format '{}' (expected text or json)", other);
            process::exit(1);
        }
    }
}

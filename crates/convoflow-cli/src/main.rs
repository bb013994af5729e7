//! Convoflow command line tools.
//!
//! Provides the `convoflow` binary for file-based workflows over flow
//! documents: `check` imports a document and prints validator findings,
//! `normalize` imports a document and prints its canonical export form.
//! Both commands run the same importer/validator/exporter as the HTTP
//! server, ensuring identical behavior from both entry points.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use convoflow_check::validate_flow;
use convoflow_core::{FlowEdge, FlowNode};
use convoflow_schema::{export_flow, import_flow};

/// Conversational flow graph tools.
#[derive(Parser)]
#[command(name = "convoflow", about = "Conversational flow graph tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Import a flow document and print validator findings.
    Check {
        /// Path to the flow JSON document.
        file: PathBuf,
    },
    /// Import a flow document and print its canonical export form.
    Normalize {
        /// Path to the flow JSON document.
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Commands::Check { file } => check(&file),
        Commands::Normalize { file } => normalize(&file),
    }
}

/// Exit codes: 0 clean, 1 findings, 2 unreadable or malformed input.
fn check(file: &Path) {
    let (nodes, edges) = load(file);
    let diagnostics = validate_flow(&nodes, &edges);

    if diagnostics.is_empty() {
        println!("{}: no findings", file.display());
        return;
    }
    for diagnostic in &diagnostics {
        match &diagnostic.node_id {
            Some(node_id) => println!("{node_id}: {}", diagnostic.message),
            None => println!("flow: {}", diagnostic.message),
        }
    }
    process::exit(1);
}

fn normalize(file: &Path) {
    let (nodes, edges) = load(file);
    let document = export_flow(&nodes, &edges);
    match serde_json::to_string_pretty(&document) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("error: failed to serialize document: {err}");
            process::exit(2);
        }
    }
}

fn load(file: &Path) -> (Vec<FlowNode>, Vec<FlowEdge>) {
    let text = match fs::read_to_string(file) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("error: cannot read {}: {err}", file.display());
            process::exit(2);
        }
    };
    match import_flow(&text) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    }
}

//! `jnode` CLI — inspect and compare JSON documents through the json-node model.
//!
//! ## Usage
//!
//! ```sh
//! # Render a document (stdin → stdout)
//! echo '{"a":1,"b":"x"}' | jnode describe
//!
//! # Structural comparison (exit status 0 if equal, 1 if different, 2 on error)
//! jnode equal left.json right.json
//!
//! # Render the node at a dot-separated path
//! jnode get items.0.name -i data.json
//!
//! # Ingest and re-serialize as compact JSON
//! jnode normalize -i data.json -o out.json
//! ```
//!
//! Exit status: 0 on success (and `equal` when the documents match), 1 when
//! `equal` finds a difference, 2 on any error (I/O, invalid JSON, missing
//! path, bad arguments).
//!
//! Log output goes to stderr and is controlled by `RUST_LOG` (default `warn`,
//! `debug` with `-v`).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use json_node::Node;
use std::io::{self, Read};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "jnode",
    version,
    about = "Inspect JSON documents as json-node trees"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the diagnostic rendering of a JSON document
    Describe {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Compare two JSON documents structurally
    Equal {
        /// First JSON file
        left: String,
        /// Second JSON file
        right: String,
    },
    /// Print the node at a dot-separated path (numeric segments index arrays)
    Get {
        /// Path such as `items.0.name`; empty selects the root
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Ingest a JSON document and write it back as compact JSON
    Normalize {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// Exit status for `equal` when the documents differ.
const EXIT_DIFFERENT: i32 = 1;
/// Exit status for any error, kept distinct from [`EXIT_DIFFERENT`].
const EXIT_ERROR: i32 = 2;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli.command) {
        eprintln!("Error: {err:?}");
        process::exit(EXIT_ERROR);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Describe { input } => {
            let node = read_node(input.as_deref())?;
            println!("{node}");
        }
        Commands::Equal { left, right } => {
            let a = read_node(Some(&left))?;
            let b = read_node(Some(&right))?;
            if a == b {
                println!("equal");
            } else {
                tracing::debug!(left = %a, right = %b, "documents differ");
                println!("different");
                process::exit(EXIT_DIFFERENT);
            }
        }
        Commands::Get { path, input } => {
            let node = read_node(input.as_deref())?;
            let found = lookup(&node, &path)
                .with_context(|| format!("No node at path: '{}'", path))?;
            println!("{found}");
        }
        Commands::Normalize { input, output } => {
            let node = read_node(input.as_deref())?;
            let json = serde_json::to_string(&node).context("Failed to serialize node")?;
            write_output(output.as_deref(), &json)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

/// Walk a dot-separated path. Numeric segments index arrays; every other
/// segment is an object key.
fn lookup<'a>(root: &'a Node, path: &str) -> Option<&'a Node> {
    if path.is_empty() {
        return Some(root);
    }
    path.split('.').try_fold(root, |node, segment| match node {
        Node::Array(_) => segment.parse::<usize>().ok().and_then(|i| node.index(i)),
        _ => node.get(segment),
    })
}

fn read_node(path: Option<&str>) -> Result<Node> {
    let text = read_input(path)?;
    let node = Node::from_json_str(&text).with_context(|| match path {
        Some(path) => format!("Failed to parse JSON from file: {}", path),
        None => "Failed to parse JSON from stdin".to_string(),
    })?;
    tracing::debug!(kind = node.kind(), bytes = text.len(), "ingested document");
    Ok(node)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lookup_walks_keys_and_indices() {
        let node = Node::parse(&json!({"items": [{"name": "a"}, {"name": "b"}]}));
        assert_eq!(lookup(&node, "items.1.name"), Some(&Node::from("b")));
        assert_eq!(lookup(&node, ""), Some(&node));
    }

    #[test]
    fn lookup_misses_are_none() {
        let node = Node::parse(&json!({"items": [1], "0": "key"}));
        assert_eq!(lookup(&node, "items.x"), None);
        assert_eq!(lookup(&node, "items.5"), None);
        assert_eq!(lookup(&node, "missing"), None);
        // Numeric segments are plain keys on objects.
        assert_eq!(lookup(&node, "0"), Some(&Node::from("key")));
    }
}

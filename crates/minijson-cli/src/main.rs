//! `minijson` CLI — parse, query, and re-emit JSON-subset documents.
//!
//! ## Usage
//!
//! ```sh
//! # Parse and re-serialize compact (stdin → stdout)
//! echo '[1 2 3,]' | minijson print
//!
//! # Parse from file to file
//! minijson print -i data.json -o compact.json
//!
//! # Look up a top-level object member
//! minijson get array -i data.json
//!
//! # Build and print the showcase document
//! minijson demo
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use minijson_core::{serialize, Value};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "minijson", version, about = "Minimal JSON-subset toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse JSON text and re-serialize it in compact form
    Print {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Look up a top-level object member and print its compact form
    Get {
        /// Member key to look up
        key: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Build the showcase document through the construction API and print it
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Print { input, output } => {
            let text = read_input(input.as_deref())?;
            let value = minijson_core::parse(&text).context("failed to parse input")?;
            write_output(output.as_deref(), &serialize(&value))?;
        }
        Commands::Get { key, input } => {
            let text = read_input(input.as_deref())?;
            let value = minijson_core::parse(&text).context("failed to parse input")?;
            match value.get(&key) {
                Some(member) => println!("{}", serialize(member)),
                None => anyhow::bail!("no member named '{}' in the top-level object", key),
            }
        }
        Commands::Demo => {
            println!("{}", serialize(&demo_document()));
        }
    }

    Ok(())
}

/// One value of every tag, assembled through the convenience constructors.
fn demo_document() -> Value {
    let mut array = Value::new_array();
    array.push_bool(true);
    array.push_number(42);
    array.push_string("Hello, World!");
    array.push(Value::new_object());
    array.push(Value::new_array());

    let mut object = Value::new_object();
    object.insert_null("null");
    object.insert_bool("bool", true);
    object.insert_number("number", 42);
    object.insert_string("string", "Hello, World!");
    object.insert("array", array);
    object
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}

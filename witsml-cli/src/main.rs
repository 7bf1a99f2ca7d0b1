//! WITSML STORE command-line tool
//!
//! Renders the query a client would send, or materializes a response saved
//! from a server, without any network access.
//!
//! Usage:
//!   witsml query log --parent B1 --parent W1 --include name --include logCurveInfo
//!   witsml --schema 1.3.1.1 parse log response.xml

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::{fs, path::PathBuf};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;
use witsml_cli::{
    QueryRequest, parse_assignment, parse_attribute_assignment, parse_response, render_query,
};
use witsml_query::QueryConstraints;
use witsml_store::ClientConfig;
use witsml_types::{ObjectType, UnitProfile, WitsmlVersion};

#[derive(Parser, Debug)]
#[command(name = "witsml")]
#[command(about = "Render WITSML STORE queries and materialize saved responses")]
#[command(version)]
struct Args {
    /// TOML client configuration
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Data schema version (1.2.0, 1.3.1.1, 1.4.1.1); overrides the config
    #[arg(long, global = true)]
    schema: Option<WitsmlVersion>,

    /// Unit profile (server_default, metric, imperial); overrides the config
    #[arg(long, global = true)]
    units: Option<UnitProfile>,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the constrained query for an object type
    Query {
        /// Object type (well, wellbore, log, trajectory, ...)
        object_type: ObjectType,

        /// Instance id; omit to ask for every instance
        #[arg(long)]
        id: Option<String>,

        /// Ancestor id, closest first; repeat for wellbore then well
        #[arg(long = "parent")]
        parents: Vec<String>,

        /// Keep only these elements
        #[arg(long)]
        include: Vec<String>,

        /// Drop these elements
        #[arg(long)]
        exclude: Vec<String>,

        /// ELEMENT=VALUE; repeating an element asks for each value
        #[arg(long = "value", value_parser = parse_assignment)]
        values: Vec<(String, String)>,

        /// ELEMENT@ATTRIBUTE=VALUE
        #[arg(long = "attribute", value_parser = parse_attribute_assignment)]
        attributes: Vec<(String, String, String)>,
    },

    /// Materialize a saved GetFromStore response and print it as JSON
    Parse {
        /// Object type the response holds
        object_type: ObjectType,

        /// Response file
        file: PathBuf,

        /// Ancestor id, closest first; omit to read them from the response
        #[arg(long = "parent")]
        parents: Vec<String>,

        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::WARN };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let mut config = match &args.config {
        Some(path) => ClientConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ClientConfig::default(),
    };
    if let Some(version) = args.schema {
        config.version = version;
    }
    if let Some(units) = args.units {
        config.units = units;
    }

    match args.command {
        Command::Query {
            object_type,
            id,
            parents,
            include,
            exclude,
            values,
            attributes,
        } => {
            let mut constraints = QueryConstraints::new();
            include.into_iter().for_each(|e| constraints.add_include(e));
            exclude.into_iter().for_each(|e| constraints.add_exclude(e));
            for (element, value) in values {
                constraints.add_value(element, value);
            }
            for (element, attribute, value) in attributes {
                constraints.add_attribute(element, attribute, value);
            }

            let request = QueryRequest {
                version: config.version,
                object_type,
                id,
                parents,
                units: config.units,
                constraints,
            };
            let query = render_query(&request)
                .with_context(|| format!("Failed to build {object_type} query"))?;
            println!("{query}");
        }
        Command::Parse {
            object_type,
            file,
            parents,
            compact,
        } => {
            let xml = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let objects = parse_response(&config, object_type, &xml, &parents)
                .with_context(|| format!("Failed to parse {}", file.display()))?;
            info!("Materialized {} {}(s)", objects.len(), object_type);

            let json = if compact {
                serde_json::to_string(&objects)?
            } else {
                serde_json::to_string_pretty(&objects)?
            };
            println!("{json}");
        }
    }
    Ok(())
}

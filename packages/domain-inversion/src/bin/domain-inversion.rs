//! Domain Inversion CLI
//!
//! Domains and contexts are passed as JSON, results are printed as JSON.
//!
//! # Usage
//!
//! ```bash
//! # Residual constraint on x once y is known
//! domain-inversion invert --domain '[["x","=",3],["y",">",5]]' --field x --context '{"y": 6}'
//!
//! # Evaluate against a full record
//! domain-inversion eval --domain '[["x","in",[3,5]]]' --context '{"x": [3, 4]}'
//!
//! # Normalize
//! domain-inversion simplify --domain '[[["x","=",1]]]'
//! domain-inversion concat '[["x","=",1]]' '[["y","=",2]]' --or
//!
//! # Strict engine settings
//! domain-inversion --config strict.yaml invert --domain '...' --field x
//! ```
//!
//! Logging goes to stderr; set `RUST_LOG=domain_inversion=debug` to trace
//! inversion decisions.

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use domain_inversion::config::EngineConfig;
use domain_inversion::{
    concat, localize_domain, merge, simplify, unique_value, BoolOp, Context, DomainUseCase,
    DomainUseCaseImpl,
};
use serde_json::json;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "domain-inversion")]
#[command(about = "Domain Inversion - evaluate, invert and normalize boolean domains", long_about = None)]
struct Cli {
    /// Engine configuration (YAML v1)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Residual constraint on one field
    Invert {
        /// Domain (JSON)
        #[arg(long)]
        domain: String,

        /// Field to invert on
        #[arg(short, long)]
        field: String,

        /// Known field values (JSON object)
        #[arg(long, default_value = "{}")]
        context: String,
    },

    /// Evaluate a domain against a fully-known record
    Eval {
        /// Domain (JSON)
        #[arg(long)]
        domain: String,

        /// Record values (JSON object)
        #[arg(long, default_value = "{}")]
        context: String,
    },

    /// Remove redundant nesting
    Simplify {
        /// Domain (JSON)
        #[arg(long)]
        domain: String,
    },

    /// Flatten nested groups of the same kind
    Merge {
        /// Domain (JSON)
        #[arg(long)]
        domain: String,
    },

    /// Combine several domains
    Concat {
        /// Domains (JSON)
        domains: Vec<String>,

        /// Combine with OR instead of AND
        #[arg(long)]
        or: bool,
    },

    /// Move clauses on a relation field onto the related model
    Localize {
        /// Domain (JSON)
        #[arg(long)]
        domain: String,

        /// Relation field
        #[arg(short, long)]
        field: Option<String>,

        /// Drop the target model annotation
        #[arg(long)]
        strip_target: bool,
    },

    /// Report whether the domain pins its field to one value
    Unique {
        /// Domain (JSON)
        #[arg(long)]
        domain: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match &cli.config {
        Some(path) => EngineConfig::from_yaml(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    debug!(?config, "engine configured");
    let usecase = DomainUseCaseImpl::new(config)?;

    let output = run(&usecase, cli.command)?;
    println!("{}", serde_json::to_string(&output)?);
    Ok(())
}

fn run(usecase: &DomainUseCaseImpl, command: Commands) -> Result<serde_json::Value> {
    let output = match command {
        Commands::Invert {
            domain,
            field,
            context,
        } => {
            let domain = parse_json(&domain, "domain")?;
            let context = parse_json(&context, "context")?;
            usecase.invert_json(&domain, &field, &context)?
        }
        Commands::Eval { domain, context } => {
            let domain = usecase.decode(&parse_json(&domain, "domain")?)?;
            let context = Context::from_json(&parse_json(&context, "context")?)?;
            json!(usecase.evaluate(&domain, &context))
        }
        Commands::Simplify { domain } => {
            let domain = usecase.decode(&parse_json(&domain, "domain")?)?;
            simplify(&domain).into()
        }
        Commands::Merge { domain } => {
            let domain = usecase.decode(&parse_json(&domain, "domain")?)?;
            merge(&domain).into()
        }
        Commands::Concat { domains, or } => {
            let domains = domains
                .iter()
                .map(|d| Ok(usecase.decode(&parse_json(d, "domain")?)?))
                .collect::<Result<Vec<_>>>()?;
            let op = if or { Some(BoolOp::Or) } else { None };
            concat(&domains, op).into()
        }
        Commands::Localize {
            domain,
            field,
            strip_target,
        } => {
            let domain = usecase.decode(&parse_json(&domain, "domain")?)?;
            localize_domain(&domain, field.as_deref(), strip_target).into()
        }
        Commands::Unique { domain } => {
            let domain = usecase.decode(&parse_json(&domain, "domain")?)?;
            match unique_value(&domain) {
                Some((operator, value)) => json!({
                    "unique": true,
                    "operator": operator,
                    "value": value,
                }),
                None => json!({ "unique": false, "operator": null, "value": null }),
            }
        }
    };
    Ok(output)
}

fn parse_json(text: &str, what: &str) -> Result<serde_json::Value> {
    serde_json::from_str(text).with_context(|| format!("{} is not valid JSON", what))
}

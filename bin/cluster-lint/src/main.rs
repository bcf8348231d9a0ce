use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use cluster_api::AzureCluster;
use cluster_validation::{ClusterValidator, ValidationError, ValidationLimits};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Args, LogFormat, OutputFormat};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_tracing(&args)?;

    let limits = match &args.limits {
        Some(path) => read_yaml::<ValidationLimits>(path).await?,
        None => ValidationLimits::default(),
    };
    debug!("Using limits {:?}", limits);
    let validator = ClusterValidator::new(limits);

    let cluster: AzureCluster = read_yaml(&args.manifest).await?;
    let result = match &args.old {
        Some(path) => {
            let old: AzureCluster = read_yaml(path).await?;
            info!("Validating {} as an update of {}", args.manifest.display(), path.display());
            validator.validate_update(&old, &cluster)
        }
        None => {
            info!("Validating {} as a create", args.manifest.display());
            validator.validate_create(&cluster)
        }
    };

    match result {
        Ok(()) => {
            if args.output == OutputFormat::Text {
                println!("{}: valid", args.manifest.display());
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error @ ValidationError::Invalid { .. }) => {
            report(&error, args.output)?;
            Ok(ExitCode::FAILURE)
        }
        Err(error) => Err(error.into()),
    }
}

fn init_tracing(args: &Args) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&args.log_level)
            .with_context(|| format!("invalid log level {:?}", args.log_level))?,
    };
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match args.log_format {
        LogFormat::Plain => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
    Ok(())
}

async fn read_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_yaml::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

fn report(error: &ValidationError, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Text => {
            eprintln!("{}", error);
            for field_error in error.errors() {
                println!("  - [{:?}] {}", field_error.category, field_error);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(error.errors())?);
        }
    }
    Ok(())
}

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[clap(name = "cluster-lint", about = "Validate AzureCluster manifests before applying them")]
pub struct Args {
    /// AzureCluster manifest to validate
    pub manifest: PathBuf,

    /// Previously applied manifest. When set the manifest is validated as an
    /// update of it, otherwise as a create.
    #[clap(long)]
    pub old: Option<PathBuf>,

    /// YAML file overriding the default validation limits
    #[clap(long)]
    pub limits: Option<PathBuf>,

    #[clap(long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Log filter used when RUST_LOG is unset
    #[clap(long, default_value = "warn", env = "CLUSTER_LINT_LOG")]
    pub log_level: String,

    #[clap(long, value_enum, default_value = "plain", env = "CLUSTER_LINT_LOG_FORMAT")]
    pub log_format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Plain,
    Json,
}

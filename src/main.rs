//! Databoard CLI
//!
//! Command-line front end for the analysis backend:
//! - Upload a data file and print the graphs it returns
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use databoard::{
    ChartKind, Config, DashboardState, UploadClient, UploadPayload, UploadStatus, UploadTransport,
};

#[derive(Parser)]
#[command(name = "databoard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Upload a data file and view the graphs the analysis backend returns")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/databoard/config.toml or ./databoard.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Upload endpoint, overrides the config file
    #[arg(long, global = true)]
    pub endpoint: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upload a file and print the returned graphs
    Upload {
        /// Path to the data file
        file: PathBuf,
        /// Chart type for every card (bar, donut, line, scatter, histogram, heatmap)
        #[arg(short, long, default_value = "bar")]
        kind: ChartKind,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Upload { file, kind, format } => {
            let mut config = load_config(cli.config.as_deref())?;
            if let Some(endpoint) = cli.endpoint {
                config.client.endpoint = endpoint;
            }
            databoard::logging::init(&config.logging);

            tracing::debug!("Upload endpoint: {}", config.client.endpoint);

            let payload = UploadPayload::from_path(&file)
                .with_context(|| format!("Cannot read {:?}", file))?;
            let client = UploadClient::new(config.client)?;

            let state = run_upload(&client, payload, kind).await;

            match state.status() {
                UploadStatus::Failed(failure) => {
                    eprintln!("{}", failure);
                    if failure.is_retryable() {
                        eprintln!();
                        eprintln!("Make sure the analysis backend is running and try again.");
                    }
                    std::process::exit(1);
                }
                _ => match format {
                    OutputFormat::Json => print_json(&state)?,
                    OutputFormat::Table => print_table(&state),
                },
            }
        }

        Commands::Config { output } => {
            let config = databoard::config::generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Ok(Config::load_with_env(path)?),
        None => Ok(Config::load_default()),
    }
}

/// Drive one upload through the dashboard state and apply `kind` to every card
async fn run_upload(
    transport: &dyn UploadTransport,
    payload: UploadPayload,
    kind: ChartKind,
) -> DashboardState {
    let mut state = DashboardState::new();

    state.begin_upload();
    let result = transport.upload(payload).await.map_err(Into::into);
    state.finish_upload(result);

    for index in 0..state.cards().len() {
        state.set_card_kind(index, kind);
    }
    state
}

fn print_table(state: &DashboardState) {
    if state.graphs().is_empty() {
        println!("The backend returned no graphs.");
        return;
    }

    for index in 0..state.graphs().len() {
        if let Some(chart) = state.chart(index) {
            if index > 0 {
                println!();
            }
            println!("[{}] {}", index + 1, chart.describe());
        }
    }
}

fn print_json(state: &DashboardState) -> anyhow::Result<()> {
    let graphs: Vec<serde_json::Value> = state
        .graphs()
        .iter()
        .zip(state.cards())
        .map(|(graph, card)| {
            serde_json::json!({
                "kind": card.kind,
                "supported": card.kind.is_supported(),
                "labels": graph.labels,
                "data": graph.data,
            })
        })
        .collect();

    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({ "graphs": graphs }))?
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use databoard::{ClientError, DecodeError, FailureKind, GraphDescriptor};

    struct CannedTransport(fn() -> Result<Vec<GraphDescriptor>, ClientError>);

    #[async_trait]
    impl UploadTransport for CannedTransport {
        async fn upload(
            &self,
            _payload: UploadPayload,
        ) -> Result<Vec<GraphDescriptor>, ClientError> {
            (self.0)()
        }
    }

    fn payload() -> UploadPayload {
        UploadPayload::new("data.csv", b"a,b\n1,2\n".to_vec())
    }

    #[tokio::test]
    async fn test_run_upload_applies_kind_to_every_card() {
        let transport = CannedTransport(|| {
            Ok(vec![
                GraphDescriptor::new(["q1", "q2"], vec![4.0, 6.0]),
                GraphDescriptor::placeholder(),
            ])
        });

        let state = run_upload(&transport, payload(), ChartKind::Line).await;

        assert_eq!(state.graphs().len(), 2);
        assert!(state.cards().iter().all(|c| c.kind == ChartKind::Line));
        assert!(!state.is_uploading());
    }

    #[tokio::test]
    async fn test_run_upload_records_failure() {
        let transport = CannedTransport(|| {
            Err(ClientError::Decode(DecodeError::NotAnObject("array")))
        });

        let state = run_upload(&transport, payload(), ChartKind::Bar).await;

        assert!(state.graphs().is_empty());
        match state.status() {
            UploadStatus::Failed(failure) => {
                assert_eq!(failure.kind, FailureKind::MalformedResponse)
            }
            other => panic!("unexpected status {:?}", other),
        }
    }

    #[test]
    fn test_cli_parses_upload_flags() {
        let cli = Cli::try_parse_from([
            "databoard",
            "--endpoint",
            "http://backend/upload",
            "upload",
            "sales.csv",
            "--kind",
            "histogram",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.endpoint.as_deref(), Some("http://backend/upload"));
        match cli.command {
            Commands::Upload { file, kind, format } => {
                assert_eq!(file, PathBuf::from("sales.csv"));
                assert_eq!(kind, ChartKind::Histogram);
                assert!(matches!(format, OutputFormat::Json));
            }
            Commands::Config { .. } => panic!("expected upload command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_kind() {
        assert!(Cli::try_parse_from(["databoard", "upload", "a.csv", "--kind", "radar"]).is_err());
    }
}

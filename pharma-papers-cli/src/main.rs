use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use pharma_papers::{ClientConfig, PaperFinder};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod output;

#[derive(Parser, Debug)]
#[command(
    name = "get-papers-list",
    version,
    about = "Fetch PubMed papers with pharma/biotech authors",
    long_about = "Search PubMed and keep only papers with at least one author \
                  affiliated with a pharmaceutical or biotech company"
)]
struct Cli {
    /// Search query (PubMed syntax supported)
    #[arg(value_name = "QUERY")]
    query: String,

    /// Print debug information
    #[arg(short, long)]
    debug: bool,

    /// Output CSV filename (prints to the console when omitted)
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// API key for NCBI E-utilities
    #[arg(long)]
    api_key: Option<String>,

    /// Email for NCBI requests (recommended)
    #[arg(long)]
    email: Option<String>,
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new();

        if let Some(key) = &self.api_key {
            config = config.with_api_key(key);
        }
        if let Some(email) = &self.email {
            config = config.with_email(email);
        }

        config
    }
}

/// Directives for the `EnvFilter`; dependencies stay at `warn`
fn log_directives(debug: bool) -> String {
    let level = if debug { "debug" } else { "info" };
    format!("warn,pharma_papers={level},get_papers_list={level}")
}

fn init_tracing(debug: bool) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(tracing_subscriber::EnvFilter::new(log_directives(debug)))
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!(query = %cli.query, "Running query");

    let finder = PaperFinder::with_config(cli.client_config())?;
    let papers = match finder.fetch_papers(&cli.query, cli.debug).await {
        Ok(papers) => papers,
        Err(e) => {
            eprintln!("Error fetching data: {e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    tracing::debug!(count = papers.len(), "Fetched papers");

    match &cli.file {
        Some(path) => {
            if output::write_csv(path, &papers)? {
                tracing::debug!(path = %path.display(), "Results written to file");
            } else {
                println!("{}", output::NO_DATA_MESSAGE);
            }
        }
        None => output::print_results(&mut std::io::stdout().lock(), &papers)?,
    }

    Ok(ExitCode::SUCCESS)
}

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Args;
use img2latex_core::acquire::from_browse;
use img2latex_core::client::HttpLatexClient;
use img2latex_core::config::ServiceConfig;
use img2latex_core::state::{ConverterState, Transition};
use img2latex_core::submit::execute;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::summary::print_conversion_summary;

#[derive(Args)]
pub struct ConvertArgs {
    /// Input image file
    pub file: PathBuf,

    /// Service config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the conversion endpoint URL
    #[arg(long, env = "IMG2LATEX_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Override the multipart field name
    #[arg(long)]
    pub field: Option<String>,

    /// Print only the LaTeX, without the summary
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn run(args: &ConvertArgs) -> Result<()> {
    let config = build_config(args)?;

    let image = from_browse(&args.file)
        .with_context(|| format!("Failed to load image {}", args.file.display()))?;
    let state = ConverterState::new().apply(Transition::Acquire(image));

    if !args.quiet {
        print_conversion_summary(&config, &state);
    }

    let client = HttpLatexClient::new(config).context("Failed to create HTTP client")?;
    let Some((in_flight, job)) = state.begin_submission() else {
        bail!("Nothing to convert");
    };

    let spinner = if args.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    spinner.set_style(ProgressStyle::default_spinner().template("  {spinner} {msg}")?);
    spinner.set_message(in_flight.controls().submit_label);
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = execute(&client, &job);
    spinner.finish_and_clear();

    let succeeded = outcome.succeeded();
    let done = in_flight.apply(outcome.transition);
    println!("{}", done.output_text());

    if !succeeded {
        bail!("Conversion failed");
    }
    Ok(())
}

fn build_config(args: &ConvertArgs) -> Result<ServiceConfig> {
    let mut config =
        ServiceConfig::resolve(args.config.as_deref()).context("Failed to load config")?;
    if let Some(ref endpoint) = args.endpoint {
        config.endpoint = endpoint.clone();
    }
    if let Some(ref field) = args.field {
        config.field_name = field.clone();
    }
    config.validate().context("Invalid service config")?;
    debug!("Resolved config: {config:?}");
    Ok(config)
}

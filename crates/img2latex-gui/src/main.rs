mod app;
mod convert;
mod messages;
mod panels;
mod paste;
mod states;
mod worker;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use img2latex_core::client::HttpLatexClient;
use img2latex_core::config::ServiceConfig;

#[derive(Parser)]
#[command(name = "img2latex-gui", about = "Convert images of formulas to LaTeX")]
#[command(version)]
struct Args {
    /// Service config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let config = ServiceConfig::resolve(args.config.as_deref()).context("Failed to load config")?;
    let client = HttpLatexClient::new(config.clone()).context("Failed to create HTTP client")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 720.0])
            .with_min_inner_size([420.0, 520.0])
            .with_drag_and_drop(true)
            .with_title("Image to LaTeX"),
        ..Default::default()
    };

    eframe::run_native(
        "Img2Latex",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::Img2LatexApp::new(
                &cc.egui_ctx,
                Arc::new(client),
                config,
            )))
        }),
    )
    .map_err(|e| anyhow!("{e}"))
}

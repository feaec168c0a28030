use std::path::PathBuf;
use std::sync::mpsc::{self, Sender};

use clap::Parser;
use color_eyre::Result;
use tracing::{error, info};

use atlas_core::{load_viz_config_from_env, DatasetSummary, SceneState, VizConfig};
use atlas_data::{load_regions_from_env, RegionCollection};

mod app;
mod ui;

use app::ViewerApp;

#[derive(Clone)]
struct ChannelWriter {
    sender: Sender<String>,
}

impl std::io::Write for ChannelWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if let Ok(text) = String::from_utf8(buf.to_vec()) {
            let _ = self.sender.send(text);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Energy Atlas guided-tour viewer", long_about = None)]
struct Cli {
    /// Path to the regions GeoJSON; defaults to ATLAS_REGIONS_PATH or
    /// the builtin sample dataset.
    #[arg(long)]
    regions: Option<PathBuf>,
    /// Path to the visualization config; defaults to
    /// ATLAS_VIZ_CONFIG_PATH or the builtin config.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let (log_tx, log_rx) = mpsc::channel::<String>();
    let log_writer_tx = log_tx.clone();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .with_writer(move || ChannelWriter {
            sender: log_writer_tx.clone(),
        })
        .init();

    let cli = Cli::parse();

    // A failed load aborts startup; there is no retry or degraded view.
    let config = match cli.config {
        Some(path) => {
            info!(path = %path.display(), "loading viz config");
            match VizConfig::from_file(&path) {
                Ok(config) => std::sync::Arc::new(config),
                Err(err) => {
                    error!(path = %path.display(), error = %err, "viz config load failed");
                    return Err(err.into());
                }
            }
        }
        None => load_viz_config_from_env().0,
    };
    let regions = match cli.regions {
        Some(path) => {
            info!(path = %path.display(), "loading regions");
            match RegionCollection::from_file(&path) {
                Ok(regions) => std::sync::Arc::new(regions),
                Err(err) => {
                    error!(path = %path.display(), error = %err, "regions load failed");
                    return Err(err.into());
                }
            }
        }
        None => load_regions_from_env().0,
    };

    let summary = DatasetSummary::compute(&regions);
    info!(
        features = regions.len(),
        "dataset ready, starting the tour"
    );

    let scene = SceneState::new(regions, config);
    let app = ViewerApp::new(scene, summary, log_rx)?;
    app.run()
}

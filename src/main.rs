/// `BiasViz` - A desktop bias visualizer
///
/// Copyright (C) 2025 BiasViz Authors
///
/// This program is free software: you can redistribute it and/or modify
/// it under the terms of the GNU General Public License as published by
/// the Free Software Foundation, either version 3 of the License, or
/// (at your option) any later version.
///
/// This program is distributed in the hope that it will be useful,
/// but WITHOUT ANY WARRANTY; without even the implied warranty of
/// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
/// GNU General Public License for more details.
///
/// You should have received a copy of the GNU General Public License
/// along with this program.  If not, see <https://www.gnu.org/licenses/>.
use biasviz::config::GlobalConfig;
use biasviz::ui::BiasVizApp;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "biasviz")]
#[command(author = "BiasViz Authors")]
#[command(version)]
#[command(about = "Visualize and compare the bias detected in datasets", long_about = None)]
struct Args {
    /// Share link or id of a dataset or comparison to open
    #[arg(value_name = "LINK")]
    link: Option<String>,

    /// Base URL of the bias service for this session
    #[arg(long = "api-url", value_name = "URL")]
    api_url: Option<String>,

    /// Origin used when building share links
    #[arg(long = "share-origin", value_name = "URL")]
    share_origin: Option<String>,

    /// Store the given URLs in the config file for future sessions
    #[arg(long = "save-config")]
    save_config: bool,
}

fn main() -> eframe::Result<()> {
    // Set RUST_LOG environment variable to override (e.g., RUST_LOG=debug)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!(
        "BiasViz starting up (version {})",
        env!("CARGO_PKG_VERSION")
    );

    let args = Args::parse();

    let mut config = GlobalConfig::load();
    config.apply_overrides(args.api_url, args.share_origin);
    if args.save_config {
        if let Err(e) = config.save() {
            tracing::warn!("Failed to save config: {e:#}");
        }
    }
    tracing::info!("Using bias service at {}", config.api_base_url);

    if let Some(ref link) = args.link {
        tracing::info!("Opening link from command line: {link}");
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "BiasViz - Bias Visualizer",
        native_options,
        Box::new(move |cc| Ok(Box::new(BiasVizApp::new(cc, config, args.link)?))),
    )
}

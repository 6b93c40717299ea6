//! ytembed - YouTube embed widget
//!
//! Serves a small page with a video ID field and renders the embedded player
//! for whatever ID is typed in.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use ytembed::embed::render_embed;
use ytembed::utils::{self, AppSettings};
use ytembed::EmbedServer;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Print the embed fragment for this video ID and exit
    #[arg(long)]
    render: Option<String>,

    /// Interface to listen on
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,

    /// Open the page in the default browser
    #[arg(long)]
    open: bool,

    /// Settings file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt::init();

    if let Some(id) = args.render {
        // Empty input renders nothing
        if let Some(fragment) = render_embed(&id) {
            println!("{}", fragment);
        }
        return Ok(());
    }

    let settings_path = args.config.unwrap_or_else(utils::get_settings_path);
    let mut settings = AppSettings::load(&settings_path)?;
    if let Some(host) = args.host {
        settings.host = host;
    }
    if let Some(port) = args.port {
        settings.port = port;
    }
    if args.open {
        settings.open_browser = true;
    }

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let server = EmbedServer::bind(&settings).await?;
        let url = server.url()?;
        println!("Serving at {}", url);

        if settings.open_browser {
            info!("Opening {} in browser", url);
            if let Err(e) = open::that(&url) {
                warn!("Failed to open browser: {}", e);
            }
        }

        server.serve().await
    })?;

    Ok(())
}

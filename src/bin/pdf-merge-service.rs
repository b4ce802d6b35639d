//! PDF merge service entry point
//!
//! Starts the HTTP server that accepts PDF uploads (or two remote PDF
//! URLs) and returns the merged document as a download.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pdf_merge_service::config::{ServiceConfig, DEFAULT_MAX_UPLOAD_BYTES};
use pdf_merge_service::server::MergeServer;

/// PDF Merge Service - merge uploaded PDFs into one download
#[derive(Parser)]
#[command(name = "pdf-merge-service")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "0.0.0.0:5000")]
    bind: SocketAddr,

    /// Maximum total upload size in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    max_upload_bytes: usize,

    /// Root directory for per-request workspaces (defaults to the
    /// system temp directory)
    #[arg(long)]
    temp_root: Option<PathBuf>,

    /// Suggested filename for the merged download
    #[arg(long, default_value = "merged.pdf")]
    download_filename: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = ServiceConfig {
        bind_addr: cli.bind,
        max_upload_bytes: cli.max_upload_bytes,
        temp_root: cli.temp_root,
        download_filename: cli.download_filename,
        ..ServiceConfig::default()
    };

    MergeServer::new(config)
        .serve()
        .await
        .context("server exited with an error")?;

    Ok(())
}

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::config::Config;
use crate::export::{ExportOutcome, ExportTrigger, FileExportHost, LazyPdfSerializer};
use crate::models::ResumeProfile;
use crate::render::{ScreenContext, ScreenRenderer};
use crate::routes::build_router;
use crate::share::{Acknowledgement, CommandClipboard, CopyOutcome, ShareAction, TerminalSelection};
use crate::state::{load_profile, AppState};
use crate::theme::{MotionPreference, Theme};

#[derive(Parser, Debug)]
#[command(name = "site", version, about = "Résumé hub: web page, PDF export and share link")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the résumé page and export endpoint (default).
    Serve,
    /// Write Dinesh_Dawonauth_Resume.pdf into a directory.
    Export {
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Copy the share link to the clipboard.
    Share {
        /// Overrides SHARE_URL.
        #[arg(long)]
        url: Option<String>,
    },
}

pub async fn run(cli: Cli, config: Config) -> Result<()> {
    let profile = load_profile(&config)?;
    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config, profile).await,
        Command::Export { out } => export(&config, &profile, out).await,
        Command::Share { url } => share(url.unwrap_or(config.share_url)).await,
    }
}

async fn serve(config: Config, profile: ResumeProfile) -> Result<()> {
    let port = config.port;
    let state = AppState::new(config, profile)?;

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn export(config: &Config, profile: &ResumeProfile, out: PathBuf) -> Result<()> {
    // Rendered up front so the fallback has something to write.
    let print_page = ScreenRenderer::new()?.render(
        profile,
        &ScreenContext {
            theme: Theme::Light,
            motion: MotionPreference::Reduce,
            auto_print: true,
            share_url: config.share_url.clone(),
        },
    )?;

    let host = FileExportHost::new(out, print_page);
    let trigger = ExportTrigger::new(Arc::new(LazyPdfSerializer), config.export_timeout);

    match trigger.export(profile, &host).await {
        ExportOutcome::Downloaded { size_bytes, .. } => {
            println!("Saved {} ({size_bytes} bytes)", host.pdf_path().display());
        }
        ExportOutcome::PrintFallback { reason } => {
            warn!("PDF export failed: {reason}");
            println!(
                "PDF export failed; open {} and print it instead",
                host.print_page_path().display()
            );
        }
        ExportOutcome::Ignored => {}
    }
    Ok(())
}

async fn share(url: String) -> Result<()> {
    let share = ShareAction::new(
        url,
        Arc::new(CommandClipboard::default()),
        Arc::new(TerminalSelection),
    );
    let mut ack = share.subscribe();
    info!(url = share.url(), "Sharing résumé link");

    if share.copy().await == CopyOutcome::Selection {
        println!("Select the link above to copy it.");
    }
    println!("Copied!");

    while *ack.borrow_and_update() == Acknowledgement::Copied {
        ack.changed()
            .await
            .context("Share acknowledgement channel closed")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_serve() {
        let cli = Cli::parse_from(["site"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_export_out_dir() {
        let cli = Cli::parse_from(["site", "export", "--out", "/tmp/cv"]);
        assert!(matches!(cli.command, Some(Command::Export { out }) if out == PathBuf::from("/tmp/cv")));
    }

    #[test]
    fn test_share_url_override() {
        let cli = Cli::parse_from(["site", "share", "--url", "https://example.com"]);
        assert!(matches!(
            cli.command,
            Some(Command::Share { url: Some(ref u) }) if u == "https://example.com"
        ));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

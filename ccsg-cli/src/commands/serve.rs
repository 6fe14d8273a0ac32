//! Serve command: build once, watch for changes, serve the output over HTTP.

use super::load_config;
use anyhow::{Context, Result};
use axum::Router;
use ccsg_core::{SiteBuilder, MARKUP_EXT, TEMPLATE_EXT};
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tower_http::services::ServeDir;

/// Start the watch-rebuild-serve loop.
///
/// One initial build (a missing or ambiguous theme is fatal here), then a
/// notify watcher over `content/` and `themes/` feeding rebuild triggers to
/// a single worker, with the HTTP server in the foreground. Ctrl-C stops
/// the listener, drops the watcher, and joins the worker before returning.
pub async fn serve_site(config_path: &Path, port: Option<u16>, theme: Option<&str>) -> Result<()> {
    let mut config = load_config(config_path)?;
    if theme.is_some() {
        config.theme = theme.map(str::to_string);
    }
    let port = port.unwrap_or(config.server.port);

    let builder = Arc::new(SiteBuilder::new(config.clone()));

    {
        let builder = Arc::clone(&builder);
        tokio::task::spawn_blocking(move || builder.build_once())
            .await?
            .context("Initial build failed")?;
    }

    // Rebuild triggers flow through a bounded channel into one worker, so
    // at most one build is ever in flight. A trigger arriving mid-build
    // queues in the single slot; further triggers find the slot taken and
    // are dropped, since the queued one already guarantees a follow-up
    // build over the full tree.
    let (trigger_tx, trigger_rx) = mpsc::channel::<()>(1);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<notify::Event>| match res {
            Ok(event) => {
                if is_relevant(&event) {
                    let _ = trigger_tx.try_send(());
                }
            }
            Err(err) => tracing::warn!("Watcher error: {}", err),
        },
        notify::Config::default(),
    )
    .context("Failed to initialize file watcher")?;

    for dir in [config.content_dir(), config.themes_dir()] {
        watcher
            .watch(&dir, RecursiveMode::Recursive)
            .with_context(|| format!("Failed to watch {dir:?}"))?;
    }

    let worker = tokio::spawn(rebuild_worker(
        Arc::clone(&builder),
        trigger_rx,
        shutdown_rx,
    ));

    let app = site_router(&config.output_dir());

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    tracing::info!("Serving {:?} on {}", config.output_dir(), addr);
    println!("🚀 Serving at http://localhost:{port}");
    println!("👀 Watching for changes... (Ctrl+C to stop)");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .context("Server error")?;

    // Listener is closed. Dropping the watcher stops new triggers; the
    // shutdown signal releases the worker even with a trigger still queued.
    drop(watcher);
    shutdown_tx.send(true).ok();
    worker.await?;

    println!("\n🛑 Server stopped");
    Ok(())
}

/// Static file serving rooted at the output directory: directory requests
/// fall through to their `index.html`, anything missing is a 404.
fn site_router(output_dir: &Path) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(output_dir).append_index_html_on_directories(true))
}

/// Only markup and template edits trigger rebuilds.
fn is_relevant(event: &notify::Event) -> bool {
    event.paths.iter().any(|path| {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == MARKUP_EXT || ext == TEMPLATE_EXT)
    })
}

/// Single consumer of rebuild triggers.
///
/// Receiving here is what serializes builds: the next trigger is not taken
/// off the channel until the current pass has finished, and anything that
/// piled up in the meantime collapses into one follow-up pass. A failed
/// rebuild is logged and the worker keeps going; the server keeps serving
/// the last good artifacts.
async fn rebuild_worker(
    builder: Arc<SiteBuilder>,
    mut triggers: mpsc::Receiver<()>,
    mut shutdown: watch::Receiver<bool>,
) {
    loop {
        tokio::select! {
            trigger = triggers.recv() => {
                if trigger.is_none() {
                    return;
                }
                while triggers.try_recv().is_ok() {}

                tracing::info!("Change detected, rebuilding site...");
                let builder = Arc::clone(&builder);
                match tokio::task::spawn_blocking(move || builder.build_once()).await {
                    Ok(Ok(report)) => tracing::info!(
                        "Rebuilt {} pages ({} failures)",
                        report.written.len(),
                        report.failures.len()
                    ),
                    Ok(Err(err)) => tracing::error!("Rebuild failed: {}", err),
                    Err(err) => tracing::error!("Rebuild task panicked: {}", err),
                }
            }
            _ = shutdown.changed() => return,
        }
    }
}

//! Local feed server.
//!
//! Built on `tiny_http`. Every request re-reads the post collection, so
//! edits under the content directory show up without a rebuild.
//!
//! | Path              | Response                          |
//! |-------------------|-----------------------------------|
//! | `/<feed.path>`    | Freshly generated rss document    |
//! | `/<build.export>` | Freshly generated `site.json`     |
//! | anything else     | 404                               |
//!
//! A failing content store turns into a 500 for that request only.

use crate::{
    config::SiteConfig,
    content::DirectoryStore,
    generator::{render_export, render_feed},
    log,
    utils::date::DateTimeUtc,
};
use anyhow::{Context, Result};
use std::{
    io::Cursor,
    net::{IpAddr, SocketAddr},
    sync::Arc,
};
use tiny_http::{Header, Request, Response, Server, StatusCode};

/// Try binding to port, retry with incremented port if in use
const MAX_PORT_RETRIES: u16 = 10;

const RSS_CONTENT_TYPE: &str = "application/rss+xml; charset=utf-8";
const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

// ============================================================================
// Server Entry Point
// ============================================================================

/// Start the server and block until Ctrl+C is received.
pub fn serve_site(config: &SiteConfig) -> Result<()> {
    let interface: IpAddr = config
        .serve
        .interface
        .parse()
        .with_context(|| format!("Invalid interface `{}`", config.serve.interface))?;

    let (server, addr) = try_bind_port(interface, config.serve.port, MAX_PORT_RETRIES)?;
    let server = Arc::new(server);

    let server_for_signal = Arc::clone(&server);
    ctrlc::set_handler(move || {
        log!("serve"; "shutting down...");
        server_for_signal.unblock();
    })
    .context("Failed to set Ctrl+C handler")?;

    log!("serve"; "http://{}{}", addr, config.feed.url_path());

    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, config) {
            log!("serve"; "request error: {e}");
        }
    }

    Ok(())
}

/// Try to bind to a port, retrying with incremented port numbers if in use.
fn try_bind_port(interface: IpAddr, base_port: u16, max_retries: u16) -> Result<(Server, SocketAddr)> {
    let mut last_error = None;
    for offset in 0..max_retries {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::new(interface, port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {} in use, using {} instead", base_port, port);
                }
                return Ok((server, addr));
            }
            Err(e) => last_error = Some(e),
        }
    }

    Err(anyhow::anyhow!(
        "Failed to bind after {} attempts (ports {}-{}): {}",
        max_retries,
        base_port,
        base_port.saturating_add(max_retries.saturating_sub(1)),
        last_error.map(|e| e.to_string()).unwrap_or_default()
    ))
}

// ============================================================================
// Request Handling
// ============================================================================

/// What a request path resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Feed,
    Export,
    NotFound,
}

/// Resolve a raw request URL (percent-encoded, possibly with a query string).
fn route(raw_url: &str, config: &SiteConfig) -> Route {
    let url_path = urlencoding::decode(raw_url)
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_default();
    let path = url_path.split('?').next().unwrap_or(&url_path);
    let path = path.trim_matches('/');

    if config.feed.enable && path == config.feed.path.to_string_lossy().trim_matches('/') {
        Route::Feed
    } else if path == config.build.export.to_string_lossy().trim_matches('/') {
        Route::Export
    } else {
        Route::NotFound
    }
}

fn handle_request(request: Request, config: &SiteConfig) -> Result<()> {
    let store = DirectoryStore::new(&config.build.content, DateTimeUtc::now());

    let rendered = match route(request.url(), config) {
        Route::Feed => render_feed(config, &store).map(|body| (body, RSS_CONTENT_TYPE)),
        Route::Export => render_export(config, &store).map(|body| (body, JSON_CONTENT_TYPE)),
        Route::NotFound => return respond(request, 404, "text/plain", "404 Not Found".into()),
    };

    match rendered {
        Ok((body, content_type)) => respond(request, 200, content_type, body),
        Err(e) => {
            log!("error"; "{:#}", e);
            respond(request, 500, "text/plain", "500 Internal Server Error".into())
        }
    }
}

// ============================================================================
// Response Helpers
// ============================================================================

fn respond(request: Request, status: u16, content_type: &str, body: String) -> Result<()> {
    let header = Header::from_bytes("Content-Type", content_type)
        .map_err(|()| anyhow::anyhow!("Invalid header value `{content_type}`"))?;
    let len = body.len();
    let response = Response::new(
        StatusCode(status),
        vec![header],
        Cursor::new(body.into_bytes()),
        Some(len),
        None,
    );
    request.respond(response)?;
    Ok(())
}

//! The HTTP accept loop and request routing.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use http_body_util::{BodyExt, Full, Limited};
use hyper::body::{Bytes, Incoming};
use hyper::header::{HeaderValue, ALLOW, CONTENT_TYPE};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::form::{submit, FormFields, Submission};
use crate::page::{form_page, result_page};
use crate::{ServerConfig, WebError};

const HTML: &str = "text/html; charset=utf-8";
const TEXT: &str = "text/plain; charset=utf-8";

/// Bind the configured address and serve until the listener fails.
pub async fn start(config: ServerConfig) -> Result<(), WebError> {
    let addr: SocketAddr =
        config
            .listen_addr
            .parse()
            .map_err(|source| WebError::InvalidAddress {
                addr: config.listen_addr.clone(),
                source,
            })?;
    let listener = TcpListener::bind(addr).await?;
    serve(listener, config).await
}

/// Serve connections from an already bound listener.
///
/// Each connection is handled on its own task; the only state shared
/// between them is the read-only configuration.
pub async fn serve(listener: TcpListener, config: ServerConfig) -> Result<(), WebError> {
    let config = Arc::new(config);
    let local_addr = listener.local_addr()?;
    info!(addr = %local_addr, "Calculator listening");

    loop {
        let (stream, peer) = listener.accept().await?;
        let io = TokioIo::new(stream);
        let config = config.clone();

        tokio::spawn(async move {
            let service = service_fn(move |req: Request<Incoming>| {
                let config = config.clone();
                async move { handle_request(req, &config).await }
            });

            if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                warn!(%peer, error = %e, "Connection error");
            }
        });
    }
}

async fn handle_request(
    req: Request<Incoming>,
    config: &ServerConfig,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    debug!(%method, %path, "Request");

    let response = match (&method, path.as_str()) {
        (&Method::GET, "/") => {
            respond(StatusCode::OK, HTML, form_page(&FormFields::default(), None))
        }
        (&Method::POST, "/") => {
            let limited = Limited::new(req.into_body(), config.max_form_bytes);
            match limited.collect().await {
                Ok(collected) => render_submission(&collected.to_bytes()),
                Err(e) => {
                    debug!(error = %e, "Unreadable form body");
                    respond(StatusCode::BAD_REQUEST, TEXT, "Bad Request".to_string())
                }
            }
        }
        (_, "/") => method_not_allowed("GET, POST"),
        (&Method::GET, "/health" | "/healthz") => respond(StatusCode::OK, TEXT, "OK".to_string()),
        (_, "/health" | "/healthz") => method_not_allowed("GET"),
        _ => respond(StatusCode::NOT_FOUND, TEXT, "Not Found".to_string()),
    };

    Ok(response)
}

/// Render the response page for a form body.
pub fn render_submission(body: &[u8]) -> Response<Full<Bytes>> {
    let html = match submit(FormFields::parse(body)) {
        Submission::Calculated(calc) => result_page(&calc),
        Submission::Rejected { fields, message } => form_page(&fields, Some(&message)),
    };
    respond(StatusCode::OK, HTML, html)
}

fn method_not_allowed(allow: &'static str) -> Response<Full<Bytes>> {
    let mut response = respond(
        StatusCode::METHOD_NOT_ALLOWED,
        TEXT,
        "Method Not Allowed".to_string(),
    );
    response
        .headers_mut()
        .insert(ALLOW, HeaderValue::from_static(allow));
    response
}

fn respond(status: StatusCode, content_type: &'static str, body: String) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from(body)));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    response
}

//! Exercise the server over a real socket.

use mm2_web::{serve, ServerConfig};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

async fn start_server(config: ServerConfig) -> std::net::SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(serve(listener, config));
    addr
}

async fn send(addr: std::net::SocketAddr, request: String) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    String::from_utf8(response).unwrap()
}

fn get(path: &str) -> String {
    format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
}

fn post_form(body: &str) -> String {
    format!(
        "POST / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\
         Content-Type: application/x-www-form-urlencoded\r\n\
         Content-Length: {}\r\n\r\n{}",
        body.len(),
        body
    )
}

#[tokio::test]
async fn serves_input_form() {
    let addr = start_server(ServerConfig::default()).await;
    let response = send(addr, get("/")).await;

    assert!(response.starts_with("HTTP/1.1 200 OK"));
    assert!(response.contains("text/html"));
    assert!(response.contains("<form method=\"post\""));
}

#[tokio::test]
async fn computes_submitted_form() {
    let addr = start_server(ServerConfig::default()).await;
    let response = send(addr, post_form("interarrival_min=2&service_min=3")).await;

    assert!(response.starts_with("HTTP/1.1 200 OK"));
    assert!(response.contains("Step 1: Compute λ (arrival rate)"));
    assert!(response.contains("W = 12"));
    assert!(response.contains("Wq = 4.5"));
}

#[tokio::test]
async fn unstable_input_redisplays_form() {
    let addr = start_server(ServerConfig::default()).await;
    let response = send(addr, post_form("interarrival_min=1&service_min=3")).await;

    assert!(response.starts_with("HTTP/1.1 200 OK"));
    assert!(response.contains("System is unstable"));
    assert!(response.contains("value=\"1\""));
    assert!(response.contains("value=\"3\""));
}

#[tokio::test]
async fn health_and_unknown_paths() {
    let addr = start_server(ServerConfig::default()).await;

    let health = send(addr, get("/healthz")).await;
    assert!(health.starts_with("HTTP/1.1 200 OK"));
    assert!(health.ends_with("OK"));

    let missing = send(addr, get("/nope")).await;
    assert!(missing.starts_with("HTTP/1.1 404 Not Found"));
}

#[tokio::test]
async fn rejects_other_methods_on_root() {
    let addr = start_server(ServerConfig::default()).await;
    let request =
        "DELETE / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n".to_string();
    let response = send(addr, request).await;

    assert!(response.starts_with("HTTP/1.1 405 Method Not Allowed"));
    assert!(response.to_ascii_lowercase().contains("allow: get, post"));
}

#[tokio::test]
async fn health_answers_only_get() {
    let addr = start_server(ServerConfig::default()).await;

    for method in ["POST", "DELETE"] {
        let request = format!(
            "{method} /healthz HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\
             Content-Length: 0\r\n\r\n"
        );
        let response = send(addr, request).await;

        assert!(response.starts_with("HTTP/1.1 405 Method Not Allowed"), "{method}");
        assert!(response.to_ascii_lowercase().contains("allow: get\r\n"));
    }

    let health = send(addr, get("/health")).await;
    assert!(health.starts_with("HTTP/1.1 200 OK"));
}

#[tokio::test]
async fn oversized_form_is_rejected() {
    let config = ServerConfig::builder().max_form_bytes(16).build();
    let addr = start_server(config).await;
    let body = format!("interarrival_min={}&service_min=3", "1".repeat(64));
    let response = send(addr, post_form(&body)).await;

    assert!(response.starts_with("HTTP/1.1 400 Bad Request"));
}

//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::task::JoinHandle;

use liveness_backend::config::ServerConfig;
use liveness_backend::{app, net, HttpServer, Shutdown};

/// A server running on an ephemeral loopback port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

/// Spawn the full server (application router plus middleware stack) on
/// 127.0.0.1 with an OS-assigned port.
pub async fn spawn_server() -> TestServer {
    let mut config = ServerConfig::default();
    config.listener.host = "127.0.0.1".to_string();
    config.listener.port = 0;

    let listener = net::bind_listener(&config.listener).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, app::main::app());
    assert_eq!(server.config().listener.host, "127.0.0.1");

    let handle = tokio::spawn(server.run(listener, shutdown.clone()));

    // Give the accept loop a moment to come up.
    tokio::time::sleep(Duration::from_millis(20)).await;

    TestServer {
        addr,
        shutdown,
        handle,
    }
}

/// Issue a raw HTTP/1.1 GET and return the full response text.
pub async fn http_get(addr: SocketAddr, path: &str) -> String {
    http_get_with_headers(addr, path, &[]).await
}

/// Issue a raw HTTP/1.1 GET with extra headers and return the response text.
pub async fn http_get_with_headers(
    addr: SocketAddr,
    path: &str,
    headers: &[(&str, &str)],
) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();

    let mut request = format!("GET {} HTTP/1.1\r\nHost: localhost\r\n", path);
    for (name, value) in headers {
        request.push_str(&format!("{}: {}\r\n", name, value));
    }
    request.push_str("Connection: close\r\n\r\n");

    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    String::from_utf8(response).unwrap()
}

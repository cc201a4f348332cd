//! Listener setup and the accept loop.
//!
//! Each accepted connection is served as its own task; there is no
//! connection limit, no per-request timeout, and no state shared
//! between requests beyond the read-only configuration.

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::handler;
use crate::logger;

/// Create a non-blocking `TcpListener` with `SO_REUSEADDR` enabled.
///
/// Reusing the address lets a freshly restarted process rebind the
/// port while old sockets sit in `TIME_WAIT`.
pub fn create_listener(addr: SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;
    socket.set_nonblocking(true)?;
    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}

/// Accept connections until the process is interrupted.
pub async fn run(listener: TcpListener, config: Arc<Config>) {
    loop {
        match listener.accept().await {
            Ok((stream, _peer_addr)) => handle_connection(stream, Arc::clone(&config)),
            Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
        }
    }
}

/// Serve one HTTP/1.1 connection in a spawned task.
fn handle_connection(stream: tokio::net::TcpStream, config: Arc<Config>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().serve_connection(
            io,
            service_fn(move |req| {
                let config = Arc::clone(&config);
                async move { handler::handle_request(req, config).await }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}

/// Resolve when the operator asks the process to stop.
///
/// Ctrl+C everywhere, plus SIGTERM on Unix.
#[cfg(unix)]
pub async fn shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {}
                _ = sigterm.recv() => {}
            }
        }
        Err(e) => {
            logger::log_warning(&format!("Failed to register SIGTERM handler: {e}"));
            let _ = tokio::signal::ctrl_c().await;
        }
    }
}

#[cfg(not(unix))]
pub async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

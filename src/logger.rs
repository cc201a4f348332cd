use chrono::Local;
use hyper::Method;
use std::net::SocketAddr;

pub fn log_server_start(addr: &SocketAddr, display_ip: &str, pages: &[String]) {
    let port = addr.port();
    println!("==================================================");
    println!("Server started successfully");
    println!("==================================================");
    println!("Local URL: http://localhost:{port}");
    println!("LAN URL:   http://{display_ip}:{port}");
    println!("==================================================");
    println!("Available pages:");
    for page in pages {
        println!("  - http://localhost:{port}{page}");
    }
    println!("==================================================");
    println!("To stop: press Ctrl + C");
    println!("==================================================\n");
}

pub fn log_request(method: &Method, url: &str) {
    println!("[{}] {method} {url}", Local::now().format("%H:%M:%S"));
}

pub fn log_response(size: usize) {
    println!("[Response] Sent 200 OK ({size} bytes)");
}

pub fn log_not_found(file_path: &str) {
    println!("[404] File not found: {file_path}");
}

pub fn log_server_error(kind: std::io::ErrorKind) {
    eprintln!("[ERROR] Server error: {kind:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_shutdown() {
    println!("\n[Signal] Server stopped by user");
}

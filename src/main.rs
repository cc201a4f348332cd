use std::sync::Arc;

use aula_server::{config, logger, netinfo, server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    // A bind failure here propagates; there is no graceful handling for
    // a port already in use.
    let listener = server::create_listener(addr)?;

    // Computed once at startup, informational only: the listener is
    // already bound to the wildcard address above.
    let display_ip = netinfo::display_ip();
    logger::log_server_start(&addr, &display_ip, &cfg.files.pages);

    let cfg = Arc::new(cfg);
    tokio::select! {
        // The accept loop never returns on its own; the process ends on
        // the operator's interrupt with a clean exit status.
        () = server::run(listener, cfg) => {}
        () = server::shutdown_signal() => logger::log_shutdown(),
    }

    Ok(())
}

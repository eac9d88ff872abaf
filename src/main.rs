use std::sync::Arc;

use envserve::config::{AppState, Config};
use envserve::logger;
use envserve::server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A malformed PORT value fails here, before anything is bound
    let cfg = Config::load()?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;
    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;
    let state = Arc::new(AppState::new(cfg)?);
    let listener = server::listener::create_listener(addr)?;

    logger::log_server_start(&addr, state.root(), &state.config);

    server::run(listener, state).await
}

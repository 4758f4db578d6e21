//! Pricing API process: reads config once, sizes the runtime from it and
//! serves until the listener fails or Ctrl+C arrives.

use std::process::ExitCode;

use configs::AppConfig;
use dotenvy::dotenv;
use tokio::runtime::{Builder, Runtime};
use tracing::{error, info};
use uuid::Uuid;

fn install_panic_hook(service_id: Uuid) {
    let pid = std::process::id();
    std::panic::set_hook(Box::new(move |info| {
        error!(service = "server", event = "panic", %service_id, pid, message = %info, "unhandled panic occurred");
    }));
}

fn build_runtime(threads: Option<usize>) -> std::io::Result<Runtime> {
    let mut builder = Builder::new_multi_thread();
    builder.enable_all();
    if let Some(n) = threads {
        builder.worker_threads(n);
    }
    builder.build()
}

async fn serve(cfg: Option<AppConfig>, service_id: Uuid) -> ExitCode {
    let server_task = tokio::spawn(server::run(cfg));
    tokio::select! {
        joined = server_task => match joined {
            Ok(Ok(())) => {
                info!(service = "server", event = "stop", %service_id, "server stopped");
                ExitCode::SUCCESS
            }
            Ok(Err(e)) => {
                error!(service = "server", event = "run_failed", error = %e, "server exited with an error");
                ExitCode::FAILURE
            }
            Err(e) => {
                error!(service = "server", event = "task_join_error", error = %e, "server task aborted");
                ExitCode::FAILURE
            }
        },
        _ = tokio::signal::ctrl_c() => {
            info!(service = "server", event = "shutdown_signal", %service_id, "Ctrl+C received, exiting");
            ExitCode::SUCCESS
        }
    }
}

fn main() -> ExitCode {
    // .env first so RUST_LOG and LOG_FORMAT apply to the subscriber
    dotenv().ok();
    common::utils::logging::init_logging_from_env();

    let service_id = Uuid::new_v4();
    install_panic_hook(service_id);

    let cfg = match server::startup::load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = "server", event = "config_invalid", error = %e, "refusing to start");
            return ExitCode::FAILURE;
        }
    };
    let threads = server::startup::worker_threads(cfg.as_ref());

    let rt = match build_runtime(threads) {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "server", event = "runtime_build_failed", error = %e, "cannot build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service = "server",
        event = "start",
        %service_id,
        pid = std::process::id(),
        version = env!("CARGO_PKG_VERSION"),
        threads = threads.unwrap_or_default(),
        config_file = cfg.is_some(),
        "pricing server starting"
    );
    rt.block_on(serve(cfg, service_id))
}

//! Reusable server runtime.
//!
//! [`ServerHandle`] owns the full lifecycle: registry construction, metrics
//! recorder, REST API listener and graceful shutdown. The CLI binary and the
//! integration tests both start the service through it.

use std::net::SocketAddr;
use std::sync::OnceLock;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use thiserror::Error;
use tracing::{error, info};

use crate::application::{SharedUserRegistry, UserRegistry};
use crate::config::AppConfig;
use crate::interfaces::http::modules::info::{AUTHORS, COURSE, GROUP, INSTITUTION, SERVICE_NAME};
use crate::interfaces::http::router::DOCS_PATH;
use crate::interfaces::http::{create_api_router, RouterOptions};
use crate::shared::shutdown::ShutdownCoordinator;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    #[error("failed to install Prometheus recorder: {0}")]
    Metrics(#[from] BuildError),
}

// ── Options ────────────────────────────────────────────────────────

/// Options for starting the service.
#[derive(Default)]
pub struct ServerOptions {
    /// Application configuration.
    pub config: AppConfig,
    /// Use this registry instead of building one from `config.registry`.
    pub registry: Option<SharedUserRegistry>,
}

// ── ServerHandle ───────────────────────────────────────────────────

/// Handle to a running service.
///
/// # Examples
///
/// ```rust,no_run
/// use user_registry::server::{ServerHandle, ServerOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let handle = ServerHandle::start(ServerOptions::default()).await?;
///     handle.install_signal_handler();
///     handle.wait().await;
///     Ok(())
/// }
/// ```
pub struct ServerHandle {
    /// The registry served by this instance.
    pub registry: SharedUserRegistry,
    /// The configuration the server was started with.
    pub config: AppConfig,
    /// Address the listener is bound to (resolves port `0`).
    pub local_addr: SocketAddr,

    shutdown: ShutdownCoordinator,
    api_task: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    /// Build the registry and router, bind the listener and start serving.
    pub async fn start(opts: ServerOptions) -> Result<Self, ServerError> {
        let app_cfg = opts.config;

        let registry = opts.registry.unwrap_or_else(|| {
            if app_cfg.registry.seed {
                UserRegistry::seeded().shared()
            } else {
                UserRegistry::new().shared()
            }
        });
        info!(users = registry.len(), "👥 User registry ready");

        let metrics = if app_cfg.api.metrics_enabled {
            Some(prometheus_handle()?)
        } else {
            None
        };

        let router = create_api_router(
            registry.clone(),
            RouterOptions {
                docs: app_cfg.api.docs_enabled,
                metrics,
            },
        );

        let addr = app_cfg.address();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.clone(),
                source,
            })?;
        let local_addr = listener.local_addr().map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

        log_banner(local_addr, app_cfg.api.docs_enabled);

        let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
        let api_shutdown = shutdown.signal();
        let api_server = axum::serve(listener, router).with_graceful_shutdown(async move {
            api_shutdown.wait().await;
            info!("🛑 REST API server received shutdown signal");
        });

        let api_task = tokio::spawn(async move {
            if let Err(e) = api_server.await {
                error!("REST API server error: {}", e);
            }
        });

        Ok(Self {
            registry,
            config: app_cfg,
            local_addr,
            shutdown,
            api_task,
        })
    }

    /// Install OS signal listeners (SIGTERM, SIGINT) that trigger shutdown.
    pub fn install_signal_handler(&self) {
        self.shutdown.start_signal_listener();
    }

    /// Trigger graceful shutdown (non-blocking).
    pub fn trigger_shutdown(&self) {
        self.shutdown.signal().trigger();
    }

    /// Wait until shutdown is triggered and the server has drained.
    ///
    /// Returns `false` if in-flight requests outlived `server.shutdown_timeout`.
    pub async fn wait(self) -> bool {
        let Self {
            shutdown, api_task, ..
        } = self;

        let finished = shutdown
            .shutdown_with_cleanup(|| async move {
                match api_task.await {
                    Ok(()) => info!("REST API server stopped"),
                    Err(e) => error!("REST API server task panicked: {}", e),
                }
            })
            .await;

        info!("👋 {} shutdown complete", SERVICE_NAME);
        finished
    }

    /// Trigger shutdown and wait for completion.
    pub async fn shutdown(self) -> bool {
        self.trigger_shutdown();
        self.wait().await
    }

    /// Check if the server is still running.
    pub fn is_running(&self) -> bool {
        !self.api_task.is_finished()
    }
}

// ── Helpers ────────────────────────────────────────────────────────

/// The global metrics recorder can only be installed once per process;
/// a restart within the same process reuses it.
fn prometheus_handle() -> Result<PrometheusHandle, ServerError> {
    static PROM_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

    if let Some(handle) = PROM_HANDLE.get() {
        return Ok(handle.clone());
    }

    let handle = PrometheusBuilder::new().install_recorder()?;
    info!("📊 Prometheus metrics recorder installed");
    Ok(PROM_HANDLE.get_or_init(|| handle).clone())
}

fn log_banner(addr: SocketAddr, docs_enabled: bool) {
    info!("=== {} ===", SERVICE_NAME);
    info!("Desenvolvido por: {}", AUTHORS.join(", "));
    info!("Grupo: {} | Instituição: {}", GROUP, INSTITUTION);
    info!("Disciplina: {}", COURSE);
    if docs_enabled {
        info!("Documentação Swagger disponível em: http://{}{}/", addr, DOCS_PATH);
    }
    info!("API rodando em: http://{}", addr);
}

/// Initialize tracing (logging) from the application config.
///
/// Call this once at process startup (before [`ServerHandle::start`]).
/// `RUST_LOG` overrides `logging.level` when set.
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}

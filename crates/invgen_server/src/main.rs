//! invgen_server — REST backend generating deployment inventories from roles.
//!
//! Reads config from env vars (a `.env` file is honored):
//!   WORKSPACE                — workspace root (default: /workspace)
//!   RELATIVE_ROLES_DIR       — roles dir relative to the root (default: roles)
//!   RELATIVE_CATEGORIES_FILE — categories document relative to the root
//!                              (default: roles/categories.yml)
//!   BIND_ADDR                — listen address (default: 0.0.0.0:8000)

use invgen_core::config::Config;
use invgen_server::router::build_router;
use invgen_server::state::AppState;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,invgen_server=debug,tower_http=debug".into()),
        )
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env();
    tracing::info!(
        workspace = %config.workspace.display(),
        roles_dir = %config.roles_dir.display(),
        categories_file = %config.categories_file.display(),
        "resolved workspace paths"
    );

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into());

    let app = build_router(AppState::new(config));

    let listener = TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {bind_addr}: {e}"));
    tracing::info!("invgen_server listening on {bind_addr}");

    axum::serve(listener, app).await.expect("server error");
}

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;

use crate::configuration::Configuration;
use crate::server::appstate::AppState;
use crate::server::handlers;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/functions", get(handlers::functions))
        .route("/plot", get(handlers::plot))
        .route("/calculate", get(handlers::calculate))
        .with_state(state)
}

#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("server i/o error: {0}")]
    Io(#[from] std::io::Error)
}

pub async fn run(config: Configuration, state: AppState) -> Result<(), ServeError> {
    let listener = TcpListener::bind(config.listen_address()).await?;
    log::info!(
        "serving {} activation functions on http://{}",
        state.catalog().len(),
        listener.local_addr()?
    );
    axum::serve(listener, router(state)).await?;
    Ok(())
}

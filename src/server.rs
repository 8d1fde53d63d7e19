use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use std::{any::Any, net::SocketAddr, sync::Arc, time::Duration};
use tower_http::{
    catch_panic::CatchPanicLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::api::{GenerateRequest, GenerateResponse};
use crate::catalog::NicheCatalog;
use crate::config::ServerConfig;
use crate::error::{ApiError, ApiResult};
use crate::random::RngSource;
use crate::synthesize_with;

#[derive(Clone)]
pub struct AppState {
    catalog: Arc<NicheCatalog>,
    response_delay: Duration,
}

impl AppState {
    pub fn new(catalog: NicheCatalog, response_delay: Duration) -> Self {
        Self {
            catalog: Arc::new(catalog),
            response_delay,
        }
    }
}

pub fn create_router(state: AppState, web_root: Option<&str>) -> Router {
    let mut router = Router::new()
        .route("/api/health", get(health))
        .route("/api/generate", post(generate_handler));

    if let Some(web_root) = web_root {
        let index_path = format!("{}/index.html", web_root.trim_end_matches('/'));
        router = router.fallback_service(
            ServeDir::new(web_root).not_found_service(ServeFile::new(index_path)),
        );
    }

    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(config: &ServerConfig, catalog: NicheCatalog) -> Result<(), String> {
    let state = AppState::new(catalog, config.response_delay());
    let app = create_router(state, config.web_root.as_deref());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|err| format!("failed to bind server: {}", err))?;

    tracing::info!(%addr, delay_ms = config.response_delay_ms, "idea generator listening");

    axum::serve(listener, app)
        .await
        .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn generate_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<Value>> {
    let request = match GenerateRequest::from_body(&body) {
        Ok(request) => request,
        Err(err) => {
            if matches!(err, ApiError::InvalidInput) {
                tracing::warn!("rejected generate request without a niche");
            }
            return Err(err);
        }
    };

    let ideas = {
        let mut rng = RngSource::from_entropy();
        synthesize_with(&state.catalog, &request.niche, &mut rng)
    };
    tracing::info!(
        niche = %request.niche,
        known_niche = state.catalog.contains(&request.niche),
        count = ideas.len(),
        "generated ideas"
    );

    let payload = GenerateResponse { ideas }.to_json()?;

    // Presentation-only pause; dropping the request future cancels it.
    if !state.response_delay.is_zero() {
        tokio::time::sleep(state.response_delay).await;
    }

    Ok(Json(payload))
}

fn panic_response(_err: Box<dyn Any + Send + 'static>) -> Response {
    ApiError::SynthesisFailure("handler panicked".to_string()).into_response()
}

//! HTTP server setup and request dispatch.
//!
//! # Responsibilities
//! - Create the Axum router with a catch-all dispatch handler
//! - Wire up middleware (tracing, request ID)
//! - Authenticate every request before any routing occurs
//! - Look up the route table and extract parameters per method
//! - Invoke the matched operation and normalize the result into an envelope
//!
//! # Design Decisions
//! - One catch-all handler instead of per-path axum routes: the route table
//!   owns matching, so an unknown path produces the API's own 404 envelope
//! - Every request, success or failure, writes exactly one envelope response
//! - No timeout layer anywhere: a hung external command blocks its request
//!   until it returns, matching the deployed system's contract

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Method, Request},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::AgentConfig;
use crate::exec::{CommandRunner, SystemRunner};
use crate::http::auth;
use crate::http::envelope::{ApiResponse, Failure};
use crate::lifecycle::shutdown_signal;
use crate::ops::Params;
use crate::routing::RouteTable;
use crate::system::SystemTools;

/// Largest request body the dispatcher will buffer.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Application state injected into the dispatch handler.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
    pub access_token: String,
    pub tools: Arc<SystemTools>,
}

/// HTTP server for the agent.
pub struct HttpServer {
    router: Router,
    config: AgentConfig,
}

impl HttpServer {
    /// Create a server running real system commands.
    pub fn new(config: AgentConfig) -> Self {
        Self::with_runner(config, Arc::new(SystemRunner))
    }

    /// Create a server with a caller-supplied command runner.
    pub fn with_runner(config: AgentConfig, runner: Arc<dyn CommandRunner>) -> Self {
        let state = AppState {
            routes: Arc::new(RouteTable::api()),
            access_token: config.auth.access_token.clone(),
            tools: Arc::new(SystemTools::new(&config.tools, runner)),
        };

        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(dispatch))
            .route("/", any(dispatch))
            .with_state(state)
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server until an interrupt or a shutdown broadcast.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = shutdown_signal() => {}
                    _ = shutdown.recv() => {
                        tracing::info!("shutdown requested");
                    }
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }
}

/// Central dispatch: authenticate, route, extract, invoke, respond.
async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> ApiResponse {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let method = request.method().clone();
    let path = request.uri().path().to_string();

    if let Err(err) = auth::check(request.headers(), &state.access_token) {
        tracing::warn!(
            request_id = %request_id,
            method = %method,
            path = %path,
            reason = %err,
            "authentication failed"
        );
        return Failure::from(err).into();
    }

    let Some(route) = state.routes.lookup(&path, &method) else {
        tracing::warn!(request_id = %request_id, method = %method, path = %path, "no route matched");
        return Failure::not_found("no such route").into();
    };
    let op = route.op;

    let params = match extract_params(request).await {
        Ok(params) => params,
        Err(failure) => {
            tracing::warn!(
                request_id = %request_id,
                method = %method,
                path = %path,
                detail = %failure.detail,
                "bad request parameters"
            );
            return failure.into();
        }
    };

    tracing::debug!(request_id = %request_id, method = %method, path = %path, "dispatching");

    match op.invoke(&params, &state.tools).await {
        Ok(data) => ApiResponse::success(data),
        Err(failure) => {
            tracing::error!(
                request_id = %request_id,
                method = %method,
                path = %path,
                detail = %failure.detail,
                "operation failed"
            );
            failure.into()
        }
    }
}

/// Query string for GET/HEAD, buffered JSON body for everything else.
async fn extract_params(request: Request<Body>) -> Result<Params, Failure> {
    let reads_query = *request.method() == Method::GET || *request.method() == Method::HEAD;

    if reads_query {
        Ok(Params::from_query(request.uri().query().unwrap_or("")))
    } else {
        let bytes = axum::body::to_bytes(request.into_body(), MAX_BODY_BYTES)
            .await
            .map_err(|err| Failure::request_error(format!("failed to read request body: {err}")))?;
        Params::from_json(&bytes)
    }
}

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::HeaderValue;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::AllowOrigin;
use tower_http::cors::Any;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::auth::login;
use super::handlers::auth::me;
use super::handlers::auth::register;
use super::handlers::customers::create_customer;
use super::handlers::customers::delete_customer;
use super::handlers::customers::get_customer;
use super::handlers::customers::list_customers;
use super::handlers::customers::update_customer;
use super::handlers::dashboard::get_stats;
use super::handlers::dashboard::weekly_orders;
use super::handlers::orders::create_order;
use super::handlers::orders::delete_order;
use super::handlers::orders::get_order;
use super::handlers::orders::list_orders;
use super::handlers::orders::update_order;
use super::middleware::authenticate as auth_middleware;
use crate::customer::ports::CustomerServicePort;
use crate::dashboard::ports::DashboardServicePort;
use crate::order::ports::OrderServicePort;
use crate::user::ports::AuthServicePort;

/// Services shared by every handler.
///
/// Held as trait objects so the router does not care which store backs them.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub customer_service: Arc<dyn CustomerServicePort>,
    pub order_service: Arc<dyn OrderServicePort>,
    pub dashboard_service: Arc<dyn DashboardServicePort>,
}

pub fn create_router(state: AppState, cors_origins: &[String]) -> Router {
    let public_routes = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register));

    let protected_routes = Router::new()
        .route("/auth/me", get(me))
        .route("/api/customers", get(list_customers).post(create_customer))
        .route(
            "/api/customers/:customer_id",
            get(get_customer)
                .put(update_customer)
                .delete(delete_customer),
        )
        .route("/api/orders", get(list_orders).post(create_order))
        .route(
            "/api/orders/:order_id",
            get(get_order).put(update_order).delete(delete_order),
        )
        .route("/dashboard/stats", get(get_stats))
        .route("/dashboard/weekly-orders", get(weekly_orders))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(cors_layer(cors_origins))
        .with_state(state)
}

/// An empty origin list allows any origin.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

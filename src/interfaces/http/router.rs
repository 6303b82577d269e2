//! API Router with Swagger UI

use axum::{
    middleware,
    routing::get,
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::{ApiError, ErrorResponse, MessageResponse};
use super::modules::info::{self, ServiceInfo};
use super::modules::metrics::{http_metrics_middleware, prometheus_metrics, MetricsState};
use super::modules::request_id::request_id_middleware;
use super::modules::users::{self, UserDto, UserHandlerState, UserRequest};
use crate::application::SharedUserRegistry;

pub const DOCS_PATH: &str = "/docs";
pub const OPENAPI_PATH: &str = "/api-doc/openapi.json";

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Users
        users::list_users,
        users::create_user,
        users::get_user,
        users::update_user,
        users::delete_user,
        // Info
        info::service_info,
    ),
    components(
        schemas(
            UserDto,
            UserRequest,
            ErrorResponse,
            MessageResponse,
            ServiceInfo,
        )
    ),
    tags(
        (name = "Users", description = "Operações com usuários"),
        (name = "Info", description = "Informações sobre a API"),
    ),
    info(
        title = "API de Gerenciamento de Usuários",
        version = "1.0",
        description = "API RESTful simples para gerenciar usuários com operações CRUD",
        contact(name = "Grupo 4 - DAM IMPACTA", email = "grupo4@impacta.edu.br")
    )
)]
pub struct ApiDoc;

/// Optional parts of the router.
#[derive(Clone, Default)]
pub struct RouterOptions {
    /// Serve Swagger UI at [`DOCS_PATH`] and the OpenAPI document at [`OPENAPI_PATH`].
    pub docs: bool,
    /// Serve `GET /metrics` from this recorder handle.
    pub metrics: Option<PrometheusHandle>,
}

async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// Create the API router with all routes
pub fn create_api_router(registry: SharedUserRegistry, options: RouterOptions) -> Router {
    let user_state = UserHandlerState {
        registry: registry.clone(),
    };

    // Listing and creation answer with and without the trailing slash.
    let user_routes = Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/", get(users::list_users).post(users::create_user))
        .route(
            "/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .with_state(user_state);

    let mut router = Router::new()
        .merge(user_routes)
        .route("/info", get(info::service_info));

    if let Some(handle) = options.metrics {
        router = router.route(
            "/metrics",
            get(prometheus_metrics).with_state(MetricsState { handle, registry }),
        );
    }

    // Registered before docs so only API routes get a `MatchedPath` label.
    router = router.route_layer(middleware::from_fn(http_metrics_middleware));

    if options.docs {
        router = router.merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, ApiDoc::openapi()));
    }

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .fallback(route_not_found)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

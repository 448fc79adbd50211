use axum::{
    Extension, Router,
    response::Redirect,
    routing::{delete, get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::modules::activities::use_cases::list_activities::inbound::http as list_http;
use crate::modules::activities::use_cases::sign_up_for_activity::inbound::http as sign_up_http;
use crate::modules::activities::use_cases::unregister_from_activity::inbound::http as unregister_http;
use crate::shell::config::AppConfig;
use crate::shell::graphql::{graphiql, graphql, schema};
use crate::shell::state::AppState;

pub const LANDING_PAGE: &str = "/static/index.html";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/activities", get(list_http::handle))
        .route(
            "/activities/{activity_name}/signup",
            post(sign_up_http::handle),
        )
        .route(
            "/activities/{activity_name}/unregister",
            delete(unregister_http::handle),
        )
        .with_state(state)
}

/// Full application: JSON API, GraphQL endpoint, landing page and static assets.
pub fn app(state: AppState, config: &AppConfig) -> Router {
    let app = Router::new()
        .route("/", get(|| async { Redirect::temporary(LANDING_PAGE) }))
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema(state.clone())))
        .merge(router(state))
        .nest_service("/static", ServeDir::new(&config.static_dir));

    let app = if config.cors_allow_any_origin {
        app.layer(CorsLayer::permissive())
    } else {
        app
    };

    app.layer(TraceLayer::new_for_http())
}

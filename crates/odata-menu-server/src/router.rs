use axum::{routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let odata_routes = Router::new()
        .route("/odata/$metadata", get(handlers::metadata::get_metadata))
        .route(
            "/odata/MenuItems",
            get(handlers::menu_items::list_menu_items).post(handlers::menu_items::create_menu_item),
        )
        // `MenuItems(<id>)` is a single path segment, parsed by `MenuItemKey`
        .route(
            "/odata/{key}",
            get(handlers::menu_items::get_menu_item)
                .post(handlers::menu_items::update_menu_item)
                .delete(handlers::menu_items::delete_menu_item),
        );

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/health/ready", get(handlers::health::readiness_check))
        .merge(odata_routes)
        .with_state(state)
        // CORS
        .layer(CorsLayer::permissive())
        // Tracing
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default().include_headers(true)))
}

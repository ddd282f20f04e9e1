use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, patch, post, put},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/grid", get(handlers::get_grid))
        .route("/api/date-keys/:key", get(handlers::decode_key))
        .route(
            "/api/habits",
            get(handlers::list_habits).post(handlers::create_habit),
        )
        .route(
            "/api/habits/:id",
            patch(handlers::rename_habit).delete(handlers::delete_habit),
        )
        .route("/api/habits/:id/category", put(handlers::assign_category))
        .route("/api/habits/:id/toggle", post(handlers::toggle_day))
        .route("/api/habits/:id/today", post(handlers::toggle_today))
        .route(
            "/api/categories",
            get(handlers::list_categories).post(handlers::create_category),
        )
        .route(
            "/api/categories/:id",
            patch(handlers::rename_category).delete(handlers::delete_category),
        )
        .with_state(state)
}

use crate::state::AppState;
use axum::Router;

mod dto;
pub mod handlers;
mod principals;
pub mod repo;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::auth_routes())
}

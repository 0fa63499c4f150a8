//! HTTP routes for account endpoints.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::adapters::http::middleware::{auth_middleware, AuthState};

use super::handlers::{login, me, register, AuthHandlers};

/// Creates the account router. `/auth/me` is the only authenticated route.
pub fn auth_routes(handlers: AuthHandlers, validator: AuthState) -> Router {
    let protected = Router::new()
        .route("/auth/me", get(me))
        .layer(middleware::from_fn_with_state(validator, auth_middleware));

    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .merge(protected)
        .with_state(handlers)
}

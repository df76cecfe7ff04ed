/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable. The pool is the only cross-request state; it is
/// created once in `main` and closed there after shutdown.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: registrar_db::DbPool,
}

//! Entity CRUD routes: `/<plural>`, `/<plural>/create`, `/<plural>/update`, `/<plural>/delete`.

use crate::entity::{Course, Entity, Student, Teacher};
use crate::handlers::entity::{create, delete as delete_handler, list, update};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

fn crud_routes<T: Entity>() -> Router<AppState> {
    let base = format!("/{}", T::TABLE);
    Router::new()
        .route(&base, get(list::<T>))
        .route(&format!("{}/create", base), post(create::<T>))
        .route(&format!("{}/update", base), post(update::<T>).put(update::<T>))
        .route(
            &format!("{}/delete", base),
            post(delete_handler::<T>).delete(delete_handler::<T>),
        )
}

pub fn entity_routes(state: AppState) -> Router {
    Router::new()
        .merge(crud_routes::<Teacher>())
        .merge(crud_routes::<Course>())
        .merge(crud_routes::<Student>())
        .with_state(state)
}

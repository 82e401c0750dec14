pub mod auth;
pub mod calendar;
pub mod events;
pub mod health;
pub mod import;
pub mod marriages;
pub mod members;
pub mod relationships;
pub mod stats;
pub mod tree;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login               login (public)
/// /auth/session             token validity check
///
/// /tree                     full reconstructed tree (GET)
/// /tree/search              name search, matched + expanded ids (GET)
///
/// /members                  list, create
/// /members/{id}             get (with relations), update, delete
///
/// /relationships            create (propagates generations)
/// /relationships/{id}       delete
///
/// /marriages                create
/// /marriages/{id}           update, delete
///
/// /events                   list, create
/// /events/{id}              update, delete
///
/// /calendar                 anniversaries + birthdays + events (GET)
/// /stats                    entity counts + generation distribution (GET)
/// /import                   wipe + nested bulk import (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Admin authentication (login, session check).
        .nest("/auth", auth::router())
        // Assembled family tree and name search.
        .nest("/tree", tree::router())
        // Member CRUD and detail with relations.
        .nest("/members", members::router())
        // Parent-child links; creating one sweeps descendant generations.
        .nest("/relationships", relationships::router())
        // Marriages between members.
        .nest("/marriages", marriages::router())
        // Life and family events.
        .nest("/events", events::router())
        // Aggregated calendar (anniversaries, birthdays, events).
        .nest("/calendar", calendar::router())
        // Family statistics.
        .nest("/stats", stats::router())
        // Bulk nested import; replaces the whole family.
        .nest("/import", import::router())
}

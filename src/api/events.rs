//! Server-sent change notifications
//!
//! Clients subscribe here instead of polling: every successful mutation made
//! through this server emits a `{table, op}` event, and the client re-fetches
//! whatever it displays. The event carries no payload beyond that.

use std::convert::Infallible;

use axum::{
    extract::{Query, State},
    response::sse::{Event, KeepAlive, Sse},
};
use serde::Deserialize;
use tokio_stream::{wrappers::BroadcastStream, Stream, StreamExt};
use utoipa::IntoParams;

use super::AuthenticatedUser;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct EventsQuery {
    /// Restrict the stream to a single logical table
    pub table: Option<String>,
}

/// Subscribe to change notifications
#[utoipa::path(
    get,
    path = "/events",
    tag = "events",
    security(("bearer_auth" = [])),
    params(EventsQuery),
    responses(
        (status = 200, description = "SSE stream of change events", content_type = "text/event-stream")
    )
)]
pub async fn subscribe(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<EventsQuery>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let receiver = state.services.changes.subscribe();
    let table_filter = query.table;

    let stream = BroadcastStream::new(receiver).filter_map(move |msg| {
        // Lagged receivers skip ahead; events are advisory only
        let event = msg.ok()?;
        if let Some(ref table) = table_filter {
            if event.table != table.as_str() {
                return None;
            }
        }
        let data = serde_json::to_string(&event).ok()?;
        Some(Ok(Event::default().event("change").data(data)))
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}

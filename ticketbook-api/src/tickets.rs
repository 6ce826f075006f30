use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use ticketbook_core::{Ticket, TicketId};
use tracing::{info, warn};
use crate::error::{AppError, DELETE_NOT_FOUND, UPDATE_NOT_FOUND};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/ticket", get(list_tickets).post(add_ticket))
        .route("/ticket/{id}", put(update_ticket).delete(delete_ticket))
}

/// GET /ticket
async fn list_tickets(State(state): State<AppState>) -> Result<Json<Vec<Ticket>>, AppError> {
    let tickets = state.tickets.list().await?;
    Ok(Json(tickets))
}

/// POST /ticket
/// An existing ticket with the same id is overwritten.
async fn add_ticket(
    State(state): State<AppState>,
    Json(ticket): Json<Ticket>,
) -> Result<Json<Ticket>, AppError> {
    let stored = state.tickets.insert(ticket).await?;
    info!("Ticket stored: {} ({})", stored.id, stored.flight_name);
    Ok(Json(stored))
}

/// PUT /ticket/{id}
async fn update_ticket(
    State(state): State<AppState>,
    Path(id): Path<TicketId>,
    Json(ticket): Json<Ticket>,
) -> Result<Json<Ticket>, AppError> {
    match state.tickets.replace(id, ticket).await? {
        Some(updated) => {
            info!("Ticket updated: {}", id);
            Ok(Json(updated))
        }
        None => {
            warn!("Update for unknown ticket {}", id);
            Err(AppError::TicketNotFound(UPDATE_NOT_FOUND))
        }
    }
}

/// DELETE /ticket/{id}
async fn delete_ticket(
    State(state): State<AppState>,
    Path(id): Path<TicketId>,
) -> Result<Json<Ticket>, AppError> {
    let removed = state.tickets.remove(id).await?.ok_or_else(|| {
        warn!("Delete for unknown ticket {}", id);
        AppError::TicketNotFound(DELETE_NOT_FOUND)
    })?;

    info!("Ticket deleted: {}", id);
    Ok(Json(removed))
}

use axum::{body::Bytes, extract::State, http::StatusCode, response::Response};
use tracing::info;

use crate::error::{AppError, HandlerError, Operation};
use crate::models::{
    api_request::{CreateTicketRequest, SubmitTicketRequest, parse_body},
    api_response::{CreateTicketResponse, HealthResponse, SubmitTicketResponse, json_response},
    ticket::{TicketMessage, TicketRecord},
    ticketsystem::AppState,
};

/// `POST /tickets`: stores a new open ticket and returns its id.
#[tracing::instrument(skip_all, fields(ticket_id))]
pub async fn create_ticket(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, HandlerError> {
    let response = create(&state, &body)
        .await
        .map_err(|e| e.during(Operation::CreateTicket))?;
    Ok(json_response(StatusCode::CREATED, &response))
}

async fn create(state: &AppState, body: &[u8]) -> Result<CreateTicketResponse, AppError> {
    let request: CreateTicketRequest = parse_body(body)?;
    let record = TicketRecord::open(request);

    tracing::Span::current().record("ticket_id", record.ticket_id.as_str());

    state.store.put(&record).await.map_err(AppError::Store)?;
    info!(store = state.store.name(), "Created ticket");

    Ok(CreateTicketResponse {
        ticket_id: record.ticket_id,
        message: "Ticket created successfully",
    })
}

/// `POST /tickets/submit`: forwards the ticket to the queue.
#[tracing::instrument(skip_all, fields(ticket_id))]
pub async fn submit_ticket(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, HandlerError> {
    let response = submit(&state, &body)
        .await
        .map_err(|e| e.during(Operation::SubmitTicket))?;
    Ok(json_response(StatusCode::OK, &response))
}

async fn submit(state: &AppState, body: &[u8]) -> Result<SubmitTicketResponse, AppError> {
    let request: SubmitTicketRequest = parse_body(body)?;
    let message = TicketMessage::from(request);

    tracing::Span::current().record("ticket_id", message.ticket_id.as_str());

    let body = message.to_body()?;
    let message_id = state.queue.send(body).await.map_err(AppError::Queue)?;
    info!(queue = state.queue.name(), %message_id, "Submitted ticket");

    Ok(SubmitTicketResponse {
        message: "Ticket submitted successfully",
        message_id,
    })
}

pub async fn healthz() -> Response {
    json_response(StatusCode::OK, &HealthResponse { status: "ok" })
}

use std::sync::Arc;
use axum::{Extension, Json, Router};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use serde_json::{json, Value};
use time::OffsetDateTime;
use tracing::warn;
use crate::clients::ChatGateway;
use crate::controller::AppState;
use crate::models::options::{Country, CuisineType};
use crate::models::reservation::{ReservationRecord, ReservationRequest};
use crate::prompt::format_reservation_prompt;
use crate::repositories::history_repo::{ReservationHistoryRepo, RECENT_RESERVATION_LIMIT};
use crate::validation::validate_request;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/", post(submit_reservation))
        .route("/history", get(recent_reservations))
        .route("/options", get(reservation_options))
        .route_layer(Extension(app_state.chat_gateway))
        .route_layer(Extension(app_state.reservation_history))
}

pub async fn submit_reservation(
    Extension(chat_gateway): Extension<Arc<dyn ChatGateway>>,
    Extension(reservation_history): Extension<Arc<ReservationHistoryRepo>>,
    Json(body): Json<ReservationRequest>,
) -> impl IntoResponse {
    if let Err(e) = validate_request(&body, OffsetDateTime::now_utc()) {
        return (StatusCode::BAD_REQUEST, e.to_string()).into_response();
    }

    let prompt = format_reservation_prompt(&body);

    return match chat_gateway.send(&prompt).await {
        Ok(response) => {
            let record = ReservationRecord {
                timestamp: OffsetDateTime::now_utc(),
                details: body,
                response,
            };
            reservation_history.append(record.clone());

            (StatusCode::OK, json!(record).to_string()).into_response()
        }
        Err(e) => {
            warn!("Something went wrong processing the reservation request due to: {}", e);
            (StatusCode::BAD_GATEWAY, "Failed to process the reservation request, please try again.").into_response()
        }
    };
}

pub async fn recent_reservations(
    Extension(reservation_history): Extension<Arc<ReservationHistoryRepo>>,
) -> impl IntoResponse {
    let records = reservation_history.recent(RECENT_RESERVATION_LIMIT);

    (StatusCode::OK, json!(records).to_string()).into_response()
}

/// Fixed option sets for the reservation form, regions keyed by country.
pub async fn reservation_options() -> impl IntoResponse {
    let countries: Vec<Value> = Country::ALL
        .iter()
        .map(|country| {
            json!({
                "country": country,
                "regions": country.regions(),
            })
        })
        .collect();

    (
        StatusCode::OK,
        json!({
            "countries": countries,
            "cuisines": CuisineType::ALL,
        })
        .to_string(),
    )
        .into_response()
}

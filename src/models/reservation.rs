use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime, Time};

use crate::models::options::{Country, CuisineType};

time::serde::format_description!(reservation_date, Date, "[year]-[month]-[day]");
time::serde::format_description!(reservation_time, Time, "[hour]:[minute]");

/// A single reservation request as submitted by the customer. Country and
/// cuisine are constrained to the fixed option sets at deserialization time,
/// everything else is checked by the validator.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ReservationRequest {
    pub country: Country,
    pub region: String,
    pub cuisine_type: CuisineType,
    #[serde(with = "reservation_date")]
    pub date: Date,
    #[serde(with = "reservation_time")]
    pub time: Time,
    pub email: String,
    #[serde(default)]
    pub notes: String,
}

/// A processed reservation paired with the assistant's response, as kept in
/// the session history.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ReservationRecord {
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub details: ReservationRequest,
    pub response: String,
}

#[cfg(test)]
mod tests {
    use time::macros::{date, time};

    use super::*;

    #[test]
    fn request_deserializes_from_form_payload() {
        let payload = r#"{
            "country": "United States",
            "region": "California",
            "cuisine_type": "Italian",
            "date": "2025-06-01",
            "time": "19:00",
            "email": "a@b.com"
        }"#;

        let request: ReservationRequest = serde_json::from_str(payload).unwrap();
        assert_eq!(request.country, Country::UnitedStates);
        assert_eq!(request.region, "California");
        assert_eq!(request.cuisine_type, CuisineType::Italian);
        assert_eq!(request.date, date!(2025 - 06 - 01));
        assert_eq!(request.time, time!(19:00));
        assert_eq!(request.email, "a@b.com");
        assert_eq!(request.notes, "");
    }

    #[test]
    fn date_and_time_serialize_in_wire_format() {
        let request = ReservationRequest {
            country: Country::France,
            region: "Paris".to_string(),
            cuisine_type: CuisineType::French,
            date: date!(2025 - 06 - 01),
            time: time!(09:05),
            email: "a@b.com".to_string(),
            notes: String::new(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["date"], "2025-06-01");
        assert_eq!(value["time"], "09:05");
    }
}

use time::{Date, Time};

use crate::models::reservation::ReservationRequest;

/// Renders the instruction prompt sent to the chat gateway for a validated
/// reservation request. Deterministic, every field appears verbatim.
pub fn format_reservation_prompt(request: &ReservationRequest) -> String {
    format!(
        "Task: Process a restaurant reservation request and provide recommendations.

Reservation Details:
- Location: {region}, {country}
- Cuisine Type: {cuisine}
- Date: {date}
- Time: {time}
- Customer Email: {email}
- Special Notes: {notes}

Please:
1. Suggest 2-3 highly-rated restaurants matching the cuisine type and location
2. Provide estimated price range for each suggestion
3. Confirm if the requested date and time would likely be available
4. Include any relevant notes about dress code or special requirements
5. Format the response in a clear, customer-friendly way",
        region = request.region,
        country = request.country,
        cuisine = request.cuisine_type,
        date = iso_date(request.date),
        time = wall_clock(request.time),
        email = request.email,
        notes = request.notes,
    )
}

fn iso_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

fn wall_clock(time: Time) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

#[cfg(test)]
mod tests {
    use time::macros::{date, time};

    use super::*;
    use crate::models::options::{Country, CuisineType};

    fn request() -> ReservationRequest {
        ReservationRequest {
            country: Country::UnitedStates,
            region: "California".to_string(),
            cuisine_type: CuisineType::Italian,
            date: date!(2025 - 06 - 01),
            time: time!(19:00),
            email: "a@b.com".to_string(),
            notes: "Window seat if possible".to_string(),
        }
    }

    #[test]
    fn prompt_contains_every_field_verbatim() {
        let prompt = format_reservation_prompt(&request());

        assert!(prompt.contains("California, United States"));
        assert!(prompt.contains("Italian"));
        assert!(prompt.contains("2025-06-01"));
        assert!(prompt.contains("19:00"));
        assert!(prompt.contains("a@b.com"));
        assert!(prompt.contains("Window seat if possible"));
    }

    #[test]
    fn prompt_keeps_the_fixed_directives() {
        let prompt = format_reservation_prompt(&request());

        assert!(prompt.contains("Suggest 2-3 highly-rated restaurants"));
        assert!(prompt.contains("estimated price range"));
        assert!(prompt.contains("likely be available"));
        assert!(prompt.contains("dress code"));
        assert!(prompt.contains("customer-friendly"));
    }

    #[test]
    fn prompt_is_deterministic() {
        assert_eq!(
            format_reservation_prompt(&request()),
            format_reservation_prompt(&request())
        );
    }

    #[test]
    fn single_digit_components_are_zero_padded() {
        let mut early = request();
        early.date = date!(2025 - 06 - 03);
        early.time = time!(09:05);

        let prompt = format_reservation_prompt(&early);
        assert!(prompt.contains("2025-06-03"));
        assert!(prompt.contains("09:05"));
    }
}

//! Property-based tests for model validation.

use super::{parse_date, Pilot, Plane, Reservation, ReservationStatus};
use chrono::NaiveDate;
use proptest::prelude::*;

// Strategy for generating valid calendar dates
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1970i32..=2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Status parsing never panics and only the three codes succeed
    #[test]
    fn status_parse_total(input in ".*") {
        let result = input.parse::<ReservationStatus>();
        if let Ok(status) = result {
            prop_assert!(matches!(status.code(), "W" | "R" | "C"));
        }
    }

    // Valid status codes round-trip through their code
    #[test]
    fn status_code_roundtrip(code in prop::sample::select(vec!["W", "R", "C"])) {
        let status: ReservationStatus = code.parse().unwrap();
        prop_assert_eq!(status.code(), code);
    }

    // Plane construction accepts exactly the documented seat range
    #[test]
    fn plane_seat_bounds(seats in -100i64..700) {
        let result = Plane::new("Airbus", "A320", 3, seats);
        prop_assert_eq!(result.is_ok(), (1..=Plane::MAX_SEATS).contains(&seats));
    }

    // Name fields are trimmed before storage
    #[test]
    fn pilot_name_trimmed(name in "[a-zA-Z ]{1,40}") {
        prop_assume!(!name.trim().is_empty());
        let padded = format!("  {name}  ");
        let pilot = Pilot::new(&padded, "US").unwrap();
        prop_assert_eq!(pilot.full_name(), name.trim());
    }

    // Date formatting round-trips through the strict parser
    #[test]
    fn date_parse_roundtrip(date in date_strategy()) {
        let formatted = date.format("%Y-%m-%d").to_string();
        prop_assert_eq!(parse_date(&formatted).unwrap(), date);
    }

    // Date parsing never panics on arbitrary input
    #[test]
    fn date_parse_total(input in ".*") {
        let _ = parse_date(&input);
    }

    // Reservation rows preserve their fields
    #[test]
    fn reservation_preserves_fields(
        number in 1i64..10_000,
        customer in 1i64..10_000,
        flight in 1i64..10_000,
        code in prop::sample::select(vec!["W", "R", "C"])
    ) {
        let status: ReservationStatus = code.parse().unwrap();
        let reservation = Reservation::new(number, customer, flight, status).unwrap();
        prop_assert_eq!(reservation.reservation_number(), number);
        prop_assert_eq!(reservation.customer_id(), customer);
        prop_assert_eq!(reservation.flight_number(), flight);
        prop_assert_eq!(reservation.status(), status);
    }

    // Status replacement never touches the key fields
    #[test]
    fn reservation_status_replacement(
        number in 1i64..10_000,
        customer in 1i64..10_000,
        flight in 1i64..10_000,
        before in prop::sample::select(vec!["W", "R", "C"]),
        after in prop::sample::select(vec!["W", "R", "C"])
    ) {
        let reservation = Reservation::new(
            number,
            customer,
            flight,
            before.parse().unwrap(),
        )
        .unwrap();
        let updated = reservation.with_status(after.parse().unwrap());
        prop_assert_eq!(updated.reservation_number(), number);
        prop_assert_eq!(updated.customer_id(), customer);
        prop_assert_eq!(updated.flight_number(), flight);
        prop_assert_eq!(updated.status().code(), after);
    }
}

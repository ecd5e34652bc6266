//! Property-based tests for operation planning.

use proptest::prelude::*;

use crate::database::test_util::create_test_database;
use crate::operations::{
    AddPilotOptions, AddPlaneOptions, BookFlightOptions, BookingPlan, PlanAction, PlanExecutor,
    ProvisionPlan,
};
use crate::ReservationStatus;

fn status_strategy() -> impl Strategy<Value = ReservationStatus> {
    prop::sample::select(vec![
        ReservationStatus::Waitlisted,
        ReservationStatus::Reserved,
        ReservationStatus::Confirmed,
    ])
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    // Provisioning accepts any in-range seat count and always produces a
    // one-action plan
    #[test]
    fn provision_plane_in_range_always_plans(seat_count in 1i64..=499) {
        let options = AddPlaneOptions::new("Boeing", "737", 4, seat_count);
        let plan = ProvisionPlan::plane(options).build_plan().unwrap();
        prop_assert_eq!(plan.len(), 1);
    }

    // Out-of-range seat counts never produce a plan
    #[test]
    fn provision_plane_out_of_range_never_plans(seat_count in 500i64..10_000) {
        let options = AddPlaneOptions::new("Boeing", "737", 4, seat_count);
        prop_assert!(ProvisionPlan::plane(options).build_plan().is_err());
    }

    // Names survive planning without normalization
    #[test]
    fn provision_pilot_preserves_name(name in "[A-Za-z][A-Za-z ]{0,40}[A-Za-z]") {
        let options = AddPilotOptions::new(name.clone(), "US");
        let plan = ProvisionPlan::pilot(options).build_plan().unwrap();
        let PlanAction::CreatePilot(ref pilot) = plan.actions[0] else {
            return Err(TestCaseError::fail("expected CreatePilot action".into()));
        };
        prop_assert_eq!(pilot.full_name(), name.as_str());
    }

    // Booking an unknown pair with no provisioning attributes never plans,
    // for every status
    #[test]
    fn booking_unknown_pair_requires_attributes(
        customer_id in 1i64..1000,
        flight_number in 1i64..1000,
        status in status_strategy(),
    ) {
        let db = create_test_database();
        let options = BookFlightOptions::new(customer_id, flight_number, status);
        prop_assert!(BookingPlan::new(options).build_plan(&db).is_err());
    }

    // A dry-run executor reports the planned status without writing
    #[test]
    fn dry_run_reports_planned_status(status in status_strategy()) {
        let mut db = create_test_database();
        let plan = crate::operations::OperationPlan::new("test")
            .add_action(PlanAction::CreateReservation {
                customer_id: 1,
                flight_number: Some(1),
                status,
            });

        let result = PlanExecutor::new(&mut db).dry_run().execute(&plan).unwrap();
        prop_assert!(result.dry_run);
        prop_assert_eq!(result.status, Some(status));

        let count: i64 = db
            .connection()
            .query_row("SELECT COUNT(*) FROM reservations", [], |row| row.get(0))
            .unwrap();
        prop_assert_eq!(count, 0);
    }
}

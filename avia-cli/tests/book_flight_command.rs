//! Integration tests for the book-flight command.
//!
//! These tests verify the booking workflow through the binary,
//! including:
//! - Booking an existing customer onto an existing flight
//! - Creating the customer (and flight) as part of the booking
//! - Rebooking the same pair as a status update
//! - Partial attribute sets rejected as argument errors
//! - Dry-run previews leaving the database untouched
//! - The default status coming from the environment

mod common;

use common::TestEnv;
use predicates::prelude::*;

// ============================================================================
// Basic Booking
// ============================================================================

/// Test that a booking prints the final status letter.
#[test]
fn test_booking_prints_status() {
    let env = TestEnv::new();
    let flight = env.seed_flight();

    let status = env.book_new_customer(7, flight, "C");
    assert_eq!(status, "C");
}

/// Test that rebooking the same pair updates the status in place.
///
/// The second booking needs no customer attributes because the first
/// one created the record.
#[test]
fn test_rebooking_updates_status() {
    let env = TestEnv::new();
    let flight = env.seed_flight();
    env.book_new_customer(7, flight, "W");

    env.command()
        .arg("book-flight")
        .arg("--customer")
        .arg("7")
        .arg("--flight")
        .arg(flight.to_string())
        .arg("--status")
        .arg("R")
        .assert()
        .success()
        .stdout("R\n");

    // Exactly one reservation on the flight, now reserved
    let output = env
        .command()
        .arg("passengers-by-status")
        .arg("--status")
        .arg("R")
        .arg("--flight")
        .arg(flight.to_string())
        .output()
        .unwrap();
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "1");
}

/// Test that rebooking with the unchanged status warns on stderr.
#[test]
fn test_rebooking_same_status_warns() {
    let env = TestEnv::new();
    let flight = env.seed_flight();
    env.book_new_customer(7, flight, "C");

    env.command()
        .arg("book-flight")
        .arg("--customer")
        .arg("7")
        .arg("--flight")
        .arg(flight.to_string())
        .arg("--status")
        .arg("C")
        .assert()
        .success()
        .stderr(predicate::str::contains("already has status"));
}

/// Test that --quiet suppresses the warning but keeps the status.
#[test]
fn test_quiet_suppresses_warnings() {
    let env = TestEnv::new();
    let flight = env.seed_flight();
    env.book_new_customer(7, flight, "C");

    env.command()
        .arg("--quiet")
        .arg("book-flight")
        .arg("--customer")
        .arg("7")
        .arg("--flight")
        .arg(flight.to_string())
        .arg("--status")
        .arg("C")
        .assert()
        .success()
        .stdout("C\n")
        .stderr(predicate::str::contains("already has status").not());
}

// ============================================================================
// Provisioning Through a Booking
// ============================================================================

/// Test that booking an unknown flight with flight attributes creates
/// the flight under a newly allocated number.
///
/// The requested number is not honored; a warning says so.
#[test]
fn test_booking_creates_flight_with_new_number() {
    let env = TestEnv::new();
    let pilot_id = env.add_pilot("Amelia Earhart");
    let plane_id = env.add_plane();

    env.command()
        .arg("book-flight")
        .arg("--customer")
        .arg("42")
        .arg("--flight")
        .arg("99")
        .arg("--status")
        .arg("R")
        .arg("--first-name")
        .arg("Grace")
        .arg("--last-name")
        .arg("Hopper")
        .arg("--gender")
        .arg("F")
        .arg("--birth-date")
        .arg("1906-12-09")
        .arg("--address")
        .arg("1 Navy Yard")
        .arg("--phone")
        .arg("5550001111")
        .arg("--zip")
        .arg("22201")
        .arg("--cost")
        .arg("300")
        .arg("--departure-date")
        .arg("2024-05-01")
        .arg("--arrival-date")
        .arg("2024-05-02")
        .arg("--from")
        .arg("KLAXX")
        .arg("--to")
        .arg("KSEAX")
        .arg("--pilot")
        .arg(pilot_id.to_string())
        .arg("--plane")
        .arg(plane_id.to_string())
        .assert()
        .success()
        .stdout("R\n")
        .stderr(predicate::str::contains("newly"));

    // The reservation landed on flight 1, the first allocated number
    let output = env
        .command()
        .arg("passengers-by-status")
        .arg("--status")
        .arg("R")
        .arg("--flight")
        .arg("1")
        .output()
        .unwrap();
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "1");
}

// ============================================================================
// Rejections
// ============================================================================

/// Test that booking an unknown customer without attributes fails.
///
/// The planner cannot invent a customer; this is a semantic failure
/// with exit code 1.
#[test]
fn test_booking_unknown_customer_without_attributes() {
    let env = TestEnv::new();
    let flight = env.seed_flight();

    env.command()
        .arg("book-flight")
        .arg("--customer")
        .arg("7")
        .arg("--flight")
        .arg(flight.to_string())
        .arg("--status")
        .arg("W")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));
}

/// Test that a partial customer attribute set is an argument error.
///
/// Supplying some but not all of the new-customer flags exits with
/// code 4 and names the missing flag.
#[test]
fn test_partial_customer_attributes_exit_four() {
    let env = TestEnv::new();
    let flight = env.seed_flight();

    env.command()
        .arg("book-flight")
        .arg("--customer")
        .arg("7")
        .arg("--flight")
        .arg(flight.to_string())
        .arg("--status")
        .arg("W")
        .arg("--first-name")
        .arg("Grace")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("--last-name"));
}

/// Test that a partial flight attribute set is an argument error.
#[test]
fn test_partial_flight_attributes_exit_four() {
    let env = TestEnv::new();
    env.seed_flight();

    env.command()
        .arg("book-flight")
        .arg("--customer")
        .arg("7")
        .arg("--flight")
        .arg("99")
        .arg("--status")
        .arg("W")
        .arg("--cost")
        .arg("300")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("required when creating a flight"));
}

/// Test that an unknown status letter is rejected with exit code 1.
#[test]
fn test_unknown_status_letter_rejected() {
    let env = TestEnv::new();
    let flight = env.seed_flight();

    env.command()
        .arg("book-flight")
        .arg("--customer")
        .arg("7")
        .arg("--flight")
        .arg(flight.to_string())
        .arg("--status")
        .arg("X")
        .assert()
        .code(1);
}

// ============================================================================
// Dry Run and Defaults
// ============================================================================

/// Test that --dry-run reports the status but stores nothing.
#[test]
fn test_dry_run_stores_nothing() {
    let env = TestEnv::new();
    let flight = env.seed_flight();
    env.book_new_customer(7, flight, "W");

    env.command()
        .arg("book-flight")
        .arg("--customer")
        .arg("7")
        .arg("--flight")
        .arg(flight.to_string())
        .arg("--status")
        .arg("C")
        .arg("--dry-run")
        .assert()
        .success()
        .stdout("C\n");

    // The stored reservation is still waitlisted
    let output = env
        .command()
        .arg("passengers-by-status")
        .arg("--status")
        .arg("W")
        .arg("--flight")
        .arg(flight.to_string())
        .output()
        .unwrap();
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "1");
}

/// Test that AVIA_DEFAULT_STATUS fills in an omitted --status.
#[test]
fn test_status_defaults_from_environment() {
    let env = TestEnv::new();
    let flight = env.seed_flight();
    env.book_new_customer(7, flight, "W");

    env.command()
        .arg("book-flight")
        .arg("--customer")
        .arg("7")
        .arg("--flight")
        .arg(flight.to_string())
        .env("AVIA_DEFAULT_STATUS", "C")
        .assert()
        .success()
        .stdout("C\n");
}

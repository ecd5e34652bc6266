//! Generates the avia.1 man page into OUT_DIR with clap_mangen.
//!
//! A build script cannot import the crate it builds, so the command
//! tree is restated here in builder form. Keep it in step with
//! src/cli.rs when the command surface changes.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

fn build_cli() -> Command {
    Command::new("avia")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage airline operational records")
        .long_about(
            "Command-line tool for managing airline planes, crew, flights, bookings, and repairs",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Print extra diagnostics on stderr")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Print nothing but record output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Directory holding the database and config file")
                .value_name("PATH")
                .global(true)
                .env("AVIA_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Seconds to wait for the database lock")
                .value_name("SECONDS")
                .global(true)
                .env("AVIA_BUSY_TIMEOUT"),
        )
        .arg(
            Arg::new("disable-autoinit")
                .long("disable-autoinit")
                .help("Fail instead of creating a missing database")
                .global(true)
                .action(clap::ArgAction::SetTrue)
                .env("AVIA_DISABLE_AUTOINIT"),
        )
        .subcommands(vec![
            Command::new("add-plane")
                .about("Register a plane")
                .long_about("Register a plane with its make, model, age, and seat count"),
            Command::new("add-pilot")
                .about("Register a pilot")
                .long_about("Register a pilot with their name and nationality"),
            Command::new("add-technician")
                .about("Register a technician")
                .long_about("Register a maintenance technician by name"),
            Command::new("add-flight")
                .about("Create a flight")
                .long_about("Create a flight and link it to its pilot and plane"),
            Command::new("book-flight")
                .about("Book a customer on a flight")
                .long_about(
                    "Book a customer on a flight, creating the customer or flight if needed",
                ),
            Command::new("record-repair")
                .about("Record a maintenance repair")
                .long_about("Record a repair performed by a technician on a plane"),
            Command::new("seats-available")
                .about("Show unsold seats on a flight")
                .long_about("Display the number of unsold seats on a flight for a given date"),
            Command::new("repairs-per-plane")
                .about("Report repair counts per plane")
                .long_about("Display repair counts per plane, busiest plane first"),
            Command::new("repairs-per-year")
                .about("Report repair counts per year")
                .long_about("Display repair counts per calendar year, quietest year first"),
            Command::new("passengers-by-status")
                .about("Count reservations on a flight by status")
                .long_about("Count reservations on a flight holding a given status"),
            Command::new("init")
                .about("Initialize avia data directory and database")
                .long_about("Set up the avia database and configuration"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let man_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap()).join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let mut page = Vec::new();
    Man::new(build_cli()).render(&mut page).unwrap();
    fs::write(man_dir.join("avia.1"), page).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}

//! Shared scaffolding for the binary's integration tests: an isolated
//! per-test environment, command builders, and seed helpers that
//! provision fleet records through the binary itself.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// One test's private slice of the filesystem.
///
/// Holds a temp directory plus a data-directory path inside it, so
/// every test runs the binary against its own store.
pub struct TestEnv {
    /// Owns the temp directory; dropping it cleans up the test's files
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Root of the temp directory
    pub temp_path: PathBuf,
    /// Where this test's store and config live
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// A fresh environment whose data directory does not exist yet;
    /// the binary is expected to create it on first use.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("avia-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// The binary with no flags at all, for tests that control
    /// --data-dir themselves. The AVIA_* environment variables are
    /// cleared so an operator's shell cannot leak into the test.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("avia").expect("Failed to find avia binary");
        cmd.env_remove("AVIA_DATA_DIR")
            .env_remove("AVIA_BUSY_TIMEOUT")
            .env_remove("AVIA_DEFAULT_STATUS")
            .env_remove("AVIA_DISABLE_AUTOINIT");
        cmd
    }

    /// The binary pointed at this environment's data directory.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Root of the temp directory.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Makes a named subdirectory under the temp root.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create subdirectory");
        path
    }

    /// Add a plane with fixed attributes and return its allocated id.
    ///
    /// # Panics
    /// Panics if the command fails or doesn't print a valid id.
    pub fn add_plane(&self) -> i64 {
        let output = self
            .command()
            .arg("add-plane")
            .arg("--make")
            .arg("Boeing")
            .arg("--model")
            .arg("737")
            .arg("--age")
            .arg("4")
            .arg("--seats")
            .arg("180")
            .output()
            .expect("Failed to run add-plane command");

        assert!(
            output.status.success(),
            "add-plane failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        parse_id(&String::from_utf8(output.stdout).expect("Invalid UTF-8 in output"))
    }

    /// Add a pilot and return the allocated id.
    pub fn add_pilot(&self, name: &str) -> i64 {
        let output = self
            .command()
            .arg("add-pilot")
            .arg("--name")
            .arg(name)
            .arg("--nationality")
            .arg("US")
            .output()
            .expect("Failed to run add-pilot command");

        assert!(
            output.status.success(),
            "add-pilot failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        parse_id(&String::from_utf8(output.stdout).expect("Invalid UTF-8 in output"))
    }

    /// Add a technician and return the allocated id.
    pub fn add_technician(&self, name: &str) -> i64 {
        let output = self
            .command()
            .arg("add-technician")
            .arg("--name")
            .arg(name)
            .output()
            .expect("Failed to run add-technician command");

        assert!(
            output.status.success(),
            "add-technician failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        parse_id(&String::from_utf8(output.stdout).expect("Invalid UTF-8 in output"))
    }

    /// Schedule a flight on the given pilot and plane; returns the
    /// allocated flight number.
    pub fn add_flight(&self, pilot_id: i64, plane_id: i64) -> i64 {
        let output = self
            .command()
            .arg("add-flight")
            .arg("--cost")
            .arg("250")
            .arg("--seats-sold")
            .arg("10")
            .arg("--departure-date")
            .arg("2024-03-01")
            .arg("--arrival-date")
            .arg("2024-03-02")
            .arg("--from")
            .arg("KSFOX")
            .arg("--to")
            .arg("KJFKX")
            .arg("--pilot")
            .arg(pilot_id.to_string())
            .arg("--plane")
            .arg(plane_id.to_string())
            .output()
            .expect("Failed to run add-flight command");

        assert!(
            output.status.success(),
            "add-flight failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        parse_id(&String::from_utf8(output.stdout).expect("Invalid UTF-8 in output"))
    }

    /// Provision a pilot, a 180-seat plane, and a flight with 10 seats
    /// sold; returns the flight number.
    pub fn seed_flight(&self) -> i64 {
        let pilot_id = self.add_pilot("Amelia Earhart");
        let plane_id = self.add_plane();
        self.add_flight(pilot_id, plane_id)
    }

    /// Book a flight for a customer created by the same command.
    ///
    /// Supplies the full set of new-customer attributes, so this works
    /// for customer ids the database has never seen. Returns the status
    /// letter printed on stdout.
    pub fn book_new_customer(&self, customer_id: i64, flight_number: i64, status: &str) -> String {
        let output = self
            .command()
            .arg("book-flight")
            .arg("--customer")
            .arg(customer_id.to_string())
            .arg("--flight")
            .arg(flight_number.to_string())
            .arg("--status")
            .arg(status)
            .arg("--first-name")
            .arg("Ada")
            .arg("--last-name")
            .arg("Lovelace")
            .arg("--gender")
            .arg("F")
            .arg("--birth-date")
            .arg("1985-07-20")
            .arg("--address")
            .arg("12 Analytical Way")
            .arg("--phone")
            .arg("5551234567")
            .arg("--zip")
            .arg("94040")
            .output()
            .expect("Failed to run book-flight command");

        assert!(
            output.status.success(),
            "book-flight failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim()
            .to_string()
    }

    /// Record a repair and return the allocated repair id.
    pub fn record_repair(&self, plane_id: i64, technician_id: i64, date: &str) -> i64 {
        let output = self
            .command()
            .arg("record-repair")
            .arg("--plane")
            .arg(plane_id.to_string())
            .arg("--technician")
            .arg(technician_id.to_string())
            .arg("--code")
            .arg("MN")
            .arg("--date")
            .arg(date)
            .output()
            .expect("Failed to run record-repair command");

        assert!(
            output.status.success(),
            "record-repair failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        parse_id(&String::from_utf8(output.stdout).expect("Invalid UTF-8 in output"))
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper to parse an allocated id from command output.
#[allow(dead_code)]
pub fn parse_id(output: &str) -> i64 {
    output.trim().parse().expect("Output is not a valid id")
}

//! E2E tests for the command surface

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn yeolde(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_yeolde"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Test the default table output of the convert command
#[test]
fn convert_table() {
    let output = yeolde(&["convert", "5", "10", "6", "1850"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("Historical Currency Conversion"));
    assert!(stdout.contains("£5 10s 6d"));
    assert!(stdout.contains("Modern Equivalent: £442.00 (2017)"));
    assert!(stdout.contains("Purchasing Power:"));
    assert!(stdout.contains("horses"));
    assert!(stdout.contains("gallons_of_ale"));
}

/// Test JSON output, the format consumed by launcher integrations
#[test]
fn convert_json() {
    let output = yeolde(&["convert", "1", "0", "0", "1270", "--format=json"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["original_amount"], "£1 0s 0d");
    assert_eq!(value["decimal_pounds"], 1.0);
    assert_eq!(value["year"], 1270);
    assert_eq!(value["modern_equivalent"], 1000.0);
    assert_eq!(value["target_year"], 2017);
    assert_eq!(value["inflation_multiplier"], 1000.0);
    assert!(value["purchasing_power"]["horses"].is_number());

    // purchasing power keeps commodity order
    let stdout = String::from_utf8_lossy(&output.stdout);
    let horses = stdout.find("\"horses\"").unwrap();
    let ale = stdout.find("\"gallons_of_ale\"").unwrap();
    assert!(horses < ale);
}

/// Test the target year option
#[test]
fn convert_same_target_year() {
    let output = yeolde(&["convert", "1", "0", "0", "1971", "--target", "1971", "--format", "json"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["modern_equivalent"], 1.0);
    assert_eq!(value["target_year"], 1971);
}

/// Test CSV output
#[test]
fn convert_csv() {
    let output = yeolde(&["convert", "5", "10", "6", "1850", "--format=csv"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines[0], "field,value");
    assert!(lines.contains(&"original_amount,£5 10s 6d"));
    assert!(lines.contains(&"decimal_pounds,5.525"));
    assert!(lines.iter().any(|l| l.starts_with("purchasing_power_horses,")));
    assert!(lines.iter().any(|l| l.starts_with("purchasing_power_gallons_of_ale,")));
}

/// Test that out of range input fails with exit code 1
#[test]
fn convert_rejects_out_of_range_input() {
    let cases: &[(&[&str], &str)] = &[
        (&["convert", "1000", "0", "0", "1850"], "Pounds must be between 0 and 999"),
        (&["convert", "-1", "0", "0", "1850"], "Pounds must be between 0 and 999"),
        (&["convert", "1", "20", "0", "1850"], "Shillings must be between 0 and 19"),
        (&["convert", "1", "0", "12", "1850"], "Pence must be between 0 and 11"),
        (&["convert", "1", "0", "0", "1269"], "Year must be between 1270 and 2017"),
        (&["convert", "1", "0", "0", "2018"], "Year must be between 1270 and 2017"),
    ];

    for (args, message) in cases {
        let output = yeolde(args);
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert_eq!(output.status.code(), Some(1), "{:?}", args);
        assert!(stderr.contains(message), "{:?}: {}", args, stderr);
        assert!(output.stdout.is_empty());
    }
}

/// Test that numbers too large for any integer type still get range errors
#[test]
fn oversized_numbers_are_range_errors() {
    let cases: &[(&[&str], &str)] = &[
        (&["convert", "1", "0", "0", "3000000000"], "Year must be between 1270 and 2017"),
        (&["convert", "1", "0", "0", "-3000000000"], "Year must be between 1270 and 2017"),
        (
            &["convert", "99999999999999999999", "0", "0", "1850"],
            "Pounds must be between 0 and 999",
        ),
        (
            &["purchasing", "0", "99999999999999999999", "0", "1850"],
            "Shillings must be between 0 and 19",
        ),
        (&["inflation", "3000000000"], "Year must be between 1270 and 2017"),
        (&["items", "--year=3000000000"], "Year must be between 1270 and 2017"),
    ];

    for (args, message) in cases {
        let output = yeolde(args);
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert_eq!(output.status.code(), Some(1), "{:?}: {}", args, stderr);
        assert!(stderr.contains(message), "{:?}: {}", args, stderr);
    }
}

/// Test that an oversized target year clamps like any other out of range target
#[test]
fn oversized_target_year_clamps() {
    let output = yeolde(&["inflation", "1900", "--target=3000000000"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("60.0x"));

    let output = yeolde(&["convert", "1", "0", "0", "1900", "--target=3000000000", "--format=json"]);
    assert!(output.status.success(), "Command failed: {:?}", output);
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["modern_equivalent"], 60.0);
}

/// Test that non-numeric arguments remain usage errors
#[test]
fn non_numeric_argument_is_usage_error() {
    let output = yeolde(&["convert", "five", "0", "0", "1850"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("'five' is not a whole number"), "{}", stderr);
}

/// Test purchasing power with an item filter
#[test]
fn purchasing_single_item() {
    let output = yeolde(&["purchasing", "1", "0", "0", "1600", "--item=cow"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("Purchasing power of £1 0s 0d in 1600:"));
    assert!(stdout.contains("cows"));
    assert!(stdout.contains("0.67"));
    assert!(!stdout.contains("horses"));
}

/// Test that an unknown item is not an error
#[test]
fn purchasing_unknown_item() {
    let output = yeolde(&["purchasing", "1", "0", "0", "1600", "--item=unicorn"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("No purchasing power data available"));
}

/// Test the inflation command
#[test]
fn inflation_multiplier() {
    let output = yeolde(&["inflation", "1925"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("Inflation data for 1925:"));
    assert!(stdout.contains("Multiplier to 2017: 30.0x"));
    assert!(stdout.contains("£1 in 1925 = £30.00 in 2017"));
}

/// Test that the inflation target year clamps instead of failing
#[test]
fn inflation_target_year_clamps() {
    let output = yeolde(&["inflation", "1900", "--target=2100"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("Multiplier to 2100: 60.0x"));
}

/// Test the items command
#[test]
fn items_listing() {
    let output = yeolde(&["items", "--year=1600"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("Historical prices in 1600:"));
    for key in [
        "horse",
        "cow",
        "sheep",
        "pig",
        "wheat_quarter",
        "wool_stone",
        "bread_loaf",
        "ale_gallon",
    ] {
        assert!(stdout.contains(key), "missing {}", key);
    }
    assert!(stdout.contains("£4.000"));
}

/// Test the launcher integration output
#[test]
fn launcher_items() {
    let output = yeolde(&["launcher", "5 10 6 1850"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    let items = value["items"].as_array().expect("items array");
    assert_eq!(items.len(), 9);
    assert_eq!(items[0]["uid"], "conversion");
    assert_eq!(items[0]["valid"], true);
    assert_eq!(items[1]["uid"], "item_horses");
    assert_eq!(items[1]["icon"]["path"], "icons/horse.png");
}

/// Test that bad launcher input yields a single invalid item
#[test]
fn launcher_invalid_input() {
    for query in ["", "1 2", "a b c d", "1 0 0 1066"] {
        let output = yeolde(&["launcher", query]);
        assert!(output.status.success(), "Command failed: {:?}", output);

        let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
        let items = value["items"].as_array().expect("items array");
        assert_eq!(items.len(), 1, "{:?}", query);
        assert_eq!(items[0]["valid"], false);
        assert_eq!(items[0]["title"], "Invalid Input");
    }
}

/// Test the schema command
#[test]
fn schema_describes_result() {
    let output = yeolde(&["schema"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("\"ConversionResult\""));
    assert!(stdout.contains("\"purchasing_power\""));
    assert!(stdout.contains("\"inflation_multiplier\""));
}

/// Test that interactive mode converts piped input and ends cleanly at end of input
#[test]
fn interactive_until_end_of_input() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_yeolde"))
        .arg("interactive")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"1\n0\n0\n1900\n0\n25\n0\n1900\n")
        .expect("write stdin");

    let output = child.wait_with_output().expect("Failed to wait on command");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("Interactive Mode"));
    assert!(stdout.contains("Modern Equivalent: £60.00 (2017)"));
    assert!(stdout.contains("Error: Shillings must be between 0 and 19"));
    assert!(stdout.contains("Goodbye!"));
}

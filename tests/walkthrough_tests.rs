// Tests for recording and replaying walkthrough scenarios

use indirection::memory::constants::HEAP_ADDRESS_START;
use indirection::memory::stack::Region;
use indirection::memory::value::Value;
use indirection::snapshot::HistoryError;
use indirection::walkthrough::{Scenario, Walkthrough, WalkthroughError};

const LIMIT: usize = 16 * 1024 * 1024;

fn record(scenarios: &[Scenario]) -> Walkthrough {
    let mut walkthrough = Walkthrough::new(LIMIT);
    walkthrough.run(scenarios).expect("Recording failed");
    walkthrough
}

#[test]
fn test_pointer_scenario_output() {
    let walkthrough = record(&[Scenario::Pointer]);
    assert_eq!(walkthrough.output(), vec!["11", "11", "5 6", "6 5", "720"]);
}

#[test]
fn test_reference_scenario_output() {
    let walkthrough = record(&[Scenario::Reference]);
    assert_eq!(
        walkthrough.output(),
        vec!["0x0004 0x0004", "16", "720", "6 10", "10 6"]
    );
}

#[test]
fn test_edge_scenario_output() {
    let walkthrough = record(&[Scenario::Edge]);
    let output = walkthrough.output();
    println!("Edge output:\n{}", output.join("\n"));

    assert_eq!(output.len(), 11);
    assert_eq!(output[0], "error: Null handle passed as 'a' to sum");
    assert!(output[1].starts_with("error: Integer overflow in sum"));
    assert_eq!(output[1], output[2]);
    assert!(output[3].starts_with("error: Negative input -1"));
    assert_eq!(output[3], output[4]);
    assert_eq!(output[5], i32::MAX.to_string());
    assert_eq!(output[6], i32::MAX.to_string());
    assert_eq!(output[7], "2");
    assert_eq!(output[8], "4");
    assert_eq!(output[9], "error: Output 'result' aliases input 'n' in factorial");
    assert_eq!(output[9], output[10]);
}

#[test]
fn test_all_scenarios_in_order() {
    let walkthrough = record(&Scenario::ALL);
    let output = walkthrough.output();
    assert_eq!(output.len(), 5 + 5 + 11);
    assert_eq!(output[0], "11");
    assert_eq!(output[5], "0x0004 0x0004");
    assert!(output[10].starts_with("error:"));

    let listing = walkthrough.listing();
    assert_eq!(listing[0], "pointer_style() {");
    assert!(listing.iter().any(|l| l == "reference_style() {"));
    assert!(listing.iter().any(|l| l == "edge_cases() {"));
    assert_eq!(listing.last().map(String::as_str), Some("}"));
}

#[test]
fn test_one_snapshot_per_listing_line() {
    let walkthrough = record(&Scenario::ALL);
    assert_eq!(walkthrough.total_snapshots(), walkthrough.listing().len());
    // Recording leaves the position at the last snapshot
    assert_eq!(
        walkthrough.history_position(),
        walkthrough.total_snapshots() - 1
    );
}

#[test]
fn test_history_navigation() {
    let mut walkthrough = record(&[Scenario::Pointer]);
    let total = walkthrough.total_snapshots();

    assert_eq!(walkthrough.step_forward(), Err(HistoryError::AtEnd));

    walkthrough.rewind_to_start().unwrap();
    assert_eq!(walkthrough.history_position(), 0);
    assert_eq!(walkthrough.step_backward(), Err(HistoryError::AtStart));

    let first = walkthrough.current().unwrap();
    assert_eq!(first.line, 0);
    assert!(first.vars.is_empty());
    assert!(first.terminal.get_output().is_empty());

    for _ in 1..total {
        walkthrough.step_forward().unwrap();
    }
    assert_eq!(walkthrough.history_position(), total - 1);

    walkthrough.step_backward().unwrap();
    walkthrough.jump_to_end().unwrap();
    assert_eq!(walkthrough.history_position(), total - 1);
    assert_eq!(walkthrough.current().unwrap().terminal.get_output().len(), 5);
}

#[test]
fn test_snapshot_shows_swap_through_pointers() {
    let mut walkthrough = record(&[Scenario::Pointer]);
    walkthrough.rewind_to_start().unwrap();

    let swap_line = walkthrough
        .listing()
        .iter()
        .position(|l| l.trim() == "swap(a, b);")
        .expect("swap statement recorded");

    while walkthrough.current().unwrap().line < swap_line {
        walkthrough.step_forward().unwrap();
    }
    let snapshot = walkthrough.current().unwrap();
    assert_eq!(snapshot.function_name, "pointer_style");

    let find = |name: &str| {
        snapshot
            .vars
            .iter()
            .find(|v| v.name == name)
            .unwrap_or_else(|| panic!("{} missing", name))
    };
    assert_eq!(find("aval").value, Value::Int(6));
    assert_eq!(find("bval").value, Value::Int(5));
    // Pointers still hold the same addresses; only the pointees changed
    assert_eq!(find("a").value, Value::Pointer(find("aval").address));
    assert_eq!(find("b").value, Value::Pointer(find("bval").address));

    let heap = find("new int");
    assert_eq!(heap.region, Region::Heap);
    assert_eq!(heap.address, HEAP_ADDRESS_START);
    assert_eq!(find("result").value, Value::Pointer(HEAP_ADDRESS_START));
}

#[test]
fn test_reference_shares_address_in_snapshot() {
    let walkthrough = record(&[Scenario::Reference]);
    let last = walkthrough.current().unwrap();

    let a = last.vars.iter().find(|v| v.name == "a").unwrap();
    let r = last.vars.iter().find(|v| v.name == "ref").unwrap();
    assert_eq!(a.address, r.address);
    assert_eq!(
        r.value,
        Value::Alias {
            referent: "a".to_string(),
            value: 10
        }
    );
}

#[test]
fn test_snapshot_limit_stops_recording() {
    let mut walkthrough = Walkthrough::new(1024);
    let result = walkthrough.run(&Scenario::ALL);

    assert!(matches!(
        result,
        Err(WalkthroughError::History(
            HistoryError::SnapshotLimitExceeded { limit: 1024, .. }
        ))
    ));
    assert!(walkthrough.memory_usage() <= 1024);
    // The statement that overflowed the budget is neither listed nor echoed
    assert_eq!(walkthrough.total_snapshots(), walkthrough.listing().len());
    let last = walkthrough.total_snapshots() - 1;
    walkthrough.jump_to_end().unwrap();
    let snapshot = walkthrough.current().unwrap();
    assert_eq!(snapshot.line, last);
    assert_eq!(snapshot.terminal.get_output(), walkthrough.output());
}

#[test]
fn test_scenario_names_round_trip() {
    for scenario in Scenario::ALL {
        assert_eq!(scenario.name().parse::<Scenario>(), Ok(scenario));
        assert_eq!(scenario.to_string(), scenario.name());
    }
    assert!("pointers".parse::<Scenario>().is_err());
}

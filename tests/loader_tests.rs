mod common;

use std::thread;

use anyhow::Result;
use sdyn_bind::{BindError, BindingTable, DescriptorGroup, ErrorKind, Registry, SlotGroup};

use common::stub_identifier;

mod calc {
    use std::ffi::c_int;

    sdyn_bind::bind_functions! {
        abi = "system";
        group = sdyn_bind::Group::new("calc");
        fn add(a: c_int, b: c_int) -> c_int;
    }
}

mod partial {
    sdyn_bind::bind_functions! {
        abi = "C";
        group = sdyn_bind::Group::new("partial");
        fn sdyn_stub_reset();
        fn absent_function();
    }
}

static CALC_GROUPS: [&DescriptorGroup; 1] = [&calc::DESCRIPTORS];
static CALC_REGISTRY: Registry = Registry::new(&CALC_GROUPS);
static CALC_SLOTS: [&SlotGroup; 1] = [&calc::SLOTS];
static CALC: BindingTable = BindingTable::new(&CALC_REGISTRY, &CALC_SLOTS);

static PARTIAL_GROUPS: [&DescriptorGroup; 1] = [&partial::DESCRIPTORS];
static PARTIAL_REGISTRY: Registry = Registry::new(&PARTIAL_GROUPS);
static PARTIAL_SLOTS: [&SlotGroup; 1] = [&partial::SLOTS];
static PARTIAL: BindingTable = BindingTable::new(&PARTIAL_REGISTRY, &PARTIAL_SLOTS);

#[test]
fn concurrent_loads_bind_once() {
    let library = stub_identifier();
    let outcomes: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| CALC.try_load(&library).map(|loaded| loaded.bound())))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("loader thread panicked"))
            .collect()
    });

    let bound: Vec<_> = outcomes.iter().filter_map(|outcome| outcome.as_ref().ok()).collect();
    assert_eq!(bound, [&1]);
    for outcome in &outcomes {
        if let Err(err) = outcome {
            assert!(matches!(err, BindError::AlreadyLoaded { .. }));
        }
    }

    assert!(CALC.is_loaded());
    assert_eq!(calc::SLOTS.bound_count(), 1);
    assert_eq!(unsafe { calc::add(2, 3) }, 5);
    assert_eq!(unsafe { calc::add(i32::MAX, 1) }, i32::MIN);
}

#[test]
fn missing_symbol_binds_nothing_and_can_be_retried() {
    for _ in 0..2 {
        let err = PARTIAL.try_load(&stub_identifier()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SymbolNotFound);
        assert_eq!(err.symbol(), Some("absent_function"));
        assert!(err.to_string().contains(&stub_identifier()));

        assert!(!PARTIAL.is_loaded());
        assert_eq!(partial::SLOTS.bound_count(), 0);
    }
}

#[test]
fn missing_library_is_reported() {
    let err = PARTIAL
        .try_load("/nonexistent/sdyn/libsokol-missing.so")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::LibraryNotFound);
    assert!(err.to_string().contains("libsokol-missing.so"));
    assert!(!PARTIAL.is_loaded());
}

#[test]
fn audit_lists_missing_symbols() -> Result<()> {
    let report = PARTIAL.audit(&stub_identifier())?;
    assert!(!report.is_complete());
    let resolved: Vec<_> = report.resolved.iter().map(|d| d.name()).collect();
    let missing: Vec<_> = report.missing.iter().map(|d| d.name()).collect();
    assert_eq!(resolved, ["sdyn_stub_reset"]);
    assert_eq!(missing, ["absent_function"]);
    assert_eq!(partial::SLOTS.bound_count(), 0);
    Ok(())
}

#[test]
fn other_tables_leave_the_sokol_table_alone() {
    assert!(!sokol_dyn::table().is_loaded());
    assert!(sokol_dyn::table().slots().all(|slot| !slot.is_bound()));
}

//! Failures that end the process, observed from a parent test that re-runs
//! the ignored test of the same name in a child.

mod common;

use std::ffi::CStr;
use std::ptr;

use anyhow::Result;
use sdyn_bind::{BindError, BindingTable, DescriptorGroup, FatalHandler, Registry, SlotGroup};

use common::{STUB_ENV, is_child, run_child, stub_identifier};

mod incomplete {
    sdyn_bind::bind_functions! {
        abi = "C";
        group = sdyn_bind::Group::new("incomplete");
        fn sdyn_stub_call_count() -> usize;
        fn sdyn_stub_missing_export();
    }
}

static INCOMPLETE_GROUPS: [&DescriptorGroup; 1] = [&incomplete::DESCRIPTORS];
static INCOMPLETE_REGISTRY: Registry = Registry::new(&INCOMPLETE_GROUPS);
static INCOMPLETE_SLOTS: [&SlotGroup; 1] = [&incomplete::SLOTS];
static INCOMPLETE: BindingTable = BindingTable::new(&INCOMPLETE_REGISTRY, &INCOMPLETE_SLOTS);

const MISSING_LIBRARY: &str = "/nonexistent/sdyn/libsokol-missing.so";

#[test]
#[ignore = "runs in a child process"]
fn child_load_missing_library() {
    if !is_child() {
        return;
    }
    sokol_dyn::load(MISSING_LIBRARY);
    println!("unreachable: load returned");
}

#[test]
fn load_aborts_when_library_is_missing() -> Result<()> {
    let run = run_child("child_load_missing_library", &[])?;
    assert!(!run.success);
    assert!(run.stderr.contains("sdyn: fatal:"), "stderr: {}", run.stderr);
    assert!(run.stderr.contains(MISSING_LIBRARY), "stderr: {}", run.stderr);
    Ok(())
}

#[test]
#[ignore = "runs in a child process"]
fn child_load_incomplete_library() {
    if !is_child() {
        return;
    }
    let Ok(stub) = std::env::var(STUB_ENV) else {
        return;
    };
    INCOMPLETE.load(&stub);
}

#[test]
fn load_aborts_on_first_missing_symbol() -> Result<()> {
    let stub = stub_identifier();
    let run = run_child("child_load_incomplete_library", &[(STUB_ENV, stub.as_str())])?;
    assert!(!run.success);
    assert!(run.stderr.contains("sdyn: fatal:"), "stderr: {}", run.stderr);
    assert!(
        run.stderr.contains("symbol `sdyn_stub_missing_export` not found"),
        "stderr: {}",
        run.stderr
    );
    Ok(())
}

#[test]
#[ignore = "runs in a child process"]
fn child_call_before_load() {
    if !is_child() {
        return;
    }
    unsafe { sokol_dyn::gfx::sg_commit() };
}

#[test]
fn calling_before_load_aborts_with_the_function_name() -> Result<()> {
    let run = run_child("child_call_before_load", &[])?;
    assert!(!run.success);
    assert!(
        run.stderr
            .contains("sdyn: fatal: `sg_commit` was called before the bindings were loaded"),
        "stderr: {}",
        run.stderr
    );
    Ok(())
}

struct ExitHandler;

impl FatalHandler for ExitHandler {
    fn report(&self, err: &BindError) {
        eprintln!("custom handler: {}", err.symbol().unwrap_or("-"));
    }

    fn abort(&self) -> ! {
        std::process::exit(3)
    }
}

#[test]
#[ignore = "runs in a child process"]
fn child_custom_fatal_handler() {
    if !is_child() {
        return;
    }
    assert!(sokol_dyn::set_fatal_handler(ExitHandler));
    assert!(!sokol_dyn::set_fatal_handler(ExitHandler));
    unsafe { sokol_dyn::app::sapp_width() };
}

#[test]
fn installed_handler_replaces_the_default() -> Result<()> {
    let run = run_child("child_custom_fatal_handler", &[])?;
    assert_eq!(run.code, Some(3));
    assert!(run.stderr.contains("custom handler: sapp_width"), "stderr: {}", run.stderr);
    assert!(!run.stderr.contains("sdyn: fatal:"));
    Ok(())
}

#[test]
#[ignore = "runs in a child process"]
fn child_sdyn_load_null_name() {
    if !is_child() {
        return;
    }
    unsafe { sokol_dyn::sdyn_load(ptr::null()) };
    assert!(sokol_dyn::table().is_loaded());
    let backend = unsafe { sokol_dyn::gfx::sg_query_backend() };
    assert_eq!(backend, sokol_dyn::types::sg_backend::WGPU);
}

#[test]
fn sdyn_load_without_name_uses_the_environment() -> Result<()> {
    let stub = stub_identifier();
    let run = run_child(
        "child_sdyn_load_null_name",
        &[(sokol_dyn::config::LIBRARY_ENV, stub.as_str())],
    )?;
    assert!(run.success, "stderr: {}", run.stderr);
    Ok(())
}

#[test]
#[ignore = "runs in a child process"]
fn child_sdyn_load_invalid_utf8() {
    if !is_child() {
        return;
    }
    let name: &CStr = c"\xffl";
    unsafe { sokol_dyn::sdyn_load(name.as_ptr()) };
    println!("unreachable: sdyn_load returned");
}

#[test]
fn sdyn_load_rejects_non_utf8_names() -> Result<()> {
    let run = run_child("child_sdyn_load_invalid_utf8", &[])?;
    assert!(!run.success);
    assert!(
        run.stderr.contains("sdyn: fatal: failed to open shared library"),
        "stderr: {}",
        run.stderr
    );
    assert!(run.stderr.contains("invalid utf-8"), "stderr: {}", run.stderr);
    Ok(())
}

#[test]
#[ignore = "runs in a child process"]
fn child_load_from_env() -> Result<()> {
    if !is_child() {
        return Ok(());
    }
    let library = sokol_dyn::load_from_env()?;
    assert_eq!(library.bound(), sokol_dyn::registry().len());
    assert_eq!(unsafe { sokol_dyn::app::sapp_width() }, 42);
    Ok(())
}

#[test]
fn load_from_env_binds_the_configured_library() -> Result<()> {
    let stub = stub_identifier();
    let run = run_child(
        "child_load_from_env",
        &[(sokol_dyn::config::LIBRARY_ENV, stub.as_str())],
    )?;
    assert!(run.success, "stderr: {}", run.stderr);

    let run = run_child(
        "child_load_from_env",
        &[(sokol_dyn::config::LIBRARY_ENV, MISSING_LIBRARY)],
    )?;
    assert!(!run.success);
    assert!(run.stderr.contains(MISSING_LIBRARY), "stderr: {}", run.stderr);
    Ok(())
}

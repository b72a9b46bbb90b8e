#![allow(dead_code)]

use std::env;
use std::ffi::{CStr, c_char};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use libloading::Library;
use once_cell::sync::Lazy;
use parking_lot::{Mutex, MutexGuard, const_mutex};

/// Set in the environment of a re-executed test binary.
pub const CHILD_ENV: &str = "SDYN_FATAL_CHILD";
/// Path of the stub library, handed to child processes.
pub const STUB_ENV: &str = "SDYN_TEST_STUB";

static STUB: Lazy<PathBuf> =
    Lazy::new(|| build_stub().expect("failed to build the sdyn_stub test library"));

static SERIAL: Mutex<()> = const_mutex(());

type LastCallFn = unsafe extern "C" fn(*mut c_char, usize) -> usize;

/// Builds `crates/sdyn_stub` into this test binary's scratch directory.
fn build_stub() -> Result<PathBuf> {
    if let Some(path) = env::var_os(STUB_ENV) {
        return Ok(PathBuf::from(path));
    }

    let target_dir = Path::new(env!("CARGO_TARGET_TMPDIR")).join("sdyn-stub");
    let cargo = env::var("CARGO").unwrap_or_else(|_| "cargo".to_string());
    let manifest = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
    duct::cmd!(
        cargo,
        "build",
        "--quiet",
        "--manifest-path",
        &manifest,
        "-p",
        "sdyn_stub",
        "--target-dir",
        &target_dir
    )
    .run()
    .context("cargo build -p sdyn_stub failed")?;

    let artifact = target_dir
        .join("debug")
        .join(libloading::library_filename("sdyn_stub"));
    anyhow::ensure!(artifact.exists(), "missing stub artifact {}", artifact.display());
    Ok(artifact)
}

pub fn stub_library() -> &'static Path {
    &STUB
}

pub fn stub_identifier() -> String {
    stub_library().to_string_lossy().into_owned()
}

/// Serializes tests that read the stub's global call log.
pub fn serial() -> MutexGuard<'static, ()> {
    SERIAL.lock()
}

/// Binds the crate's own table to the stub once per test binary.
pub fn bind_stub() -> &'static sokol_dyn::LoadedLibrary {
    static LOADED: Lazy<&'static sokol_dyn::LoadedLibrary> = Lazy::new(|| {
        sokol_dyn::try_load(&stub_identifier()).expect("stub exports every registered function")
    });
    *LOADED
}

/// Reads the stub's call log through its instrumentation exports.
pub struct StubProbe {
    library: Library,
}

impl StubProbe {
    pub fn open() -> Result<Self> {
        let library = unsafe { Library::new(stub_library()) }?;
        Ok(Self { library })
    }

    pub fn last_call(&self) -> Result<String> {
        let mut buffer = vec![0 as c_char; 512];
        unsafe {
            let last_call = self.library.get::<LastCallFn>(b"sdyn_stub_last_call")?;
            last_call(buffer.as_mut_ptr(), buffer.len());
            Ok(CStr::from_ptr(buffer.as_ptr()).to_string_lossy().into_owned())
        }
    }

    pub fn call_count(&self) -> Result<usize> {
        unsafe {
            let call_count = self
                .library
                .get::<unsafe extern "C" fn() -> usize>(b"sdyn_stub_call_count")?;
            Ok(call_count())
        }
    }

    pub fn reset(&self) -> Result<()> {
        unsafe {
            let reset = self.library.get::<unsafe extern "C" fn()>(b"sdyn_stub_reset")?;
            reset();
        }
        Ok(())
    }
}

/// Output of one ignored test re-run in a child process.
pub struct ChildRun {
    pub success: bool,
    pub code: Option<i32>,
    pub stderr: String,
}

/// Re-runs the ignored test `name` of the current test binary in a child
/// process, with [`CHILD_ENV`] set so the test body actually runs.
pub fn run_child(name: &str, envs: &[(&str, &str)]) -> Result<ChildRun> {
    let exe = env::current_exe()?;
    let mut command = duct::cmd!(exe, "--exact", name, "--ignored", "--nocapture")
        .env(CHILD_ENV, "1")
        .env("NO_COLOR", "1")
        .stdout_capture()
        .stderr_capture()
        .unchecked();
    for (key, value) in envs {
        command = command.env(*key, *value);
    }
    let output = command.run()?;
    Ok(ChildRun {
        success: output.status.success(),
        code: output.status.code(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

/// True inside a child started by [`run_child`].
pub fn is_child() -> bool {
    env::var_os(CHILD_ENV).is_some()
}

//! Runtime-loaded bindings for `sokol_app` and `sokol_gfx`.
//!
//! The crate exports every registered sokol function as an unmangled
//! forwarding function. Nothing is linked against sokol at build time;
//! instead [`load`] opens a shared library once at startup, resolves every
//! function by name and points the forwarders at it. Calls made before that
//! abort the process with the name of the function that was called.
//!
//! ```no_run
//! use sokol_dyn::types::sg_desc;
//!
//! let library = sokol_dyn::load("libsokol.so");
//! assert_eq!(library.bound(), sokol_dyn::registry().len());
//! unsafe { sokol_dyn::gfx::sg_setup(&sg_desc::default()) };
//! ```

use std::ffi::{CStr, c_char};

use sdyn_bind::{BindingTable, DescriptorGroup, SlotGroup};

pub mod app;
pub mod cli;
pub mod config;
pub mod gfx;
#[cfg(feature = "glue")]
pub mod glue;
pub mod utils;

pub use config::BindConfig;
pub use sdyn_bind::{
    AuditReport, BindError, ErrorKind, FatalHandler, LoadedLibrary, fatal, set_fatal_handler,
};
pub use sdyn_registry::{FunctionDescriptor, Group, Registry, RegistryError};
pub use sdyn_types as types;

#[cfg(feature = "glue")]
static DESCRIPTOR_GROUPS: [&DescriptorGroup; 3] =
    [&app::DESCRIPTORS, &gfx::DESCRIPTORS, &glue::DESCRIPTORS];
#[cfg(not(feature = "glue"))]
static DESCRIPTOR_GROUPS: [&DescriptorGroup; 2] = [&app::DESCRIPTORS, &gfx::DESCRIPTORS];

#[cfg(feature = "glue")]
static SLOT_GROUPS: [&SlotGroup; 3] = [&app::SLOTS, &gfx::SLOTS, &glue::SLOTS];
#[cfg(not(feature = "glue"))]
static SLOT_GROUPS: [&SlotGroup; 2] = [&app::SLOTS, &gfx::SLOTS];

static REGISTRY: Registry = Registry::new(&DESCRIPTOR_GROUPS);
static TABLE: BindingTable = BindingTable::new(&REGISTRY, &SLOT_GROUPS);

/// Every forwarded function of this build, app first, then gfx, then glue.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// The process-wide slots behind the exported forwarders.
pub fn table() -> &'static BindingTable {
    &TABLE
}

/// Binds every forwarder from `identifier`, aborting the process if the
/// library cannot be opened or lacks any registered function.
pub fn load(identifier: &str) -> &'static LoadedLibrary {
    TABLE.load(identifier)
}

/// Fallible form of [`load`]. On error nothing has been bound and loading
/// may be attempted again.
pub fn try_load(identifier: &str) -> Result<&'static LoadedLibrary, BindError> {
    TABLE.try_load(identifier)
}

/// Loads the library selected by the environment, see [`BindConfig`].
///
/// Configuration problems are returned; binding failures abort as in [`load`].
pub fn load_from_env() -> anyhow::Result<&'static LoadedLibrary> {
    let config = BindConfig::from_env()?;
    Ok(load(&config.library))
}

/// C entry point: `void sdyn_load(const char* library_name)`.
///
/// A null `library_name` selects the library the same way [`load_from_env`]
/// does. Every failure is fatal.
///
/// # Safety
///
/// `library_name` must be null or point to a NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sdyn_load(library_name: *const c_char) {
    if library_name.is_null() {
        let config = match BindConfig::from_env() {
            Ok(config) => config,
            Err(err) => fatal::fatal(BindError::library_not_found("<environment>", err)),
        };
        load(&config.library);
        return;
    }

    // SAFETY: non-null and NUL-terminated per the contract above.
    let name = unsafe { CStr::from_ptr(library_name) };
    match name.to_str() {
        Ok(name) => {
            load(name);
        }
        Err(err) => fatal::fatal(BindError::library_not_found(name.to_string_lossy(), err)),
    }
}

/// Without the `glue` feature the glue forwarders do not exist:
///
/// ```compile_fail
/// let _ = sokol_dyn::glue::sapp_sgcontext;
/// ```
#[cfg(not(feature = "glue"))]
#[doc(hidden)]
pub mod glue_disabled {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_matches_slot_table() {
        assert_eq!(registry().validate(), Ok(()));
        assert_eq!(registry().len(), table().len());
        for (descriptor, slot) in registry().iter().zip(table().slots()) {
            assert_eq!(descriptor.name(), slot.name());
        }
    }

    #[test]
    fn registry_covers_every_group() {
        assert_eq!(registry().group(Group::APP).count(), 48);
        assert_eq!(registry().group(Group::GFX).count(), 82);
        #[cfg(feature = "glue")]
        assert_eq!(registry().lookup("sapp_sgcontext").map(|d| d.group()), Some(Group::GLUE));
        #[cfg(not(feature = "glue"))]
        assert!(registry().lookup("sapp_sgcontext").is_none());
    }

    #[test]
    fn slots_start_unbound() {
        // No test in this binary loads a library.
        assert!(!table().is_loaded());
        assert!(table().slots().all(|slot| !slot.is_bound()));
    }
}

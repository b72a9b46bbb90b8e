//! Forwarding functions for `sokol_gfx`.
//!
//! Besides the forwarders, the module only holds the group's `DESCRIPTORS`
//! and `SLOTS`; there are no test helpers:
//!
//! ```compile_fail
//! unsafe { sokol_dyn::gfx::call_each_with_zeroed_args() };
//! ```

use sdyn_types::*;

#[cfg(not(feature = "cdecl"))]
sdyn_registry::sg_functions!(sdyn_bind::bind_functions! { abi = "system"; });

#[cfg(feature = "cdecl")]
sdyn_registry::sg_functions!(sdyn_bind::bind_functions! { abi = "C"; });

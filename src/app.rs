//! Forwarding functions for `sokol_app`.
//!
//! Every function here has the exact C signature of its `sokol_app.h`
//! counterpart and is exported unmangled, so C code linked against this
//! crate calls it as if the library were linked in directly.

use sdyn_types::*;

#[cfg(not(feature = "cdecl"))]
sdyn_registry::sapp_functions!(sdyn_bind::bind_functions! { abi = "system"; });

#[cfg(feature = "cdecl")]
sdyn_registry::sapp_functions!(sdyn_bind::bind_functions! { abi = "C"; });

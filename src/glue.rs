//! Forwarding function for the `sokol_glue` bridge, present with the `glue`
//! feature only.

use sdyn_types::*;

#[cfg(not(feature = "cdecl"))]
sdyn_registry::sglue_functions!(sdyn_bind::bind_functions! { abi = "system"; });

#[cfg(feature = "cdecl")]
sdyn_registry::sglue_functions!(sdyn_bind::bind_functions! { abi = "C"; });

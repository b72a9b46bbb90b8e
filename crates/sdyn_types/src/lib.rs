//! C-compatible declarations of every type that appears in a forwarded
//! sokol signature.
//!
//! These mirror `sokol_app.h` / `sokol_gfx.h` at the API revision the binding
//! tables target (pass/context objects, `sg_image_content` uploads). Layouts
//! must match the headers the backing shared library was compiled from; the
//! forwarding layer itself never looks inside them.
#![cfg_attr(not(test), no_std)]
#![allow(non_camel_case_types)]

pub mod app;
pub mod gfx;

pub use app::*;
pub use core::ffi::{c_char, c_int, c_void};
pub use gfx::*;

/// Declares a C enum as a transparent `u32` newtype with associated constants.
///
/// Values coming back from the library are not guaranteed to be one of the
/// known constants, so a Rust `enum` would not be sound here.
macro_rules! c_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident = $value:expr,)* }
    ) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name(pub u32);

        impl $name {
            $(pub const $variant: Self = Self($value);)*
        }
    };
}

/// All-zero `Default` for structs holding raw pointers, which cannot derive it.
macro_rules! zeroed_default {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Default for $ty {
                fn default() -> Self {
                    // SAFETY: every field is an integer, float, bool, raw
                    // pointer, `Option<fn>` or array thereof; all-zero is valid
                    // for each and matches C's `{0}` initialization.
                    unsafe { core::mem::zeroed() }
                }
            }
        )*
    };
}

/// Declares a `{ uint32_t id; }` resource handle.
macro_rules! handle {
    ($($(#[$meta:meta])* $name:ident;)*) => {
        $(
            $(#[$meta])*
            #[repr(C)]
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            pub struct $name {
                pub id: u32,
            }

            impl $name {
                pub const INVALID: Self = Self { id: 0 };

                pub const fn is_valid(self) -> bool {
                    self.id != 0
                }
            }
        )*
    };
}

pub(crate) use {c_enum, handle, zeroed_default};

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{align_of, size_of};

    #[test]
    fn handles_are_single_u32() {
        assert_eq!(size_of::<sg_buffer>(), 4);
        assert_eq!(size_of::<sg_context>(), 4);
        assert!(!sg_image::INVALID.is_valid());
        assert!(sg_image { id: 3 }.is_valid());
    }

    #[test]
    fn enums_are_int_sized() {
        assert_eq!(size_of::<sg_pixel_format>(), size_of::<c_int>());
        assert_eq!(size_of::<sg_backend>(), size_of::<c_int>());
        assert_eq!(sg_shader_stage::FS, sg_shader_stage(1));
    }

    #[test]
    fn plain_info_structs_have_c_layout() {
        assert_eq!(size_of::<sg_slot_info>(), 12);
        assert_eq!(size_of::<sg_limits>(), 6 * size_of::<c_int>());
        assert_eq!(size_of::<sg_features>(), 7);
        assert_eq!(size_of::<sg_pixelformat_info>(), 6);
        assert_eq!(align_of::<sg_image_content>(), align_of::<*const c_void>());
    }

    #[test]
    fn zeroed_defaults_are_empty() {
        let desc = sg_buffer_desc::default();
        assert!(desc.content.is_null());
        assert_eq!(desc.usage, sg_usage::DEFAULT);

        let app = sapp_desc::default();
        assert!(app.init_cb.is_none());
        assert_eq!(app.width, 0);
    }
}

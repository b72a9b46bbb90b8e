//! Signature registry for the sokol-dyn forwarding layer.
//!
//! The registry is pure data. Every forwarded function is declared exactly
//! once, in one of the group tables under [`tables`], and those tables are
//! expanded by *generator* macros into whatever a consumer needs:
//! descriptors, binding slots, trampolines or test stubs.
//!
//! A table macro takes the generator's path and any leading tokens the
//! generator expects, then invokes the generator with a `group = ...;` line
//! followed by one `fn name(param: Type, ...) -> Ret;` line per function:
//!
//! ```
//! use sdyn_registry::{DescriptorGroup, Group};
//!
//! static GFX: DescriptorGroup = sdyn_registry::sg_functions!(sdyn_registry::descriptor_group! {});
//!
//! assert_eq!(GFX.group(), Group::GFX);
//! assert!(GFX.iter().any(|descriptor| descriptor.name() == "sg_draw"));
//! ```
//!
//! Type names inside the tables are resolved where the generator expands,
//! so generators that emit real code expect `sdyn_types::*` in scope.

mod descriptor;
mod registry;
pub mod tables;

pub use descriptor::{FunctionDescriptor, Group, Param, TypeRef};
pub use registry::{DescriptorGroup, Registry, RegistryError};

/// Builds a [`FunctionDescriptor`] from a single table entry.
#[macro_export]
macro_rules! descriptor {
    ($group:expr; fn $name:ident($($param:ident : $ty:ty),* $(,)?) $(-> $ret:ty)?) => {
        $crate::FunctionDescriptor::new(
            stringify!($name),
            $group,
            $crate::return_type!($($ret)?),
            &[$($crate::Param::new(stringify!($param), $crate::TypeRef::new(stringify!($ty)))),*],
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! return_type {
    () => {
        $crate::TypeRef::UNIT
    };
    ($ret:ty) => {
        $crate::TypeRef::new(stringify!($ret))
    };
}

/// Generator that turns a group table into a [`DescriptorGroup`] expression.
#[macro_export]
macro_rules! descriptor_group {
    (
        group = $group:expr;
        $(fn $name:ident($($param:ident : $ty:ty),* $(,)?) $(-> $ret:ty)?;)*
    ) => {
        {
            static ENTRIES: [&$crate::FunctionDescriptor; $crate::count!($($name)*)] =
                [$(&$crate::descriptor!($group; fn $name($($param: $ty),*) $(-> $ret)?)),*];
            $crate::DescriptorGroup::new($group, &ENTRIES)
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! count {
    ($($name:ident)*) => {
        0usize $(+ { let _ = stringify!($name); 1usize })*
    };
}

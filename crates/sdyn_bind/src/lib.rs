//! Binding slots, forwarding trampolines and the loader that connects them
//! to a shared library at run time.
//!
//! [`bind_functions!`] is a generator for the tables in [`sdyn_registry`].
//! Expanded inside a module, it produces for every table entry:
//!
//! * a descriptor in `descriptor::<name>` and the group's [`DescriptorGroup`]
//!   as `DESCRIPTORS`,
//! * a [`Slot`], collected into the group's [`SlotGroup`] as `SLOTS`,
//! * an exported `#[no_mangle]` trampoline with the exact C signature that
//!   jumps through the slot.
//!
//! A [`BindingTable`] over the slot groups then resolves every slot from one
//! library in a single all-or-nothing step.

mod backend;
mod error;
pub mod fatal;
mod slot;
mod table;

pub use backend::{DynamicLibraryBackend, LibraryBackend};
pub use error::{BindError, ErrorKind, Result};
pub use fatal::{FatalHandler, set_fatal_handler};
pub use sdyn_registry::{DescriptorGroup, FunctionDescriptor, Group, Registry, RegistryError};
pub use slot::{Slot, SlotGroup};
pub use table::{AuditReport, BindingTable, LoadedLibrary};

#[doc(hidden)]
pub use sdyn_registry as registry;

/// Generator emitting slots and trampolines for one function table.
///
/// `abi` is the calling convention of the trampolines and of the library
/// functions they forward to.
#[macro_export]
macro_rules! bind_functions {
    (
        abi = $abi:tt;
        group = $group:expr;
        $(fn $name:ident($($param:ident : $ty:ty),* $(,)?) $(-> $ret:ty)?;)*
    ) => {
        pub mod descriptor {
            $(
                #[allow(non_upper_case_globals)]
                pub static $name: $crate::FunctionDescriptor =
                    $crate::registry::descriptor!($group; fn $name($($param: $ty),*) $(-> $ret)?);
            )*
        }

        static DESCRIPTOR_LIST: [&$crate::FunctionDescriptor; $crate::registry::count!($($name)*)] =
            [$(&descriptor::$name),*];

        pub static DESCRIPTORS: $crate::DescriptorGroup =
            $crate::DescriptorGroup::new($group, &DESCRIPTOR_LIST);

        mod unbound {
            #[allow(unused_imports)]
            use super::*;

            $(
                pub(super) unsafe extern $abi fn $name($(_: $ty),*) $(-> $ret)? {
                    $crate::fatal::unbound_call(stringify!($name))
                }
            )*
        }

        mod slot {
            $(
                #[allow(non_upper_case_globals)]
                pub(super) static $name: $crate::Slot =
                    $crate::Slot::new(&super::descriptor::$name, super::unbound::$name as *const ());
            )*
        }

        static SLOT_LIST: [&$crate::Slot; $crate::registry::count!($($name)*)] =
            [$(&slot::$name),*];

        pub static SLOTS: $crate::SlotGroup = $crate::SlotGroup::new(&DESCRIPTORS, &SLOT_LIST);

        $(
            #[unsafe(no_mangle)]
            pub unsafe extern $abi fn $name($($param: $ty),*) $(-> $ret)? {
                // SAFETY: the slot holds either the unbound handler above or
                // the library export of the same name, both with this signature.
                let target: unsafe extern $abi fn($($ty),*) $(-> $ret)? =
                    unsafe { ::core::mem::transmute::<*const (), _>(slot::$name.address()) };
                unsafe { target($($param),*) }
            }
        )*
    };
}

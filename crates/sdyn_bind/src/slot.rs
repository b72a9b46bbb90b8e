use std::sync::atomic::{AtomicBool, AtomicPtr, Ordering};

use sdyn_registry::{DescriptorGroup, FunctionDescriptor, Group};

/// Function-pointer cell for one forwarded function.
///
/// A slot starts out pointing at an unbound handler with the same signature
/// as the real function, so a trampoline can always jump through it. Loading
/// replaces that address exactly once.
pub struct Slot {
    descriptor: &'static FunctionDescriptor,
    address: AtomicPtr<()>,
    bound: AtomicBool,
}

impl Slot {
    pub const fn new(descriptor: &'static FunctionDescriptor, unbound: *const ()) -> Self {
        Self {
            descriptor,
            address: AtomicPtr::new(unbound as *mut ()),
            bound: AtomicBool::new(false),
        }
    }

    pub fn descriptor(&self) -> &'static FunctionDescriptor {
        self.descriptor
    }

    pub fn name(&self) -> &'static str {
        self.descriptor.name()
    }

    /// Current call target. Pairs with the release store in [`Slot::bind`].
    #[inline(always)]
    pub fn address(&self) -> *const () {
        self.address.load(Ordering::Acquire)
    }

    pub fn is_bound(&self) -> bool {
        self.bound.load(Ordering::Acquire)
    }

    pub(crate) fn bind(&self, address: *mut ()) {
        self.address.store(address, Ordering::Release);
        self.bound.store(true, Ordering::Release);
    }
}

impl std::fmt::Debug for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slot")
            .field("name", &self.name())
            .field("bound", &self.is_bound())
            .finish()
    }
}

/// The slots of one group, index-aligned with its descriptors.
#[derive(Debug)]
pub struct SlotGroup {
    descriptors: &'static DescriptorGroup,
    slots: &'static [&'static Slot],
}

impl SlotGroup {
    pub const fn new(descriptors: &'static DescriptorGroup, slots: &'static [&'static Slot]) -> Self {
        Self { descriptors, slots }
    }

    pub fn group(&self) -> Group {
        self.descriptors.group()
    }

    pub fn descriptors(&self) -> &'static DescriptorGroup {
        self.descriptors
    }

    pub fn slots(&self) -> &'static [&'static Slot] {
        self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn bound_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_bound()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    extern "C" fn placeholder() {}
    extern "C" fn real() {}

    static DESCRIPTOR: FunctionDescriptor =
        sdyn_registry::descriptor!(Group::GFX; fn sg_commit());

    #[test]
    fn slot_starts_unbound_and_binds_once() {
        let slot = Slot::new(&DESCRIPTOR, placeholder as *const ());
        assert!(!slot.is_bound());
        assert_eq!(slot.address(), placeholder as *const ());
        assert_eq!(slot.name(), "sg_commit");

        slot.bind(real as *mut ());
        assert!(slot.is_bound());
        assert_eq!(slot.address(), real as *const ());
    }
}

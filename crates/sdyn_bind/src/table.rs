use std::any::Any;
use std::ptr::NonNull;

use once_cell::sync::OnceCell;
use parking_lot::{Mutex, const_mutex};
use sdyn_registry::{FunctionDescriptor, Registry};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::backend::{DynamicLibraryBackend, LibraryBackend};
use crate::error::{BindError, Result};
use crate::fatal;
use crate::slot::{Slot, SlotGroup};

/// The library the table was bound from.
///
/// The handle is kept for the rest of the process so bound addresses stay
/// valid; it is never closed.
pub struct LoadedLibrary {
    identifier: String,
    bound: usize,
    _handle: Box<dyn Any + Send + Sync>,
}

impl LoadedLibrary {
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Number of slots bound from this library.
    pub fn bound(&self) -> usize {
        self.bound
    }
}

impl std::fmt::Debug for LoadedLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedLibrary")
            .field("identifier", &self.identifier)
            .field("bound", &self.bound)
            .finish_non_exhaustive()
    }
}

/// Which registered symbols a library exports, without binding anything.
#[derive(Debug, Serialize)]
pub struct AuditReport {
    pub library: String,
    pub resolved: Vec<&'static FunctionDescriptor>,
    pub missing: Vec<&'static FunctionDescriptor>,
}

impl AuditReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Every slot of the active groups, plus the one-shot loader that fills them.
pub struct BindingTable {
    registry: &'static Registry,
    groups: &'static [&'static SlotGroup],
    load_lock: Mutex<()>,
    library: OnceCell<LoadedLibrary>,
}

impl BindingTable {
    pub const fn new(registry: &'static Registry, groups: &'static [&'static SlotGroup]) -> Self {
        Self {
            registry,
            groups,
            load_lock: const_mutex(()),
            library: OnceCell::new(),
        }
    }

    pub fn registry(&self) -> &'static Registry {
        self.registry
    }

    pub fn groups(&self) -> &'static [&'static SlotGroup] {
        self.groups
    }

    /// Every slot, group by group, in table order.
    pub fn slots(&self) -> impl Iterator<Item = &'static Slot> + '_ {
        self.groups.iter().flat_map(|group| group.slots().iter().copied())
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|group| group.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_loaded(&self) -> bool {
        self.library.get().is_some()
    }

    pub fn library(&self) -> Option<&LoadedLibrary> {
        self.library.get()
    }

    /// Opens `identifier` and binds every slot, or reports why it could not.
    pub fn try_load(&self, identifier: &str) -> Result<&LoadedLibrary> {
        self.try_load_with(&DynamicLibraryBackend::new(), identifier)
    }

    /// Like [`BindingTable::try_load`], but aborts the process on failure.
    pub fn load(&self, identifier: &str) -> &LoadedLibrary {
        match self.try_load(identifier) {
            Ok(library) => library,
            Err(err) => fatal::fatal(err),
        }
    }

    /// Binding is all or nothing. Every symbol is resolved before any slot
    /// is written, so a failed load leaves the table untouched and the call
    /// may be retried.
    pub fn try_load_with<B: LibraryBackend>(
        &self,
        backend: &B,
        identifier: &str,
    ) -> Result<&LoadedLibrary> {
        let _guard = self.load_lock.lock();
        if let Some(existing) = self.library.get() {
            warn!(
                library = identifier,
                loaded = existing.identifier(),
                "bindings already loaded"
            );
            return Err(BindError::AlreadyLoaded {
                library: existing.identifier.clone(),
            });
        }
        self.registry.validate()?;

        debug!(library = identifier, symbols = self.len(), "loading bindings");
        let handle = backend.open(identifier)?;

        let mut resolved: Vec<(&'static Slot, NonNull<()>)> = Vec::with_capacity(self.len());
        for slot in self.slots() {
            match backend.resolve(&handle, slot.name()) {
                Some(address) => {
                    debug!(symbol = slot.name(), address = ?address, "resolved");
                    resolved.push((slot, address));
                }
                None => {
                    return Err(BindError::SymbolNotFound {
                        library: identifier.to_string(),
                        symbol: slot.name().to_string(),
                    });
                }
            }
        }

        for (slot, address) in &resolved {
            slot.bind(address.as_ptr());
        }
        info!(library = identifier, bound = resolved.len(), "bindings loaded");

        let loaded = LoadedLibrary {
            identifier: identifier.to_string(),
            bound: resolved.len(),
            _handle: Box::new(handle),
        };
        Ok(self.library.get_or_init(|| loaded))
    }

    pub fn audit(&self, identifier: &str) -> Result<AuditReport> {
        self.audit_with(&DynamicLibraryBackend::new(), identifier)
    }

    /// Resolves every registered symbol in `identifier` and reports which
    /// are missing. Slots are not touched.
    pub fn audit_with<B: LibraryBackend>(
        &self,
        backend: &B,
        identifier: &str,
    ) -> Result<AuditReport> {
        let handle = backend.open(identifier)?;
        let (resolved, missing): (Vec<_>, Vec<_>) = self
            .slots()
            .map(Slot::descriptor)
            .partition(|descriptor| backend.resolve(&handle, descriptor.name()).is_some());
        Ok(AuditReport {
            library: identifier.to_string(),
            resolved,
            missing,
        })
    }
}

impl std::fmt::Debug for BindingTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindingTable")
            .field("slots", &self.len())
            .field("library", &self.library.get())
            .finish()
    }
}

use std::ptr::NonNull;

use libloading::Library;
use tracing::debug;

use crate::error::{BindError, Result};

/// Opens libraries and resolves exported symbols by name.
///
/// The binding table is generic over this so loading can be driven by
/// something other than the platform loader.
pub trait LibraryBackend {
    type Handle: Send + Sync + 'static;

    fn open(&self, identifier: &str) -> Result<Self::Handle>;

    /// Address of `symbol` in `handle`, or `None` when it is not exported.
    fn resolve(&self, handle: &Self::Handle, symbol: &str) -> Option<NonNull<()>>;
}

/// Backend over the platform dynamic loader (`dlopen`/`LoadLibrary`).
#[derive(Clone, Copy, Debug, Default)]
pub struct DynamicLibraryBackend;

impl DynamicLibraryBackend {
    pub fn new() -> Self {
        Self
    }
}

impl LibraryBackend for DynamicLibraryBackend {
    type Handle = Library;

    fn open(&self, identifier: &str) -> Result<Library> {
        // SAFETY: loading runs the library's initialisers. Which library is
        // trusted to be loaded is the caller's decision.
        let library = unsafe { Library::new(identifier) }
            .map_err(|err| BindError::library_not_found(identifier, err))?;
        debug!(library = identifier, "opened shared library");
        Ok(library)
    }

    fn resolve(&self, handle: &Library, symbol: &str) -> Option<NonNull<()>> {
        // SAFETY: the value is only read as an address; the matching
        // trampoline supplies the signature when it is called.
        let address = unsafe { handle.get::<*mut ()>(symbol.as_bytes()) }.ok()?;
        NonNull::new(*address)
    }
}

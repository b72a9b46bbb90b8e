//! Process termination for unrecoverable binding failures.
//!
//! Failing to open the library, failing to resolve a symbol during
//! [`crate::BindingTable::load`], and calling a forwarded function before
//! loading all end here. The default handler logs the error, writes a one
//! line diagnostic to stderr and aborts. Embedders can install their own
//! handler once, before the first failure, to route the report elsewhere.

use once_cell::sync::OnceCell;
use tracing::error;

use crate::error::BindError;

pub trait FatalHandler: Send + Sync {
    fn report(&self, err: &BindError);

    fn abort(&self) -> ! {
        std::process::abort()
    }
}

struct StderrHandler;

impl FatalHandler for StderrHandler {
    fn report(&self, err: &BindError) {
        error!(kind = ?err.kind(), "{err}");
        eprintln!("sdyn: fatal: {err}");
    }
}

static HANDLER: OnceCell<Box<dyn FatalHandler>> = OnceCell::new();

/// Installs the process-wide fatal handler.
///
/// Returns `false` when a handler is already in place, including the default
/// one once it has been used.
pub fn set_fatal_handler(handler: impl FatalHandler + 'static) -> bool {
    HANDLER.set(Box::new(handler)).is_ok()
}

fn handler() -> &'static dyn FatalHandler {
    HANDLER.get_or_init(|| Box::new(StderrHandler)).as_ref()
}

/// Reports `err` through the installed handler and terminates.
pub fn fatal(err: BindError) -> ! {
    let handler = handler();
    handler.report(&err);
    handler.abort()
}

/// Target of every unbound slot.
#[doc(hidden)]
#[cold]
pub fn unbound_call(symbol: &'static str) -> ! {
    fatal(BindError::Unbound {
        symbol: symbol.to_string(),
    })
}

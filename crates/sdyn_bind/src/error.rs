use sdyn_registry::RegistryError;
use thiserror::Error;

pub type Result<T, E = BindError> = std::result::Result<T, E>;

/// Coarse classification of a [`BindError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    LibraryNotFound,
    SymbolNotFound,
    Misuse,
    Registry,
}

#[derive(Debug, Error)]
pub enum BindError {
    #[error("failed to open shared library `{library}`: {source}")]
    LibraryNotFound {
        library: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("symbol `{symbol}` not found in `{library}`")]
    SymbolNotFound { library: String, symbol: String },
    #[error("bindings are already loaded from `{library}`")]
    AlreadyLoaded { library: String },
    #[error("`{symbol}` was called before the bindings were loaded")]
    Unbound { symbol: String },
    #[error("invalid signature registry: {0}")]
    InvalidRegistry(#[from] RegistryError),
}

impl BindError {
    pub fn library_not_found(
        library: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        BindError::LibraryNotFound {
            library: library.into(),
            source: source.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            BindError::LibraryNotFound { .. } => ErrorKind::LibraryNotFound,
            BindError::SymbolNotFound { .. } => ErrorKind::SymbolNotFound,
            BindError::AlreadyLoaded { .. } | BindError::Unbound { .. } => ErrorKind::Misuse,
            BindError::InvalidRegistry(_) => ErrorKind::Registry,
        }
    }

    /// The symbol this error is about, if any.
    pub fn symbol(&self) -> Option<&str> {
        match self {
            BindError::SymbolNotFound { symbol, .. } | BindError::Unbound { symbol } => Some(symbol),
            _ => None,
        }
    }
}

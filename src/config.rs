//! Selection of the shared library to bind.
//!
//! In order of precedence: an explicit name, `SDYN_LIBRARY`, the `library`
//! key of the TOML file named by `SDYN_CONFIG` (with the `toml-config`
//! feature), and finally the platform file name for `sokol`. The result is a
//! single identifier handed to the loader as is; nothing is searched for.

use std::env;
use std::fmt;
use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

pub const LIBRARY_ENV: &str = "SDYN_LIBRARY";
pub const CONFIG_ENV: &str = "SDYN_CONFIG";

/// Where the library identifier came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LibrarySource {
    Argument,
    Environment,
    ConfigFile(PathBuf),
    Default,
}

impl fmt::Display for LibrarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibrarySource::Argument => f.write_str("command line"),
            LibrarySource::Environment => write!(f, "${LIBRARY_ENV}"),
            LibrarySource::ConfigFile(path) => write!(f, "{}", path.display()),
            LibrarySource::Default => f.write_str("platform default"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BindConfig {
    pub library: String,
    pub source: LibrarySource,
}

impl BindConfig {
    pub fn from_env() -> Result<Self> {
        Self::resolve(None)
    }

    pub fn resolve(explicit: Option<&str>) -> Result<Self> {
        Self::resolve_with(explicit, |key| env::var(key).ok())
    }

    /// Resolution against an arbitrary variable lookup.
    pub fn resolve_with(
        explicit: Option<&str>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let config = if let Some(library) = explicit {
            Self::new(library, LibrarySource::Argument)
        } else if let Some(library) = lookup(LIBRARY_ENV).filter(|value| !value.is_empty()) {
            Self::new(library, LibrarySource::Environment)
        } else if let Some(config) = lookup(CONFIG_ENV)
            .filter(|value| !value.is_empty())
            .map(|path| file::library_from(PathBuf::from(path)))
            .transpose()?
            .flatten()
        {
            config
        } else {
            Self::new(default_library(), LibrarySource::Default)
        };
        debug!(library = %config.library, source = %config.source, "selected library");
        Ok(config)
    }

    fn new(library: impl Into<String>, source: LibrarySource) -> Self {
        Self {
            library: library.into(),
            source,
        }
    }
}

/// Platform file name of the sokol library, e.g. `libsokol.so` or `sokol.dll`.
pub fn default_library() -> String {
    libloading::library_filename("sokol")
        .to_string_lossy()
        .into_owned()
}

#[cfg(feature = "toml-config")]
mod file {
    use std::fs;
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use serde::Deserialize;

    use super::{BindConfig, LibrarySource};

    #[derive(Debug, Default, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct FileConfig {
        library: Option<String>,
    }

    pub(super) fn library_from(path: PathBuf) -> Result<Option<BindConfig>> {
        let text = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let parsed: FileConfig = toml::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(parsed
            .library
            .map(|library| BindConfig::new(library, LibrarySource::ConfigFile(path))))
    }
}

#[cfg(not(feature = "toml-config"))]
mod file {
    use std::path::PathBuf;

    use anyhow::Result;
    use tracing::warn;

    use super::{BindConfig, CONFIG_ENV};

    pub(super) fn library_from(path: PathBuf) -> Result<Option<BindConfig>> {
        warn!(
            path = %path.display(),
            "${CONFIG_ENV} is set but sokol-dyn was built without the `toml-config` feature"
        );
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use anyhow::Result;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn explicit_argument_wins() -> Result<()> {
        let config = BindConfig::resolve_with(
            Some("./custom.so"),
            lookup(&[(LIBRARY_ENV, "/opt/libsokol.so")]),
        )?;
        assert_eq!(config.library, "./custom.so");
        assert_eq!(config.source, LibrarySource::Argument);
        Ok(())
    }

    #[test]
    fn environment_beats_default() -> Result<()> {
        let config = BindConfig::resolve_with(None, lookup(&[(LIBRARY_ENV, "/opt/libsokol.so")]))?;
        assert_eq!(config.library, "/opt/libsokol.so");
        assert_eq!(config.source, LibrarySource::Environment);
        Ok(())
    }

    #[test]
    fn empty_values_fall_through_to_default() -> Result<()> {
        let config = BindConfig::resolve_with(None, lookup(&[(LIBRARY_ENV, "")]))?;
        assert_eq!(config.library, default_library());
        assert_eq!(config.source, LibrarySource::Default);
        assert!(config.library.contains("sokol"));
        Ok(())
    }

    #[cfg(feature = "toml-config")]
    #[test]
    fn config_file_supplies_library() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("sdyn.toml");
        std::fs::write(&path, "library = \"/srv/lib/libsokol.so\"\n")?;

        let path_str = path.to_string_lossy().into_owned();
        let config = BindConfig::resolve_with(None, lookup(&[(CONFIG_ENV, path_str.as_str())]))?;
        assert_eq!(config.library, "/srv/lib/libsokol.so");
        assert_eq!(config.source, LibrarySource::ConfigFile(path));
        Ok(())
    }

    #[cfg(feature = "toml-config")]
    #[test]
    fn malformed_config_file_is_an_error() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("sdyn.toml");
        std::fs::write(&path, "libary = 3\n")?;

        let path_str = path.to_string_lossy().into_owned();
        let err = BindConfig::resolve_with(None, lookup(&[(CONFIG_ENV, path_str.as_str())]))
            .unwrap_err();
        assert!(err.to_string().contains("failed to parse config file"));
        Ok(())
    }
}

//! Errors raised by mods during the host lifecycle.

use items_core::PatchError;
use thiserror::Error;

/// Mod initialization failure, prefixed with the mod's name.
#[derive(Debug, Error)]
pub enum ModError {
    #[error("[{mod_name}]: {source}")]
    Patch {
        mod_name: &'static str,
        #[source]
        source: PatchError,
    },

    #[error("[{mod_name}]: {message}")]
    Failed {
        mod_name: &'static str,
        message: String,
    },
}

impl ModError {
    pub fn patch(mod_name: &'static str, source: PatchError) -> Self {
        Self::Patch { mod_name, source }
    }

    pub fn failed(mod_name: &'static str, message: impl Into<String>) -> Self {
        Self::Failed {
            mod_name,
            message: message.into(),
        }
    }

    pub fn mod_name(&self) -> &'static str {
        match self {
            Self::Patch { mod_name, .. } | Self::Failed { mod_name, .. } => mod_name,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Patch { source, .. } => source.error_code(),
            Self::Failed { .. } => "MOD_FAILED",
        }
    }
}

pub type Result<T> = std::result::Result<T, ModError>;

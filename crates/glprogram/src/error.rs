use std::io;

use thiserror::Error;

use crate::resource::ResourceId;

/// Failure to build one shader program. Only that program is affected; the
/// rest of the registry still drains.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("failed to load shader program '{id}': {source}")]
    Io {
        id: ResourceId,
        #[source]
        source: io::Error,
    },

    #[error("failed to link shader program '{id}': {message}")]
    Link { id: ResourceId, message: String },
}

impl CompileError {
    pub fn io(id: &ResourceId, source: io::Error) -> Self {
        Self::Io {
            id: id.clone(),
            source,
        }
    }

    pub fn link(id: &ResourceId, message: impl Into<String>) -> Self {
        Self::Link {
            id: id.clone(),
            message: message.into(),
        }
    }

    pub fn id(&self) -> &ResourceId {
        match self {
            Self::Io { id, .. } | Self::Link { id, .. } => id,
        }
    }
}

#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("shader program '{0}' has not been compiled")]
    NotCompiled(ResourceId),
}

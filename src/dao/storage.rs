use std::{io, path::PathBuf};

use thiserror::Error;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by the league storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing file could not be opened or created.
    #[error("problem opening {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Seeding an empty backing resource with `[]` failed.
    #[error("problem initializing player db file")]
    Initialize {
        #[source]
        source: io::Error,
    },
    /// The snapshot is not a JSON array of players.
    #[error("problem parsing a league")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
    /// The in-memory league could not be serialized.
    #[error("problem encoding the league")]
    Encode {
        #[source]
        source: serde_json::Error,
    },
    /// Truncating or rewriting the backing resource failed.
    #[error("problem writing the league snapshot")]
    Write {
        #[source]
        source: io::Error,
    },
}

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::scene::SceneError;

/// Errors surfaced by the `gridfind` binary.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("cannot read {}: {source}", path.display())]
    ReadScene {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("bad scene {}: {source}", path.display())]
    ParseScene {
        path: PathBuf,
        #[source]
        source: SceneError,
    },
    #[error("scene needs both an S and an E marker")]
    MissingEndpoints,
    #[error(transparent)]
    Terminal(#[from] io::Error),
}

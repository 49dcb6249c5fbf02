use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("could not open '{}' for writing\n{source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not read palette file '{}'\n{source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write palette data\n{0}")]
    Write(#[from] std::io::Error),
}

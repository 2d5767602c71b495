use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HelloError {
    /// `mpi::initialize` hands out the universe once per process.
    #[error("the MPI runtime has already been initialized in this process")]
    AlreadyInitialized,
    #[error("failed to set up logging: {0}")]
    Logger(#[from] fern::InitError),
    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, HelloError>;

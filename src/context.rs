use log::{debug, info};
use mpi::environment::Universe;
use mpi::topology::Rank;
use mpi::traits::*;

use crate::error::{HelloError, Result};

/// This process's membership in the MPI world.
///
/// Size and rank can only be asked while a `Context` exists, and `finalize`
/// takes it by value, so the runtime is shut down exactly once. Dropping the
/// context without calling `finalize` shuts it down as well.
pub struct Context {
    universe: Universe,
}

impl Context {
    /// Starts the MPI runtime with the default threading level.
    ///
    /// Fails if this process already holds the universe.
    pub fn initialize() -> Result<Context> {
        let universe = mpi::initialize().ok_or(HelloError::AlreadyInitialized)?;
        let (major, minor) = mpi::environment::version();
        info!("MPI {}.{} runtime up", major, minor);
        if let Ok(lib) = mpi::environment::library_version() {
            info!("library: {}", lib.trim_end());
        }
        if let Ok(host) = mpi::environment::processor_name() {
            info!("processor: {}", host);
        }
        Ok(Context { universe })
    }

    pub fn world_size(&self) -> Rank {
        self.universe.world().size()
    }

    /// Zero-based, always below `world_size()`.
    pub fn world_rank(&self) -> Rank {
        self.universe.world().rank()
    }

    pub fn finalize(self) {
        debug!("finalizing");
        drop(self.universe);
    }
}

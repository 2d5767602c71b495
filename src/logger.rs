use std::fmt;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Local};
use log::Level;
use mpi::topology::Rank;

use crate::error::Result;

const TIME_FORMAT: &str = "%m-%d %H:%M:%S.%f";
const NO_RANK: Rank = -1;

/// Tag attached to every record of this process; `P?` until a rank is known.
pub fn process_id(rank: Option<Rank>) -> String {
    match rank {
        Some(r) => format!("P{}", r),
        None => "P?".to_string(),
    }
}

/// Rank shared with the installed logger, so records logged before MPI is up
/// are still emitted and later ones pick up the rank.
#[derive(Debug, Clone)]
pub struct ProcessTag(Arc<AtomicI32>);

impl ProcessTag {
    pub fn new() -> Self {
        ProcessTag(Arc::new(AtomicI32::new(NO_RANK)))
    }

    pub fn set_rank(&self, rank: Rank) {
        self.0.store(rank, Ordering::Relaxed);
    }

    pub fn current(&self) -> String {
        match self.0.load(Ordering::Relaxed) {
            NO_RANK => process_id(None),
            r => process_id(Some(r)),
        }
    }
}

fn format_line(
    now: &DateTime<Local>,
    target: &str,
    process_id: &str,
    level: Level,
    message: fmt::Arguments,
) -> String {
    format!(
        "{} {} {} {} {}",
        now.format(TIME_FORMAT),
        target,
        process_id,
        level,
        message
    )
}

fn dispatch(tag: ProcessTag) -> fern::Dispatch {
    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{}",
                format_line(
                    &Local::now(),
                    record.target(),
                    &tag.current(),
                    record.level(),
                    *message
                )
            ))
        })
        .level(log::LevelFilter::Info)
}

/// Installs the global logger. Records go to stderr, stdout carries only the report line.
pub fn setup_logger(tag: ProcessTag) -> Result<()> {
    dispatch(tag)
        .chain(std::io::stderr())
        .apply()
        .map_err(fern::InitError::from)?;
    Ok(())
}

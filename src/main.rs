extern crate chrono;
extern crate fern;
extern crate log;
extern crate mpi;
extern crate thiserror;

use std::io;
use std::process;

use log::{error, info};

mod context;
mod error;
mod logger;
mod report;

use self::context::Context;
use self::error::{HelloError, Result};
use self::logger::ProcessTag;

fn run(context: &Context) -> Result<()> {
    let size = context.world_size();
    let rank = context.world_rank();
    info!("world size {}, rank {}", size, rank);

    let stdout = io::stdout();
    report::report(&mut stdout.lock(), rank, size)
}

fn fail(e: HelloError) -> ! {
    error!("{}", e);
    process::exit(1);
}

fn main() {
    let tag = ProcessTag::new();
    if let Err(e) = logger::setup_logger(tag.clone()) {
        eprintln!("mpi-hello: {}", e);
        process::exit(1);
    }

    let context = match Context::initialize() {
        Ok(c) => c,
        Err(e) => fail(e),
    };
    tag.set_rank(context.world_rank());

    let result = run(&context);
    context.finalize();
    if let Err(e) = result {
        fail(e);
    }
}

//! Process wiring for a live status display: stdin stands in for the fault
//! source, and the console simulator stands in for a display module.
//!
//! Each line is parsed as a comma-separated fault list and replaces the
//! active set wholesale, e.g. `lidar_fail, gps_fail`; an empty line clears
//! it. EOF (Ctrl-D) winds the render loop down. Typed input and the segment
//! art share the terminal, so expect some interleaving.
//!
//! Run with `RUST_LOG=debug` to watch the frame trace go by.

use std::error::Error;
use std::io::{self, BufRead};
use std::sync::{mpsc, Arc};
use std::thread;

use faultseg::core::parse_fault_list;
use faultseg::{DisplayCycler, FaultRegistry};
use faultseg_testing::ConsoleDisplay;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let registry = Arc::new(FaultRegistry::new());
    let mut cycler = DisplayCycler::new(Arc::clone(&registry), ConsoleDisplay::new());

    let (stop, stop_rx) = mpsc::channel();
    let worker = thread::spawn(move || cycler.run(stop_rx));

    for line in io::stdin().lock().lines() {
        registry.replace(&parse_fault_list(&line?));
    }

    stop.send(())?;
    worker.join().expect("render loop panicked")?;
    Ok(())
}

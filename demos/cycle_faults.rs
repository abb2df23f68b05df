//! Cycles a fixed fault list on the console simulator, forever.
//!
//! Shows the standard rotation shape: `4---` blinks at each restart, then
//! the four codes each hold for a second. Kill the process to stop.

use std::error::Error;
use std::sync::{mpsc, Arc};

use faultseg::core::parse_fault_list;
use faultseg::{DisplayCycler, FaultRegistry};
use faultseg_testing::ConsoleDisplay;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let registry = Arc::new(FaultRegistry::new());
    registry.replace(&parse_fault_list("lidar_fail, lidar_com, gps_fail, ip_mesh_com"));

    // The stop sender stays alive in main so the loop never sees a
    // disconnect; this demo runs until the process is killed.
    let (_stop, stop_rx) = mpsc::channel();
    let mut cycler = DisplayCycler::new(registry, ConsoleDisplay::new());
    cycler.run(stop_rx)?;
    Ok(())
}

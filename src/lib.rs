//! A library for cycling live fault codes on a 4-digit segmented status
//! display.
//!
//! A fault source (a sensor-monitoring subsystem, typically) publishes a
//! comma-separated list of fault names at arbitrary times; the display must
//! continuously show how many faults are active followed by a 3-digit code
//! per fault, distinguishing "rotation is restarting" from "no faults" from
//! "showing fault N of M". [`FaultRegistry`] is the concurrency-safe hand-off
//! between the two sides: the ingestion path replaces the list atomically,
//! and the [`DisplayCycler`] render loop reads a complete snapshot at each
//! rotation start: never a torn list, and never while holding a lock across
//! a frame hold.
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::{mpsc, Arc};
//! use std::thread;
//!
//! use faultseg::core::parse_fault_list;
//! use faultseg::{DisplayCycler, FaultRegistry, SerialDisplay};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! #
//! // Shared registry: the ingestion side writes, the render loop reads.
//! let registry = Arc::new(FaultRegistry::new());
//!
//! // Drive a real display module over serial.
//! let port = serial::open("/dev/ttyUSB0")?;
//! let display = SerialDisplay::try_new(port)?;
//!
//! // The render loop runs until a stop signal arrives.
//! let (stop, stop_rx) = mpsc::channel();
//! let mut cycler = DisplayCycler::new(Arc::clone(&registry), display);
//! let worker = thread::spawn(move || cycler.run(stop_rx));
//!
//! // Whenever the fault source publishes, replace the list wholesale.
//! registry.replace(&parse_fault_list("lidar_fail, gps_fail"));
//!
//! // ... eventually:
//! stop.send(())?;
//! worker.join().expect("render loop panicked")?;
//! #
//! # Ok(()) }
//! ```
//!
//! # Sub-crates
//!
//! In addition to the high-level API of [`FaultRegistry`] and
//! [`DisplayCycler`], several lower-level components are provided that can
//! be combined for more specialized use-cases.
//!
//! - [`faultseg-core`] \(re-exported as `core`\) contains the frame and
//!   fault-code vocabulary plus the [`StatusDisplay`] capability trait, and
//!   is useful if you want to implement a custom display backend or format
//!   frames yourself.
//! - [`faultseg-serial`] \(re-exported as `serial`\) contains functions for
//!   configuring the serial port, as well as the implementation of
//!   [`SerialDisplay`].
//! - [`faultseg-testing`] contains display backends not tied to real
//!   hardware, useful for testing and for watching a rotation in the
//!   terminal.
//!
//! [`FaultRegistry`]: struct.FaultRegistry.html
//! [`DisplayCycler`]: struct.DisplayCycler.html
//! [`faultseg-core`]: https://docs.rs/faultseg-core
//! [`faultseg-serial`]: https://docs.rs/faultseg-serial
//! [`faultseg-testing`]: https://docs.rs/faultseg-testing
//! [`StatusDisplay`]: trait.StatusDisplay.html
//! [`SerialDisplay`]: struct.SerialDisplay.html
#![doc(html_root_url = "https://docs.rs/faultseg/0.1.0")]
#![deny(
    missing_copy_implementations,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![warn(
    missing_docs,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results
)]

pub use faultseg_core as core;
pub use faultseg_serial as serial;

mod cycler;
mod registry;

pub use self::cycler::{CycleTiming, CyclerError, DisplayCycler};
pub use self::registry::FaultRegistry;

pub use crate::core::{parse_fault_list, CodeTable, FaultCode, FaultId, Frame, StatusDisplay};
pub use crate::serial::SerialDisplay;

//! Core types for driving a 4-digit segmented fault-status display.
//!
//! For the basic task of showing live fault codes, you likely want to use the
//! high-level API in the [`faultseg`] crate instead.
//!
//! However, `faultseg_core` is useful for crates that want to work with the
//! frame and fault-code vocabulary directly, or that provide their own
//! [`StatusDisplay`] backend for `faultseg` to drive.
//!
//! # Examples
//!
//! ```
//! use faultseg_core::{parse_fault_list, CodeTable, Frame};
//!
//! // The fault source publishes a comma-separated payload.
//! let faults = parse_fault_list("lidar_fail, gps_fail");
//! assert_eq!(2, faults.len());
//!
//! // Each identifier resolves to a 3-digit code through the lookup table,
//! // and a frame pairs the fault count with one code.
//! let table = CodeTable::builtin();
//! let code = table.lookup(faults[0].as_str());
//! let frame = Frame::fault(faults.len(), &code);
//! assert_eq!("2201", frame.text());
//! ```
//!
//! [`faultseg`]: https://docs.rs/faultseg
//! [`StatusDisplay`]: trait.StatusDisplay.html
#![doc(html_root_url = "https://docs.rs/faultseg-core/0.1.0")]
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

mod code;
mod display;
mod fault;
mod frame;

pub use self::code::{CodeTable, FaultCode};
pub use self::display::StatusDisplay;
pub use self::fault::{parse_fault_list, FaultId};
pub use self::frame::{count_digit, Frame, FRAME_WIDTH};

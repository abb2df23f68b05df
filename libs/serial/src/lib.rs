//! Serial backend for driving 4-digit seven-segment display modules.
//!
//! For the full registry + render-loop machinery you likely want to use the
//! high-level API in the [`faultseg`] crate instead; it re-exports this crate
//! as `faultseg::serial`.
//!
//! [`SerialDisplay`] implements the
//! [`StatusDisplay`](faultseg_core::StatusDisplay) capability over any
//! [`serial_core::SerialPort`], speaking the ASCII protocol used by common
//! serial seven-segment modules (SparkFun Serial 7-Segment and compatible
//! boards): printable characters map straight to digit positions, `0x76`
//! clears and homes the cursor, and `0x77` drives the decimal/colon LEDs.
//!
//! # Examples
//!
//! ```no_run
//! use faultseg_core::StatusDisplay;
//! use faultseg_serial::SerialDisplay;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! #
//! let port = serial::open("/dev/ttyUSB0")?;
//! let mut display = SerialDisplay::try_new(port)?;
//! display.print("0000")?;
//! #
//! # Ok(()) }
//! ```
//!
//! [`faultseg`]: https://docs.rs/faultseg
//! [`SerialDisplay`]: struct.SerialDisplay.html
#![doc(html_root_url = "https://docs.rs/faultseg-serial/0.1.0")]
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

mod errors;
mod serial_display;
mod serial_port;

pub use self::errors::SerialError;
pub use self::serial_display::SerialDisplay;
pub use self::serial_port::configure_port;

//! Simulated and recording displays for testing fault-status rotations.
//!
//! For the basic task of showing live fault codes, you likely want to use the
//! high-level API in the [`faultseg`] crate instead.
//!
//! This crate isn't directly related to controlling a real display, but
//! provides backends for working without one: [`VirtualDisplay`] is a
//! general-purpose recording mock for assertions in tests, and
//! [`ConsoleDisplay`] draws seven-segment glyph art in the terminal so the
//! rotation can be watched on a development machine.
//!
//! # Examples
//!
//! ```
//! use faultseg_core::StatusDisplay;
//! use faultseg_testing::VirtualDisplay;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! #
//! let mut display = VirtualDisplay::new();
//! display.print("2---")?;
//! display.print("2201")?;
//! assert_eq!(["2---", "2201"], display.frames());
//! #
//! # Ok(()) }
//! ```
//!
//! [`faultseg`]: https://docs.rs/faultseg
//! [`VirtualDisplay`]: struct.VirtualDisplay.html
//! [`ConsoleDisplay`]: struct.ConsoleDisplay.html
#![doc(html_root_url = "https://docs.rs/faultseg-testing/0.1.0")]
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

mod console_display;
mod virtual_display;

pub use self::console_display::ConsoleDisplay;
pub use self::virtual_display::VirtualDisplay;

pub use faultseg_core::StatusDisplay;

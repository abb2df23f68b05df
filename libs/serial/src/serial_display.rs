use std::error::Error;
use std::io::Write;
use std::thread;
use std::time::Duration;

use log::debug;
use serial_core::prelude::*;

use faultseg_core::StatusDisplay;

use crate::errors::SerialError;
use crate::serial_port;

/// Clears the display and homes the cursor to the first digit.
const CMD_CLEAR: u8 = 0x76;

/// Selects which decimal/colon LEDs are lit; followed by one bitmask byte.
const CMD_DECIMAL_CONTROL: u8 = 0x77;

/// Bit in the decimal-control mask that lights the colon.
const COLON_BIT: u8 = 0x10;

/// An implementation of [`StatusDisplay`] that drives a serial seven-segment
/// display module.
///
/// Frames are logged using the [`log`] crate for debugging purposes.
/// Consuming binaries typically use the [`env_logger`] crate and can be run
/// with the `RUST_LOG=debug` environment variable to watch the frames go by.
///
/// # Examples
///
/// ```no_run
/// use faultseg_core::StatusDisplay;
/// use faultseg_serial::SerialDisplay;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// #
/// let port = serial::open("/dev/ttyUSB0")?;
/// let mut display = SerialDisplay::try_new(port)?;
/// display.print("2201")?;
/// display.set_indicator(false)?;
/// #
/// # Ok(()) }
/// ```
///
/// [`log`]: https://crates.io/crates/log
/// [`env_logger`]: https://crates.io/crates/env_logger
#[derive(Debug, Eq, PartialEq, Hash)]
pub struct SerialDisplay<P: SerialPort> {
    port: P,
}

impl<P: SerialPort> SerialDisplay<P> {
    /// Creates a new `SerialDisplay` that communicates over the specified
    /// serial port.
    ///
    /// # Errors
    ///
    /// Returns [`SerialError::Configuration`] if the serial port cannot be
    /// configured.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use faultseg_serial::SerialDisplay;
    /// #
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// #
    /// let port = serial::open("COM3")?;
    /// let display = SerialDisplay::try_new(port)?;
    /// #
    /// # Ok(()) }
    /// ```
    pub fn try_new(mut port: P) -> Result<Self, SerialError> {
        serial_port::configure_port(&mut port, Duration::from_secs(5))?;
        Ok(SerialDisplay { port })
    }

    /// Returns a reference to the underlying serial port.
    pub fn port(&self) -> &P {
        &self.port
    }

    fn send(&mut self, bytes: &[u8]) -> Result<(), SerialError> {
        self.port.write_all(bytes)?;
        self.port.flush()?;
        Ok(())
    }
}

impl<P: SerialPort> StatusDisplay for SerialDisplay<P> {
    /// Shows the text by clearing the module and streaming the four frame
    /// characters.
    fn print(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        debug!("Display frame: {}", text);

        let mut bytes = Vec::with_capacity(1 + text.len());
        bytes.push(CMD_CLEAR);
        bytes.extend_from_slice(text.as_bytes());
        self.send(&bytes)?;
        Ok(())
    }

    /// Shows or hides the colon via the module's decimal-control command.
    fn set_indicator(&mut self, on: bool) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mask = if on { COLON_BIT } else { 0x00 };
        self.send(&[CMD_DECIMAL_CONTROL, mask])?;
        Ok(())
    }

    /// Parks the calling thread until process exit.
    ///
    /// The module renders frames as they arrive over the wire and has no
    /// event loop of its own to drive.
    fn run(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        loop {
            thread::park();
        }
    }
}

use std::time::Duration;

use serial_core as serial;
use serial_core::prelude::*;

use crate::errors::SerialError;

/// Configures the given serial port appropriately for a serial seven-segment
/// display module.
///
/// Specifically, the modules expect 8N1 format at 9600 baud. Also sets the
/// provided timeout value.
///
/// # Errors
///
/// Returns [`SerialError::Configuration`] if the underlying serial port
/// reports an error.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// #
/// let mut port = serial::open("/dev/ttyUSB0")?;
/// faultseg_serial::configure_port(&mut port, Duration::from_secs(5))?;
/// // Now ready for communication with a display (8N1 9600 baud).
/// #
/// # Ok(()) }
/// ```
pub fn configure_port<P: SerialPort>(port: &mut P, timeout: Duration) -> Result<(), SerialError> {
    port.reconfigure(&|settings| {
        settings.set_baud_rate(serial::Baud9600)?;
        settings.set_char_size(serial::Bits8);
        settings.set_parity(serial::ParityNone);
        settings.set_stop_bits(serial::Stop1);
        settings.set_flow_control(serial::FlowNone);
        Ok(())
    })?;
    port.set_timeout(timeout)?;
    Ok(())
}

use thiserror::Error;

/// Errors related to driving a display over a serial port.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SerialError {
    /// The serial port could not be configured.
    #[error("Couldn't configure serial port")]
    Configuration {
        /// The underlying serial error.
        #[from]
        source: serial_core::Error,
    },

    /// Writing to the display failed.
    #[error("Failed writing to the display")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

use std::error::Error;
use std::fmt::{self, Debug, Formatter};

/// Abstraction over a 4-digit segmented display that can render frames.
///
/// The render loop in [`faultseg`] drives whichever implementation it is
/// handed: `SerialDisplay` from [`faultseg-serial`] for a real display
/// module, or `VirtualDisplay`/`ConsoleDisplay` from [`faultseg-testing`]
/// when there is no hardware on the bench. Implement it yourself to target
/// anything else that can show four characters and a colon.
///
/// # Examples
///
/// Implementing a custom backend:
///
/// ```
/// use faultseg_core::StatusDisplay;
///
/// #[derive(Debug, Default)]
/// struct LastFrameDisplay {
///     text: String,
///     colon: bool,
/// }
///
/// impl StatusDisplay for LastFrameDisplay {
///     fn print(&mut self, text: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
///         self.text = text.to_owned();
///         Ok(())
///     }
///
///     fn set_indicator(&mut self, on: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
///         self.colon = on;
///         Ok(())
///     }
///
///     fn run(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
///         Ok(()) // Nothing to drive; frames were already shown by print.
///     }
/// }
///
/// let mut display = LastFrameDisplay::default();
/// display.print("2201").unwrap();
/// assert_eq!("2201", display.text);
/// ```
///
/// [`faultseg`]: https://docs.rs/faultseg
/// [`faultseg-serial`]: https://docs.rs/faultseg-serial
/// [`faultseg-testing`]: https://docs.rs/faultseg-testing
pub trait StatusDisplay {
    /// Shows the given text on the display.
    ///
    /// Callers normalize the text to exactly
    /// [`FRAME_WIDTH`](crate::FRAME_WIDTH) characters before invoking (see
    /// [`Frame`](crate::Frame)); implementations may rely on that.
    fn print(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Shows or hides the colon indicator between the middle digits.
    ///
    /// The current rotation always passes `false`; the method is part of the
    /// contract so backends expose the whole display surface.
    fn set_indicator(&mut self, on: bool) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Blocks the calling thread and drives the backend's own event
    /// processing.
    ///
    /// Invoked once by the process entry point, not by the render loop.
    /// Backends that render directly in [`print`](Self::print) and have no
    /// event loop of their own either park the thread until process exit
    /// (hardware, console) or return immediately (mocks); each
    /// implementation documents which.
    fn run(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;
}

// Provide a Debug representation so types that contain trait objects can derive Debug.
impl Debug for dyn StatusDisplay {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<StatusDisplay trait>")
    }
}

use log::debug;

use faultseg_core::StatusDisplay;

/// Mock implementation of a display that records everything shown on it.
///
/// Useful when writing tests in order to verify the exact frame sequence a
/// rotation produced. Frames are logged using the [`log`] crate for
/// debugging purposes. Consuming binaries typically use the [`env_logger`]
/// crate and can be run with the `RUST_LOG=debug` environment variable to
/// watch the frames go by.
///
/// # Examples
///
/// ```
/// use faultseg_core::StatusDisplay;
/// use faultseg_testing::VirtualDisplay;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
/// #
/// let mut display = VirtualDisplay::new();
/// display.print("1---")?;
/// display.set_indicator(false)?;
/// display.print("1999")?;
/// display.set_indicator(false)?;
///
/// assert_eq!(["1---", "1999"], display.frames());
/// assert!(!display.indicator());
/// #
/// # Ok(()) }
/// ```
///
/// [`log`]: https://crates.io/crates/log
/// [`env_logger`]: https://crates.io/crates/env_logger
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VirtualDisplay {
    frames: Vec<String>,
    indicators: Vec<bool>,
}

impl VirtualDisplay {
    /// Creates a new `VirtualDisplay` with nothing shown yet.
    pub fn new() -> Self {
        VirtualDisplay::default()
    }

    /// Returns every frame printed so far, oldest first.
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// Returns the most recently printed frame, if any.
    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    /// Returns every indicator state set so far, oldest first.
    pub fn indicators(&self) -> &[bool] {
        &self.indicators
    }

    /// Returns the current indicator state (off until first set).
    pub fn indicator(&self) -> bool {
        self.indicators.last().copied().unwrap_or(false)
    }
}

impl StatusDisplay for VirtualDisplay {
    /// Records the frame text.
    fn print(&mut self, text: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        debug!("Virtual display frame: {}", text);
        self.frames.push(text.to_owned());
        Ok(())
    }

    /// Records the indicator state.
    fn set_indicator(&mut self, on: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.indicators.push(on);
        Ok(())
    }

    /// Returns immediately; a mock has no event loop to drive.
    fn run(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(())
    }
}

use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::time::Duration;

use log::debug;
use thiserror::Error;

use faultseg_core::{CodeTable, Frame, StatusDisplay};

use crate::registry::FaultRegistry;

/// Errors related to the [`DisplayCycler`]'s render loop.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CyclerError {
    /// The display backend failed to render a frame.
    #[error("Display failed to render a frame")]
    Display {
        /// The underlying display error.
        #[from]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// How long the render loop holds each kind of frame.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use faultseg::CycleTiming;
///
/// let timing = CycleTiming::default();
/// assert_eq!(Duration::from_millis(300), timing.loop_start_interval);
/// assert_eq!(Duration::from_secs(1), timing.error_interval);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CycleTiming {
    /// Hold for the rotation-restart frame; kept short so it reads as a
    /// blink between rotations.
    pub loop_start_interval: Duration,

    /// Hold for each fault-code frame and for the no-faults frame.
    pub error_interval: Duration,
}

impl CycleTiming {
    /// Creates a timing configuration from the two holds.
    pub fn new(loop_start_interval: Duration, error_interval: Duration) -> Self {
        CycleTiming {
            loop_start_interval,
            error_interval,
        }
    }
}

impl Default for CycleTiming {
    fn default() -> Self {
        CycleTiming::new(Duration::from_millis(300), Duration::from_secs(1))
    }
}

/// The render loop: turns registry snapshots into a repeating rotation of
/// frames on a [`StatusDisplay`].
///
/// Each rotation starts from a fresh [`FaultRegistry::snapshot`] and renders
/// deterministically from it: with no faults, the `0000` frame; otherwise
/// the count-plus-`---` restart frame followed by one count-plus-code frame
/// per fault, in list order. A list change is picked up at the next rotation
/// start (within one `loop_start_interval + n * error_interval` bound),
/// never mid-rotation.
///
/// # Examples
///
/// ```
/// use std::sync::{mpsc, Arc};
/// use std::thread;
/// use std::time::Duration;
///
/// use faultseg::core::parse_fault_list;
/// use faultseg::{CycleTiming, DisplayCycler, FaultRegistry};
/// use faultseg_testing::VirtualDisplay;
///
/// let registry = Arc::new(FaultRegistry::new());
/// registry.replace(&parse_fault_list("lidar_fail, gps_fail"));
///
/// // Millisecond holds keep the example fast; real deployments use the
/// // defaults.
/// let timing = CycleTiming::new(Duration::from_millis(1), Duration::from_millis(1));
/// let mut cycler = DisplayCycler::new(Arc::clone(&registry), VirtualDisplay::new())
///     .with_timing(timing);
///
/// let (stop, stop_rx) = mpsc::channel();
/// let worker = thread::spawn(move || {
///     let result = cycler.run(stop_rx);
///     (cycler, result)
/// });
///
/// thread::sleep(Duration::from_millis(50));
/// stop.send(()).unwrap();
/// let (cycler, result) = worker.join().unwrap();
/// result.unwrap();
///
/// assert_eq!("2---", cycler.display().frames()[0]);
/// assert_eq!("2201", cycler.display().frames()[1]);
/// assert_eq!("2207", cycler.display().frames()[2]);
/// ```
#[derive(Debug)]
pub struct DisplayCycler<D: StatusDisplay> {
    registry: Arc<FaultRegistry>,
    display: D,
    codes: CodeTable,
    timing: CycleTiming,
}

impl<D: StatusDisplay> DisplayCycler<D> {
    /// Creates a new `DisplayCycler` reading from the given registry and
    /// rendering to the given display, with [`CodeTable::builtin`] and
    /// default timing.
    pub fn new(registry: Arc<FaultRegistry>, display: D) -> Self {
        DisplayCycler {
            registry,
            display,
            codes: CodeTable::builtin().clone(),
            timing: CycleTiming::default(),
        }
    }

    /// Replaces the lookup table used to resolve fault identifiers.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    ///
    /// use faultseg::{CodeTable, DisplayCycler, FaultRegistry};
    /// use faultseg_testing::VirtualDisplay;
    ///
    /// let registry = Arc::new(FaultRegistry::new());
    /// let cycler = DisplayCycler::new(registry, VirtualDisplay::new())
    ///     .with_codes(CodeTable::new([("motor_fail", "301")]));
    /// ```
    pub fn with_codes(mut self, codes: CodeTable) -> Self {
        self.codes = codes;
        self
    }

    /// Replaces the frame-hold configuration.
    pub fn with_timing(mut self, timing: CycleTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Returns a reference to the display being driven.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Consumes the cycler and returns the display.
    pub fn into_display(self) -> D {
        self.display
    }

    /// Runs the rotation until a stop signal arrives.
    ///
    /// Each inter-frame hold waits on `stop`, so the loop winds down at the
    /// next hold point after a signal, never mid-frame. Dropping every
    /// sender stops the loop too. There is no other exit besides a display
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns [`CyclerError::Display`] if the display backend fails to
    /// render a frame. Rendering is fire-and-forget: nothing is retried, and
    /// the failure is the process wiring's to handle.
    pub fn run(&mut self, stop: Receiver<()>) -> Result<(), CyclerError> {
        loop {
            let faults = self.registry.snapshot();

            if faults.is_empty() {
                self.render(&Frame::no_faults())?;
                if wait(&stop, self.timing.error_interval) {
                    return Ok(());
                }
                continue;
            }

            self.render(&Frame::cycle_start(faults.len()))?;
            if wait(&stop, self.timing.loop_start_interval) {
                return Ok(());
            }

            // The rotation finishes with the snapshot it started from; an
            // update lands at the next registry read above.
            for fault in &faults {
                let code = self.codes.lookup(fault.as_str());
                self.render(&Frame::fault(faults.len(), &code))?;
                if wait(&stop, self.timing.error_interval) {
                    return Ok(());
                }
            }
        }
    }

    fn render(&mut self, frame: &Frame) -> Result<(), CyclerError> {
        debug!("Frame: {}", frame);
        self.display.print(frame.text())?;
        self.display.set_indicator(frame.indicator())?;
        Ok(())
    }
}

/// Holds the current frame for `hold`, returning `true` if a stop was
/// requested (a signal arrived, or every sender is gone).
fn wait(stop: &Receiver<()>, hold: Duration) -> bool {
    match stop.recv_timeout(hold) {
        Err(RecvTimeoutError::Timeout) => false,
        Ok(()) | Err(RecvTimeoutError::Disconnected) => true,
    }
}

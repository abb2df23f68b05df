use std::fmt::{self, Display, Formatter};
use std::iter;

use crate::code::FaultCode;

/// Width of the display in characters.
pub const FRAME_WIDTH: usize = 4;

/// Marker shown in the code positions when a rotation restarts.
const CYCLE_MARKER: &str = "---";

/// A single frame of display output: exactly [`FRAME_WIDTH`] characters of
/// text plus the state of the colon indicator.
///
/// Frames are transient. The render loop builds one, hands it to a
/// [`StatusDisplay`](crate::StatusDisplay), and moves on; nothing persists
/// them. Text is normalized on construction the way the display itself
/// justifies input: left-padded with `'0'` to the display width, keeping the
/// last four characters of anything longer.
///
/// # Examples
///
/// ```
/// use faultseg_core::Frame;
///
/// assert_eq!("0042", Frame::new("42").text());
/// assert_eq!("2345", Frame::new("12345").text());
/// assert!(!Frame::new("42").indicator());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    text: String,
    indicator: bool,
}

impl Frame {
    /// Creates a frame from arbitrary text, normalizing it to the display
    /// width. The indicator is off.
    ///
    /// # Examples
    ///
    /// ```
    /// use faultseg_core::Frame;
    ///
    /// assert_eq!("0000", Frame::new("").text());
    /// assert_eq!("2---", Frame::new("2---").text());
    /// ```
    pub fn new(text: &str) -> Self {
        Frame {
            text: right_justify(text, FRAME_WIDTH, '0'),
            indicator: false,
        }
    }

    /// The frame shown while no faults are active.
    ///
    /// # Examples
    ///
    /// ```
    /// use faultseg_core::Frame;
    ///
    /// assert_eq!("0000", Frame::no_faults().text());
    /// ```
    pub fn no_faults() -> Self {
        Frame::new("0000")
    }

    /// The frame shown briefly when the rotation restarts: the fault count
    /// digit followed by `---`.
    ///
    /// # Examples
    ///
    /// ```
    /// use faultseg_core::Frame;
    ///
    /// assert_eq!("3---", Frame::cycle_start(3).text());
    /// ```
    pub fn cycle_start(count: usize) -> Self {
        Frame::new(&format!("{}{}", count_digit(count), CYCLE_MARKER))
    }

    /// The frame shown for one active fault: the fault count digit followed
    /// by the fault's 3-digit code.
    ///
    /// # Examples
    ///
    /// ```
    /// use faultseg_core::{FaultCode, Frame};
    ///
    /// assert_eq!("2207", Frame::fault(2, &FaultCode::new("207")).text());
    /// ```
    pub fn fault(count: usize, code: &FaultCode) -> Self {
        Frame::new(&format!("{}{}", count_digit(count), code))
    }

    /// Returns the frame's text, always exactly [`FRAME_WIDTH`] characters.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns whether the colon indicator is lit for this frame.
    ///
    /// The current rotation never lights it; the accessor exists so renderers
    /// can be driven entirely from the frame.
    pub fn indicator(&self) -> bool {
        self.indicator
    }
}

impl Display for Frame {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Returns the single digit used in the count position for `count` active
/// faults.
///
/// Counts of ten or more keep only their leading digit; the display has
/// exactly one count position, so a list of 12 faults shows `'1'`.
///
/// # Examples
///
/// ```
/// use faultseg_core::count_digit;
///
/// assert_eq!('2', count_digit(2));
/// assert_eq!('1', count_digit(10));
/// ```
pub fn count_digit(count: usize) -> char {
    let mut n = count;
    while n >= 10 {
        n /= 10;
    }
    (b'0' + n as u8) as char
}

/// Left-pads `text` with `fill` to `width` characters, keeping the last
/// `width` characters of anything longer.
pub(crate) fn right_justify(text: &str, width: usize, fill: char) -> String {
    let count = text.chars().count();
    if count >= width {
        text.chars().skip(count - width).collect()
    } else {
        iter::repeat(fill).take(width - count).chain(text.chars()).collect()
    }
}

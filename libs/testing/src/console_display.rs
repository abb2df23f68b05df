use std::error::Error;
use std::io::{self, Write};
use std::thread;

use log::debug;

use faultseg_core::StatusDisplay;

/// Simulator for a 4-digit seven-segment display that draws glyph art in the
/// terminal.
///
/// Each frame is rendered as three rows of segments with a colon column
/// between the middle digits, redrawn in place so the terminal behaves like
/// a little display window. Handy for watching a rotation on a development
/// machine with no display module attached.
///
/// A frame of `2201` looks like:
///
/// ```text
///  _   _    _
///  _|  _|   | |   |
/// |_  |_    |_|   |
/// ```
///
/// Characters without a segment pattern (anything outside `0`-`9`, `-`, and
/// space) render as a blank cell.
///
/// # Examples
///
/// ```no_run
/// use faultseg_core::StatusDisplay;
/// use faultseg_testing::ConsoleDisplay;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
/// #
/// let mut display = ConsoleDisplay::new();
/// display.print("2201")?;
/// display.set_indicator(false)?;
/// #
/// # Ok(()) }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleDisplay {
    text: String,
    colon: bool,
    drawn: bool,
}

impl ConsoleDisplay {
    /// Creates a new `ConsoleDisplay` showing a blank display.
    pub fn new() -> Self {
        ConsoleDisplay {
            text: "    ".to_owned(),
            colon: false,
            drawn: false,
        }
    }

    fn draw(&mut self) -> io::Result<()> {
        let rows = render_rows(&self.text, self.colon);
        let mut out = io::stdout().lock();
        if self.drawn {
            // Move back up over the previous frame so we redraw in place.
            write!(out, "\x1b[{}A", rows.len())?;
        }
        for row in &rows {
            writeln!(out, "{}", row)?;
        }
        out.flush()?;
        self.drawn = true;
        Ok(())
    }
}

impl Default for ConsoleDisplay {
    fn default() -> Self {
        ConsoleDisplay::new()
    }
}

impl StatusDisplay for ConsoleDisplay {
    /// Draws the frame as segment art, replacing the previous frame.
    fn print(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        debug!("Console display frame: {}", text);
        self.text = text.to_owned();
        self.draw()?;
        Ok(())
    }

    /// Shows or hides the colon column, redrawing only on a change.
    fn set_indicator(&mut self, on: bool) -> Result<(), Box<dyn Error + Send + Sync>> {
        if self.colon != on {
            self.colon = on;
            self.draw()?;
        }
        Ok(())
    }

    /// Parks the calling thread until process exit, keeping the terminal
    /// "window" on screen; frames were already drawn by
    /// [`print`](StatusDisplay::print).
    fn run(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        loop {
            thread::park();
        }
    }
}

/// Returns the segments lit for a displayable character, named `a`-`g` in
/// the conventional clockwise-from-top order.
fn segments(ch: char) -> &'static str {
    match ch {
        '0' => "abcdef",
        '1' => "bc",
        '2' => "abged",
        '3' => "abgcd",
        '4' => "fgbc",
        '5' => "afgcd",
        '6' => "afgcde",
        '7' => "abc",
        '8' => "abcdefg",
        '9' => "abcfgd",
        '-' => "g",
        _ => "",
    }
}

/// Renders display text into three rows of segment art.
fn render_rows(text: &str, colon: bool) -> [String; 3] {
    let mut rows = [String::new(), String::new(), String::new()];
    for (i, ch) in text.chars().enumerate() {
        if i == 2 {
            // Colon column between the middle digits.
            let dot = if colon { '.' } else { ' ' };
            rows[0].push_str("  ");
            rows[1].push(dot);
            rows[1].push(' ');
            rows[2].push(dot);
            rows[2].push(' ');
        }
        let segs = segments(ch);
        let seg = |name: char, glyph: char| if segs.contains(name) { glyph } else { ' ' };
        rows[0].push(' ');
        rows[0].push(seg('a', '_'));
        rows[0].push(' ');
        rows[0].push(' ');
        rows[1].push(seg('f', '|'));
        rows[1].push(seg('g', '_'));
        rows[1].push(seg('b', '|'));
        rows[1].push(' ');
        rows[2].push(seg('e', '|'));
        rows[2].push(seg('d', '_'));
        rows[2].push(seg('c', '|'));
        rows[2].push(' ');
    }
    rows
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case('0', "abcdef")]
    #[test_case('4', "fgbc")]
    #[test_case('8', "abcdefg")]
    #[test_case('-', "g")]
    #[test_case(' ', "" ; "space renders blank")]
    #[test_case('x', "" ; "unknown renders blank")]
    fn segment_patterns(ch: char, expected: &str) {
        assert_eq!(expected, segments(ch));
    }

    #[test]
    fn renders_zero_cell() {
        let rows = render_rows("0", false);
        assert_eq!(" _  ", rows[0]);
        assert_eq!("| | ", rows[1]);
        assert_eq!("|_| ", rows[2]);
    }

    #[test]
    fn renders_two_with_marker() {
        let rows = render_rows("2-", false);
        assert_eq!(" _      ", rows[0]);
        assert_eq!(" _|  _  ", rows[1]);
        assert_eq!("|_      ", rows[2]);
    }

    #[test]
    fn renders_colon_dots_when_lit() {
        let off = render_rows("0000", false);
        let on = render_rows("0000", true);
        assert_eq!(off[0], on[0]);
        assert!(!off[1].contains('.'));
        assert!(on[1].contains('.'));
        assert!(on[2].contains('.'));
    }

    #[test]
    fn rows_share_a_width() {
        let rows = render_rows("8888", true);
        assert_eq!(rows[0].len(), rows[1].len());
        assert_eq!(rows[1].len(), rows[2].len());
    }
}

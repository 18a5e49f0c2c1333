//! Console line assembly with echo and backspace handling.

use heapless::String;

use super::parser::MAX_COMMAND_LENGTH;

const BACKSPACE: u8 = 0x08;
const DELETE: u8 = 0x7F;

/// Line reader sized so that every complete line passes the length check.
pub type CommandLineReader = LineReader<{ MAX_COMMAND_LENGTH - 1 }>;

/// Result of feeding one byte to a [`LineReader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineEvent {
    /// Byte was consumed without output.
    Ignored,
    /// Printable character appended; echo it back.
    Echo(char),
    /// Last character removed; echo `"\x08 \x08"`.
    Erase,
    /// Line terminator received; fetch it with [`LineReader::take_line`].
    Complete,
    /// Buffer full; the character was dropped.
    Overflow,
}

/// Accumulates console bytes into a line of at most `N` characters.
#[derive(Debug, Default)]
pub struct LineReader<const N: usize> {
    buffer: String<N>,
    complete: bool,
    after_cr: bool,
}

impl<const N: usize> LineReader<N> {
    /// Create an empty reader.
    pub const fn new() -> Self {
        Self {
            buffer: String::new(),
            complete: false,
            after_cr: false,
        }
    }

    /// Feed one received byte.
    ///
    /// `'\r'` and `'\n'` both end a line; the `'\n'` of a `"\r\n"` pair is
    /// swallowed. Non-printable bytes other than backspace are ignored.
    pub fn feed(&mut self, byte: u8) -> LineEvent {
        if self.complete {
            self.buffer.clear();
            self.complete = false;
        }
        let after_cr = core::mem::replace(&mut self.after_cr, byte == b'\r');

        match byte {
            b'\n' if after_cr => LineEvent::Ignored,
            b'\r' | b'\n' => {
                self.complete = true;
                LineEvent::Complete
            }
            BACKSPACE | DELETE => {
                if self.buffer.pop().is_some() {
                    LineEvent::Erase
                } else {
                    LineEvent::Ignored
                }
            }
            0x20..=0x7E => {
                let c = byte as char;
                if self.buffer.push(c).is_ok() {
                    LineEvent::Echo(c)
                } else {
                    LineEvent::Overflow
                }
            }
            _ => LineEvent::Ignored,
        }
    }

    /// Text accumulated so far.
    #[inline]
    pub fn line(&self) -> &str {
        self.buffer.as_str()
    }

    /// Take the completed line, leaving the reader empty.
    pub fn take_line(&mut self) -> String<N> {
        self.complete = false;
        core::mem::take(&mut self.buffer)
    }

    /// Discard any partial input.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.complete = false;
        self.after_cr = false;
    }
}

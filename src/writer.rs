use std::fmt::Write as _;
use std::io::Write as _;

use rgb::RGB8;

use crate::konst::NUM_PIXELS_X;

/// Maps the pixel buffer into the terminal: one truecolor background cell
/// per pixel, rows in strip order (index 0 is the top left pixel).
pub struct Writer {
    out: std::io::Stdout,
}

impl Writer {
    pub fn new() -> Result<Self, std::io::Error> {
        let mut out = std::io::stdout();
        out.write_all(b"\x1b[2J\x1b[?25l")?;
        out.flush()?;
        Ok(Self { out })
    }
}

impl Drop for Writer {
    fn drop(&mut self) {
        let _ = self.out.write_all(b"\x1b[0m\x1b[?25h\n");
        let _ = self.out.flush();
    }
}

impl smart_leds_trait::SmartLedsWrite for Writer {
    type Error = std::io::Error;
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        let mut frame = String::from("\x1b[H");

        for (position, color) in iterator.into_iter().enumerate() {
            let color = color.into();
            let _ = write!(frame, "\x1b[48;2;{};{};{}m  ", color.r, color.g, color.b);

            if (position + 1) % NUM_PIXELS_X == 0 {
                frame.push_str("\x1b[0m\r\n");
            }
        }

        self.out.write_all(frame.as_bytes())?;
        self.out.flush()
    }
}

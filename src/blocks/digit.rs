use crate::color::RGB8;
use crate::data::Buffer;
use crate::konst::NUM_PIXELS_X;

use super::line::Line;
use super::Block;

// Segment endpoints relative to the glyph origin (bottom left), glyphs are
// 3 cells wide and 5 cells tall.
//
//   -0-
//  5   1
//   -6-
//  4   2
//   -3-
const SEGMENTS: [((i32, i32), (i32, i32)); 7] = [
    ((0, 4), (2, 4)),
    ((2, 2), (2, 4)),
    ((2, 0), (2, 2)),
    ((0, 0), (2, 0)),
    ((0, 0), (0, 2)),
    ((0, 2), (0, 4)),
    ((0, 2), (2, 2)),
];

// Bit n set means segment n is lit.
const DIGIT_SEGMENTS: [u8; 10] = [
    0b0111111, // 0
    0b0000110, // 1
    0b1011011, // 2
    0b1001111, // 3
    0b1100110, // 4
    0b1101101, // 5
    0b1111101, // 6
    0b0000111, // 7
    0b1111111, // 8
    0b1100111, // 9
];

pub const DIGIT_WIDTH: i32 = 3;

pub struct Digit {
    origin: (i32, i32),
    value: u32,
    color: RGB8,
}

impl Digit {
    pub fn new(origin: (i32, i32), value: u32, color: RGB8) -> Self {
        Self {
            origin,
            value,
            color,
        }
    }
}

impl Block for Digit {
    fn render(&self, buffer: &mut Buffer) {
        let Some(segments) = DIGIT_SEGMENTS.get(self.value as usize) else {
            tracing::warn!(value = self.value, "Not a decimal digit");
            return;
        };

        let (x, y) = self.origin;
        for (segment, (start, end)) in SEGMENTS.iter().enumerate() {
            if segments & (1 << segment) != 0 {
                Line::new(
                    (x + start.0, y + start.1),
                    (x + end.0, y + end.1),
                    self.color,
                )
                .render(buffer);
            }
        }
    }
}

pub struct Number {
    origin: (i32, i32),
    value: u32,
    color: RGB8,
    gap: i32,
}

impl Number {
    pub fn new(origin: (i32, i32), value: u32, color: RGB8, gap: i32) -> Self {
        Self {
            origin,
            value,
            color,
            gap,
        }
    }

    fn count_digits(value: u32) -> i32 {
        value.checked_ilog10().map_or(1, |log| log as i32 + 1)
    }
}

impl Block for Number {
    fn render(&self, buffer: &mut Buffer) {
        let (x, y) = self.origin;
        let digits = Self::count_digits(self.value);
        let needed = digits * DIGIT_WIDTH + (digits - 1) * self.gap;

        if needed + x > NUM_PIXELS_X as i32 {
            tracing::warn!(value = self.value, x, "Number does not fit the grid");
            return;
        }

        if self.value == 0 {
            Digit::new((x, y), 0, self.color).render(buffer);
            return;
        }

        // Digits are laid out right to left from the least significant one.
        let mut pos = needed - DIGIT_WIDTH;
        let mut value = self.value;
        while value > 0 {
            Digit::new((x + pos, y), value % 10, self.color).render(buffer);
            value /= 10;
            pos -= DIGIT_WIDTH + self.gap;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;

    fn lit(buffer: &Buffer) -> Vec<(usize, usize)> {
        let mut pixels = Vec::new();
        for x in 0..crate::konst::NUM_PIXELS_X {
            for y in 0..crate::konst::NUM_PIXELS_Y {
                if buffer.get(x, y) != color::OFF {
                    pixels.push((x, y));
                }
            }
        }
        pixels
    }

    fn segment_cells(segment: usize) -> Vec<(usize, usize)> {
        let (start, end) = SEGMENTS[segment];
        let mut cells = Vec::new();
        for x in start.0..=end.0 {
            for y in start.1..=end.1 {
                cells.push((x as usize, y as usize));
            }
        }
        cells
    }

    fn glyph_cells(segments: &[usize]) -> Vec<(usize, usize)> {
        let mut cells: Vec<_> = segments.iter().flat_map(|s| segment_cells(*s)).collect();
        cells.sort_unstable();
        cells.dedup();
        cells
    }

    #[test]
    fn test_digit_eight_lights_all_segments() {
        let mut buffer = Buffer::default();
        Digit::new((0, 0), 8, color::RED).render(&mut buffer);
        assert_eq!(lit(&buffer), glyph_cells(&[0, 1, 2, 3, 4, 5, 6]));
    }

    #[test]
    fn test_digit_one_lights_right_column() {
        let mut buffer = Buffer::default();
        Digit::new((0, 0), 1, color::RED).render(&mut buffer);
        assert_eq!(lit(&buffer), glyph_cells(&[1, 2]));
    }

    #[test]
    fn test_digit_segment_table() {
        let table: [&[usize]; 10] = [
            &[0, 1, 2, 3, 4, 5],
            &[1, 2],
            &[0, 1, 3, 4, 6],
            &[0, 1, 2, 3, 6],
            &[1, 2, 5, 6],
            &[0, 2, 3, 5, 6],
            &[0, 2, 3, 4, 5, 6],
            &[0, 1, 2],
            &[0, 1, 2, 3, 4, 5, 6],
            &[0, 1, 2, 5, 6],
        ];

        for (value, segments) in table.iter().enumerate() {
            let mut buffer = Buffer::default();
            Digit::new((0, 0), value as u32, color::WHITE).render(&mut buffer);
            assert_eq!(lit(&buffer), glyph_cells(segments), "digit {value}");
        }
    }

    #[test]
    fn test_invalid_digit_is_noop() {
        let mut buffer = Buffer::default();
        Digit::new((0, 0), 10, color::RED).render(&mut buffer);
        assert!(lit(&buffer).is_empty());
    }

    #[test]
    fn test_number_lays_out_right_to_left() {
        let mut expected = Buffer::default();
        Digit::new((0, 0), 4, color::GREEN).render(&mut expected);
        Digit::new((4, 0), 2, color::GREEN).render(&mut expected);

        let mut buffer = Buffer::default();
        Number::new((0, 0), 42, color::GREEN, 1).render(&mut buffer);

        assert_eq!(lit(&buffer), lit(&expected));
    }

    #[test]
    fn test_number_zero() {
        let mut expected = Buffer::default();
        Digit::new((2, 2), 0, color::BLUE).render(&mut expected);

        let mut buffer = Buffer::default();
        Number::new((2, 2), 0, color::BLUE, 1).render(&mut buffer);

        assert_eq!(lit(&buffer), lit(&expected));
    }

    #[test]
    fn test_too_wide_number_is_rejected() {
        let mut buffer = Buffer::default();
        Number::new((10, 0), 5, color::RED, 1).render(&mut buffer);
        assert!(lit(&buffer).is_empty());

        Number::new((2, 0), 123, color::RED, 1).render(&mut buffer);
        assert!(lit(&buffer).is_empty());
    }

    #[test]
    fn test_widest_fitting_number() {
        // Three digits with gap 1 need exactly 11 cells.
        let mut buffer = Buffer::default();
        Number::new((1, 0), 123, color::RED, 1).render(&mut buffer);
        assert!(!lit(&buffer).is_empty());
    }
}

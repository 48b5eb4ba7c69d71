//! Built-in 3x5 bitmap font
//!
//! Enough for titles, scores and short hints: digits, A-Z (lowercase is
//! drawn as uppercase) and a little punctuation. Anything else shows as `?`.

use glam::Vec2;

/// Glyph columns/rows in font pixels
pub const GLYPH_COLS: u32 = 3;
pub const GLYPH_ROWS: usize = 5;
/// Size of one font pixel in board units
pub const PIXEL: f32 = 2.0;
/// Horizontal distance between glyph origins (glyph + one pixel gap)
pub const ADVANCE: f32 = (GLYPH_COLS as f32 + 1.0) * PIXEL;
/// Height of a line of text
pub const LINE_HEIGHT: f32 = GLYPH_ROWS as f32 * PIXEL;

/// Rows top to bottom, bit 2 is the leftmost column
type Glyph = [u8; GLYPH_ROWS];

const UNKNOWN: Glyph = [0b111, 0b001, 0b010, 0b000, 0b010];

pub fn glyph(c: char) -> Glyph {
    match c.to_ascii_uppercase() {
        ' ' => [0; GLYPH_ROWS],
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b011, 0b100, 0b100, 0b100, 0b011],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b110, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b110, 0b100, 0b100],
        'G' => [0b011, 0b100, 0b101, 0b101, 0b011],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => [0b001, 0b001, 0b001, 0b101, 0b010],
        'K' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'N' => [0b110, 0b101, 0b101, 0b101, 0b101],
        'O' => [0b010, 0b101, 0b101, 0b101, 0b010],
        'P' => [0b110, 0b101, 0b110, 0b100, 0b100],
        'Q' => [0b010, 0b101, 0b101, 0b110, 0b011],
        'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        'S' => [0b011, 0b100, 0b010, 0b001, 0b110],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'W' => [0b101, 0b101, 0b111, 0b111, 0b101],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '!' => [0b010, 0b010, 0b010, 0b000, 0b010],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        _ => UNKNOWN,
    }
}

/// Width of a rendered line, without the trailing gap
pub fn text_width(text: &str) -> f32 {
    let n = text.chars().count();
    if n == 0 {
        0.0
    } else {
        n as f32 * ADVANCE - PIXEL
    }
}

/// Rectangles (pos, size) that make up `text` drawn at `origin`.
///
/// Adjacent lit pixels in a glyph row are merged into one rectangle.
pub fn text_rects(text: &str, origin: Vec2) -> Vec<(Vec2, Vec2)> {
    let mut rects = Vec::new();
    for (i, c) in text.chars().enumerate() {
        let glyph_x = origin.x + i as f32 * ADVANCE;
        for (row, &bits) in glyph(c).iter().enumerate() {
            let y = origin.y + row as f32 * PIXEL;
            let mut col = 0;
            while col < GLYPH_COLS {
                if bits & (1 << (GLYPH_COLS - 1 - col)) == 0 {
                    col += 1;
                    continue;
                }
                let start = col;
                while col < GLYPH_COLS && bits & (1 << (GLYPH_COLS - 1 - col)) != 0 {
                    col += 1;
                }
                rects.push((
                    Vec2::new(glyph_x + start as f32 * PIXEL, y),
                    Vec2::new((col - start) as f32 * PIXEL, PIXEL),
                ));
            }
        }
    }
    rects
}

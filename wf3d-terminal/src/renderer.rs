/// Character-grid drawing surface for terminal output
use crossterm::{
    cursor,
    style::{Color as TermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use wf3d_core::{Color, DrawSurface, PixelPos};

/// Character columns per drawing pixel; terminal cells are roughly twice as tall as wide.
pub const CELL_ASPECT: i32 = 2;

/// Draws lines as slope characters and labels as plain text in a fixed grid.
pub struct AsciiCanvas {
    columns: usize,
    rows: usize,
    background: Color,
    char_buffer: Vec<char>,
    color_buffer: Vec<Color>,
}

impl AsciiCanvas {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let columns = width as usize * CELL_ASPECT as usize;
        let rows = height as usize;
        let size = columns * rows;
        Self {
            columns,
            rows,
            background,
            char_buffer: vec![' '; size],
            color_buffer: vec![background; size],
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell(&self, column: i32, row: i32) -> Option<(char, Color)> {
        self.index(column, row)
            .map(|idx| (self.char_buffer[idx], self.color_buffer[idx]))
    }

    /// Grid contents as one string per row, trailing spaces included.
    pub fn lines(&self) -> Vec<String> {
        self.char_buffer
            .chunks(self.columns.max(1))
            .take(self.rows)
            .map(|row| row.iter().collect())
            .collect()
    }

    fn index(&self, column: i32, row: i32) -> Option<usize> {
        if column < 0 || row < 0 {
            return None;
        }
        let (column, row) = (column as usize, row as usize);
        (column < self.columns && row < self.rows).then(|| row * self.columns + column)
    }

    fn put(&mut self, column: i32, row: i32, c: char, color: Color) {
        if let Some(idx) = self.index(column, row) {
            self.char_buffer[idx] = c;
            self.color_buffer[idx] = color;
        }
    }

    /// Queue the grid starting at terminal row `top`.
    pub fn draw<W: Write>(&self, writer: &mut W, top: u16) -> std::io::Result<()> {
        writer.queue(SetBackgroundColor(term_color(self.background)))?;
        for (row, line) in self.char_buffer.chunks(self.columns.max(1)).enumerate() {
            writer.queue(cursor::MoveTo(0, top.saturating_add(row as u16)))?;
            for (column, c) in line.iter().enumerate() {
                let color = self.color_buffer[row * self.columns + column];
                writer.queue(SetForegroundColor(term_color(color)))?;
                writer.queue(Print(*c))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl DrawSurface for AsciiCanvas {
    fn blank(width: u32, height: u32, background: Color) -> Self {
        Self::new(width, height, background)
    }

    // Stroke width has no meaning at cell resolution.
    fn draw_line(&mut self, from: PixelPos, to: PixelPos, color: Color, _width: u32) {
        let (x0, y0) = (from.x * CELL_ASPECT, from.y);
        let (x1, y1) = (to.x * CELL_ASPECT, to.y);
        let glyph = slope_glyph(x1 - x0, y1 - y0);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.put(x, y, glyph, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn draw_text(&mut self, at: PixelPos, text: &str, color: Color) {
        let left = at.x * CELL_ASPECT;
        for (i, c) in text.chars().enumerate() {
            self.put(left + i as i32, at.y, c, color);
        }
    }
}

/// Pick a character that follows a segment's direction in cell space.
fn slope_glyph(dx: i32, dy: i32) -> char {
    let (ax, ay) = (dx.abs(), dy.abs());
    if ay * 2 <= ax {
        '-'
    } else if ax * 2 <= ay {
        '|'
    } else if (dx > 0) == (dy > 0) {
        // Screen y grows downward.
        '\\'
    } else {
        '/'
    }
}

fn term_color(color: Color) -> TermColor {
    TermColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

//! Terminal renderer
//!
//! Rasterizes the playfield into a grid of character cells, one cell per
//! 8x16 pixels (640x480 becomes 80x30), then writes the grid out with
//! crossterm. Nothing here touches game logic.

use std::io::{self, Write};

use crossterm::{
    QueueableCommand, cursor,
    style::{self, Attribute, Color, Print},
};
use glam::Vec2;

use super::{Rect, Renderer, Rgb, Sprite, TextStyle, Visual};

/// Pixels per cell horizontally
pub const CELL_WIDTH: f32 = 8.0;
/// Pixels per cell vertically
pub const CELL_HEIGHT: f32 = 16.0;

// ── Sprite palette ────────────────────────────────────────────────────────────

const APPLE_GLYPH: char = '@';
const APPLE_COLOR: Rgb = Rgb::new(220, 20, 20);
const BOMB_GLYPH: char = '#';
const BOMB_COLOR: Rgb = Rgb::new(40, 40, 40);
const PLAYER_GLYPHS: [char; 4] = ['o', 'O', '0', 'O'];
const PLAYER_COLOR: Rgb = Rgb::new(90, 50, 20);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    fg: Rgb,
    bg: Rgb,
    bold: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: super::TEXT,
            bg: Rgb::new(0, 0, 0),
            bold: false,
        }
    }
}

/// Cell-grid renderer presented through crossterm
pub struct TerminalRenderer {
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
    /// Terminal position of the grid's top-left cell
    origin: (u16, u16),
}

impl TerminalRenderer {
    /// Grid covering a `width` x `height` pixel playfield
    pub fn new(width: f32, height: f32) -> Self {
        let cols = (width / CELL_WIDTH).ceil().max(1.0) as u16;
        let rows = (height / CELL_HEIGHT).ceil().max(1.0) as u16;
        Self {
            cols,
            rows,
            cells: vec![Cell::default(); cols as usize * rows as usize],
            origin: (0, 0),
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Move the grid inside the terminal
    pub fn set_origin(&mut self, col: u16, row: u16) {
        self.origin = (col, row);
    }

    /// Characters of one row, for diagnostics and tests
    pub fn row_text(&self, row: u16) -> String {
        self.row(row).iter().map(|c| c.ch).collect()
    }

    /// Background color of a cell
    pub fn background_at(&self, col: u16, row: u16) -> Option<Rgb> {
        self.index(col as i32, row as i32).map(|i| self.cells[i].bg)
    }

    fn row(&self, row: u16) -> &[Cell] {
        let start = (row.min(self.rows.saturating_sub(1)) as usize) * self.cols as usize;
        &self.cells[start..start + self.cols as usize]
    }

    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }

    /// Cells touched by a pixel rectangle, clipped to the grid
    fn cell_span(&self, rect: &Rect) -> (i32, i32, i32, i32) {
        let c0 = (rect.min.x / CELL_WIDTH).floor() as i32;
        let r0 = (rect.min.y / CELL_HEIGHT).floor() as i32;
        let c1 = (rect.max.x / CELL_WIDTH).ceil() as i32;
        let r1 = (rect.max.y / CELL_HEIGHT).ceil() as i32;
        (
            c0.max(0),
            r0.max(0),
            c1.min(self.cols as i32),
            r1.min(self.rows as i32),
        )
    }

    /// Write the grid to the terminal
    pub fn present<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut current: Option<(Rgb, Rgb, bool)> = None;
        let mut run = String::new();

        for row in 0..self.rows {
            out.queue(cursor::MoveTo(self.origin.0, self.origin.1 + row))?;
            for cell in self.row(row) {
                let look = (cell.fg, cell.bg, cell.bold);
                if current != Some(look) {
                    if !run.is_empty() {
                        out.queue(Print(&run))?;
                        run.clear();
                    }
                    queue_look(out, look)?;
                    current = Some(look);
                }
                run.push(cell.ch);
            }
            if !run.is_empty() {
                out.queue(Print(&run))?;
                run.clear();
            }
        }

        out.queue(style::SetAttribute(Attribute::Reset))?;
        out.queue(style::ResetColor)?;
        out.flush()
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn queue_look<W: Write>(out: &mut W, (fg, bg, bold): (Rgb, Rgb, bool)) -> io::Result<()> {
    out.queue(style::SetAttribute(if bold {
        Attribute::Bold
    } else {
        Attribute::NormalIntensity
    }))?;
    out.queue(style::SetForegroundColor(to_color(fg)))?;
    out.queue(style::SetBackgroundColor(to_color(bg)))?;
    Ok(())
}

impl Renderer for TerminalRenderer {
    fn begin_frame(&mut self) {
        self.cells.fill(Cell::default());
    }

    fn draw_box(&mut self, rect: Rect, color: Rgb) {
        let (c0, r0, c1, r1) = self.cell_span(&rect);
        for row in r0..r1 {
            for col in c0..c1 {
                if let Some(i) = self.index(col, row) {
                    self.cells[i] = Cell {
                        ch: ' ',
                        fg: color,
                        bg: color,
                        bold: false,
                    };
                }
            }
        }
    }

    fn draw_sprite(&mut self, sprite: Sprite, pos: Vec2) {
        let rect = Rect {
            min: pos,
            max: pos + sprite.size,
        };
        let (glyph, color, round) = match sprite.visual {
            Visual::Player { frame } => (PLAYER_GLYPHS[frame % PLAYER_GLYPHS.len()], PLAYER_COLOR, false),
            Visual::Apple => (APPLE_GLYPH, APPLE_COLOR, true),
            Visual::Bomb => (BOMB_GLYPH, BOMB_COLOR, true),
        };

        let center = pos + sprite.size / 2.0;
        let half = sprite.size / 2.0;
        let (c0, r0, c1, r1) = self.cell_span(&rect);
        for row in r0..r1 {
            for col in c0..c1 {
                // Items only fill cells whose centre is inside the inscribed ellipse
                if round {
                    let cell_center = Vec2::new(
                        (col as f32 + 0.5) * CELL_WIDTH,
                        (row as f32 + 0.5) * CELL_HEIGHT,
                    );
                    let d = (cell_center - center) / half.max(Vec2::ONE);
                    if d.length_squared() > 1.0 {
                        continue;
                    }
                }
                if let Some(i) = self.index(col, row) {
                    let cell = &mut self.cells[i];
                    cell.ch = glyph;
                    cell.fg = color;
                    cell.bold = true;
                }
            }
        }
    }

    fn draw_text(&mut self, pos: Vec2, text: &str, style: TextStyle) {
        let row = (pos.y / CELL_HEIGHT).floor() as i32;
        let start = (pos.x / CELL_WIDTH).floor() as i32;
        for (offset, ch) in text.chars().enumerate() {
            if let Some(i) = self.index(start + offset as i32, row) {
                let cell = &mut self.cells[i];
                cell.ch = ch;
                cell.fg = style.color;
                cell.bold = style.bold;
            }
        }
    }
}

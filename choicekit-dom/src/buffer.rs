//! Cell grid the renderer draws into and the terminal diffs.

use crate::types::{Rgb, TextStyle};

/// One terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub symbol: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    /// Right half of a double-width glyph; never written to the terminal.
    pub continuation: bool,
}

impl Cell {
    /// A blank cell over `bg`.
    pub const fn blank(bg: Rgb) -> Self {
        Self {
            symbol: ' ',
            fg: Rgb::WHITE,
            bg,
            style: TextStyle::new(),
            continuation: false,
        }
    }

    pub fn new(symbol: char) -> Self {
        Self {
            symbol,
            ..Self::default()
        }
    }

    pub fn fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    pub fn bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(Rgb::BLACK)
    }
}

/// Row-major grid of cells. Out-of-bounds access is ignored.
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    background: Rgb,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_background(width, height, Rgb::BLACK)
    }

    /// A buffer that clears to `background` instead of black.
    pub fn with_background(width: u16, height: u16, background: Rgb) -> Self {
        Self {
            width,
            height,
            background,
            cells: vec![Cell::blank(background); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        self.offset(x, y).map(|i| &self.cells[i])
    }

    pub fn cell_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.offset(x, y).map(move |i| &mut self.cells[i])
    }

    pub fn put(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.cell_mut(x, y) {
            *slot = cell;
        }
    }

    /// Symbols of row `y` with trailing blanks trimmed.
    pub fn row_text(&self, y: u16) -> String {
        let row: String = (0..self.width)
            .filter_map(|x| self.cell(x, y))
            .filter(|cell| !cell.continuation)
            .map(|cell| cell.symbol)
            .collect();
        row.trim_end().to_string()
    }

    /// Cells that differ from `previous`, with their coordinates.
    ///
    /// Buffers of different sizes are compared cell by cell over the shared
    /// prefix; callers repaint fully after a resize.
    pub fn changes<'a>(&'a self, previous: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        let width = self.width.max(1) as usize;
        self.cells
            .iter()
            .zip(&previous.cells)
            .enumerate()
            .filter(|(_, (now, before))| now != before)
            .map(move |(i, (cell, _))| ((i % width) as u16, (i / width) as u16, cell))
    }

    /// Blank every cell to the buffer's background.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::blank(self.background));
    }

    pub fn set_background(&mut self, background: Rgb) {
        self.background = background;
    }
}

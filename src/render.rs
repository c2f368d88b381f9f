//! The boundary between the engine and whatever draws it.

use crate::{CellState, Grid, GridError, GridWindow};
use std::io;

/// Read-only snapshot of one generation
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    grid: &'a Grid,
    generation: u64,
}
impl<'a> Frame<'a> {
    #[inline]
    pub fn new(grid: &'a Grid, generation: u64) -> Self {
        Self { grid, generation }
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Result<CellState, GridError> {
        self.grid.cell(row, col)
    }
    #[inline]
    pub fn alive_count(&self) -> usize {
        self.grid.alive_count()
    }
    #[inline]
    pub fn grid(&self) -> &'a Grid {
        self.grid
    }
    #[inline]
    pub fn window(&self, top_left: crate::Coord, rows: usize, cols: usize) -> GridWindow<'a> {
        GridWindow::new(self.grid, top_left, rows, cols)
    }
}

/// Something that can present frames, one generation at a time
pub trait Renderer {
    fn render(&mut self, frame: &Frame<'_>) -> io::Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        (**self).render(frame)
    }
}

/// Discards every frame
#[derive(Debug, Default)]
pub struct NullRenderer;
impl Renderer for NullRenderer {
    #[inline]
    fn render(&mut self, _frame: &Frame<'_>) -> io::Result<()> {
        Ok(())
    }
}

use crossterm::{cursor, queue, terminal};
use crate::Screen;
use lifegrid::{Frame, GridWindow, Renderer};
use std::io::{self, Write};

/// Prints each generation as a block of text, clearing the terminal first
pub struct TextRenderer<W: Write> {
    out: W,
    clear: bool,
}
impl TextRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout(), true)
    }
}
impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, clear: bool) -> Self {
        Self { out, clear }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        if self.clear {
            queue!(
                self.out,
                terminal::Clear(terminal::ClearType::All),
                cursor::MoveTo(0, 0)
            )?;
        }
        writeln!(self.out, "Generation: {}", frame.generation())?;
        writeln!(self.out, "{}", GridWindow::full(frame.grid()))?;
        self.out.flush()
    }
}

impl<W: Write> Screen for TextRenderer<W> {}

#[cfg(test)]
mod tests {
    use super::*;
    use lifegrid::{CellState, Grid};

    #[test]
    fn prints_generation_and_cells() {
        let mut grid = Grid::new(2, 3).expect("valid grid");
        grid.set(0, 1, CellState::Alive).expect("in range");
        grid.set(1, 2, CellState::Alive).expect("in range");

        let mut renderer = TextRenderer::new(Vec::new(), false);
        renderer.render(&Frame::new(&grid, 4)).expect("render");
        let text = String::from_utf8(renderer.into_inner()).expect("utf8");

        assert_eq!(text, "Generation: 4\n █ \n  █\n");
    }
}

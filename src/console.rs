use crossterm::{
    cursor,
    event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue, terminal,
};
use crate::Screen;
use lifegrid::{Coord, Frame, Renderer};
use std::io::{self, Write};
use tracing::warn;

pub enum ConsoleCommand {
    Exit,
    Handled,
}

/// Full-screen renderer drawing into the terminal's alternate screen
pub struct ConsoleRenderer {
    top_left: Coord,
    report: String,
}
impl ConsoleRenderer {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self {
            top_left: Coord::default(),
            report: String::new(),
        })
    }

    pub fn poll_events(&mut self) -> io::Result<Option<ConsoleCommand>> {
        // make sure an event is present for us to take
        if !event::poll(std::time::Duration::from_secs(0))? {
            return Ok(None);
        }

        let command = match event::read()? {
            // CTRL+C
            event::Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            })
            | event::Event::Key(KeyEvent {
                code: KeyCode::Char('q') | KeyCode::Esc,
                ..
            }) => ConsoleCommand::Exit,
            // arrows pan the view
            event::Event::Key(KeyEvent { code, .. }) => {
                let tl = &mut self.top_left;
                match code {
                    KeyCode::Up => tl.row = tl.row.saturating_sub(1),
                    KeyCode::Down => tl.row = tl.row.saturating_add(1),
                    KeyCode::Left => tl.col = tl.col.saturating_sub(1),
                    KeyCode::Right => tl.col = tl.col.saturating_add(1),
                    _ => {}
                }
                ConsoleCommand::Handled
            }
            _ => ConsoleCommand::Handled,
        };
        Ok(Some(command))
    }

    /// Blocks until any key is pressed
    pub fn wait_for_key(&mut self) -> io::Result<()> {
        loop {
            if let event::Event::Key(KeyEvent {
                kind: KeyEventKind::Press,
                ..
            }) = event::read()?
            {
                return Ok(());
            }
        }
    }
}

impl Screen for ConsoleRenderer {
    fn should_stop(&mut self) -> io::Result<bool> {
        while let Some(cmd) = self.poll_events()? {
            if let ConsoleCommand::Exit = cmd {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn set_report(&mut self, report: String) {
        self.report = report;
    }
}

impl Renderer for ConsoleRenderer {
    fn render(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let footer = rows.saturating_sub(1);
        let window = frame.window(self.top_left, usize::from(footer), usize::from(cols));

        let mut stdout = io::stdout().lock();
        queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
        for cell in window.alive() {
            // the window never exceeds the terminal, so these fit in u16
            let (Ok(x), Ok(y)) = (u16::try_from(cell.col), u16::try_from(cell.row)) else {
                continue;
            };
            queue!(stdout, cursor::MoveTo(x, y))?;
            stdout.write_all("█".as_bytes())?;
        }

        // write footer
        queue!(stdout, cursor::MoveTo(0, footer))?;
        write!(
            stdout,
            "gen:{} alive:{} {}",
            frame.generation(),
            frame.alive_count(),
            self.report
        )?;

        stdout.flush()
    }
}

impl Drop for ConsoleRenderer {
    fn drop(&mut self) {
        if let Err(err) = terminal::disable_raw_mode() {
            warn!(%err, "failed to disable raw mode");
        }
        if let Err(err) = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen) {
            warn!(%err, "failed to restore terminal");
        }
    }
}

//! The interactive terminal frontend.

use crate::record::Recorder;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
        MouseButton, MouseEventKind,
    },
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use rlifesim_lib::{Command, Config, Seed, Simulation, State};
use std::{
    error::Error,
    io::{self, Stdout, Write},
    time::{Duration, Instant},
};

/// Cells are drawn two terminal columns wide, which makes them roughly
/// square and lets the mouse land between cell boundaries.
const CELL_WIDTH: u16 = 2;

/// What a living cell looks like on screen.
const ALIVE_CELL: &str = "██";
/// What a dead cell looks like on screen.
const DEAD_CELL: &str = "  ";

/// Puts the terminal into raw mode on creation and restores it on
/// drop, so the terminal also recovers when the frontend bails out
/// with an error.
struct Screen;

impl Screen {
    fn enter(stdout: &mut Stdout) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, Hide)?;
        Ok(Self)
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, DisableMouseCapture, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// The state of the frontend.
struct Tui {
    sim: Simulation,
    config: Config,
    recorder: Option<Recorder>,
    stdout: Stdout,
    quit: bool,
}

impl Tui {
    /// The part of the grid that fits on screen, as (rows, columns).
    ///
    /// One line is reserved at the top for the status bar and one at
    /// the bottom for the key hints; a grid larger than the rest of
    /// the terminal is clipped at its top-left corner.
    fn viewport(&self) -> (usize, usize) {
        let (cols, rows) = terminal::size().unwrap_or((80, 24));
        let size = self.sim.grid().size();
        let view_rows = rows.saturating_sub(2) as usize;
        let view_cols = (cols / CELL_WIDTH) as usize;
        (view_rows.min(size), view_cols.min(size))
    }

    /// Redraws the whole screen.
    fn draw(&mut self) -> io::Result<()> {
        let (view_rows, view_cols) = self.viewport();
        let grid = self.sim.grid();
        queue!(
            self.stdout,
            Clear(ClearType::All),
            MoveTo(0, 0),
            Print(format!(
                "Gen: {}  Cells: {}  Size: {}",
                self.sim.generation(),
                grid.population(),
                grid.size(),
            ))
        )?;
        for row in 0..view_rows {
            let mut line = String::with_capacity(view_cols * CELL_WIDTH as usize);
            for col in 0..view_cols {
                line.push_str(match grid.get((row as isize, col as isize)) {
                    State::Alive => ALIVE_CELL,
                    State::Dead => DEAD_CELL,
                });
            }
            queue!(self.stdout, MoveTo(0, row as u16 + 1), Print(line))?;
        }
        let status = if self.sim.is_paused() {
            "Paused. [space] resume  [n] step  [click] toggle  [r] random  [c] clear  [q] quit"
        } else {
            "Running. [space] pause  [click] toggle  [r] random  [c] clear  [q] quit"
        };
        let (_, rows) = terminal::size().unwrap_or((80, 24));
        queue!(
            self.stdout,
            MoveTo(0, rows.saturating_sub(1)),
            Print(status)
        )?;
        self.stdout.flush()
    }

    /// Steps one generation and records it if a recorder is attached.
    fn advance(&mut self) -> io::Result<()> {
        self.sim.step();
        if let Some(recorder) = &mut self.recorder {
            recorder.record(self.sim.grid())?;
        }
        Ok(())
    }

    /// Replaces the world, keeping the configured size and density.
    fn reseed(&mut self, seed: Seed) -> Result<(), Box<dyn Error>> {
        let grid = self.config.clone().set_seed(seed).grid()?;
        self.sim.reset(grid)?;
        Ok(())
    }

    /// Handles one input event.
    fn handle(&mut self, event: Event) -> Result<(), Box<dyn Error>> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.quit = true;
                }
                KeyCode::Char(' ') => self.sim.dispatch(Command::TogglePause),
                KeyCode::Char('n') => {
                    if self.sim.is_paused() {
                        self.advance()?;
                    }
                }
                KeyCode::Char('r') => self.reseed(Seed::Random)?,
                KeyCode::Char('c') => self.reseed(Seed::Empty)?,
                _ => (),
            },
            Event::Mouse(mouse) => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                    let (view_rows, view_cols) = self.viewport();
                    let row = f64::from(mouse.row) - 1.0;
                    let col = f64::from(mouse.column) / f64::from(CELL_WIDTH);
                    if row >= 0.0 && row < view_rows as f64 && col < view_cols as f64 {
                        self.sim.dispatch(Command::ToggleCell { row, col });
                    }
                }
            }
            _ => (),
        }
        Ok(())
    }
}

/// Runs the simulation under the terminal UI.
///
/// Steps on a fixed cadence while running; while paused, blocks on
/// input and only steps on request. Input is polled ahead of every
/// step, so commands keep arriving at any interval, including zero.
/// Restores the terminal before returning and prints the final grid
/// to stdout.
pub(crate) fn simulate_with_tui(
    sim: Simulation,
    config: Config,
    interval: Duration,
    recorder: Option<Recorder>,
) -> Result<(), Box<dyn Error>> {
    let mut stdout = io::stdout();
    let screen = Screen::enter(&mut stdout)?;
    let mut tui = Tui {
        sim,
        config,
        recorder,
        stdout,
        quit: false,
    };

    let mut deadline = Instant::now() + interval;
    tui.draw()?;
    while !tui.quit {
        if tui.sim.is_paused() {
            tui.handle(event::read()?)?;
        } else {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if event::poll(timeout)? {
                tui.handle(event::read()?)?;
            }
            if !tui.quit && !tui.sim.is_paused() && Instant::now() >= deadline {
                tui.advance()?;
                deadline = Instant::now() + interval;
            }
        }
        tui.draw()?;
    }

    drop(screen);
    println!("{}", tui.sim.grid());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, MouseEvent};
    use rlifesim_lib::Grid;

    fn new_tui(size: usize) -> Tui {
        Tui {
            sim: Simulation::new(Grid::new(size).unwrap()),
            config: Config::new(size),
            recorder: None,
            stdout: io::stdout(),
            quit: false,
        }
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn keys_drive_the_simulation() -> Result<(), Box<dyn Error>> {
        let mut tui = new_tui(10);
        tui.handle(key(KeyCode::Char(' ')))?;
        assert!(tui.sim.is_paused());
        tui.handle(key(KeyCode::Char('n')))?;
        assert_eq!(tui.sim.generation(), 1);
        tui.handle(key(KeyCode::Char(' ')))?;
        assert!(!tui.sim.is_paused());
        tui.handle(key(KeyCode::Char('q')))?;
        assert!(tui.quit);
        Ok(())
    }

    #[test]
    fn quit_keys() -> Result<(), Box<dyn Error>> {
        let mut tui = new_tui(10);
        tui.handle(key(KeyCode::Esc))?;
        assert!(tui.quit);

        let mut tui = new_tui(10);
        tui.handle(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )))?;
        assert!(tui.quit);

        // A plain `c` clears the grid instead of quitting.
        let mut tui = new_tui(10);
        tui.sim.toggle_cell(3.0, 3.0);
        tui.handle(key(KeyCode::Char('c')))?;
        assert!(!tui.quit);
        assert_eq!(tui.sim.grid().population(), 0);
        assert_eq!(tui.sim.generation(), 0);
        Ok(())
    }

    #[test]
    fn click_toggles_cell() -> Result<(), Box<dyn Error>> {
        let mut tui = new_tui(10);
        // Terminal column 5 is cell column 2; the status bar shifts
        // grid rows down by one.
        tui.handle(click(5, 3))?;
        assert_eq!(tui.sim.grid().get((2, 2)), State::Alive);
        tui.handle(click(5, 3))?;
        assert_eq!(tui.sim.grid().population(), 0);

        // A click on the status bar itself does not reach the grid.
        tui.handle(click(0, 0))?;
        assert_eq!(tui.sim.grid().population(), 0);
        Ok(())
    }
}

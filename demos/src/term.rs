//! Interactive terminal board using crossterm.
//!
//! Keys: arrows move the cursor, space taps, `w`/`s`/`e` pick the tap mode,
//! `f` finds, `r` resets, `+`/`-` grow or shrink the board, `q`/Esc quit.

use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{self, Attribute, Color as CtColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use gridfind_core::Point;
use gridfind_paths::Direction;
use log::debug;

use crate::board::{Board, CellKind, Mode};
use crate::render::{CELL_WIDTH, cell_text};

const HELP: &str = "arrows move | space tap | w/s/e mode | f find | r reset | +/- size | q quit";

/// An input mapped to a board action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Tap,
    SetMode(Mode),
    Find,
    Reset,
    Grow,
    Shrink,
    Quit,
}

/// Maps a crossterm [`KeyCode`] to a [`Command`].
pub fn command_for(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Left => Some(Command::Move(Direction::West)),
        KeyCode::Right => Some(Command::Move(Direction::East)),
        KeyCode::Up => Some(Command::Move(Direction::North)),
        KeyCode::Down => Some(Command::Move(Direction::South)),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Command::Tap),
        KeyCode::Char('w') => Some(Command::SetMode(Mode::Wall)),
        KeyCode::Char('s') => Some(Command::SetMode(Mode::Start)),
        KeyCode::Char('e') => Some(Command::SetMode(Mode::End)),
        KeyCode::Char('f') => Some(Command::Find),
        KeyCode::Char('r') => Some(Command::Reset),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Command::Grow),
        KeyCode::Char('-') => Some(Command::Shrink),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Board plus cursor and status line.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    cursor: Point,
    status: String,
}

impl Session {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            cursor: Point::ZERO,
            status: String::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Apply `cmd`. Returns `false` when the session should end.
    pub fn apply(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::Move(dir) => {
                let next = dir.step(self.cursor);
                if self.board.finder().size().contains(next) {
                    self.cursor = next;
                }
            }
            Command::Tap => {
                self.board.tap(self.cursor);
            }
            Command::SetMode(mode) => {
                self.board.set_mode(mode);
                self.status = format!("mode: {mode:?}");
            }
            Command::Find => {
                self.status = match self.board.find() {
                    Ok(steps) => format!("path found: {steps} steps"),
                    Err(notice) => notice.to_string(),
                };
            }
            Command::Reset => {
                self.board.reset();
                self.status.clear();
            }
            Command::Grow => self.resize_by(1),
            Command::Shrink => self.resize_by(-1),
            Command::Quit => return false,
        }
        true
    }

    fn resize_by(&mut self, delta: i32) {
        let (w, h) = (self.board.width() + delta, self.board.height() + delta);
        match self.board.resize(w, h) {
            Ok(()) => {
                self.cursor = Point::new(self.cursor.x.min(w - 1), self.cursor.y.min(h - 1));
                self.status = format!("board {w}x{h}");
            }
            Err(notice) => self.status = notice.to_string(),
        }
    }
}

/// Maps a cell kind to its background colour.
fn background(kind: CellKind) -> CtColor {
    match kind {
        CellKind::Empty => CtColor::Reset,
        CellKind::Wall => CtColor::Grey,
        CellKind::Start => CtColor::Green,
        CellKind::End => CtColor::Red,
        CellKind::Path => CtColor::Yellow,
    }
}

fn draw(out: &mut impl Write, session: &Session) -> io::Result<()> {
    queue!(out, terminal::Clear(ClearType::All))?;
    let board = session.board();
    for y in 0..board.height() {
        for x in 0..board.width() {
            let p = Point::new(x, y);
            let view = board.cell(p);
            queue!(
                out,
                cursor::MoveTo((x as usize * CELL_WIDTH) as u16, y as u16),
                SetForegroundColor(CtColor::Black),
                SetBackgroundColor(background(view.kind)),
            )?;
            if view.kind == CellKind::Empty {
                queue!(out, SetForegroundColor(CtColor::Reset))?;
            }
            if p == session.cursor() {
                queue!(out, style::SetAttribute(Attribute::Reverse))?;
            }
            write!(out, "{}", cell_text(view))?;
            queue!(out, style::SetAttribute(Attribute::Reset), style::ResetColor)?;
        }
    }
    let row = board.height() as u16;
    queue!(out, cursor::MoveTo(0, row + 1))?;
    write!(out, "{}", session.status())?;
    queue!(out, cursor::MoveTo(0, row + 2))?;
    write!(out, "{HELP}")?;
    out.flush()
}

/// Restores the terminal when dropped.
struct RawScreen;

impl RawScreen {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for RawScreen {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Run the interactive board until the user quits.
pub fn run(board: Board) -> io::Result<()> {
    let _screen = RawScreen::enter()?;
    let mut stdout = io::stdout();
    let mut session = Session::new(board);
    draw(&mut stdout, &session)?;

    loop {
        let Event::Key(KeyEvent { code, kind, .. }) = event::read()? else {
            continue;
        };
        if kind != KeyEventKind::Press {
            continue;
        }
        let Some(cmd) = command_for(code) else {
            continue;
        };
        debug!("command {cmd:?}");
        if !session.apply(cmd) {
            return Ok(());
        }
        draw(&mut stdout, &session)?;
    }
}

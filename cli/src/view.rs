use std::{
    fmt,
    io::{Stdout, Write},
};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Stylize},
    terminal::{Clear, ClearType},
    Command,
};
use twenty_48::{GameState, Renderer, Result, Snapshot};

const HELP: &str = "(W)Up (S)Down (A)Left (D)Right";
const HELP_CONTROL: &str = "     (R)Restart (Q)Exit";
const WIN: &str = "           YOU WIN!";
const GAME_OVER: &str = "           GAME OVER";

struct SnapshotCommand<'a> {
    snapshot: &'a Snapshot,
    state: GameState,
}

impl<'a> SnapshotCommand<'a> {
    fn write_frame(&self, f: &mut impl fmt::Write, colored: bool) -> fmt::Result {
        let s = self.snapshot;
        write!(f, "SCORE: {}\r\n", s.score)?;
        if s.high_score != 0 {
            write!(f, "HIGHSCORE: {}\r\n", s.high_score)?;
        }

        let width = s.cells.first().map_or(0, Vec::len);
        for row in s.cells.iter() {
            separator(f, width)?;
            print_row(f, row, colored)?;
            write!(f, "|\r\n")?;
        }
        separator(f, width)?;

        let status = match self.state {
            GameState::Win => WIN,
            GameState::Gameover => GAME_OVER,
            _ => HELP,
        };
        write!(f, "{status}\r\n{HELP_CONTROL}\r\n")
    }
}

impl<'a> Command for SnapshotCommand<'a> {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        self.write_frame(f, true)
    }

    // legacy consoles get the same frame without colour escapes
    #[cfg(windows)]
    fn execute_winapi(&self) -> std::io::Result<()> {
        let mut frame = String::new();
        self.write_frame(&mut frame, false)
            .map_err(|_| std::io::Error::other("failed to format frame"))?;
        let mut out = std::io::stdout();
        out.write_all(frame.as_bytes())?;
        out.flush()
    }
}

fn separator(f: &mut impl fmt::Write, width: usize) -> fmt::Result {
    write!(f, "+{}\r\n", "-----+".repeat(width))
}

fn styled(value: u64) -> impl fmt::Display {
    format!("{: ^5}", value).with(match value {
        2 => Color::White,
        4 => Color::Rgb {
            r: 255,
            g: 215,
            b: 0,
        }, // orange
        8 => Color::DarkYellow,
        16 => Color::Magenta,
        32 => Color::Green,
        64 => Color::Blue,
        128..=512 => Color::Cyan,
        1024.. => Color::Red,
        _ => Color::White,
    })
}

fn print_row(f: &mut impl fmt::Write, row: &[u64], colored: bool) -> fmt::Result {
    for &value in row.iter() {
        match value {
            0 => write!(f, "|{: ^5}", " ")?,
            v if colored => write!(f, "|{}", styled(v))?,
            v => write!(f, "|{: ^5}", v)?,
        }
    }
    Ok(())
}

/// Redraws the whole board on every frame.
pub struct Screen {
    out: Stdout,
}

impl Screen {
    pub fn new(out: Stdout) -> Self {
        Screen { out }
    }
}

impl Renderer for Screen {
    fn render(&mut self, snapshot: &Snapshot, state: GameState) -> Result<()> {
        queue!(
            self.out,
            Clear(ClearType::All),
            MoveTo(0, 0),
            SnapshotCommand { snapshot, state }
        )?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crossterm::Command;
    use twenty_48::{GameState, Snapshot};

    use super::SnapshotCommand;

    fn snapshot(high_score: u64) -> Snapshot {
        Snapshot {
            cells: vec![vec![0, 2], vec![0, 0]],
            score: 12,
            high_score,
            won: false,
            over: false,
        }
    }

    fn draw(snapshot: &Snapshot, state: GameState) -> String {
        let mut out = String::new();
        SnapshotCommand { snapshot, state }.write_ansi(&mut out).unwrap();
        out
    }

    #[test]
    fn draws_grid_and_help() {
        let out = draw(&snapshot(0), GameState::Game);
        assert!(out.starts_with("SCORE: 12\r\n+-----+-----+\r\n"));
        assert!(!out.contains("HIGHSCORE"));
        assert!(out.contains("|     |"));
        assert!(out.contains("(W)Up"));
        assert!(out.ends_with("(R)Restart (Q)Exit\r\n"));
    }

    #[test]
    fn shows_high_score_and_outcome() {
        let out = draw(&snapshot(40), GameState::Win);
        assert!(out.contains("HIGHSCORE: 40\r\n"));
        assert!(out.contains("YOU WIN!"));
        assert!(!out.contains("(W)Up"));

        let out = draw(&snapshot(40), GameState::Gameover);
        assert!(out.contains("GAME OVER"));
    }

    #[test]
    fn plain_frame_has_no_escapes() {
        let snap = snapshot(0);
        let mut out = String::new();
        SnapshotCommand {
            snapshot: &snap,
            state: GameState::Game,
        }
        .write_frame(&mut out, false)
        .unwrap();
        assert!(!out.contains('\x1b'));
        assert!(out.contains("|     |  2  |\r\n"));
        assert_eq!(out.lines().count(), draw(&snap, GameState::Game).lines().count());
    }
}

use std::io::{self, BufRead, Write};

use rand::prelude::*;
use sapper_core::*;

use crate::command::{Command, HELP};
use crate::render::render;
use crate::settings::parse_settings;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

/// Owns the single running engine and turns player commands into engine calls.
pub(crate) struct App {
    engine: BoardEngine,
    config: GameConfig,
    rng: SmallRng,
}

fn to_coords(row: i64, col: i64) -> Option<Coord2> {
    Some((Coord::try_from(row).ok()?, Coord::try_from(col).ok()?))
}

impl App {
    pub(crate) fn new(config: GameConfig, mut rng: SmallRng) -> Self {
        let engine = BoardEngine::new_game(config, RandomMineGenerator::new(rng.random()));
        Self {
            engine,
            config,
            rng,
        }
    }

    fn start_game(&mut self, config: GameConfig) {
        let seed = self.rng.random();
        log::info!(
            "Starting {}x{} game with {} mines, seed {}",
            config.rows(),
            config.cols(),
            config.mines(),
            seed
        );
        self.config = config;
        self.engine = BoardEngine::new_game(config, RandomMineGenerator::new(seed));
    }

    pub(crate) fn draw(&self, out: &mut impl Write) -> io::Result<()> {
        write!(
            out,
            "{}",
            render(&self.engine.snapshot(), self.engine.triggered_mine())
        )
    }

    pub(crate) fn handle(&mut self, command: Command, out: &mut impl Write) -> io::Result<Flow> {
        log::debug!("Command: {:?}", command);

        match command {
            Command::Reveal { row, col } => {
                let outcome = to_coords(row, col)
                    .map_or(RevealOutcome::NoChange, |coords| self.engine.reveal(coords));
                log::debug!("Reveal ({}, {}): {:?}", row, col, outcome);
                if outcome.has_update() {
                    self.draw(out)?;
                } else {
                    writeln!(out, "Nothing to reveal there.")?;
                }
            }
            Command::Flag { row, col } => {
                let outcome = to_coords(row, col)
                    .map_or(MarkOutcome::NoChange, |coords| self.engine.toggle_flag(coords));
                log::debug!("Flag ({}, {}): {:?}", row, col, outcome);
                if outcome.has_update() {
                    self.draw(out)?;
                } else {
                    writeln!(out, "Nothing to flag there.")?;
                }
            }
            Command::NewGame => {
                self.start_game(self.config);
                self.draw(out)?;
            }
            Command::Settings { rows, cols, mines } => match parse_settings(&rows, &cols, &mines) {
                Ok(config) => {
                    self.start_game(config);
                    self.draw(out)?;
                }
                Err(err) => {
                    log::warn!("Rejected settings {} {} {}: {:?}", rows, cols, mines, err);
                    writeln!(out, "{err}")?;
                }
            },
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    /// Reads commands line by line until `q` or end of input.
    pub(crate) fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
        self.draw(out)?;
        write!(out, "> ")?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            match line.parse::<Command>() {
                Ok(command) => {
                    if self.handle(command, out)? == Flow::Quit {
                        break;
                    }
                }
                Err(err) => writeln!(out, "{err}")?,
            }
            write!(out, "> ")?;
            out.flush()?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(size: Coord2, mines: &[Coord2]) -> App {
        let engine = BoardEngine::new(MineLayout::from_mine_coords(size, mines).unwrap());
        App {
            config: engine.config(),
            engine,
            rng: SmallRng::seed_from_u64(0),
        }
    }

    fn play(app: &mut App, script: &str) -> String {
        let mut out = Vec::new();
        app.run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn winning_session() {
        let mut app = app((1, 3), &[(0, 0)]);
        let out = play(&mut app, "f 0 0\nr 0 2\nq\n");

        assert!(out.contains("Mines: 0   Good Luck!"));
        assert!(out.contains("Mines: 0   Mines Cleared!\n  0 1 2\n0 F 1 .\n"));
        assert_eq!(app.engine.status(), GameStatus::Won);
    }

    #[test]
    fn losing_session_ignores_further_moves() {
        let mut app = app((2, 2), &[(1, 1)]);
        let out = play(&mut app, "r 1 1\nr 0 0\nf 0 1\n");

        assert!(out.contains("Game Over!"));
        assert!(out.contains("Nothing to reveal there."));
        assert!(out.contains("Nothing to flag there."));
        assert_eq!(app.engine.tiles_revealed(), 0);
    }

    #[test]
    fn out_of_range_moves_are_ignored() {
        let mut app = app((2, 2), &[(1, 1)]);
        let out = play(&mut app, "r -1 0\nr 0 300\nf 2 0\n");

        assert_eq!(out.matches("Nothing to").count(), 3);
        assert_eq!(app.engine.current_status().remaining_flags, 1);
    }

    #[test]
    fn invalid_settings_keep_current_game() {
        let mut app = app((2, 2), &[(1, 1)]);
        app.engine.reveal((0, 0));
        let before = app.engine.clone();

        let out = play(&mut app, "s 5 5 25\ns 4 four 2\n");

        assert!(out.contains("Invalid settings. Please ensure positive dimensions and a valid number of mines."));
        assert!(out.contains("Invalid input. Please enter numbers only."));
        assert_eq!(app.engine, before);
    }

    #[test]
    fn settings_start_a_new_game() {
        let mut app = app((2, 2), &[(1, 1)]);
        app.engine.reveal((1, 1));

        play(&mut app, "s 4 6 3\n");

        assert_eq!(app.engine.size(), (4, 6));
        assert_eq!(app.engine.total_mines(), 3);
        assert_eq!(app.engine.status(), GameStatus::InProgress);

        play(&mut app, "n\n");
        assert_eq!(app.config, GameConfig::new(4, 6, 3).unwrap());
        assert_eq!(app.engine.tiles_revealed(), 0);
    }

    #[test]
    fn reports_bad_input_and_help() {
        let mut app = app((2, 2), &[(1, 1)]);
        let out = play(&mut app, "\nxyzzy\nh\n");

        assert!(out.contains("Type a command"));
        assert!(out.contains("Unknown command `xyzzy`"));
        assert!(out.contains("s ROWS COLS MINES"));
    }
}

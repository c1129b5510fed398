//! Drives games over a line based text interface.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use minesweeper_core::*;
use rand::prelude::*;
use rand::rngs::SmallRng;

use crate::cli::Args;
use crate::command::{Command, SizeAnswer};
use crate::messages;

#[derive(Clone, Debug, PartialEq)]
pub struct SessionSettings {
    /// Fixed board dimension; the player is asked for one when `None`.
    pub size: Option<Coord>,
    pub mine_probability: f64,
    pub seed: u64,
    pub skip_intro: bool,
}

impl SessionSettings {
    pub fn from_args(args: &Args) -> Result<Self> {
        // validate up front so a bad flag fails before any prompt is shown
        GameConfig::new(args.size.unwrap_or(DEFAULT_DIM), args.mine_probability)
            .context("invalid game settings")?;

        Ok(Self {
            size: args.size,
            mine_probability: args.mine_probability,
            seed: args.seed.unwrap_or_else(rand::random),
            skip_intro: args.skip_intro,
        })
    }
}

/// How a single game was left.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameEnd {
    /// Won or lost, the player may replay.
    Finished,
    Quit,
}

pub struct Session<R, W> {
    input: R,
    output: W,
    settings: SessionSettings,
    rng: SmallRng,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, settings: SessionSettings) -> Self {
        let rng = SmallRng::seed_from_u64(settings.seed);
        Self {
            input,
            output,
            settings,
            rng,
        }
    }

    /// Plays games until the player quits or declines a replay.
    pub fn run(&mut self) -> Result<()> {
        if !self.settings.skip_intro {
            self.show_intro()?;
        }

        loop {
            let dim = match self.settings.size {
                Some(dim) => dim,
                None => self.ask_size()?,
            };
            let config = GameConfig::new(dim, self.settings.mine_probability)?;
            let board = Board::generate(config, self.rng.random());
            log::info!("Starting a {dim}x{dim} game");

            if self.play(board)? == GameEnd::Quit {
                return Ok(());
            }
            if !self.confirm(messages::REPLAY_PROMPT, messages::REPLAY_AGAIN)? {
                return Ok(());
            }
        }
    }

    /// Runs the command loop on `board` until the game is decided or the player quits.
    pub fn play(&mut self, mut board: Board) -> Result<GameEnd> {
        let dim = board.dim();
        let mut hints = HintBudget::for_dim(dim);

        writeln!(self.output, "{}", messages::SEPARATOR)?;
        writeln!(self.output, "{board}")?;
        if hints.remaining() > 0 {
            writeln!(
                self.output,
                "You have {} hint(s) for this game.\n",
                hints.remaining()
            )?;
        }

        loop {
            let Some(line) = self.read_line()? else {
                log::debug!("Input closed, leaving the game");
                writeln!(self.output, "{}", messages::BYE)?;
                return Ok(GameEnd::Quit);
            };

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    log::debug!("Rejected input {line:?}: {err}");
                    write!(self.output, "{}", messages::IMPROPER_COORD)?;
                    continue;
                }
            };

            match command {
                Command::Help => write!(self.output, "{}", messages::COMMAND_LIST)?,
                Command::Quit => {
                    writeln!(self.output, "{}", messages::BYE)?;
                    return Ok(GameEnd::Quit);
                }
                Command::Grid => writeln!(self.output, "\n{board}")?,
                Command::Symbols => write!(self.output, "{}", messages::SYMBOLS)?,
                Command::Hint => match hints.use_on(&mut board, &mut self.rng) {
                    None => write!(self.output, "{}", messages::NO_HINTS)?,
                    Some(Hint::Revealed(coords)) => {
                        let (x, y) = to_user_coords(dim, coords);
                        writeln!(
                            self.output,
                            "\nHint: {x},{y} is safe ({} hint(s) left).\n\n{board}",
                            hints.remaining()
                        )?;
                    }
                    Some(Hint::MinesShown) => {
                        writeln!(
                            self.output,
                            "\nNo safe squares are left, here are the mines.\n\n{board}"
                        )?;
                    }
                },
                Command::Flag(user) | Command::Unflag(user) => {
                    let Ok(coords) = from_user_coords(dim, user) else {
                        write!(self.output, "{}", messages::COORD_OUT_OF_RANGE)?;
                        continue;
                    };
                    board.set_flag(coords, matches!(command, Command::Flag(_)))?;
                    writeln!(self.output, "\n{board}")?;
                }
                Command::Reveal(user) => {
                    let Ok(coords) = from_user_coords(dim, user) else {
                        write!(self.output, "{}", messages::COORD_OUT_OF_RANGE)?;
                        continue;
                    };
                    if board.reveal(coords)? == RevealOutcome::MineHit {
                        board.reveal_all_mines();
                        let (x, y) = user;
                        writeln!(self.output, "\n{board}")?;
                        writeln!(self.output, "{x}, {y} had a bomb. Game over!\n")?;
                        self.show_results(&board)?;
                        return Ok(GameEnd::Finished);
                    }
                    writeln!(self.output, "\n{board}")?;
                }
            }

            if board.outcome() == GameOutcome::Won {
                writeln!(self.output, "Every safe square is revealed, you win!\n")?;
                self.show_results(&board)?;
                return Ok(GameEnd::Finished);
            }
        }
    }

    fn show_intro(&mut self) -> Result<()> {
        for text in [
            messages::FONT_CHECK,
            messages::HOW_TO_PLAY,
            messages::COMMAND_LIST,
        ] {
            self.prompt(text)?;
        }
        Ok(())
    }

    fn ask_size(&mut self) -> Result<Coord> {
        let mut answer = self.prompt(messages::SIZE_PROMPT)?;
        loop {
            let Some(text) = answer else {
                return Ok(DEFAULT_DIM);
            };

            answer = match SizeAnswer::classify(&text) {
                SizeAnswer::Default => return Ok(DEFAULT_DIM),
                SizeAnswer::Accept(size) => return Ok(size),
                SizeAnswer::TooSmall => self.prompt(messages::SIZE_TOO_SMALL)?,
                SizeAnswer::TooLarge => self.prompt(messages::SIZE_TOO_LARGE)?,
                SizeAnswer::ConfirmLarge(size) => {
                    if self.confirm_size(size, messages::CONFIRM_LARGE)? {
                        return Ok(size);
                    }
                    self.prompt(messages::SIZE_PROMPT)?
                }
                SizeAnswer::ConfirmHuge(size) => {
                    if self.confirm_size(size, messages::CONFIRM_HUGE)? {
                        return Ok(size);
                    }
                    self.prompt(messages::SIZE_PROMPT)?
                }
            };
        }
    }

    fn confirm_size(&mut self, size: Coord, question: &str) -> Result<bool> {
        let retry = format!(
            "\nI didn't understand that. Do you want to play with a grid size of \
             {size} by {size}? (Enter 'y' or 'n') "
        );
        self.confirm(question, &retry)
    }

    fn show_results(&mut self, board: &Board) -> Result<()> {
        let score = board.score();
        match score.percent_tenths() {
            None => writeln!(self.output, "{}\n", messages::ALL_MINES)?,
            Some(_) => writeln!(
                self.output,
                "You revealed {} out of {} bombless squares, earning you\na score of {score}.\n",
                score.revealed, score.total
            )?,
        }
        Ok(())
    }

    /// Asks a y/n question until answered; closed input counts as "n".
    fn confirm(&mut self, question: &str, retry: &str) -> Result<bool> {
        let mut answer = self.prompt(question)?;
        loop {
            match answer.map(|text| text.to_ascii_lowercase()).as_deref() {
                None | Some("n") => return Ok(false),
                Some("y") => return Ok(true),
                Some(_) => answer = self.prompt(retry)?,
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.read_line()
    }

    /// Next trimmed input line, `None` once the input is closed.
    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush().context("failed to flush output")?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        Ok((read > 0).then(|| line.trim().to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(size: Option<Coord>, mine_probability: f64) -> SessionSettings {
        SessionSettings {
            size,
            mine_probability,
            seed: 1,
            skip_intro: true,
        }
    }

    fn board(dim: Coord, mines: &[Coord2]) -> Board {
        Board::new(MineLayout::from_mine_coords(dim, mines).unwrap())
    }

    /// Plays `board` with scripted `input`, returning how it ended and everything printed.
    fn play(board: Board, input: &str) -> (GameEnd, String) {
        let mut session = Session::new(input.as_bytes(), Vec::new(), settings(None, 0.16));
        let end = session.play(board).unwrap();
        (end, String::from_utf8(session.output).unwrap())
    }

    #[test]
    fn single_reveal_cascade_wins() {
        let (end, output) = play(board(5, &[(4, 4)]), "1,5\n");

        assert_eq!(end, GameEnd::Finished);
        assert!(output.contains("you win!"));
        assert!(output.contains("You revealed 24 out of 24 bombless squares"));
        assert!(output.contains("a score of 100.0%."));
    }

    #[test]
    fn mine_hit_shows_every_mine() {
        let (end, output) = play(board(3, &[(0, 0), (2, 0)]), "1,3\n");

        assert_eq!(end, GameEnd::Finished);
        assert!(output.contains(" 3 |XX|  |XX| 3\n"));
        assert!(output.contains("1, 3 had a bomb. Game over!"));
        assert!(output.contains("You revealed 0 out of 7 bombless squares"));
        assert!(output.contains("a score of 0.0%."));
    }

    #[test]
    fn bad_input_is_reported_and_play_continues() {
        let (end, output) = play(board(3, &[(0, 0)]), "nonsense\n9,9\n1,2,3\n0,1\nquit\n");

        assert_eq!(end, GameEnd::Quit);
        assert_eq!(output.matches(messages::IMPROPER_COORD).count(), 2);
        assert_eq!(output.matches(messages::COORD_OUT_OF_RANGE).count(), 2);
        assert!(output.ends_with("Bye.\n"));
    }

    #[test]
    fn flag_and_unflag_use_bottom_up_rows() {
        let (_, output) = play(board(2, &[(0, 0)]), "flag 1,2\nunflag 1,2\nflag 2,1\nquit\n");

        assert!(output.contains(" 2 |* |  | 2\n"));
        assert!(output.contains(" 1 |  |* | 1\n"));
    }

    #[test]
    fn closed_input_quits() {
        let (end, output) = play(board(2, &[(0, 0)]), "");

        assert_eq!(end, GameEnd::Quit);
        assert!(output.ends_with("Bye.\n"));
    }

    #[test]
    fn hints_are_limited_by_board_size() {
        // the mine wall keeps any single reveal from winning
        let wall: Vec<Coord2> = (0..6).map(|row| (2, row)).collect();
        let (end, output) = play(board(6, &wall), "hint\nhint\nquit\n");

        assert_eq!(end, GameEnd::Quit);
        assert!(output.contains("You have 1 hint(s) for this game."));
        assert!(output.contains("is safe (0 hint(s) left)."));
        assert!(output.contains(messages::NO_HINTS));
    }

    #[test]
    fn board_full_of_mines_has_its_own_result() {
        let (end, output) = play(board(2, &[(0, 0), (1, 0), (0, 1), (1, 1)]), "2,2\n");

        assert_eq!(end, GameEnd::Finished);
        assert!(output.contains(messages::ALL_MINES));
        assert!(!output.contains("bombless"));
    }

    #[test]
    fn help_grid_and_symbols_do_not_change_the_board() {
        let (end, output) = play(board(2, &[(0, 0)]), "HELP\ngrid\nsymbols\nquit\n");

        assert_eq!(end, GameEnd::Quit);
        assert!(output.contains(messages::COMMAND_LIST));
        assert!(output.contains(messages::SYMBOLS));
        assert_eq!(output.matches(" 2 |  |  | 2\n").count(), 2);
    }

    #[test]
    fn size_prompt_confirms_large_and_rejects_trivial_sizes() {
        let mut cfg = settings(None, 0.16);
        cfg.skip_intro = false;
        let input = "\n\n\n30\nmaybe\nn\n1\n4\nquit\n";
        let mut session = Session::new(input.as_bytes(), Vec::new(), cfg);

        session.run().unwrap();

        let output = String::from_utf8(session.output).unwrap();
        assert!(output.contains(messages::FONT_CHECK));
        assert!(output.contains(messages::CONFIRM_LARGE));
        assert!(output.contains("grid size of 30 by 30"));
        assert!(output.contains(messages::SIZE_TOO_SMALL));
        assert!(output.contains("     1  2  3  4 \n"));
        assert!(output.ends_with("Bye.\n"));
    }

    #[test]
    fn replay_starts_a_new_game() {
        // no mines at all, so the first reveal always wins
        let cfg = settings(Some(2), f64::MIN_POSITIVE);
        let input = "1,1\ny\n2,2\nn\n";
        let mut session = Session::new(input.as_bytes(), Vec::new(), cfg);

        session.run().unwrap();

        let output = String::from_utf8(session.output).unwrap();
        assert_eq!(output.matches("You revealed 4 out of 4 bombless squares").count(), 2);
        assert_eq!(output.matches(messages::REPLAY_PROMPT).count(), 2);
        assert!(!output.contains(messages::SIZE_PROMPT));
    }

    #[test]
    fn same_seed_replays_same_board() {
        let input = "grid\nquit\n";
        let mut first = Session::new(input.as_bytes(), Vec::new(), settings(Some(8), 0.3));
        let mut second = Session::new(input.as_bytes(), Vec::new(), settings(Some(8), 0.3));

        first.run().unwrap();
        second.run().unwrap();

        assert_eq!(first.output, second.output);
    }
}

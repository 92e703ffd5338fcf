//! Terminal front end for the chain-reaction game.
//!
//! Reads `row col` pairs from stdin. `r` restarts, `q` quits.

use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};

use chain_reaction::{Board, GameMode, GameSession, MoveReport, Player, Position, COLS, ROWS};

/// Chain Reaction - capture the 5x5 board with cascading explosions
#[derive(Parser, Debug)]
#[command(name = "chain_duel")]
#[command(about = "Play chain reaction in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Who plays
    #[arg(short, long, value_enum, default_value_t = Mode::Pve)]
    mode: Mode,

    /// Seed for the starting side and bot tie-breaks
    #[arg(short, long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    /// Two humans at one keyboard
    Pvp,
    /// Human (RED) against the bot (BLUE)
    Pve,
}

impl From<Mode> for GameMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Pvp => GameMode::HumanVsHuman,
            Mode::Pve => GameMode::HumanVsBot,
        }
    }
}

fn main() -> io::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let cli = Cli::parse();
    let mut builder = GameSession::builder().mode(cli.mode.into());
    if let Some(seed) = cli.seed {
        builder = builder.seed(seed);
    }
    let mut session = builder.build();

    let stdin = io::stdin();
    let mut out = io::stdout();

    render(&mut out, session.board())?;
    prompt(&mut out, &session)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();

        match line {
            "q" | "quit" => break,
            "r" | "restart" => {
                let snapshot = session.start(session.mode());
                render(&mut out, &snapshot.board)?;
            }
            _ => match parse_move(line) {
                Some(pos) => match session.submit_move(pos.row, pos.col) {
                    Ok(reports) => {
                        for report in &reports {
                            describe(&mut out, report)?;
                        }
                        render(&mut out, session.board())?;
                        announce_winner(&mut out, &reports)?;
                    }
                    Err(rejection) => writeln!(out, "rejected: {}", rejection)?,
                },
                None => writeln!(out, "expected `row col`, `r` or `q`")?,
            },
        }

        if !session.is_over() {
            prompt(&mut out, &session)?;
        }
    }

    Ok(())
}

fn parse_move(line: &str) -> Option<Position> {
    let mut parts = line.split_whitespace().map(str::parse::<usize>);
    let row = parts.next()?.ok()?;
    let col = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Position::new(row, col))
}

fn prompt(out: &mut impl Write, session: &GameSession) -> io::Result<()> {
    write!(out, "{} to move> ", session.active_player())?;
    out.flush()
}

fn describe(out: &mut impl Write, report: &MoveReport) -> io::Result<()> {
    writeln!(
        out,
        "{} played {} ({} explosion round(s))",
        report.player,
        report.position,
        report.rounds.len()
    )
}

/// Print the banner for the move that decided the game, if any.
fn announce_winner(out: &mut impl Write, reports: &[MoveReport]) -> io::Result<bool> {
    match reports.iter().find_map(|r| r.winner) {
        Some(winner) => {
            writeln!(out, "{} WINS! Press r to play again or q to quit.", winner)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

fn render(out: &mut impl Write, board: &Board) -> io::Result<()> {
    write!(out, "   ")?;
    for col in 0..COLS {
        write!(out, " {} ", col)?;
    }
    writeln!(out)?;

    for row in 0..ROWS {
        write!(out, "{}  ", row)?;
        for col in 0..COLS {
            let cell = board.cell(Position::new(row, col));
            match cell.owner {
                Some(Player::Red) => write!(out, "R{} ", cell.dots)?,
                Some(Player::Blue) => write!(out, "B{} ", cell.dots)?,
                None => write!(out, " . ")?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

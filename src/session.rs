//! Game session: owns the board, the turn controller and the bot, and is
//! the single entry point for a presentation layer.
//!
//! ```
//! use chain_reaction::session::{GameMode, GameSession};
//!
//! let mut session = GameSession::builder()
//!     .mode(GameMode::HumanVsHuman)
//!     .seed(42)
//!     .build();
//!
//! let first = session.active_player();
//! let reports = session.submit_move(0, 0).unwrap();
//! assert_eq!(reports.len(), 1);
//! assert_eq!(session.active_player(), first.opponent());
//! ```

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::board::{Board, Position};
use crate::bot::{Heuristic, MovePolicy};
use crate::core::{GameRng, HeuristicConfig, Player};
use crate::turn::{MoveRejection, MoveReport, PendingMove, TurnController, TurnState};

/// The side the bot plays in [`GameMode::HumanVsBot`].
pub const BOT_SEAT: Player = Player::Blue;

/// Who sits at the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Two humans alternate on the same input.
    HumanVsHuman,
    /// A human plays Red, the bot plays Blue.
    HumanVsBot,
}

/// Everything a renderer needs to draw the current position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Board,
    pub active_player: Player,
    pub state: TurnState,
    pub mode: GameMode,
}

/// Notifications for the presentation layer, in the order they occurred.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A new game began.
    Started { first: Player, mode: GameMode },
    /// A move was accepted and resolved.
    MoveApplied(MoveReport),
    /// The game was decided. Emitted once per game.
    Won { winner: Player },
}

/// Builder for creating a [`GameSession`].
pub struct SessionBuilder {
    mode: GameMode,
    seed: Option<u64>,
    policy: Box<dyn MovePolicy>,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            mode: GameMode::HumanVsHuman,
            seed: None,
            policy: Box::new(Heuristic::default()),
        }
    }
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Fix the seed for the starting-side draw and bot jitter.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use the heuristic bot with custom weights.
    pub fn heuristic(self, config: HeuristicConfig) -> Self {
        self.policy(Heuristic::new(config))
    }

    /// Seat a different bot policy.
    pub fn policy(mut self, policy: impl MovePolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Build the session and start the first game.
    pub fn build(self) -> GameSession {
        let root = self.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        info!("session seed {}", root.seed());

        let mut session = GameSession {
            mode: self.mode,
            board: Board::new(),
            turn: TurnController::new(Player::Red),
            start_rng: root.for_context("start"),
            bot_rng: root.for_context("bot"),
            bot: self.policy,
            events: Vec::new(),
        };
        session.start(self.mode);
        session
    }
}

/// One game in progress, plus what is needed to restart it.
pub struct GameSession {
    mode: GameMode,
    board: Board,
    turn: TurnController,
    start_rng: GameRng,
    bot_rng: GameRng,
    bot: Box<dyn MovePolicy>,
    events: Vec<SessionEvent>,
}

impl GameSession {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Start (or restart) a game in `mode`.
    ///
    /// The board is cleared, any move in flight and any undelivered events
    /// are dropped, and the starting side is drawn uniformly. If the bot
    /// moves first, its opening move is played before this returns.
    pub fn start(&mut self, mode: GameMode) -> Snapshot {
        self.mode = mode;
        self.board.reset();
        self.events.clear();

        let first = if self.start_rng.gen_bool(0.5) {
            Player::Red
        } else {
            Player::Blue
        };
        self.turn.reset(first);

        info!("starting {:?} game, {} moves first", mode, first);
        self.events.push(SessionEvent::Started { first, mode });

        self.play_bot_turn();
        self.snapshot()
    }

    /// Play a move for the active human player and resolve it.
    ///
    /// In [`GameMode::HumanVsBot`] the bot's reply is resolved straight
    /// away and appended to the returned reports.
    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<Vec<MoveReport>, MoveRejection> {
        self.begin_move(row, col)?;
        Ok(self.finish_move())
    }

    /// Place a unit for the active human player without resolving it.
    ///
    /// The session stays locked until [`finish_move`](Self::finish_move);
    /// a renderer can show the placement in between.
    pub fn begin_move(&mut self, row: usize, col: usize) -> Result<PendingMove, MoveRejection> {
        let active = self.turn.active_player();
        if self.is_bot(active) && self.turn.state() == TurnState::Idle {
            return Err(MoveRejection::NotYourTurn {
                active,
                requested: active.opponent(),
            });
        }

        self.turn
            .begin_move(&mut self.board, Position::new(row, col), active)
    }

    /// Resolve the pending move, then let the bot reply if it is its turn.
    ///
    /// Returns an empty list if nothing was pending.
    pub fn finish_move(&mut self) -> Vec<MoveReport> {
        let mut reports = Vec::new();

        if let Some(report) = self.turn.finish_move(&mut self.board) {
            self.record(&report);
            reports.push(report);
        }
        if let Some(report) = self.play_bot_turn() {
            reports.push(report);
        }

        reports
    }

    /// Let the bot move if the session is waiting on it.
    fn play_bot_turn(&mut self) -> Option<MoveReport> {
        let active = self.turn.active_player();
        if !self.is_bot(active) || self.turn.state() != TurnState::Idle {
            return None;
        }

        let choice = self.bot.choose_move(&self.board, active, &mut self.bot_rng)?;
        match self.turn.submit_move(&mut self.board, choice, active) {
            Ok(report) => {
                self.record(&report);
                Some(report)
            }
            Err(rejection) => {
                warn!("bot move at {} rejected: {}", choice, rejection);
                None
            }
        }
    }

    fn record(&mut self, report: &MoveReport) {
        self.events.push(SessionEvent::MoveApplied(report.clone()));
        if let Some(winner) = report.winner {
            self.events.push(SessionEvent::Won { winner });
        }
    }

    fn is_bot(&self, player: Player) -> bool {
        self.mode == GameMode::HumanVsBot && player == BOT_SEAT
    }

    /// Take all events produced since the last call.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            active_player: self.turn.active_player(),
            state: self.turn.state(),
            mode: self.mode,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn active_player(&self) -> Player {
        self.turn.active_player()
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.turn.winner()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }
}

use std::fmt::Debug;

use log::{debug, info, warn};
use rand::seq::IteratorRandom;
use rand::Rng;

use crate::core::config::GameConfig;
use crate::core::definitions::{
    Cell, Figure, GameError, InputEvent, MatchInterface, Notification, PlayerIndex, Position,
};
use crate::core::engine::Board;
use crate::core::interaction::{CellOutcome, Interaction, InteractionState, MoveRecord};
use crate::core::pieces::{Piece, PieceId};
use crate::core::turn::{Perspective, TurnTracker};

pub type Listener = Box<dyn FnMut(&Notification)>;

/// Complete state of one four-player match: board, pieces, turn and the
/// pending selection.
///
/// Every inbound event is handled to completion before the call returns.
/// Listeners see the produced notifications synchronously, in order, and the
/// same notifications are returned to the caller.
pub struct Game {
    config: GameConfig,
    board: Board,
    turn: TurnTracker,
    interaction: Interaction,
    history: Vec<MoveRecord>,
    listeners: Vec<Listener>,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Game, GameError> {
        config.validate()?;
        let mut board = Board::new(config.board_size);
        board.setup_initial_positions()?;
        let turn = TurnTracker::new(config.players.len());
        info!(
            "New {size}x{size} game for {} players",
            config.players.len(),
            size = config.board_size
        );
        Ok(Game {
            config,
            board,
            turn,
            interaction: Interaction::new(),
            history: Vec::new(),
            listeners: Vec::new(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.board.piece(id)
    }

    pub fn piece_at(&self, column: u8, row: u8) -> Option<&Piece> {
        self.board.piece_at(Position::new(column, row))
    }

    pub fn state(&self) -> InteractionState {
        self.interaction.state()
    }

    pub fn selected(&self) -> Option<&Piece> {
        self.interaction.selected().and_then(|id| self.board.piece(id))
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn perspective(&self) -> Perspective {
        Perspective::of(self.turn.current())
    }

    /** Registers a listener for every future notification. */
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&Notification) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn dispatch(&mut self, event: InputEvent) -> Result<Vec<Notification>, GameError> {
        match event {
            InputEvent::PieceSelected(piece) => self.select_piece(piece),
            InputEvent::CellActivated { column, row } => self.activate_cell(column, row),
            InputEvent::ManualAdvanceTurn => self.skip_turn(),
            InputEvent::ResetBoard => self.reset_board(),
        }
    }

    pub fn select_piece(&mut self, piece: PieceId) -> Result<Vec<Notification>, GameError> {
        let selected = self.interaction.select(&self.board, piece).map_err(|err| {
            warn!("Selection refused: {err}");
            err
        })?;
        let ack = Notification::PieceSelectedAck {
            kind: selected.kind(),
            player: selected.player(),
        };
        let mut notifications = Vec::new();
        self.emit(&mut notifications, ack);
        Ok(notifications)
    }

    pub fn activate_cell(&mut self, column: u8, row: u8) -> Result<Vec<Notification>, GameError> {
        let position = Position::new(column, row);
        let outcome = self
            .interaction
            .activate(&mut self.board, position)
            .map_err(|err| {
                warn!("Cell activation refused: {err}");
                err
            })?;
        let mut notifications = Vec::new();
        match outcome {
            CellOutcome::Ignored => (),
            CellOutcome::Rejected(reason) => {
                self.emit(&mut notifications, Notification::MoveRejected { reason });
            }
            CellOutcome::Committed(record) => {
                if let Some(captured) = &record.captured {
                    let capture = Notification::PieceCaptured {
                        piece: captured.id(),
                        kind: captured.kind(),
                        player: captured.player(),
                    };
                    self.emit(&mut notifications, capture);
                }
                let committed = Notification::MoveCommitted {
                    player: record.player,
                    kind: record.kind,
                    destination: record.to,
                };
                self.history.push(record);
                self.emit(&mut notifications, committed);
                self.advance(&mut notifications);
            }
        }
        Ok(notifications)
    }

    /** Passes the turn without touching the board. Selection is kept. */
    pub fn skip_turn(&mut self) -> Result<Vec<Notification>, GameError> {
        if let Some(line) = self.describe_event(&InputEvent::ManualAdvanceTurn) {
            info!("{line}");
        }
        let mut notifications = Vec::new();
        self.advance(&mut notifications);
        Ok(notifications)
    }

    /// Restores the starting layout with fresh piece identities. Selection and
    /// history are dropped, the current player stays.
    pub fn reset_board(&mut self) -> Result<Vec<Notification>, GameError> {
        self.board.setup_initial_positions()?;
        self.interaction.deselect();
        self.history.clear();
        let mut notifications = Vec::new();
        self.emit(&mut notifications, Notification::BoardReset);
        Ok(notifications)
    }

    /// Plays one move for the current player through the normal
    /// select/activate path: a random own piece to a random cell that is not
    /// held by another own piece. Players with nothing to move are passed
    /// over with a regular `TurnChanged`. `None` only when the board is empty.
    pub fn make_random_move<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<MoveRecord>, GameError> {
        if self.board.pieces().is_empty() {
            debug!("No pieces left on the board");
            return Ok(None);
        }
        for _ in 0..self.turn.player_count() {
            let player = self.turn.current();
            if let Some((piece, destination)) = self.random_move_for(player, rng) {
                self.select_piece(piece)?;
                self.activate_cell(destination.column, destination.row)?;
                return Ok(self.history.last().cloned());
            }
            debug!("Player #{player} has nothing to move, passing");
            let mut skipped = Vec::new();
            self.advance(&mut skipped);
        }
        Ok(None)
    }

    fn random_move_for<R: Rng + ?Sized>(
        &self,
        player: PlayerIndex,
        rng: &mut R,
    ) -> Option<(PieceId, Position)> {
        let (from, piece) = self
            .board
            .iter()
            .filter(|(_, piece)| piece.player() == player)
            .map(|(position, piece)| (position, piece.id()))
            .choose(rng)?;
        let size = self.board.size();
        let destination = (0..size)
            .flat_map(|row| (0..size).map(move |column| Position::new(column, row)))
            .filter(|position| *position != from)
            .filter(|position| {
                self.board
                    .piece_at(*position)
                    .map_or(true, |occupant| occupant.player() != player)
            })
            .choose(rng)?;
        Some((piece, destination))
    }

    /// Log line for an inbound event that does not produce a notification of
    /// its own.
    pub fn describe_event(&self, event: &InputEvent) -> Option<&'static str> {
        match event {
            InputEvent::ManualAdvanceTurn => Some("Turn changed manually"),
            _ => None,
        }
    }

    /// Log line for a notification, using the configured player names.
    pub fn describe(&self, notification: &Notification) -> String {
        match notification {
            Notification::MoveRejected { reason } => format!("Invalid move: {reason}"),
            Notification::PieceCaptured { kind, player, .. } => {
                format!("{}'s {kind} was captured", self.config.player_name(*player))
            }
            Notification::MoveCommitted {
                player,
                kind,
                destination,
            } => format!(
                "{} moved {kind} to {destination}",
                self.config.player_name(*player)
            ),
            Notification::PieceSelectedAck { kind, player } => {
                format!("Selected: {kind} ({})", self.config.player_name(*player))
            }
            Notification::TurnChanged { player } => {
                format!("Turn of {}", self.config.player_name(*player))
            }
            Notification::BoardReset => "Board reset".to_owned(),
        }
    }

    fn advance(&mut self, notifications: &mut Vec<Notification>) {
        let player = self.turn.advance();
        self.emit(notifications, Notification::TurnChanged { player });
    }

    fn emit(&mut self, notifications: &mut Vec<Notification>, notification: Notification) {
        let line = self.describe(&notification);
        match notification {
            Notification::MoveRejected { .. } => warn!("{line}"),
            Notification::PieceSelectedAck { .. } => debug!("{line}"),
            _ => info!("{line}"),
        }
        for listener in self.listeners.iter_mut() {
            listener(&notification);
        }
        notifications.push(notification);
    }
}

impl Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("config", &self.config)
            .field("board", &self.board)
            .field("turn", &self.turn)
            .field("interaction", &self.interaction)
            .field("history", &self.history.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl MatchInterface for Game {
    fn board_size(&self) -> u8 {
        self.board.size()
    }

    /** Outer index is the row, inner index the column. */
    fn current_board(&self) -> Vec<Vec<Cell>> {
        let size = self.board.size() as usize;
        (0..size)
            .map(|row| {
                (0..size)
                    .filter_map(|column| self.cell(column, row))
                    .collect()
            })
            .collect()
    }

    fn cell(&self, column: usize, row: usize) -> Option<Cell> {
        let (column, row) = (u8::try_from(column).ok()?, u8::try_from(row).ok()?);
        let position = Position::new(column, row);
        if !self.board.contains(position) {
            return None;
        }
        let selected = self.interaction.selected();
        Some(match self.board.piece_at(position) {
            None => Cell::Empty,
            Some(piece) => Cell::Figure(Figure {
                id: piece.id(),
                kind: piece.kind(),
                player: piece.player(),
                selected: selected == Some(piece.id()),
            }),
        })
    }

    fn current_player(&self) -> PlayerIndex {
        self.turn.current()
    }
}

//! Piece controller - owns the active/next piece and drives the spawn and
//! rotation state machine
//!
//! Lifecycle: `Empty` (no active piece) -> `Active` -> back through spawn on
//! every lock, or into the terminal `GameOver` when a spawn placement is
//! blocked. Rotation requests are resolved with a bounding-box clamp against
//! the board edges, then a single legality query; there is no kick-table
//! search. Rejected requests leave every piece of state untouched.
//!
//! Dependencies (board query, generator) are passed in at construction so
//! the controller can be built in isolation against stub boards.

use crate::core::board::BoardQuery;
use crate::core::descriptor::descriptor;
use crate::core::generator::PieceGenerator;
use crate::types::{EngineError, PieceKind, Rotation, COLUMN_COUNT, ROW_COUNT};

/// The engine's state machine: active piece, preview piece, and position
#[derive(Debug, Clone)]
pub struct PieceController<B: BoardQuery> {
    board: B,
    generator: PieceGenerator,
    current: Option<PieceKind>,
    next: PieceKind,
    column: i8,
    row: i8,
    rotation: Rotation,
    game_over: bool,
}

impl<B: BoardQuery> PieceController<B> {
    /// Create a controller with no active piece; the first preview kind is
    /// drawn immediately
    pub fn new(board: B, mut generator: PieceGenerator) -> Self {
        let next = generator.next_kind();
        Self {
            board,
            generator,
            current: None,
            next,
            column: 0,
            row: 0,
            rotation: Rotation::North,
            game_over: false,
        }
    }

    /// Promote the preview piece to active at its spawn placement and draw a
    /// fresh preview kind.
    ///
    /// If the spawn placement is already blocked, the board is notified
    /// (`report_game_over` + `pause_clock`) and the controller latches its
    /// terminal state; after that, further calls are no-ops and the preview
    /// kind stops changing. Returns true while a piece is in play.
    pub fn spawn_piece(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        let kind = self.next;
        let desc = descriptor(kind);

        self.current = Some(kind);
        self.column = desc.spawn_column();
        self.row = desc.spawn_row();
        self.rotation = Rotation::North;

        self.next = self.generator.next_kind();

        if !self
            .board
            .is_legal_placement(kind, self.column, self.row, self.rotation)
        {
            self.board.report_game_over();
            self.board.pause_clock();
            self.game_over = true;
            return false;
        }

        true
    }

    /// Attempt to rotate the active piece to `target`.
    ///
    /// The candidate position is the current one, shifted by at most one
    /// horizontal and one vertical correction - exactly the amount the
    /// target rotation's bounding box overflows a board edge. If the single
    /// legality query on that candidate fails, the request is discarded and
    /// rotation, column, and row all keep their prior values. Returns
    /// whether the rotation was committed; calls with no active piece or
    /// after game-over are rejected without touching state.
    pub fn rotate_piece(&mut self, target: Rotation) -> bool {
        let Some(kind) = self.current else {
            return false;
        };
        if self.game_over {
            return false;
        }

        let desc = descriptor(kind);
        let insets = desc.insets(target);
        let dim = desc.dimension() as i8;

        let left = insets.left as i8;
        let right = insets.right as i8;
        let top = insets.top as i8;
        let bottom = insets.bottom as i8;

        let mut column = self.column;
        let mut row = self.row;

        if self.column < -left {
            column = -left;
        } else if self.column + dim - right > COLUMN_COUNT as i8 {
            column = COLUMN_COUNT as i8 - dim + right;
        }

        if self.row < -top {
            row = -top;
        } else if self.row + dim - bottom > ROW_COUNT as i8 {
            row = ROW_COUNT as i8 - dim + bottom;
        }

        if self.board.is_legal_placement(kind, column, row, target) {
            self.rotation = target;
            self.column = column;
            self.row = row;
            return true;
        }

        false
    }

    /// Resolve a kind ordinal without drawing a new random piece
    pub fn tile_lookup(&self, index: usize) -> Result<PieceKind, EngineError> {
        self.generator.kind_at(index)
    }

    /// The kind in play, or None before the first spawn
    pub fn current_kind(&self) -> Option<PieceKind> {
        self.current
    }

    /// The kind queued to become current on the next spawn
    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    /// Board column of the active piece's bounding-box left edge
    pub fn column(&self) -> i8 {
        self.column
    }

    /// Board row of the active piece's bounding-box top edge
    pub fn row(&self) -> i8 {
        self.row
    }

    /// Current rotation state
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Whether the controller has latched its terminal state
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    /// Inject the active kind directly. Bypasses the legality invariant;
    /// callers must re-validate before relying on the placement.
    pub fn set_current_kind(&mut self, kind: PieceKind) {
        self.current = Some(kind);
    }

    /// Inject the preview kind directly. Bypasses the legality invariant.
    pub fn set_next_kind(&mut self, kind: PieceKind) {
        self.next = kind;
    }

    /// Inject the active column directly. Bypasses the legality invariant.
    pub fn set_column(&mut self, column: i8) {
        self.column = column;
    }

    /// Inject the active row directly. Bypasses the legality invariant.
    pub fn set_row(&mut self, row: i8) {
        self.row = row;
    }
}

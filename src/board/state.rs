use super::types::{Bitboard, CastlingRights, Color, Piece, Square};

/// Standard starting position in FEN.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub(crate) const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// What a make needs to put back on unmake, beyond the board itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UndoRecord {
    pub(crate) captured: Option<Piece>,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) fifty_move_counter: u32,
    pub(crate) hashes: Vec<u64>,
}

/// A chess position with reversible make/unmake.
///
/// Pieces are kept as two colour bitboards and six type bitboards; a square
/// is occupied by a white knight exactly when it is set in the white board and
/// the knight board. The hash sequence lists the position hash after every
/// reversible move since the last capture, pawn move or castling, and is what
/// repetition detection looks at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) by_color: [Bitboard; 2],
    pub(crate) by_piece: [Bitboard; 6],
    pub(crate) occupancy: Bitboard,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) fifty_move_counter: u32,
    pub(crate) halfmove_counter: u32,
    pub(crate) terminal: bool,
    pub(crate) hashes: Vec<u64>,
    pub(crate) undo_stack: Vec<UndoRecord>,
}

impl Position {
    /// An empty board, White to move, no rights, empty hash sequence.
    #[must_use]
    pub fn new() -> Self {
        Position {
            by_color: [Bitboard::EMPTY; 2],
            by_piece: [Bitboard::EMPTY; 6],
            occupancy: Bitboard::EMPTY,
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant: None,
            fifty_move_counter: 0,
            halfmove_counter: 0,
            terminal: false,
            hashes: Vec::new(),
            undo_stack: Vec::new(),
        }
    }

    /// The standard starting position, equivalent to loading [`START_FEN`].
    #[must_use]
    pub fn startpos() -> Self {
        let mut pos = Position::new();
        for (file, piece) in (0u8..).zip(BACK_RANK) {
            for (rank, color, kind) in [
                (0, Color::White, piece),
                (1, Color::White, Piece::Pawn),
                (6, Color::Black, Piece::Pawn),
                (7, Color::Black, piece),
            ] {
                if let Some(sq) = Square::new(rank, file) {
                    pos.add_piece(kind, color, sq);
                }
            }
        }
        pos.castling_rights = CastlingRights::all();
        pos.seed_hashes();
        pos
    }

    /// Clear everything back to the state of [`Position::new`].
    pub fn reset(&mut self) {
        *self = Position::new();
    }

    /// Start the hash sequence from the current position.
    pub(crate) fn seed_hashes(&mut self) {
        self.hashes.clear();
        self.hashes.push(self.calculate_hash());
    }

    /// Place a piece. The square is expected to be empty.
    pub fn add_piece(&mut self, piece: Piece, color: Color, sq: Square) {
        let bb = Bitboard::from_square(sq);
        self.by_color[color.index()] |= bb;
        self.by_piece[piece.index()] |= bb;
        self.occupancy |= bb;
    }

    /// Clear whatever stands on `sq` from every bitboard.
    pub fn remove_piece(&mut self, sq: Square) {
        let keep = !Bitboard::from_square(sq);
        self.by_color[0] &= keep;
        self.by_color[1] &= keep;
        for bb in &mut self.by_piece {
            *bb &= keep;
        }
        self.occupancy &= keep;
    }

    /// Clear `sq` when the piece type on it is already known.
    pub fn remove_piece_of(&mut self, sq: Square, piece: Piece) {
        let keep = !Bitboard::from_square(sq);
        self.by_color[0] &= keep;
        self.by_color[1] &= keep;
        self.by_piece[piece.index()] &= keep;
        self.occupancy &= keep;
    }

    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        if !self.occupancy.contains(sq) {
            return None;
        }
        Piece::ALL
            .into_iter()
            .find(|piece| self.by_piece[piece.index()].contains(sq))
    }

    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        Color::BOTH
            .into_iter()
            .find(|color| self.by_color[color.index()].contains(sq))
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    #[must_use]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    #[must_use]
    pub fn fifty_move_counter(&self) -> u32 {
        self.fifty_move_counter
    }

    /// Plies played since the start of the game (0 = White's first move).
    #[inline]
    #[must_use]
    pub fn halfmove_counter(&self) -> u32 {
        self.halfmove_counter
    }

    /// Set once move generation found no legal moves, or a threefold
    /// repetition occurred. Cleared by every unmake.
    #[inline]
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Hashes since the last irreversible move, oldest first.
    #[inline]
    #[must_use]
    pub fn hashes(&self) -> &[u64] {
        &self.hashes
    }

    /// True when the newest hash of the sequence occurs three times.
    #[must_use]
    pub fn is_repetition(&self) -> bool {
        match self.hashes.last() {
            Some(last) => self.hashes.iter().filter(|h| *h == last).count() >= 3,
            None => false,
        }
    }

    /// Number of moves made and not yet unmade.
    #[inline]
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    #[inline]
    #[must_use]
    pub fn occupancy(&self) -> Bitboard {
        self.occupancy
    }

    #[inline]
    #[must_use]
    pub fn color_bb(&self, color: Color) -> Bitboard {
        self.by_color[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn piece_bb(&self, piece: Piece) -> Bitboard {
        self.by_piece[piece.index()]
    }

    /// Pieces of one type and colour.
    #[inline]
    #[must_use]
    pub fn pieces(&self, color: Color, piece: Piece) -> Bitboard {
        self.by_color[color.index()] & self.by_piece[piece.index()]
    }

    /// Square of the king of `color`, if there is one.
    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color, Piece::King).lsb()
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

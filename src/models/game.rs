//! Game session model - owns the rules engine and the displayed opening.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::domain::{
    CellDescriptor, MoveRecord, OPENINGS, Opening, Piece, RulesEngine, build_board_model,
};

/// A piece to draw, keyed by its board cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PiecePlacement {
    pub piece: Piece,
    pub row_index: usize,
    pub column_index: usize,
}

/// The game controller state: one per window
pub struct GameSession {
    engine: RulesEngine,
    /// Name of the opening currently on the board, if any
    current_opening: Option<&'static str>,
    /// Cells rebuilt after every engine mutation
    cells: Vec<CellDescriptor>,
}

impl GameSession {
    pub fn new(engine: RulesEngine) -> Self {
        let cells = build_board_model(&engine.board());
        Self {
            engine,
            current_opening: None,
            cells,
        }
    }

    pub fn cells(&self) -> &[CellDescriptor] {
        &self.cells
    }

    pub fn current_opening_name(&self) -> Option<&'static str> {
        self.current_opening
    }

    /// Occupied cells in rendering order
    pub fn piece_placements(&self) -> Vec<PiecePlacement> {
        self.cells
            .iter()
            .filter_map(|cell| {
                cell.occupant.map(|piece| PiecePlacement {
                    piece,
                    row_index: cell.row_index,
                    column_index: cell.column_index,
                })
            })
            .collect()
    }

    /// Show an opening on the board.
    ///
    /// Resets first if another opening is already displayed, so only one
    /// opening move is ever on the board. The engine's verdict is returned
    /// as-is; a rejected move still records the opening name.
    pub fn apply_move(&mut self, opening: &Opening) -> Option<MoveRecord> {
        if self.current_opening.is_some() {
            self.reset();
        }

        let result = self.engine.move_piece(opening.from, opening.to);
        match &result {
            Some(record) => log::info!(
                "Showing {} ({}: {}-{})",
                opening.name,
                record.san,
                record.from,
                record.to
            ),
            None => log::warn!(
                "Engine rejected {}{} for {}",
                opening.from,
                opening.to,
                opening.name
            ),
        }

        self.rebuild();
        self.current_opening = Some(opening.name);
        result
    }

    /// Clear the opening and go back to the starting position
    pub fn reset(&mut self) {
        log::info!("Resetting board");
        self.current_opening = None;
        self.engine.reset();
        self.rebuild();
    }

    /// Pick an opening uniformly at random and show it
    pub fn pick_random_opening(&mut self) -> Option<&'static Opening> {
        self.pick_random_opening_with(&mut rand::thread_rng())
    }

    pub fn pick_random_opening_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Option<&'static Opening> {
        let opening = OPENINGS.choose(rng)?;
        self.apply_move(opening);
        Some(opening)
    }

    fn rebuild(&mut self) {
        self.cells = build_board_model(&self.engine.board());
        log::debug!(
            "Rebuilt board model: {} occupied cells, {:?} to move",
            self.cells.iter().filter(|c| c.occupant.is_some()).count(),
            self.engine.turn()
        );
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(RulesEngine::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PieceColor, PieceKind};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use shakmaty::Square;

    fn occupant_at(session: &GameSession, label: &str) -> Option<Piece> {
        session
            .cells()
            .iter()
            .find(|c| c.position == label)
            .and_then(|c| c.occupant)
    }

    fn opening_to(to: Square) -> &'static Opening {
        OPENINGS.iter().find(|o| o.to == to).unwrap()
    }

    #[test]
    fn test_initialize() {
        let session = GameSession::default();
        assert_eq!(session.cells().len(), 64);
        assert_eq!(session.current_opening_name(), None);
        assert_eq!(session.piece_placements().len(), 32);
    }

    #[test]
    fn test_reset_matches_initialize() {
        let initial = GameSession::default();
        let mut session = GameSession::default();
        session.apply_move(opening_to(Square::E4));
        session.reset();

        assert_eq!(session.cells(), initial.cells());
        assert_eq!(session.current_opening_name(), None);
    }

    #[test]
    fn test_apply_e4() {
        let mut session = GameSession::default();
        let opening = opening_to(Square::E4);
        let record = session.apply_move(opening).unwrap();

        assert_eq!(record.san, "e4");
        assert_eq!(
            occupant_at(&session, "E4"),
            Some(Piece::new(PieceKind::Pawn, PieceColor::White))
        );
        assert_eq!(occupant_at(&session, "E2"), None);
        assert_eq!(session.current_opening_name(), Some(opening.name));
    }

    #[test]
    fn test_second_opening_replaces_first() {
        let mut session = GameSession::default();
        session.apply_move(opening_to(Square::E4));
        session.apply_move(opening_to(Square::D4));

        assert_eq!(occupant_at(&session, "E4"), None);
        assert_eq!(
            occupant_at(&session, "E2"),
            Some(Piece::new(PieceKind::Pawn, PieceColor::White))
        );
        assert_eq!(
            occupant_at(&session, "D4"),
            Some(Piece::new(PieceKind::Pawn, PieceColor::White))
        );
        assert_eq!(session.current_opening_name(), Some("Queen's Pawn Game"));
    }

    #[test]
    fn test_same_opening_twice_shows_single_move() {
        // the second g2g3 is only legal if the board was reset in between
        let mut session = GameSession::default();
        let opening = opening_to(Square::G3);
        assert!(session.apply_move(opening).is_some());
        assert!(session.apply_move(opening).is_some());

        let mut expected = GameSession::default();
        expected.apply_move(opening);
        assert_eq!(session.cells(), expected.cells());
    }

    #[test]
    fn test_random_opening_same_draw_twice() {
        let mut first = StdRng::seed_from_u64(7);
        let mut second = StdRng::seed_from_u64(7);
        let mut session = GameSession::default();

        let a = session.pick_random_opening_with(&mut first).unwrap();
        let b = session.pick_random_opening_with(&mut second).unwrap();
        assert_eq!(a, b);

        let mut expected = GameSession::default();
        expected.apply_move(b);
        assert_eq!(session.cells(), expected.cells());
        assert_eq!(session.current_opening_name(), Some(b.name));
    }

    #[test]
    fn test_random_opening_records_name() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut session = GameSession::default();
        for _ in 0..20 {
            let opening = session.pick_random_opening_with(&mut rng).unwrap();
            assert!(OPENINGS.contains(opening));
            assert_eq!(session.current_opening_name(), Some(opening.name));
            assert_eq!(session.piece_placements().len(), 32);
        }
        session.reset();
        assert_eq!(session.current_opening_name(), None);
    }

    #[test]
    fn test_random_opening_covers_catalog() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = GameSession::default();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(session.pick_random_opening_with(&mut rng).unwrap().name);
        }
        assert_eq!(seen.len(), OPENINGS.len());
    }

    #[test]
    fn test_rejected_move_passes_through() {
        // black to move, so every white opening is illegal
        let engine = RulesEngine::new(Some(
            "rnbqkbnr/pppppppp/8/8/8/5N2/PPPPPPPP/RNBQKB1R b KQkq - 1 1",
        ))
        .unwrap();
        let mut session = GameSession::new(engine);
        let before = session.cells().to_vec();

        assert!(session.apply_move(opening_to(Square::E4)).is_none());
        assert_eq!(session.cells(), before.as_slice());
        assert_eq!(session.current_opening_name(), Some("King's Pawn Game"));
    }
}

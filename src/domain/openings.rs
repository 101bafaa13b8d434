//! Catalog of single-move openings shown by the "random opening" button.

use shakmaty::Square;

/// A named first move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Opening {
    pub from: Square,
    pub to: Square,
    pub name: &'static str,
}

pub static OPENINGS: [Opening; 5] = [
    Opening {
        from: Square::G2,
        to: Square::G3,
        name: "King's Fianchetto Opening",
    },
    Opening {
        from: Square::D2,
        to: Square::D4,
        name: "Queen's Pawn Game",
    },
    Opening {
        from: Square::G1,
        to: Square::F3,
        name: "Zukertort Opening",
    },
    Opening {
        from: Square::C2,
        to: Square::C4,
        name: "English Opening",
    },
    Opening {
        from: Square::E2,
        to: Square::E4,
        name: "King's Pawn Game",
    },
];

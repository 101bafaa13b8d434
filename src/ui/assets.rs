//! Filesystem-based asset source and the piece image table.

use gpui::{AssetSource, SharedString};
use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

use crate::domain::{Piece, PieceColor, PieceKind};

/// Image path for every piece, indexed by (kind, color)
const PIECE_IMAGES: [(PieceKind, [&str; 2]); 6] = [
    (
        PieceKind::Bishop,
        ["assets/pieces/wB.png", "assets/pieces/bB.png"],
    ),
    (
        PieceKind::King,
        ["assets/pieces/wK.png", "assets/pieces/bK.png"],
    ),
    (
        PieceKind::Knight,
        ["assets/pieces/wN.png", "assets/pieces/bN.png"],
    ),
    (
        PieceKind::Pawn,
        ["assets/pieces/wP.png", "assets/pieces/bP.png"],
    ),
    (
        PieceKind::Queen,
        ["assets/pieces/wQ.png", "assets/pieces/bQ.png"],
    ),
    (
        PieceKind::Rook,
        ["assets/pieces/wR.png", "assets/pieces/bR.png"],
    ),
];

/// Image path for a piece sprite
pub fn piece_image(piece: Piece) -> &'static str {
    let color_index = match piece.color {
        PieceColor::White => 0,
        PieceColor::Black => 1,
    };
    PIECE_IMAGES
        .iter()
        .find(|(kind, _)| *kind == piece.kind)
        .map(|(_, paths)| paths[color_index])
        .unwrap_or_default()
}

/// Filesystem-based asset source that looks for assets in multiple locations
pub struct FileAssets {
    base_path: PathBuf,
}

impl FileAssets {
    pub fn new() -> Self {
        let base_path = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_default();
        Self { base_path }
    }

    fn candidates(&self, path: &str) -> Vec<PathBuf> {
        let mut paths = vec![self.base_path.join(path), PathBuf::from(path)];
        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(path));
        }
        paths
    }
}

impl Default for FileAssets {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetSource for FileAssets {
    fn load(&self, path: &str) -> gpui::Result<Option<Cow<'static, [u8]>>> {
        for p in self.candidates(path) {
            if let Ok(data) = fs::read(&p) {
                return Ok(Some(Cow::Owned(data)));
            }
        }
        log::debug!("Asset not found: {}", path);
        Ok(None)
    }

    fn list(&self, path: &str) -> gpui::Result<Vec<SharedString>> {
        let dir_path = self.base_path.join(path);
        let mut results = Vec::new();

        if let Ok(entries) = fs::read_dir(&dir_path) {
            for entry in entries.flatten() {
                if let Some(name) = entry.file_name().to_str() {
                    results.push(SharedString::from(name.to_string()));
                }
            }
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const KINDS: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[test]
    fn test_piece_image_paths() {
        assert_eq!(
            piece_image(Piece::new(PieceKind::Knight, PieceColor::White)),
            "assets/pieces/wN.png"
        );
        assert_eq!(
            piece_image(Piece::new(PieceKind::Queen, PieceColor::Black)),
            "assets/pieces/bQ.png"
        );
    }

    #[test]
    fn test_every_piece_has_distinct_image() {
        let mut seen = HashSet::new();
        for kind in KINDS {
            for color in [PieceColor::White, PieceColor::Black] {
                let path = piece_image(Piece::new(kind, color));
                assert!(!path.is_empty());
                assert!(seen.insert(path));
            }
        }
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn test_missing_asset_loads_none() {
        let assets = FileAssets::new();
        let result = assets.load("assets/does-not-exist.png").unwrap();
        assert!(result.is_none());
    }
}

//! Plain-text rendering of a [`Board`].
//!
//! Each cell takes [`CELL_WIDTH`] columns: a marker followed by the
//! `distance_total` label of the last search, right-aligned.

use gridfind_core::Point;

use crate::board::{Board, CellKind, CellView};

pub const CELL_WIDTH: usize = 3;

fn marker(kind: CellKind) -> char {
    match kind {
        CellKind::Empty | CellKind::Wall => ' ',
        CellKind::Start => 'S',
        CellKind::End => 'E',
        CellKind::Path => '*',
    }
}

/// The text of one cell, exactly [`CELL_WIDTH`] characters.
pub fn cell_text(view: CellView) -> String {
    if view.kind == CellKind::Wall {
        return "#".repeat(CELL_WIDTH);
    }
    let m = marker(view.kind);
    match view.label {
        Some(n) if n < 100 => format!("{m}{n:>2}"),
        Some(_) => format!("{m}++"),
        None if view.kind == CellKind::Empty => " . ".to_string(),
        None => format!("{m}  "),
    }
}

/// Render the whole board, one line per row.
pub fn to_text(board: &Board) -> String {
    let mut out = String::new();
    for y in 0..board.height() {
        for x in 0..board.width() {
            out.push_str(&cell_text(board.cell(Point::new(x, y))));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;
    use gridfind_paths::FinderConfig;

    #[test]
    fn cell_texts_have_fixed_width() {
        let views = [
            CellView { kind: CellKind::Empty, label: None },
            CellView { kind: CellKind::Wall, label: None },
            CellView { kind: CellKind::Start, label: Some(4) },
            CellView { kind: CellKind::Path, label: Some(12) },
            CellView { kind: CellKind::Empty, label: Some(250) },
            CellView { kind: CellKind::End, label: None },
        ];
        let texts: Vec<String> = views.into_iter().map(cell_text).collect();
        assert_eq!(texts, vec![" . ", "###", "S 4", "*12", " ++", "E  "]);
    }

    #[test]
    fn renders_board_before_search() {
        let scene = Scene::parse("S#\n.E").unwrap();
        let board = Board::from_scene(&scene, FinderConfig::default());
        assert_eq!(to_text(&board), "S  ###\n . E  \n");
    }

    #[test]
    fn renders_search_overlay() {
        let scene = Scene::parse("S.E").unwrap();
        let mut board = Board::from_scene(&scene, FinderConfig::default());
        board.find().unwrap();
        assert_eq!(to_text(&board), "S 2* 2E 2\n");
    }
}

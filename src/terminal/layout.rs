//! Board layout: which row each card sits on.

use crate::cards::ViewId;
use crate::view::BuiltView;

/// One printed row of cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardRow {
    /// Set the row belongs to.
    pub set_name: String,
    /// Is this the first row of its set?
    pub starts_set: bool,
    pub ids: Vec<ViewId>,
}

/// Grid layout of a board.
///
/// Every set starts on a new row and wraps after `columns` cards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardLayout {
    rows: Vec<BoardRow>,
    row_of: Vec<usize>,
}

impl BoardLayout {
    /// Lay out `view` with `columns` cards per row (at least one).
    #[must_use]
    pub fn new(view: &BuiltView, columns: usize) -> Self {
        let columns = columns.max(1);
        let mut rows = Vec::new();
        let mut row_of = Vec::with_capacity(view.card_count());

        for set in &view.sets {
            for (chunk_idx, chunk) in set.views.chunks(columns).enumerate() {
                let row = rows.len();
                row_of.extend(std::iter::repeat(row).take(chunk.len()));
                rows.push(BoardRow {
                    set_name: set.name.clone(),
                    starts_set: chunk_idx == 0,
                    ids: chunk.iter().map(|v| v.id).collect(),
                });
            }
        }

        Self { rows, row_of }
    }

    #[must_use]
    pub fn rows(&self) -> &[BoardRow] {
        &self.rows
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Row holding `id`, if it is on the board.
    #[must_use]
    pub fn row_of(&self, id: ViewId) -> Option<usize> {
        self.row_of.get(id.index()).copied()
    }
}

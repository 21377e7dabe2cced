//! Printing the whole board.

use std::io::{self, Write};

use im::Vector;

use super::layout::BoardLayout;
use crate::cards::CardView;

const HIDDEN: &str = "?????";

/// Print every row of the board, set headers included.
///
/// Face-down cards print as `?????`; rows inside `visible` are marked
/// with `>`.
pub fn write_board(
    out: &mut dyn Write,
    layout: &BoardLayout,
    views: &Vector<CardView>,
    visible: std::ops::Range<usize>,
) -> io::Result<()> {
    for (idx, row) in layout.rows().iter().enumerate() {
        if row.starts_set {
            writeln!(out, "== {} ==", row.set_name)?;
        }
        let marker = if visible.contains(&idx) { '>' } else { ' ' };
        let cells: Vec<&str> = row
            .ids
            .iter()
            .filter_map(|id| views.get(id.index()))
            .map(|v| if v.revealed { v.display_name.as_str() } else { HIDDEN })
            .collect();
        writeln!(out, "{marker} [{}]", cells.join("] ["))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardRecord, Catalog, Rarity};
    use crate::core::config::ViewConfig;
    use crate::view::{build_view, ViewRequest};

    #[test]
    fn test_board_shows_revealed_names_only() {
        let catalog = Catalog::from_records(vec![
            CardRecord::new("Fireball", Rarity::Common, "Event"),
            CardRecord::new("Frostbolt", Rarity::Common, "Event"),
            CardRecord::new("Yogg-Saron", Rarity::Legendary, "Core"),
        ]);
        let view = build_view(&catalog, &ViewRequest::all(), &ViewConfig::default());
        let layout = BoardLayout::new(&view, 4);
        let mut views: Vector<CardView> = view.into_views().into_iter().collect();
        views[0].revealed = true;

        let mut out = Vec::new();
        write_board(&mut out, &layout, &views, 0..1).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "== Event ==\n> [Fireball] [?????]\n== Core ==\n  [?????]\n"
        );
    }
}

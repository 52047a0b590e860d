//! ASCII rendering of the grid for the CLI's debug view.

use crate::cell::CellKind;
use crate::field::Field;

/// Glyph for a living cell of each kind.
pub fn kind_glyph(kind: CellKind) -> char {
    match kind {
        CellKind::Mycoplasma => 'M',
        CellKind::Disease => 'D',
        CellKind::Chameleon => 'C',
        CellKind::Chaos => 'X',
        CellKind::Cleansing => 'S',
        CellKind::Evolving => 'E',
        CellKind::Purger => 'P',
    }
}

/// Render the field: living cells by kind glyph (`!` while infected),
/// dead occupants as `.`, empty slots as spaces.
pub fn render(field: &Field) -> String {
    let mut out = String::with_capacity((field.width() + 1) * field.depth());
    let mut row_buf = String::with_capacity(field.width());
    let mut current_row = 0;

    for (row, _, slot) in field.iter() {
        if row != current_row {
            out.push_str(&row_buf);
            out.push('\n');
            row_buf.clear();
            current_row = row;
        }
        let glyph = match slot {
            Some(cell) if cell.is_alive() => {
                if cell.disease().is_some() {
                    '!'
                } else {
                    kind_glyph(cell.kind())
                }
            }
            Some(_) => '.',
            None => ' ',
        };
        row_buf.push(glyph);
    }
    out.push_str(&row_buf);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;

    #[test]
    fn test_render_shape_and_glyphs() {
        let mut field = Field::new(2, 2);
        field.place(0, 0, Cell::new(CellKind::Mycoplasma, true));
        field.place(0, 1, Cell::new(CellKind::Purger, false));
        let mut sick = Cell::new(CellKind::Chaos, true);
        sick.receive_infection(0);
        field.place(1, 0, sick);
        field.recompute_neighbours();

        assert_eq!(render(&field), "M.\n! \n");
    }

    #[test]
    fn test_glyphs_are_distinct() {
        let glyphs: std::collections::HashSet<char> =
            CellKind::ALL.iter().map(|&k| kind_glyph(k)).collect();
        assert_eq!(glyphs.len(), CellKind::ALL.len());
    }
}

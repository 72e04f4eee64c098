use std::fmt::Write as _;

use minado_core::Cell;
use ndarray::Array2;

/// Renders a board snapshot as text. Printers are stateless collaborators:
/// they read the exported grid and never touch the engine.
pub trait Printer {
    fn render(&self, grid: &Array2<Cell>) -> String;

    fn show(&self, grid: &Array2<Cell>) {
        print!("{}", self.render(grid));
    }
}

/// Compact form: one marker symbol per cell, nothing else.
pub struct SimplePrinter;

impl Printer for SimplePrinter {
    fn render(&self, grid: &Array2<Cell>) -> String {
        let mut out = String::new();
        for lane in grid.outer_iter() {
            for cell in lane.iter() {
                out.push(cell.marker.symbol());
            }
            out.push('\n');
        }
        out.push('\n');
        out
    }
}

/// Spaced form with interleaved blank lines and a dashed footer.
pub struct PrettyPrinter;

impl Printer for PrettyPrinter {
    fn render(&self, grid: &Array2<Cell>) -> String {
        let mut out = String::new();
        let lane_len = grid.dim().1;

        for lane in grid.outer_iter() {
            out.push(' ');
            for cell in lane.iter() {
                let _ = write!(out, " {}  ", cell.marker.symbol());
            }
            out.push('\n');
            out.push(' ');
            out.push_str(&"    ".repeat(lane_len));
            out.push('\n');
        }
        out.push_str(&"----".repeat(lane_len));
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minado_core::Marker;

    fn sample_grid() -> Array2<Cell> {
        let markers = [
            [Marker::Unknown, Marker::Mine],
            [Marker::Adjacent(1), Marker::Clear],
        ];
        Array2::from_shape_fn((2, 2), |(x, y)| {
            let mut cell = Cell::new(x, y, markers[x][y]);
            cell.visible = true;
            cell
        })
    }

    #[test]
    fn simple_printer_packs_symbols_per_line() {
        let rendered = SimplePrinter.render(&sample_grid());
        assert_eq!(rendered, ".#\n1 \n\n");
    }

    #[test]
    fn pretty_printer_spaces_cells_and_closes_with_a_rule() {
        let rendered = PrettyPrinter.render(&sample_grid());
        let expected = concat!(
            "  .   #  \n",
            "         \n",
            "  1      \n",
            "         \n",
            "--------\n",
        );
        assert_eq!(rendered, expected);
    }
}

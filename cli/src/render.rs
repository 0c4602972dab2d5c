use std::fmt::Write;

use shared::grid::Grid;

const ALIVE: &str = "■ ";
const DEAD: &str = ". ";

pub fn generation_label(generation: u64) -> String {
    if generation == 0 {
        "Generation: 0 (Initial State)".to_string()
    } else {
        format!("Generation: {generation}")
    }
}

/// One line per row, two characters per cell.
pub fn render_grid(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.height() * (grid.width() * ALIVE.len() + 1));
    for row in grid.rows() {
        for cell in row {
            out.push_str(if cell.is_alive() { ALIVE } else { DEAD });
        }
        out.push('\n');
    }
    out
}

/// Label, grid, then a blank line separating it from the next frame.
pub fn render_frame(generation: u64, grid: &Grid) -> String {
    let mut frame = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(frame, "{}", generation_label(generation));
    frame.push_str(&render_grid(grid));
    frame.push('\n');
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::grid::CellState::Alive;

    #[test]
    fn labels() {
        assert_eq!(generation_label(0), "Generation: 0 (Initial State)");
        assert_eq!(generation_label(7), "Generation: 7");
    }

    #[test]
    fn renders_rows() {
        let mut grid = Grid::new(3, 2);
        grid.set(0, 1, Alive);
        grid.set(1, 2, Alive);
        assert_eq!(render_grid(&grid), ". ■ . \n. . ■ \n");
    }

    #[test]
    fn frame_layout() {
        let grid = Grid::new(2, 1);
        assert_eq!(render_frame(0, &grid), "Generation: 0 (Initial State)\n. . \n\n");
        assert_eq!(render_frame(3, &grid), "Generation: 3\n. . \n\n");
    }
}

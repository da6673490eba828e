use crate::game::{DrawCommand, Grid, Rgb};

/// Cell-resolution frame buffer fed by draw commands
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    grid: Grid,
    cells: Vec<Rgb>,
    presented: bool,
}

impl Canvas {
    pub fn new(grid: Grid, background: Rgb) -> Self {
        let count = grid.grid_width() as usize * grid.grid_height() as usize;
        Self {
            grid,
            cells: vec![background; count],
            presented: false,
        }
    }

    pub fn columns(&self) -> usize {
        self.grid.grid_width() as usize
    }

    pub fn rows(&self) -> usize {
        self.grid.grid_height() as usize
    }

    /// Whether the last applied command completed the frame
    pub fn is_presented(&self) -> bool {
        self.presented
    }

    pub fn apply(&mut self, command: DrawCommand) {
        match command {
            DrawCommand::Fill(color) => {
                self.cells.fill(color);
                self.presented = false;
            }
            DrawCommand::Cell { position, color } => {
                let (column, row) = self.grid.cell_index(self.grid.wrap(position));
                let index = row as usize * self.columns() + column as usize;
                self.cells[index] = color;
                self.presented = false;
            }
            DrawCommand::Present => self.presented = true,
        }
    }

    pub fn apply_all<I: IntoIterator<Item = DrawCommand>>(&mut self, commands: I) {
        for command in commands {
            self.apply(command);
        }
    }

    pub fn get(&self, column: usize, row: usize) -> Rgb {
        self.cells[row * self.columns() + column]
    }

    /// Rows of colors, top to bottom
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Rgb]> {
        self.cells.chunks(self.columns())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Position;

    const BLACK: Rgb = Rgb(0, 0, 0);
    const RED: Rgb = Rgb(255, 0, 0);
    const BLUE: Rgb = Rgb(0, 0, 255);

    #[test]
    fn test_fill_then_cells() {
        let grid = Grid::new(60, 40, 20);
        let mut canvas = Canvas::new(grid, BLACK);

        canvas.apply_all([
            DrawCommand::Fill(BLUE),
            DrawCommand::Cell {
                position: Position::new(40, 20),
                color: RED,
            },
            DrawCommand::Present,
        ]);

        assert!(canvas.is_presented());
        assert_eq!(canvas.get(2, 1), RED);
        assert_eq!(canvas.get(0, 0), BLUE);
        assert_eq!(canvas.rows_iter().count(), 2);
    }

    #[test]
    fn test_fill_clears_previous_frame() {
        let grid = Grid::new(40, 40, 20);
        let mut canvas = Canvas::new(grid, BLACK);

        canvas.apply(DrawCommand::Cell {
            position: Position::new(20, 20),
            color: RED,
        });
        canvas.apply(DrawCommand::Present);
        canvas.apply(DrawCommand::Fill(BLACK));

        assert!(!canvas.is_presented());
        assert_eq!(canvas.get(1, 1), BLACK);
    }
}

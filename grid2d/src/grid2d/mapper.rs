use super::*;
use tracing::error;

/// Cell coordinates of the world position `(x, y)`, truncating toward zero.
#[inline(always)]
pub(crate) fn cell_coords(origin: Vector2, cell_factor: u32, x: i64, y: i64) -> (i64, i64) {
    let factor = cell_factor as i64;
    ((x - origin.x as i64) / factor, (y - origin.y as i64) / factor)
}

impl<T> Grid2d<T> {
    /// Slot index of the cell containing `point`.
    ///
    /// Negative and out-of-bounds cell coordinates are only rejected in debug
    /// builds. Release builds only reject a final index outside the slot array,
    /// so a column overflow lands in a neighbouring row.
    #[inline(always)]
    pub fn world_to_cell(&self, point: Vector2) -> GridResult<usize> {
        self.cell_at(point.x as i64, point.y as i64)
    }

    /// Slot indices of the lower-left, lower-right, upper-left and upper-right
    /// corners of `rect`. Entries repeat when corners share a cell.
    #[inline(always)]
    pub fn rect_to_cells(&self, rect: &Rect) -> GridResult<[usize; 4]> {
        let [lower_left, lower_right, upper_left, upper_right] = rect.corners();
        Ok([
            self.cell_at(lower_left.0, lower_left.1)?,
            self.cell_at(lower_right.0, lower_right.1)?,
            self.cell_at(upper_left.0, upper_left.1)?,
            self.cell_at(upper_right.0, upper_right.1)?,
        ])
    }

    // World positions are widened to i64 so rectangle far edges cannot overflow.
    #[inline(always)]
    fn cell_at(&self, x: i64, y: i64) -> GridResult<usize> {
        let (cell_x, cell_y) = cell_coords(self.config.origin, self.config.cell_factor, x, y);
        let width = self.config.grid_size.width as i64;
        if cfg!(debug_assertions) {
            if cell_x < 0 || cell_y < 0 {
                error!(x, y, cell_x, cell_y, "negative coordinates are not supported");
                return Err(GridError::NegativeCell {
                    x,
                    y,
                    cell_x,
                    cell_y,
                });
            }
            if cell_x >= width || cell_y >= self.config.grid_size.height as i64 {
                error!(
                    x,
                    y,
                    width = self.config.grid_size.width,
                    height = self.config.grid_size.height,
                    "position is out of bounds"
                );
                return Err(GridError::PositionOutOfBounds {
                    x,
                    y,
                    width: self.config.grid_size.width,
                    height: self.config.grid_size.height,
                });
            }
        }
        self.slot_index(cell_y.saturating_mul(width).saturating_add(cell_x))
    }

    #[inline(always)]
    pub(crate) fn slot_index(&self, index: i64) -> GridResult<usize> {
        if index < 0 || index >= self.slots.len() as i64 {
            error!(index, slot_count = self.slots.len(), "illegal slot position");
            return Err(GridError::CellOutOfRange {
                index,
                slot_count: self.slots.len(),
            });
        }
        Ok(index as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::shapes::Size2;

    fn grid() -> Grid2d<u32> {
        Grid2d::new(Config::new(Vector2::new(100, 200), Size2::new(4, 3), 10))
            .expect("valid config")
    }

    #[test]
    fn cell_coords_subtract_origin_and_truncate() {
        let origin = Vector2::new(100, 200);
        assert_eq!(cell_coords(origin, 10, 100, 200), (0, 0));
        assert_eq!(cell_coords(origin, 10, 109, 219), (0, 1));
        assert_eq!(cell_coords(origin, 10, 139, 229), (3, 2));
    }

    #[test]
    fn cell_coords_truncate_toward_zero() {
        assert_eq!(cell_coords(Vector2::ZERO, 10, -5, -9), (0, 0));
        assert_eq!(cell_coords(Vector2::ZERO, 10, -10, 5), (-1, 0));
    }

    #[test]
    fn world_to_cell_is_row_major() {
        let grid = grid();
        assert_eq!(grid.world_to_cell(Vector2::new(100, 200)).unwrap(), 0);
        assert_eq!(grid.world_to_cell(Vector2::new(135, 200)).unwrap(), 3);
        assert_eq!(grid.world_to_cell(Vector2::new(100, 210)).unwrap(), 4);
        assert_eq!(grid.world_to_cell(Vector2::new(139, 229)).unwrap(), 11);
    }

    #[test]
    fn rect_to_cells_uses_corner_order() {
        let grid = grid();
        let cells = grid.rect_to_cells(&Rect::new(105, 205, 10, 10)).unwrap();
        assert_eq!(cells, [0, 1, 4, 5]);
    }

    #[test]
    fn rect_to_cells_repeats_shared_cells() {
        let grid = grid();
        let cells = grid.rect_to_cells(&Rect::new(101, 201, 2, 2)).unwrap();
        assert_eq!(cells, [0, 0, 0, 0]);
    }

    #[test]
    fn slot_index_rejects_outside_the_array() {
        let grid = grid();
        assert_eq!(grid.slot_index(11).unwrap(), 11);
        assert_eq!(
            grid.slot_index(12),
            Err(GridError::CellOutOfRange {
                index: 12,
                slot_count: 12
            })
        );
        assert!(grid.slot_index(-1).is_err());
    }

    #[test]
    fn rect_to_cells_rejects_edges_past_i32_max() {
        let grid = grid();
        let far = 105 + i32::MAX as i64;
        let err = grid
            .rect_to_cells(&Rect::new(105, 205, i32::MAX, 2))
            .unwrap_err();
        if cfg!(debug_assertions) {
            assert!(matches!(err, GridError::PositionOutOfBounds { x, .. } if x == far));
        } else {
            assert!(matches!(err, GridError::CellOutOfRange { .. }));
        }
    }

    #[cfg(debug_assertions)]
    #[test]
    fn debug_builds_reject_negative_cells() {
        let grid = grid();
        let err = grid.world_to_cell(Vector2::new(80, 200)).unwrap_err();
        assert_eq!(
            err,
            GridError::NegativeCell {
                x: 80,
                y: 200,
                cell_x: -2,
                cell_y: 0
            }
        );
    }

    #[cfg(debug_assertions)]
    #[test]
    fn debug_builds_reject_column_overflow() {
        let grid = grid();
        let err = grid.world_to_cell(Vector2::new(140, 200)).unwrap_err();
        assert!(matches!(err, GridError::PositionOutOfBounds { x: 140, .. }));
    }
}

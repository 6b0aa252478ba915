//! Block grid layout

use super::collision::Rect;
use super::state::Block;
use crate::settings::GridSettings;

/// Lay out a fresh grid of unbroken blocks
///
/// Blocks are emitted column by column, top to bottom within a column. That
/// order is the grid order used for collision checks.
pub fn build_block_grid(grid: &GridSettings) -> Vec<Block> {
    let mut blocks = Vec::with_capacity(grid.block_count());
    let step_x = grid.block_width + grid.gap;
    let step_y = grid.block_height + grid.gap;

    for column in 0..grid.columns {
        for row in 0..grid.rows {
            blocks.push(Block {
                rect: Rect::new(
                    grid.origin.x + column as f32 * step_x,
                    grid.origin.y + row as f32 * step_y,
                    grid.block_width,
                    grid.block_height,
                ),
                broken: false,
                color: grid.row_color(row),
                row,
                column,
            });
        }
    }

    log::debug!("Built {}x{} block grid", grid.columns, grid.rows);
    blocks
}

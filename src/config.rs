//! Display size configuration

use anyhow::bail;

/// Pixel size of the display the two grids are drawn on.
///
/// The maze and the tree share the display horizontally, each getting half
/// of its width.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct DisplayConfig {
    pub width: usize,
    pub height: usize,
    pub cell_size: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            cell_size: 20,
        }
    }
}

impl DisplayConfig {
    /// Grid size `(width, height)` in cells that fits one half of the display
    ///
    /// Returns error, if not even a single cell fits.
    pub fn grid_dimensions(&self) -> anyhow::Result<(usize, usize)> {
        if self.cell_size == 0 {
            bail!("Cell size must be positive");
        }
        let Some(half_cell) = self.cell_size.checked_mul(2) else {
            bail!("Cell size {} is too large", self.cell_size);
        };
        let columns = self.width / half_cell;
        let rows = self.height / self.cell_size;
        if columns == 0 || rows == 0 {
            bail!(
                "Display of {}x{} pixels is too small for {} pixel cells",
                self.width,
                self.height,
                self.cell_size
            );
        }
        Ok((columns, rows))
    }
}

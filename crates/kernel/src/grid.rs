use flagwave_common::{CellCoord, Color, WaveError};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::config::validate_layout;

/// One grid element: a fixed base position plus the per-tick offset and color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    coord: CellCoord,
    base: Vec3,
    pub offset: f32,
    pub color: Color,
}

impl Cell {
    pub fn coord(&self) -> CellCoord {
        self.coord
    }

    /// Resting position on the XZ plane.
    pub fn base_position(&self) -> Vec3 {
        self.base
    }

    /// World position: the base position lifted by the current offset.
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.base.x, self.offset, self.base.z)
    }
}

/// Square grid stored as one contiguous buffer indexed by `x * size + z`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    spacing: f32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocate a `size x size` grid with every cell at rest and painted `color`.
    pub fn new(size: usize, spacing: f32, color: Color) -> Result<Self, WaveError> {
        validate_layout(size, spacing)?;
        let mut cells = Vec::with_capacity(size * size);
        for x in 0..size {
            for z in 0..size {
                cells.push(Cell {
                    coord: CellCoord::new(x, z),
                    base: Vec3::new(x as f32 * spacing, 0.0, z as f32 * spacing),
                    offset: 0.0,
                    color,
                });
            }
        }
        Ok(Self {
            size,
            spacing,
            cells,
        })
    }

    /// Cells along one edge.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn index(&self, x: usize, z: usize) -> Option<usize> {
        (x < self.size && z < self.size).then(|| x * self.size + z)
    }

    pub fn cell(&self, x: usize, z: usize) -> Option<&Cell> {
        self.index(x, z).map(|i| &self.cells[i])
    }

    #[cfg(test)]
    pub(crate) fn cell_mut(&mut self, x: usize, z: usize) -> Option<&mut Cell> {
        self.index(x, z).map(|i| &mut self.cells[i])
    }

    /// All cells in buffer order (x-major).
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }
}

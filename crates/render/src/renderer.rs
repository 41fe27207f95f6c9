use flagwave_kernel::GridSimulator;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer reads the simulator between ticks and produces output. It never
/// mutates the grid.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the current grid state.
    fn render(&self, sim: &GridSimulator) -> Self::Output;
}

/// Line-per-cell dump of the grid for logs and tests.
#[derive(Debug, Default)]
pub struct DebugTextRenderer {
    max_cells: Option<usize>,
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop listing cells after `max_cells` lines.
    pub fn with_limit(max_cells: usize) -> Self {
        Self {
            max_cells: Some(max_cells),
        }
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, sim: &GridSimulator) -> String {
        let grid = sim.grid();
        let mut out = String::new();
        out.push_str(&format!(
            "=== Grid (tick={}, flag={}, t={:.3}s) ===\n",
            sim.tick_count(),
            sim.current_flag(),
            sim.elapsed()
        ));
        out.push_str(&format!(
            "Cells: {} ({}x{}, spacing={:.2})\n",
            grid.len(),
            grid.size(),
            grid.size(),
            grid.spacing()
        ));

        let limit = self.max_cells.unwrap_or(usize::MAX);
        for cell in grid.cells().iter().take(limit) {
            let c = cell.coord();
            let p = cell.position();
            out.push_str(&format!(
                "  [{:>3},{:>3}] pos=({:.2}, {:.2}, {:.2}) color={}\n",
                c.x, c.z, p.x, p.y, p.z, cell.color
            ));
        }
        if grid.len() > limit {
            out.push_str(&format!("  ... {} more\n", grid.len() - limit));
        }
        out
    }
}

/// Top-down view with one glyph per cell.
///
/// Rows run from the highest `z` down to `z = 0` so the flag reads upright,
/// and columns run left to right in increasing `x`.
#[derive(Debug, Default)]
pub struct FlagMapRenderer;

impl FlagMapRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for FlagMapRenderer {
    type Output = String;

    fn render(&self, sim: &GridSimulator) -> String {
        let grid = sim.grid();
        let size = grid.size();
        let mut out = String::with_capacity(size * (size + 1));
        for z in (0..size).rev() {
            for x in 0..size {
                if let Some(cell) = grid.cell(x, z) {
                    out.push(cell.color.glyph());
                }
            }
            out.push('\n');
        }
        tracing::trace!(size, flag = %sim.current_flag(), "flag map rendered");
        out
    }
}

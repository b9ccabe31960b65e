//! Inert reference backend for the engine boundary.
//!
//! `InertEngine` satisfies the full [`Engine`] + [`ViewSource`] surface while
//! simulating nothing: spawned particles persist exactly where they were
//! placed and `advance` only counts ticks. It exists so the binary and the
//! integration tests can drive the viewer end to end; a real simulation drops
//! in by implementing the same two traits.

use tui_sand_types::{GridSize, ParticleKind, ViewerError, PIXEL_CHANNELS};

use crate::{Engine, Region, ViewSource};

pub struct InertEngine {
    size: GridSize,
    cells: Vec<ParticleKind>,
    pixels: Vec<u8>,
    ticks: u64,
    epoch: u64,
}

impl InertEngine {
    /// Construct a backend for the given grid.
    ///
    /// Fails with [`ViewerError::InvalidDimensions`] on a zero extent. The
    /// outermost cells are seeded as walls so a fresh session shows the grid
    /// extents.
    pub fn create(width: u32, height: u32) -> Result<Self, ViewerError> {
        let size = GridSize::new(width, height)?;
        let cell_count = (width as usize) * (height as usize);

        let mut engine = Self {
            size,
            cells: vec![ParticleKind::Empty; cell_count],
            pixels: vec![0; size.pixel_len()],
            ticks: 0,
            epoch: 0,
        };

        for y in 0..height {
            for x in 0..width {
                if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                    engine.put(x, y, ParticleKind::Wall);
                }
            }
        }

        Ok(engine)
    }

    /// Ticks counted so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The particle at a cell, or `None` outside the grid.
    pub fn kind_at(&self, x: u32, y: u32) -> Option<ParticleKind> {
        if !self.size.contains(x, y) {
            return None;
        }
        Some(self.cells[self.size.cell_index(x, y)])
    }

    fn put(&mut self, x: u32, y: u32, kind: ParticleKind) {
        let idx = self.size.cell_index(x, y);
        self.cells[idx] = kind;

        let rgb = kind.rgb();
        let px = idx * PIXEL_CHANNELS;
        self.pixels[px] = rgb.r;
        self.pixels[px + 1] = rgb.g;
        self.pixels[px + 2] = rgb.b;
    }
}

impl Engine for InertEngine {
    fn size(&self) -> GridSize {
        self.size
    }

    fn advance(&mut self) -> Result<(), ViewerError> {
        // No rules run here; the tick counter keeps advance observable.
        self.ticks += 1;
        Ok(())
    }

    fn spawn_at(&mut self, x: u32, y: u32, kind: ParticleKind) -> Result<(), ViewerError> {
        if !self.size.contains(x, y) {
            let requested = (y as usize) * (self.size.width as usize) + (x as usize);
            return Err(ViewerError::OutOfBounds {
                requested,
                available: self.cells.len(),
            });
        }
        self.put(x, y, kind);
        Ok(())
    }

    fn render_text(&self) -> String {
        let width = self.size.width as usize;
        let height = self.size.height as usize;
        let mut out = String::with_capacity((width + 1) * height);
        for y in 0..height {
            for x in 0..width {
                out.push(self.cells[y * width + x].glyph());
            }
            out.push('\n');
        }
        out
    }
}

impl ViewSource for InertEngine {
    fn memory(&self) -> &[u8] {
        &self.pixels
    }

    fn output_region(&self) -> Region {
        Region {
            offset: 0,
            len: self.pixels.len(),
        }
    }

    fn epoch(&self) -> u64 {
        self.epoch
    }
}

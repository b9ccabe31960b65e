//! Shared types module - data structures and constants for the sand viewer
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, engine boundary, terminal
//! rendering).
//!
//! # Grid Dimensions
//!
//! The simulation grid is sized once at engine construction and is immutable
//! for the session:
//!
//! - **Default width**: 256 cells
//! - **Default height**: 256 cells
//! - **Pixel output**: `width * height * 3` bytes, RGB triplets, row-major
//!
//! # Timing and Brush Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed frame interval (~60 FPS) |
//! | `BRUSH_RADIUS` | 6 | Square brush half-extent in cells |
//! | `BRUSH_CAPACITY` | 169 | Upper bound on cells per stroke, (2·6+1)² |
//! | `BOTTOM_MARGIN` | 3 | Rows above the grid bottom excluded from painting |
//!
//! # Examples
//!
//! ```
//! use tui_sand_types::{GridSize, ParticleKind, PIXEL_CHANNELS};
//!
//! let size = GridSize::new(256, 256).unwrap();
//! assert_eq!(size.pixel_len(), 256 * 256 * PIXEL_CHANNELS);
//! assert!(size.contains(0, 255));
//! assert!(!size.contains(256, 0));
//!
//! // Particle kinds round-trip through their wire codes.
//! let kind = ParticleKind::from_code(2).unwrap();
//! assert_eq!(kind, ParticleKind::Sand);
//! assert_eq!(kind.code(), 2);
//! ```

use std::error::Error;
use std::fmt;

/// Default simulation grid width in cells.
pub const DEFAULT_GRID_WIDTH: u32 = 256;

/// Default simulation grid height in cells.
pub const DEFAULT_GRID_HEIGHT: u32 = 256;

/// Fixed frame interval in milliseconds (16ms ≈ 60 FPS).
pub const TICK_MS: u32 = 16;

/// Brush half-extent in cells. A stroke covers the inclusive square
/// `[-BRUSH_RADIUS, BRUSH_RADIUS]²` around the pointer.
pub const BRUSH_RADIUS: i32 = 6;

/// Upper bound on cells a single brush stroke can touch: (2·6+1)².
pub const BRUSH_CAPACITY: usize = 169;

/// Rows at the bottom of the grid that brush strokes never reach.
///
/// The original frontend clipped the brush to `height - 3` on the lower edge
/// only; the asymmetry is preserved as observed.
pub const BOTTOM_MARGIN: u32 = 3;

/// Bytes per pixel in the engine's output buffer (RGB, no alpha).
pub const PIXEL_CHANNELS: usize = 3;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The particle kinds a spawn call can introduce
///
/// Codes match the engine's wire encoding (one byte per kind):
///
/// - **Empty** (0): clears a cell; acts as an eraser when painted
/// - **Wall** (1): static barrier
/// - **Sand** (2): the default brush payload
/// - **Water** (3), **Plant** (4), **Fire** (5): the remaining simulated kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    Empty,
    Wall,
    Sand,
    Water,
    Plant,
    Fire,
}

impl ParticleKind {
    /// Decode a wire code into a kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_sand_types::ParticleKind;
    ///
    /// assert_eq!(ParticleKind::from_code(0), Some(ParticleKind::Empty));
    /// assert_eq!(ParticleKind::from_code(5), Some(ParticleKind::Fire));
    /// assert_eq!(ParticleKind::from_code(9), None);
    /// ```
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(ParticleKind::Empty),
            1 => Some(ParticleKind::Wall),
            2 => Some(ParticleKind::Sand),
            3 => Some(ParticleKind::Water),
            4 => Some(ParticleKind::Plant),
            5 => Some(ParticleKind::Fire),
            _ => None,
        }
    }

    /// The kind's wire code.
    pub fn code(&self) -> u8 {
        match self {
            ParticleKind::Empty => 0,
            ParticleKind::Wall => 1,
            ParticleKind::Sand => 2,
            ParticleKind::Water => 3,
            ParticleKind::Plant => 4,
            ParticleKind::Fire => 5,
        }
    }

    /// Parse a kind from its name (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "empty" => Some(ParticleKind::Empty),
            "wall" => Some(ParticleKind::Wall),
            "sand" => Some(ParticleKind::Sand),
            "water" => Some(ParticleKind::Water),
            "plant" => Some(ParticleKind::Plant),
            "fire" => Some(ParticleKind::Fire),
            _ => None,
        }
    }

    /// Lowercase name, as shown in the HUD.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParticleKind::Empty => "empty",
            ParticleKind::Wall => "wall",
            ParticleKind::Sand => "sand",
            ParticleKind::Water => "water",
            ParticleKind::Plant => "plant",
            ParticleKind::Fire => "fire",
        }
    }

    /// Glyph used by the textual render path, one per cell.
    pub fn glyph(&self) -> char {
        match self {
            ParticleKind::Empty => ' ',
            ParticleKind::Wall => '#',
            ParticleKind::Sand => '.',
            ParticleKind::Water => '~',
            ParticleKind::Plant => '*',
            ParticleKind::Fire => '^',
        }
    }

    /// Color written into the pixel output for this kind.
    pub fn rgb(&self) -> Rgb {
        match self {
            ParticleKind::Empty => Rgb::new(0, 0, 0),
            ParticleKind::Wall => Rgb::new(130, 130, 130),
            ParticleKind::Sand => Rgb::new(230, 200, 110),
            ParticleKind::Water => Rgb::new(64, 120, 220),
            ParticleKind::Plant => Rgb::new(70, 180, 90),
            ParticleKind::Fire => Rgb::new(240, 110, 50),
        }
    }
}

/// Immutable simulation grid dimensions, fixed at engine construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl GridSize {
    /// Validate and build grid dimensions.
    ///
    /// Fails with [`ViewerError::InvalidDimensions`] when either extent is
    /// zero; construction errors are fatal at startup, there is no retry.
    pub fn new(width: u32, height: u32) -> Result<Self, ViewerError> {
        if width == 0 || height == 0 {
            return Err(ViewerError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Whether the cell coordinate lies inside the grid.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Row-major cell index.
    pub fn cell_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Total byte length of the RGB pixel output for this grid.
    pub fn pixel_len(&self) -> usize {
        (self.width as usize) * (self.height as usize) * PIXEL_CHANNELS
    }
}

/// Error taxonomy for the viewer
///
/// Only construction-time errors are fatal; everything else is recovered
/// locally by the frame driver (skipped cell, skipped frame) and never stops
/// the loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerError {
    /// Engine construction requested with a zero extent.
    InvalidDimensions { width: u32, height: u32 },
    /// A byte range or cell coordinate falls outside what the engine reports.
    OutOfBounds { requested: usize, available: usize },
    /// The framebuffer view no longer matches the engine's output region.
    StaleView,
    /// The engine failed an advance/spawn call for an internal reason.
    EngineFailure(String),
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewerError::InvalidDimensions { width, height } => {
                write!(f, "invalid grid dimensions {}x{}", width, height)
            }
            ViewerError::OutOfBounds {
                requested,
                available,
            } => {
                write!(
                    f,
                    "out of bounds: requested {} exceeds available {}",
                    requested, available
                )
            }
            ViewerError::StaleView => write!(f, "framebuffer view is stale"),
            ViewerError::EngineFailure(msg) => write!(f, "engine failure: {}", msg),
        }
    }
}

impl Error for ViewerError {}

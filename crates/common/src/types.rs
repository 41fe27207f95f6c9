use serde::{Deserialize, Serialize};

/// Integer coordinate of a cell in the square grid (X column, Z row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    pub x: usize,
    pub z: usize,
}

impl CellCoord {
    pub fn new(x: usize, z: usize) -> Self {
        Self { x, z }
    }
}

/// Named color swatch assigned to a cell.
///
/// RGBA values match the host engine's built-in color constants, so a
/// renderer can pass them straight through to a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Green,
    White,
    Red,
    Blue,
    Black,
    Yellow,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::Green,
        Color::White,
        Color::Red,
        Color::Blue,
        Color::Black,
        Color::Yellow,
    ];

    /// Linear RGBA components.
    pub fn rgba(self) -> [f32; 4] {
        match self {
            Self::Green => [0.0, 1.0, 0.0, 1.0],
            Self::White => [1.0, 1.0, 1.0, 1.0],
            Self::Red => [1.0, 0.0, 0.0, 1.0],
            Self::Blue => [0.0, 0.0, 1.0, 1.0],
            Self::Black => [0.0, 0.0, 0.0, 1.0],
            Self::Yellow => [1.0, 0.92, 0.016, 1.0],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::White => "white",
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Black => "black",
            Self::Yellow => "yellow",
        }
    }

    /// Single-character glyph used by text renderers.
    pub fn glyph(self) -> char {
        match self {
            Self::Green => 'G',
            Self::White => 'W',
            Self::Red => 'R',
            Self::Blue => 'B',
            Self::Black => 'K',
            Self::Yellow => 'Y',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn cell_coord_orders_by_x_then_z() {
        assert!(CellCoord::new(0, 5) < CellCoord::new(1, 0));
        assert!(CellCoord::new(1, 0) < CellCoord::new(1, 1));
    }

    #[test]
    fn glyphs_are_unique() {
        let glyphs: HashSet<char> = Color::ALL.iter().map(|c| c.glyph()).collect();
        assert_eq!(glyphs.len(), Color::ALL.len());
    }

    #[test]
    fn rgba_is_opaque() {
        for color in Color::ALL {
            assert_eq!(color.rgba()[3], 1.0);
        }
    }

    #[test]
    fn yellow_matches_engine_constant() {
        assert_eq!(Color::Yellow.rgba(), [1.0, 0.92, 0.016, 1.0]);
    }

    #[test]
    fn display_uses_lowercase_name() {
        assert_eq!(Color::Green.to_string(), "green");
        assert_eq!(format!("{}", Color::Yellow), "yellow");
    }
}

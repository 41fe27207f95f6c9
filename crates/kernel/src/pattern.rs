//! Flag patterns and the per-cell coloring rule.

use flagwave_common::Color;
use serde::{Deserialize, Serialize};

/// One coloring rule, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Flag {
    Italy,
    Czechia,
    Belgium,
    Poland,
    Germany,
    France,
    /// Defined for completeness; only reachable with [`PatternCycle::Extended`].
    Netherlands,
}

impl Flag {
    /// Every flag in index order.
    pub const ALL: [Flag; 7] = [
        Flag::Italy,
        Flag::Czechia,
        Flag::Belgium,
        Flag::Poland,
        Flag::Germany,
        Flag::France,
        Flag::Netherlands,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Italy => "Italy",
            Self::Czechia => "Czechia",
            Self::Belgium => "Belgium",
            Self::Poland => "Poland",
            Self::Germany => "Germany",
            Self::France => "France",
            Self::Netherlands => "Netherlands",
        }
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Ring of flags the simulator steps through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternCycle {
    /// Six flags; Netherlands is never produced.
    #[default]
    Classic,
    /// All seven flags.
    Extended,
}

impl PatternCycle {
    /// Number of flags on the ring.
    pub fn flag_count(self) -> usize {
        match self {
            Self::Classic => 6,
            Self::Extended => 7,
        }
    }

    /// Index that follows `index` on this ring.
    pub fn next(self, index: usize) -> usize {
        (index + 1) % self.flag_count()
    }

    pub fn flags(self) -> &'static [Flag] {
        &Flag::ALL[..self.flag_count()]
    }
}

/// Color of cell `(x, z)` under `flag` on a `grid_size` square grid.
///
/// Band edges use `grid_size / 3` with integer division; the Czech
/// thresholds are fractional and compared in floating point.
pub fn color_for(flag: Flag, x: usize, z: usize, grid_size: usize) -> Color {
    let third = grid_size / 3;
    let size = grid_size as f32;

    let vertical_bands = |left, middle, right| {
        if x < third {
            left
        } else if x < 2 * third {
            middle
        } else {
            right
        }
    };
    let horizontal_bands = |top, middle, bottom| {
        if z > 2 * third {
            top
        } else if z > third {
            middle
        } else {
            bottom
        }
    };

    match flag {
        Flag::Italy => vertical_bands(Color::Green, Color::White, Color::Red),
        Flag::Czechia => {
            let (xf, zf) = (x as f32, z as f32);
            if xf < size * 0.5 && zf > size * 0.4 {
                Color::Blue
            } else if zf > size * 0.6 {
                Color::Red
            } else {
                Color::White
            }
        }
        Flag::Belgium => vertical_bands(Color::Black, Color::Yellow, Color::Red),
        Flag::Poland => {
            if z > grid_size / 2 {
                Color::Red
            } else {
                Color::White
            }
        }
        Flag::Germany => horizontal_bands(Color::Black, Color::Red, Color::Yellow),
        Flag::France => vertical_bands(Color::Blue, Color::White, Color::Red),
        Flag::Netherlands => horizontal_bands(Color::Red, Color::White, Color::Blue),
    }
}

/// Index-based lookup. Indices past the last defined flag have no rule.
pub fn color_for_index(index: usize, x: usize, z: usize, grid_size: usize) -> Option<Color> {
    Flag::from_index(index).map(|flag| color_for(flag, x, z, grid_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn italy_three_by_three_first_row() {
        assert_eq!(color_for(Flag::Italy, 0, 0, 3), Color::Green);
        assert_eq!(color_for(Flag::Italy, 1, 0, 3), Color::White);
        assert_eq!(color_for(Flag::Italy, 2, 0, 3), Color::Red);
    }

    #[test]
    fn poland_splits_on_half_height() {
        assert_eq!(color_for(Flag::Poland, 0, 2, 3), Color::Red);
        assert_eq!(color_for(Flag::Poland, 0, 1, 3), Color::White);
        assert_eq!(color_for(Flag::Poland, 0, 0, 3), Color::White);
    }

    #[test]
    fn czechia_regions_on_default_grid() {
        // 30 cells: blue when x < 15 and z > 12, red when z > 18, else white.
        assert_eq!(color_for(Flag::Czechia, 0, 20, 30), Color::Blue);
        assert_eq!(color_for(Flag::Czechia, 14, 13, 30), Color::Blue);
        assert_eq!(color_for(Flag::Czechia, 15, 20, 30), Color::Red);
        assert_eq!(color_for(Flag::Czechia, 20, 12, 30), Color::White);
        assert_eq!(color_for(Flag::Czechia, 0, 12, 30), Color::White);
    }

    #[test]
    fn belgium_and_france_share_italy_bands() {
        for x in 0..30 {
            let italy = color_for(Flag::Italy, x, 0, 30);
            let (belgium, france) = match italy {
                Color::Green => (Color::Black, Color::Blue),
                Color::White => (Color::Yellow, Color::White),
                _ => (Color::Red, Color::Red),
            };
            assert_eq!(color_for(Flag::Belgium, x, 7, 30), belgium);
            assert_eq!(color_for(Flag::France, x, 7, 30), france);
        }
    }

    #[test]
    fn germany_horizontal_bands() {
        assert_eq!(color_for(Flag::Germany, 5, 0, 30), Color::Yellow);
        assert_eq!(color_for(Flag::Germany, 5, 10, 30), Color::Yellow);
        assert_eq!(color_for(Flag::Germany, 5, 11, 30), Color::Red);
        assert_eq!(color_for(Flag::Germany, 5, 20, 30), Color::Red);
        assert_eq!(color_for(Flag::Germany, 5, 21, 30), Color::Black);
    }

    /// Band edges are multiples of `grid_size / 3`, so a 5-wide grid gets
    /// bands of 1, 1 and 3 cells.
    #[test]
    fn two_thirds_edge_uses_twice_the_third() {
        assert_eq!(color_for(Flag::Italy, 0, 0, 5), Color::Green);
        assert_eq!(color_for(Flag::Italy, 1, 0, 5), Color::White);
        assert_eq!(color_for(Flag::Italy, 2, 0, 5), Color::Red);
        assert_eq!(color_for(Flag::Germany, 0, 2, 5), Color::Red);
        assert_eq!(color_for(Flag::Germany, 0, 3, 5), Color::Black);
        assert_eq!(color_for(Flag::Germany, 0, 1, 5), Color::Yellow);
    }

    #[test]
    fn netherlands_rule_is_defined() {
        assert_eq!(color_for(Flag::Netherlands, 0, 29, 30), Color::Red);
        assert_eq!(color_for(Flag::Netherlands, 0, 15, 30), Color::White);
        assert_eq!(color_for(Flag::Netherlands, 0, 0, 30), Color::Blue);
    }

    #[test]
    fn coloring_is_pure() {
        for flag in Flag::ALL {
            for x in 0..7 {
                for z in 0..7 {
                    assert_eq!(color_for(flag, x, z, 7), color_for(flag, x, z, 7));
                }
            }
        }
    }

    #[test]
    fn index_lookup_matches_flag_lookup() {
        assert_eq!(color_for_index(0, 2, 0, 3), Some(Color::Red));
        assert_eq!(color_for_index(6, 0, 0, 3), Some(Color::Blue));
        assert_eq!(color_for_index(7, 0, 0, 3), None);
    }

    #[test]
    fn flag_index_round_trips() {
        for (i, flag) in Flag::ALL.iter().enumerate() {
            assert_eq!(flag.index(), i);
            assert_eq!(Flag::from_index(i), Some(*flag));
        }
        assert_eq!(Flag::from_index(7), None);
    }

    /// The classic ring stops at France even though a seventh rule exists.
    #[test]
    fn classic_cycle_never_reaches_netherlands() {
        let cycle = PatternCycle::Classic;
        assert_eq!(cycle.flag_count(), 6);
        assert!(!cycle.flags().contains(&Flag::Netherlands));

        let mut index = 0;
        for _ in 0..100 {
            index = cycle.next(index);
            assert!(index < 6);
        }
        assert_eq!(cycle.next(5), 0);
    }

    #[test]
    fn extended_cycle_includes_netherlands() {
        let cycle = PatternCycle::Extended;
        assert_eq!(cycle.flag_count(), 7);
        assert_eq!(cycle.next(5), 6);
        assert_eq!(cycle.next(6), 0);
        assert_eq!(cycle.flags().last(), Some(&Flag::Netherlands));
    }
}

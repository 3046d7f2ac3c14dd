/// A named arrangement of live cells that can be stamped onto a grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    /// Offsets of live cells relative to the pattern's top-left corner
    pub cells: Vec<(usize, usize)>,
}

impl Pattern {
    /// Create a new pattern from alive cell offsets
    pub fn new(name: &'static str, description: &'static str, cells: &[(usize, usize)]) -> Self {
        let width = cells.iter().map(|&(x, _)| x).max().map_or(0, |x| x + 1);
        let height = cells.iter().map(|&(_, y)| y).max().map_or(0, |y| y + 1);
        Self {
            name,
            description,
            width,
            height,
            cells: cells.to_vec(),
        }
    }

    /// Absolute positions of the pattern anchored at `(x, y)`.
    /// Cells whose position overflows `usize` are skipped.
    pub fn positions_at(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .filter_map(move |&(dx, dy)| Some((x.checked_add(dx)?, y.checked_add(dy)?)))
    }
}

/// Classic patterns
pub mod presets {
    use super::Pattern;

    /// Glider: smallest spaceship, travels (+1, +1) every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
        )
    }

    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", &[(0, 1), (1, 1), (2, 1)])
    }

    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
        )
    }

    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            &[(0, 0), (1, 0), (0, 1), (3, 2), (2, 3), (3, 3)],
        )
    }

    /// Pulsar, the classic period 3 oscillator
    pub fn pulsar() -> Pattern {
        let arms = [2, 3, 4, 8, 9, 10];
        let spokes = [0, 5, 7, 12];
        let cells: Vec<_> = spokes
            .iter()
            .flat_map(|&s| arms.iter().flat_map(move |&a| [(a, s), (s, a)]))
            .collect();
        Pattern::new("Pulsar", "Oscillator (period 3)", &cells)
    }

    /// Lightweight spaceship
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            &[(1, 0), (4, 0), (0, 1), (0, 2), (4, 2), (0, 3), (1, 3), (2, 3), (3, 3)],
        )
    }

    /// Gosper glider gun, emits a glider every 30 generations
    pub fn glider_gun() -> Pattern {
        Pattern::new(
            "Gosper Glider Gun",
            "Produces gliders (period 30)",
            &[
                (0, 4), (0, 5), (1, 4), (1, 5),
                (10, 4), (10, 5), (10, 6), (11, 3), (11, 7), (12, 2), (12, 8),
                (13, 2), (13, 8), (14, 5), (15, 3), (15, 7), (16, 4), (16, 5),
                (16, 6), (17, 5),
                (20, 2), (20, 3), (20, 4), (21, 2), (21, 3), (21, 4), (22, 1),
                (22, 5), (24, 0), (24, 1), (24, 5), (24, 6),
                (34, 2), (34, 3), (35, 2), (35, 3),
            ],
        )
    }

    /// R-pentomino, a methuselah that settles after 1103 generations
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
        )
    }

    /// Acorn, a methuselah that settles after 5206 generations
    pub fn acorn() -> Pattern {
        Pattern::new(
            "Acorn",
            "Methuselah - stabilizes at gen 5206",
            &[(1, 0), (3, 1), (0, 2), (1, 2), (4, 2), (5, 2), (6, 2)],
        )
    }

    pub fn block() -> Pattern {
        Pattern::new("Block", "Still life", &[(0, 0), (1, 0), (0, 1), (1, 1)])
    }

    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            pulsar(),
            lwss(),
            glider_gun(),
            r_pentomino(),
            acorn(),
            block(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box() {
        let glider = presets::glider();
        assert_eq!((glider.width, glider.height), (3, 3));
        let gun = presets::glider_gun();
        assert_eq!((gun.width, gun.height), (36, 9));
        assert_eq!(gun.cells.len(), 36);
    }

    #[test]
    fn test_empty_pattern() {
        let empty = Pattern::new("Empty", "", &[]);
        assert_eq!((empty.width, empty.height), (0, 0));
    }

    #[test]
    fn test_positions_at_offsets() {
        let block = presets::block();
        let cells: Vec<_> = block.positions_at(5, 7).collect();
        assert_eq!(cells, vec![(5, 7), (6, 7), (5, 8), (6, 8)]);
    }

    #[test]
    fn test_positions_at_skips_overflow() {
        let block = presets::block();
        let cells: Vec<_> = block.positions_at(usize::MAX, 0).collect();
        assert_eq!(cells, vec![(usize::MAX, 0), (usize::MAX, 1)]);
    }

    #[test]
    fn test_pulsar_and_acorn_shapes() {
        let pulsar = presets::pulsar();
        assert_eq!((pulsar.width, pulsar.height), (13, 13));
        assert_eq!(pulsar.cells.len(), 48);
        assert!(pulsar.cells.contains(&(0, 2)));
        assert!(pulsar.cells.contains(&(10, 12)));

        let acorn = presets::acorn();
        assert_eq!((acorn.width, acorn.height), (7, 3));
        assert_eq!(acorn.cells.len(), 7);
        assert_eq!(presets::all_patterns().len(), 10);
    }
}

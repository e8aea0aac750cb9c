use std::collections::BTreeMap;

/// Occurrence count of each face value in a roll.
///
/// Built once per scoring call and never mutated afterward. Faces iterate in
/// ascending order, which the straight rules rely on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollTally {
    counts: BTreeMap<u32, u32>,
}

impl RollTally {
    /// Tally a roll. An empty roll gives an empty tally.
    pub fn from_roll(dice: &[u32]) -> Self {
        let mut counts = BTreeMap::new();
        for &face in dice {
            *counts.entry(face).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// How many dice show `face`.
    pub fn count(&self, face: u32) -> u32 {
        self.counts.get(&face).copied().unwrap_or(0)
    }

    /// Number of distinct faces.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Distinct faces, ascending.
    pub fn faces(&self) -> impl Iterator<Item = u32> + '_ {
        self.counts.keys().copied()
    }

    /// Largest count of any single face (0 when empty).
    pub fn max_count(&self) -> u32 {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Sum of every die (face × count over all faces).
    ///
    /// Accumulates in `u64`; faces are unbounded, so a few large dice overflow `u32`.
    pub fn sum(&self) -> u64 {
        self.counts
            .iter()
            .map(|(&face, &count)| u64::from(face) * u64::from(count))
            .sum()
    }

    /// Number of adjacent distinct-face pairs that are not consecutive.
    ///
    /// A gap of any width counts once: `[1, 2, 3, 4, 8]` has one gap.
    pub fn gaps(&self) -> usize {
        let faces: Vec<u32> = self.faces().collect();
        faces.windows(2).filter(|w| w[1] - w[0] != 1).count()
    }
}

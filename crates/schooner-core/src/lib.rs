pub mod category;
pub mod config;
pub mod roll;

pub use category::{Category, ParseCategoryError};
pub use config::ScoringConfig;
pub use roll::RollTally;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::category::Category;

    /// Every ordered roll of `dice` dice with faces `1..=max_face`.
    pub fn all_rolls(max_face: u32, dice: usize) -> Vec<Vec<u32>> {
        let mut rolls = vec![Vec::new()];
        for _ in 0..dice {
            rolls = rolls
                .into_iter()
                .flat_map(|prefix| {
                    (1..=max_face).map(move |face| {
                        let mut next = prefix.clone();
                        next.push(face);
                        next
                    })
                })
                .collect();
        }
        rolls
    }

    /// Assert `scorer` gives each roll in `cases` its expected score.
    pub fn assert_scores(
        scorer: impl Fn(Category, &[u32]) -> u64,
        category: Category,
        cases: &[(&[u32], u64)],
    ) {
        for (i, &(roll, expected)) in cases.iter().enumerate() {
            let got = scorer(category, roll);
            assert_eq!(
                got, expected,
                "{category} roll #{i} {roll:?}: expected {expected}, got {got}"
            );
        }
    }

    /// Sort categories into score card order for set comparisons.
    pub fn sorted(mut categories: Vec<Category>) -> Vec<Category> {
        categories.sort();
        categories
    }
}

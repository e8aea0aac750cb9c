use schooner_core::config::CONFIG_ENV_VAR;
use schooner_scoring::{Category, ScoringConfig, Scorer};

// Single test in this binary: it owns the process environment.
#[test]
fn scorer_load_follows_env_var_then_defaults() {
    let path = std::env::temp_dir().join(format!(
        "schooner-scorer-load-{}.toml",
        std::process::id()
    ));
    std::fs::write(&path, "full_house = 12\nschooner = 99\n").unwrap();

    // SAFETY: no other test in this binary touches the environment.
    unsafe { std::env::set_var(CONFIG_ENV_VAR, &path) };
    let scorer = Scorer::load();
    unsafe { std::env::set_var(CONFIG_ENV_VAR, path.with_extension("missing")) };
    let fallback = Scorer::load();
    unsafe { std::env::remove_var(CONFIG_ENV_VAR) };
    std::fs::remove_file(&path).unwrap();

    assert_eq!(scorer.score(Category::FullHouse, &[2, 2, 3, 3, 3]), 12);
    assert_eq!(scorer.score(Category::Schooner, &[4, 4, 4, 4, 4]), 99);
    assert_eq!(scorer.score(Category::LargeStraight, &[1, 2, 3, 4, 5]), 40);
    assert_eq!(
        scorer.top_categories(&[2, 2, 3, 3, 3]),
        vec![Category::ThreeOfAKind, Category::Chance]
    );
    assert_eq!(fallback.config(), &ScoringConfig::default());
}

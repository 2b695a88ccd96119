use snowbft_config::{load_config, SnowballConfig};
use snowbft_test::{
    apply_polls, init_logging, script, BinaryConsensus, Choice, UnaryConsensus, UnarySnowball,
};

fn write_config(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn uncontested_decision_finalizes_with_beta_virtuous() {
    init_logging();

    let dir = tempfile::TempDir::with_prefix("snowbft-lifecycle-").unwrap();
    let path = write_config(&dir, "[snowball]\nbeta_virtuous = 2\nbeta_rogue = 4\n");
    let config = load_config(&path, Some("SNOWBFT_LIFECYCLE_TEST")).unwrap();

    let mut decision = UnarySnowball::new(config.snowball.beta_virtuous);
    decision.record_successful_poll();
    decision.record_unsuccessful_poll();
    decision.record_successful_poll();
    assert!(!decision.finalized());

    decision.record_successful_poll();
    assert!(decision.finalized());
}

#[test]
fn contested_decision_finalizes_with_beta_rogue() {
    init_logging();

    let dir = tempfile::TempDir::with_prefix("snowbft-lifecycle-").unwrap();
    let path = write_config(&dir, "[snowball]\nbeta_virtuous = 2\nbeta_rogue = 3\n");
    let config = load_config(&path, Some("SNOWBFT_LIFECYCLE_TEST")).unwrap();

    let SnowballConfig {
        beta_virtuous,
        beta_rogue,
    } = config.snowball;

    // One successful poll for the original option, then a conflict is observed
    let mut unary = UnarySnowball::new(beta_virtuous);
    unary.record_successful_poll();

    let mut binary = unary.extend(beta_rogue, Choice::Zero);
    assert_eq!(binary.preference(), Choice::Zero);

    // The network swings towards the conflicting option
    apply_polls(&mut binary, &script("1 x 1 1"));
    assert_eq!(binary.preference(), Choice::One);
    assert!(!binary.finalized());

    apply_polls(&mut binary, &script("1"));
    assert!(binary.finalized());
    assert_eq!(binary.preference(), Choice::One);

    tracing::info!(%binary, "Decision finalized");
}

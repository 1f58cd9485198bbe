use std::fs;

use regen_config::ConsensusPolicy;

use crate::profile::load_from_file;

#[test]
fn config_file_overrides_defaults() {
    let path = std::env::temp_dir().join(format!("regen-config-{}.json", std::process::id()));
    fs::write(
        &path,
        r#"{
            "calibration": {
                "reference_window": { "left": 0, "top": 0, "width": 1280, "height": 720 },
                "reference_rect": { "left": 900, "top": 650, "right": 960, "bottom": 666 }
            },
            "sampler": { "policy": "majority", "interval_ms": 100 }
        }"#,
    )
    .unwrap();

    let config = load_from_file(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(config.calibration.reference_window.width, 1280);
    assert_eq!(config.calibration.reference_rect.width(), 60);
    assert_eq!(config.sampler.policy, ConsensusPolicy::Majority);
    assert_eq!(config.sampler.interval_ms, 100);
    assert_eq!(config.tracker.regen_interval_secs, 30);
}

#[test]
fn unreadable_config_is_an_error() {
    let path = std::env::temp_dir().join("regen-config-does-not-exist.json");
    assert!(load_from_file(&path).is_err());
}

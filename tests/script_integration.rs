//! Integration tests for access scripts and the shared engine.
//!
//! These tests verify cross-component behavior that unit tests don't cover.

use std::fs;
use std::thread;

use fifosim::{render, EngineConfig, Error, EvictionEngine, Script, SharedEngine};
use tempfile::tempdir;

/// Test a script file driving a full session.
#[test]
fn test_script_file_session() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.txt");
    fs::write(
        &path,
        "# classic trace\ncapacity 3\nP1 P2 P3 P4 P5\naccess P1\nP2 P6\n",
    )
    .unwrap();

    let script = Script::from_file(&path).unwrap();
    let mut engine = EvictionEngine::new();
    let steps = script.run(&mut engine).unwrap();

    assert_eq!(steps.len(), 9);
    assert_eq!(engine.capacity(), 3);
    assert_eq!(engine.frame_labels(), vec!["P1", "P2", "P6"]);
    assert_eq!(
        render::counters(&engine.state()),
        "Accesses: 8 | Faults: 8 | Hits: 0 | Hit Rate: 0.0%"
    );
}

#[test]
fn test_script_file_missing() {
    let dir = tempdir().unwrap();
    let err = Script::from_file(dir.path().join("nope.txt")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_config_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    let config = EngineConfig {
        capacity: 5,
        max_capacity: 12,
    };
    fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();

    let loaded = EngineConfig::from_reader(fs::File::open(&path).unwrap()).unwrap();
    assert_eq!(loaded, config);

    let mut engine = EvictionEngine::with_config(loaded).unwrap();
    assert!(engine.resize(12).is_ok());
}

/// Resets and resizes in a script apply mid-stream.
#[test]
fn test_script_reset_and_shrink() {
    let script = Script::parse("A B C D\nresize 2\nreset\nE E\n").unwrap();
    let mut engine = EvictionEngine::new();
    script.run(&mut engine).unwrap();

    assert_eq!(engine.capacity(), 2);
    assert_eq!(engine.frame_labels(), vec!["E"]);
    assert_eq!(engine.hits(), 1);
    assert_eq!(engine.faults(), 1);
}

/// Test concurrent callers on one shared engine.
#[test]
fn test_concurrent_accesses() {
    let shared = SharedEngine::new(
        EvictionEngine::with_config(EngineConfig::with_capacity(3)).unwrap(),
    );

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let shared = shared.clone();
            thread::spawn(move || {
                for i in 0..250 {
                    shared.access(&format!("P{}", (i + t) % 6)).unwrap();
                    if i % 50 == 0 {
                        shared.resize(1 + (i / 50) % 3).unwrap();
                    }
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    let state = shared.state();
    assert_eq!(state.stats.accesses, 1000);
    assert_eq!(state.stats.hits + state.stats.faults, 1000);
    assert!(state.frames.len() <= state.capacity);
}

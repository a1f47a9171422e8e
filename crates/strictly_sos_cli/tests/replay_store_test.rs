//! Tests for saving and loading replay files.

use chrono::{TimeZone, Utc};
use strictly_sos::{Game, GameSettings, MoveSelector, Recorder, Seat, Variant};
use strictly_sos_cli::{SosConfig, TerminalSession, load, save, save_at};

fn finished_record(seed: u64) -> strictly_sos::GameRecord {
    let settings = GameSettings::new(Variant::General, 4, true, true);
    let mut game = Game::with_selector(settings, MoveSelector::seeded(seed));
    let recorder = Recorder::new();
    recorder.attach(&mut game);
    game.start().unwrap();
    assert!(game.is_game_over());
    recorder.finish(game.settings())
}

#[test]
fn test_saved_replay_loads_and_replays() {
    let dir = tempfile::tempdir().unwrap();
    let record = finished_record(3);

    let path = save(dir.path(), &record).unwrap();
    assert_eq!(path.extension().unwrap(), "replay");
    assert!(
        path.file_name()
            .unwrap()
            .to_string_lossy()
            .ends_with("-General-BtrueRtrue.replay")
    );

    let loaded = load(&path).unwrap();
    assert_eq!(loaded, record);

    let replayed = loaded.replay().unwrap();
    assert!(replayed.is_game_over());
    assert_eq!(replayed.state().ledger().len(), 16);
    assert!(!replayed.is_current_seat_automated());
}

#[test]
fn test_save_creates_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("replays").join("today");
    let at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();

    let path = save_at(&nested, &finished_record(4), &at).unwrap();
    assert_eq!(
        path,
        nested.join("2025-01-02-03-04-05-000-General-BtrueRtrue.replay")
    );
    assert!(path.exists());
}

#[test]
fn test_corrupt_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.replay");
    std::fs::write(&path, "{ not json").unwrap();
    let err = load(&path).unwrap_err();
    assert!(err.message.starts_with("JSON error"));
}

#[test]
fn test_recorded_terminal_game_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("sos.toml");
    std::fs::write(&config_path, "variant = \"Simple\"\nred = \"computer\"\nseed = 7\n").unwrap();
    let config = SosConfig::from_file(&config_path).unwrap();

    let mut game = Game::with_selector(config.settings(), MoveSelector::seeded(7));
    let recorder = Recorder::new();
    recorder.attach(&mut game);
    let mut session = TerminalSession::new(game);

    // Blue tries each cell in turn; rejected lines are reported and skipped.
    let input: String = (0..3)
        .flat_map(|row| (0..3).map(move |col| format!("{row} {col} S\n")))
        .collect();
    let mut out = Vec::new();
    session.run(input.as_bytes(), &mut out).unwrap();

    let game = session.into_game();
    let record = recorder.finish(game.settings());
    let path = save(dir.path(), &record).unwrap();
    let replayed = load(&path).unwrap().replay().unwrap();

    assert_eq!(replayed.state().grid(), game.state().grid());
    assert_eq!(replayed.score(Seat::Blue), game.score(Seat::Blue));
    assert_eq!(replayed.score(Seat::Red), game.score(Seat::Red));
}

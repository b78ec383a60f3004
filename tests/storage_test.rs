//! Integration tests for storage functionality

use nfl_wins::{storage::*, PlayerId, Position, Season, StatsError, TeamId};
use std::path::Path;

fn fixture_path() -> &'static Path {
    Path::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/sample_dataset.json"
    ))
}

fn create_loaded_db() -> StatsDatabase {
    let dataset = Dataset::from_json_file(fixture_path()).unwrap();
    let mut db = StatsDatabase::open_in_memory().unwrap();
    db.load_dataset(&dataset, false).unwrap();
    db
}

#[test]
fn test_fixture_parses_with_position_aliases() {
    let dataset = Dataset::from_json_file(fixture_path()).unwrap();
    assert_eq!(dataset.seasons, vec![Season::new(2011)]);
    assert_eq!(dataset.teams.len(), 3);

    let sproles = dataset
        .players
        .iter()
        .find(|p| p.name == "Darren Sproles")
        .unwrap();
    assert_eq!(sproles.position, Position::RB);

    let woodson = dataset
        .players
        .iter()
        .find(|p| p.name == "Charles Woodson")
        .unwrap();
    assert_eq!(woodson.position, Position::DB);
}

#[test]
fn test_load_fixture_counts() {
    let db = create_loaded_db();
    let counts = db.table_counts().unwrap();
    assert_eq!(
        counts,
        TableCounts {
            players: 10,
            teams: 3,
            seasons: 1,
            player_team_seasons: 10,
            player_stats: 10,
            team_stats: 3,
        }
    );
}

#[test]
fn test_lookups_after_load() {
    let db = create_loaded_db();

    let brees = db.get_player(PlayerId::new(1)).unwrap().unwrap();
    assert_eq!(brees.name, "Drew Brees");
    assert_eq!(brees.position, Position::QB);
    assert!(db.get_player(PlayerId::new(999)).unwrap().is_none());

    let packers = db.get_team_by_name("Green Bay Packers").unwrap().unwrap();
    assert_eq!(packers.id, TeamId::new(2));
    assert!(db.get_team_by_name("Green Bay").unwrap().is_none());
}

#[test]
fn test_leading_receivers_after_load() {
    let db = create_loaded_db();
    let receivers = db.leading_receivers(None).unwrap();
    assert_eq!(receivers.len(), 3);

    let by_team = |team: u32| {
        receivers
            .iter()
            .find(|r| r.team == TeamId::new(team))
            .unwrap()
    };
    assert_eq!(by_team(1).player_name, "Jimmy Graham");
    assert_eq!(by_team(1).position, Position::TE);
    assert_eq!(by_team(1).receiving_yards, 1310);
    assert_eq!(by_team(2).player_name, "Jordy Nelson");
    assert_eq!(by_team(3).player_name, "Reggie Wayne");

    assert!(db.leading_receivers(Some(Season::new(2012))).unwrap().is_empty());
}

#[test]
fn test_reload_duplicates_fail_and_keep_data() {
    let dataset = Dataset::from_json_file(fixture_path()).unwrap();
    let mut db = StatsDatabase::open_in_memory().unwrap();
    db.load_dataset(&dataset, false).unwrap();

    let result = db.load_dataset(&dataset, false);
    assert!(matches!(result, Err(StatsError::Duplicate { .. })));
    assert_eq!(db.table_counts().unwrap().players, 10);

    db.clear_all_data().unwrap();
    db.load_dataset(&dataset, false).unwrap();
    assert_eq!(db.table_counts().unwrap().team_stats, 3);
}

#[test]
fn test_dataset_with_dangling_reference_is_rejected() {
    let json = r#"{
        "seasons": [2011],
        "teams": [{ "id": 1, "name": "New Orleans Saints" }],
        "players": [{ "id": 1, "name": "Drew Brees", "position": "QB" }],
        "player_team_seasons": [{ "player": 1, "season": 2011, "team": 2 }]
    }"#;
    let dataset: Dataset = serde_json::from_str(json).unwrap();
    let mut db = StatsDatabase::open_in_memory().unwrap();

    let err = db.load_dataset(&dataset, false).unwrap_err();
    assert!(matches!(err, StatsError::ForeignKey { .. }));
    assert_eq!(db.table_counts().unwrap(), TableCounts::default());
}

#[test]
fn test_dataset_with_unknown_position_fails_to_parse() {
    let json = r#"{ "players": [{ "id": 1, "name": "Mystery", "position": "QX" }] }"#;
    assert!(serde_json::from_str::<Dataset>(json).is_err());
}

#[test]
fn test_file_database_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stats.db");

    {
        let dataset = Dataset::from_json_file(fixture_path()).unwrap();
        let mut db = StatsDatabase::open(&path).unwrap();
        db.load_dataset(&dataset, false).unwrap();
    }

    let db = StatsDatabase::open_read_only(&path).unwrap();
    assert_eq!(db.table_counts().unwrap().players, 10);
}

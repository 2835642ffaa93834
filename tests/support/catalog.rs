use std::path::PathBuf;

use tempfile::TempDir;

/// Bundled sample catalog.
pub fn demo_catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/bets.json")
}

/// Bundled sample CSV sheets.
pub fn demo_csv_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/csv")
}

/// Bundled sample configuration.
pub fn demo_config_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/multileg.toml")
}

/// Write `contents` to `name` inside a fresh temp dir.
///
/// The file lives as long as the returned guard.
pub fn write_temp(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write temp file");
    (dir, path)
}

/// Write several files into one fresh temp dir.
pub fn write_temp_files(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    for (name, contents) in files {
        std::fs::write(dir.path().join(name), contents).expect("write temp file");
    }
    dir
}

/// Catalog JSON with `games` games, each offering the given odds.
pub fn uniform_catalog_json(games: usize, odds: &[f64]) -> String {
    let games: Vec<_> = (0..games)
        .map(|g| {
            let bets: Vec<_> = odds
                .iter()
                .enumerate()
                .map(|(i, o)| {
                    serde_json::json!({
                        "playerId": format!("g{g}-p{i}"),
                        "playerName": format!("Player {g}.{i}"),
                        "market": "ATS",
                        "odds": o,
                        "team": "Team",
                    })
                })
                .collect();
            serde_json::json!({ "gameId": format!("g{g}"), "bets": bets })
        })
        .collect();
    serde_json::Value::Array(games).to_string()
}

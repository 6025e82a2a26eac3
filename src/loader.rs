//! JSON file helpers for levels, settings and replays

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, json).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::LevelData;

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_json::<LevelData>(Path::new("/nonexistent/level.json")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let path = std::env::temp_dir().join(format!("coin-hop-bad-{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();
        let err = read_json::<LevelData>(&path).unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
        assert!(err.to_string().contains("could not parse"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_level_round_trip_through_file() {
        let path = std::env::temp_dir().join(format!("coin-hop-level-{}.json", std::process::id()));
        let level = LevelData::builtin();
        write_json(&path, &level).unwrap();
        assert_eq!(read_json::<LevelData>(&path).unwrap(), level);
        let _ = std::fs::remove_file(&path);
    }
}

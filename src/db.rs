use std::path::PathBuf;
use std::time::Instant;

use serde_json::value::RawValue;
use tracing::log;

use crate::error::ApiError;

/// Read only store of flat JSON files in one directory, keyed by file stem.
pub struct Db {
    pub root: PathBuf,
}

impl Db {
    pub fn new(root: &str) -> Db {
        Db { root: PathBuf::from(root) }
    }

    /// Reads `<root>/<key>.json` from disk on every call and returns the document verbatim.
    pub fn read_raw(&self, key: &str) -> Result<Box<RawValue>, ApiError> {
        let before = Instant::now();
        let path = self.get_path(key);
        let path_str = path.display().to_string();
        let data = std::fs::read_to_string(&path)
            .map_err(|source| ApiError::Io { path: path_str.clone(), source })?;
        let raw = RawValue::from_string(data.trim().to_string())
            .map_err(|source| ApiError::Json { path: path_str.clone(), source })?;
        log::debug!("[DB] Read from file {path_str} {:.2?}", before.elapsed());
        Ok(raw)
    }

    fn get_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

#[cfg(test)]
mod tests {
    use tempdir::TempDir;

    use crate::error::ApiError;

    use super::Db;

    #[test]
    fn read_verbatim() {
        let dir = TempDir::new("db_test").unwrap();
        let content = r#"[{"name":"Premier League","id":"premier-league","z":1,"a":2}]"#;
        std::fs::write(dir.path().join("leagues-all.json"), format!("{content}\n")).unwrap();
        let db = Db::new(dir.path().to_str().unwrap());

        let first = db.read_raw("leagues-all").unwrap();
        let second = db.read_raw("leagues-all").unwrap();

        assert_eq!(first.get(), content);
        assert_eq!(first.get(), second.get());
    }

    #[test]
    fn rereads_changed_file() {
        let dir = TempDir::new("db_test").unwrap();
        let db = Db::new(dir.path().to_str().unwrap());
        std::fs::write(dir.path().join("cups-all.json"), "[1]").unwrap();
        assert_eq!(db.read_raw("cups-all").unwrap().get(), "[1]");
        std::fs::write(dir.path().join("cups-all.json"), "[1,2]").unwrap();
        assert_eq!(db.read_raw("cups-all").unwrap().get(), "[1,2]");
    }

    #[test]
    fn missing_and_invalid_files() {
        let dir = TempDir::new("db_test").unwrap();
        let db = Db::new(dir.path().to_str().unwrap());
        assert!(matches!(db.read_raw("cups-home"), Err(ApiError::Io { .. })));

        std::fs::write(dir.path().join("cups-home.json"), "{ not json").unwrap();
        assert!(matches!(db.read_raw("cups-home"), Err(ApiError::Json { .. })));
    }
}

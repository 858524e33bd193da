use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::debug;

use crate::user::UserRecord;
use crate::{create_user, StoreError, UserRegistry};

const INDENT: &[u8] = b"    ";

impl UserRegistry {
    /// Creates a registry from the document at `path`, or an empty one if
    /// the file does not exist.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let mut registry = UserRegistry::new();
        registry.load(path)?;
        Ok(registry)
    }

    /// Replaces the contents with the users stored at `path`.
    ///
    /// A missing file leaves the registry untouched. Records are validated
    /// like fresh input; if any record is rejected nothing is replaced.
    pub fn load(&mut self, path: &Path) -> Result<(), StoreError> {
        if !path.exists() {
            debug!("No store at {}, keeping current users", path.display());
            return Ok(());
        }

        let content = std::fs::read_to_string(path)?;
        let records: Vec<UserRecord> = serde_json::from_str(&content)?;

        let mut loaded = UserRegistry::new();
        for (index, record) in records.into_iter().enumerate() {
            create_user(&record.name, &record.email)
                .and_then(|user| loaded.add_user(user))
                .map_err(|source| StoreError::InvalidRecord { index, source })?;
        }

        debug!("Loaded {} users from {}", loaded.len(), path.display());
        self.replace_with(loaded);
        Ok(())
    }

    /// Writes the users to `path` as a pretty-printed JSON array.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut buf = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        self.list_users().serialize(&mut serializer)?;
        buf.push(b'\n');

        std::fs::write(path, buf)?;
        debug!("Saved {} users to {}", self.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");

        let mut registry = UserRegistry::new();
        registry.register("Juan Pérez", "juan.perez@email.com").unwrap();
        registry.save(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "[\n    {\n        \"name\": \"Juan Pérez\",\n        \"email\": \"juan.perez@email.com\"\n    }\n]\n"
        );
    }

    #[test]
    fn test_save_empty_registry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");

        UserRegistry::new().save(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]\n");
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("users.json");

        let mut registry = UserRegistry::new();
        registry.register("Ana", "ana@example.com").unwrap();
        registry.save(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_load_missing_file_keeps_contents() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = UserRegistry::new();
        registry.register("Ana", "ana@example.com").unwrap();

        registry.load(&dir.path().join("missing.json")).unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_load_normalizes_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        std::fs::write(&path, r#"[{"name": "  Ana  ", "email": "ANA@Example.com"}]"#).unwrap();

        let registry = UserRegistry::open(&path).unwrap();
        assert_eq!(registry.list_users()[0].name(), "Ana");
        assert_eq!(registry.list_users()[0].email(), "ana@example.com");
    }
}

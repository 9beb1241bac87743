//! Config repository port - persisted answers from previous runs.

use std::path::Path;

use crate::domain::value_objects::ConfigValue;
use crate::error::DeckhandResult;

pub trait ConfigRepository {
    /// Load and normalize a persisted config.
    ///
    /// Fails with `NotFound` when the file does not exist.
    fn load(&self, path: &Path) -> DeckhandResult<ConfigValue>;

    /// Persist `config`, keeping a `.bak` copy of the previous file.
    fn save(&self, config: &ConfigValue, path: &Path) -> DeckhandResult<()>;

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeckhandError;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::PathBuf;

    /// In-memory repository
    #[derive(Default)]
    struct MockConfigRepository {
        files: RefCell<HashMap<PathBuf, ConfigValue>>,
    }

    impl ConfigRepository for MockConfigRepository {
        fn load(&self, path: &Path) -> DeckhandResult<ConfigValue> {
            self.files
                .borrow()
                .get(path)
                .cloned()
                .ok_or_else(|| DeckhandError::NotFound {
                    path: path.to_path_buf(),
                })
        }

        fn save(&self, config: &ConfigValue, path: &Path) -> DeckhandResult<()> {
            self.files
                .borrow_mut()
                .insert(path.to_path_buf(), config.clone());
            Ok(())
        }

        fn exists(&self, path: &Path) -> bool {
            self.files.borrow().contains_key(path)
        }
    }

    #[test]
    fn mock_repository_round_trips() {
        let repo = MockConfigRepository::default();
        let path = Path::new("/srv/deckhand.toml");
        let config = crate::domain::registry::get_defaults();

        assert!(!repo.exists(path));
        repo.save(&config, path).unwrap();
        assert!(repo.exists(path));
        assert_eq!(repo.load(path).unwrap(), config);
    }

    #[test]
    fn mock_repository_load_fails_for_missing() {
        let repo = MockConfigRepository::default();
        let err = repo.load(Path::new("/nowhere.toml")).unwrap_err();
        assert!(matches!(err, DeckhandError::NotFound { .. }));
    }
}

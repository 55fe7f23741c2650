#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tudu::libs::config::{Config, CONFIG_FILE_NAME, DB_FILE_NAME};
    use tudu::libs::data_storage::DataStorage;

    struct ConfigTestContext {
        _temp_dir: TempDir,
        storage: DataStorage,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = DataStorage::at(temp_dir.path().join("tudu"));
            ConfigTestContext { _temp_dir: temp_dir, storage }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_config_uses_defaults(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.storage).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.db_path_in(&ctx.storage).unwrap(), ctx.storage.base_path().join(DB_FILE_NAME));
        assert!(ctx.storage.base_path().exists());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read(ctx: &mut ConfigTestContext) {
        let config = Config {
            db_path: Some(PathBuf::from("/var/lib/tudu/todos.db")),
        };
        config.save_to(&ctx.storage).unwrap();

        let loaded = Config::read_from(&ctx.storage).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.db_path_in(&ctx.storage).unwrap(), PathBuf::from("/var/lib/tudu/todos.db"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_path_is_not_written(ctx: &mut ConfigTestContext) {
        Config::default().save_to(&ctx.storage).unwrap();

        let raw = fs::read_to_string(ctx.storage.get_path(CONFIG_FILE_NAME).unwrap()).unwrap();
        assert!(!raw.contains("db_path"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_config_is_an_error(ctx: &mut ConfigTestContext) {
        fs::write(ctx.storage.get_path(CONFIG_FILE_NAME).unwrap(), "not json").unwrap();
        assert!(Config::read_from(&ctx.storage).is_err());
    }
}

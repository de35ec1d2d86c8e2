//! DirectoryContext wiring tests

use tempfile::TempDir;

use userdir_core::config::{Config, LoggingConfig, SETTINGS_FILE};
use userdir_core::{DirectoryContext, Error, NewUser};

#[test]
fn test_context_applies_configured_minimum_age() {
    let config = Config {
        minimum_age: 21,
        logging: LoggingConfig::default(),
    };
    let mut ctx = DirectoryContext::new(config);

    let err = ctx
        .user_service
        .create_user(NewUser::new("Young", "young@x.com", 20))
        .unwrap_err();
    assert!(matches!(err, Error::Age { age: 20, minimum: 21 }));

    assert!(ctx
        .user_service
        .create_user(NewUser::new("Older", "older@x.com", 21))
        .is_ok());
}

#[test]
fn test_contexts_do_not_share_users() {
    let mut first = DirectoryContext::new(Config::default());
    let second = DirectoryContext::new(Config::default());

    let user = first
        .user_service
        .create_user(NewUser::new("Solo", "solo@x.com", 30))
        .unwrap();

    assert!(second.user_service.get_user_by_id(&user.id).is_none());
}

#[test]
fn test_load_rejects_malformed_settings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(SETTINGS_FILE), "{ not json").unwrap();

    let err = DirectoryContext::load(dir.path()).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

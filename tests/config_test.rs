//! Configuration store tests

use tempfile::TempDir;
use tokio::fs;
use toolgate::config::ConfigStore;

#[tokio::test]
async fn test_load_yaml_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("providers.yaml");

    let config_content = r#"
providers:
  todo:
    url: "http://localhost:4100"
  notes:
    command: "notes-provider"
    args: ["--stdio"]
    env:
      NOTES_DB: "/tmp/notes.db"
"#;
    fs::write(&config_path, config_content).await.unwrap();

    let store = ConfigStore::new(&config_path);
    let config = store.load().await;

    assert_eq!(config.providers.len(), 2);
    assert_eq!(
        config.get("todo").and_then(|d| d.url.as_deref()),
        Some("http://localhost:4100")
    );
    let notes = config.get("notes").unwrap();
    assert_eq!(notes.command.as_deref(), Some("notes-provider"));
    assert_eq!(notes.args, vec!["--stdio"]);
    assert_eq!(notes.env.get("NOTES_DB").map(String::as_str), Some("/tmp/notes.db"));
    assert!(notes.url.is_none());
}

#[tokio::test]
async fn test_load_json_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("providers.json");

    let config_content = r#"{ "providers": { "todo": { "url": "http://localhost:4100" } } }"#;
    fs::write(&config_path, config_content).await.unwrap();

    let store = ConfigStore::new(&config_path);
    let config = store.load().await;
    assert_eq!(config.providers.len(), 1);
}

#[tokio::test]
async fn test_missing_file_is_empty_not_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let store = ConfigStore::new(temp_dir.path().join("does-not-exist.yaml"));
    let config = store.load().await;
    assert!(config.providers.is_empty());
}

#[tokio::test]
async fn test_malformed_file_is_empty_not_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("providers.yaml");
    fs::write(&config_path, "providers: [this is not a mapping")
        .await
        .unwrap();

    let store = ConfigStore::new(&config_path);
    let config = store.load().await;
    assert!(config.providers.is_empty());
}

#[tokio::test]
async fn test_load_is_memoized() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("providers.yaml");
    fs::write(&config_path, "providers:\n  todo:\n    url: \"http://one\"\n")
        .await
        .unwrap();

    let store = ConfigStore::new(&config_path);
    let first = store.load().await.clone();

    // Rewriting the file must not be observed: the store reads once.
    fs::write(&config_path, "providers:\n  todo:\n    url: \"http://two\"\n")
        .await
        .unwrap();
    let second = store.load().await;

    assert_eq!(
        second.get("todo").and_then(|d| d.url.as_deref()),
        Some("http://one")
    );
    assert_eq!(first.providers.len(), second.providers.len());
}

#[tokio::test]
async fn test_concurrent_first_load_reads_once() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("providers.yaml");
    fs::write(&config_path, "providers:\n  todo:\n    url: \"http://one\"\n")
        .await
        .unwrap();

    let store = std::sync::Arc::new(ConfigStore::new(&config_path));
    let loads = (0..8).map(|_| {
        let store = store.clone();
        tokio::spawn(async move { store.load().await.providers.len() })
    });

    for handle in loads {
        assert_eq!(handle.await.unwrap(), 1);
    }
}

#[tokio::test]
async fn test_descriptor_lookup() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("providers.yaml");
    fs::write(&config_path, "providers:\n  todo:\n    url: \"http://x\"\n")
        .await
        .unwrap();

    let store = ConfigStore::new(&config_path);
    assert!(store.descriptor("todo").await.is_some());
    assert!(store.descriptor("absent").await.is_none());
}

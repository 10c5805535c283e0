use demo_content::{save_all, AssetRegistry, AssetSink, DirectorySink, RecordingSink};

struct FailingSink;

#[async_trait::async_trait]
impl AssetSink for FailingSink {
    async fn save(&self, name: &str, _contents: &str) -> anyhow::Result<()> {
        if name.ends_with(".py") {
            anyhow::bail!("disk full");
        }
        Ok(())
    }
}

#[test]
fn test_builtin_registry_has_exactly_the_project_files() {
    let registry = AssetRegistry::builtin();
    assert_eq!(
        registry.names(),
        vec!["requirements.txt", "servidor.py", "cliente.py", "testador_completo.py"]
    );
    for asset in registry.iter() {
        assert!(!asset.contents.trim().is_empty(), "{} is empty", asset.name);
    }
    assert!(registry
        .get("servidor.py")
        .unwrap()
        .contents
        .contains("SimpleXMLRPCServer"));
    assert!(registry.get("missing.py").is_none());
}

#[tokio::test]
async fn test_save_all_emits_one_action_per_file_with_exact_content() {
    let registry = AssetRegistry::builtin();
    let sink = RecordingSink::new();

    let report = save_all(&registry, &sink).await;
    assert!(report.is_complete());
    assert_eq!(report.saved.len(), registry.len());

    let saved = sink.saved().await;
    assert_eq!(saved.len(), registry.len());
    for ((name, contents), asset) in saved.iter().zip(registry.iter()) {
        assert_eq!(name, &asset.name);
        assert_eq!(contents, &asset.contents);
    }
}

#[tokio::test]
async fn test_save_all_collects_failures() {
    let registry = AssetRegistry::builtin();
    let report = save_all(&registry, &FailingSink).await;
    assert_eq!(report.saved, vec!["requirements.txt".to_string()]);
    assert_eq!(report.failed.len(), 3);
    assert!(report.failed.iter().all(|(_, err)| err.contains("disk full")));
}

#[tokio::test]
async fn test_directory_sink_writes_files_unmodified() {
    let dir = std::env::temp_dir().join(format!("rpc-demo-assets-{}", std::process::id()));
    let registry = AssetRegistry::builtin();
    let sink = DirectorySink::new(&dir);

    let report = save_all(&registry, &sink).await;
    assert!(report.is_complete());

    for asset in registry.iter() {
        let written = tokio::fs::read_to_string(dir.join(&asset.name)).await.unwrap();
        assert_eq!(written, asset.contents);
    }
    tokio::fs::remove_dir_all(&dir).await.unwrap();
}

//! Blob store conformance tests, run against every backend

use std::sync::Arc;

use gatehouse::backend::{BlobStore, FileStore, InMemory};

async fn check_conformance(store: Arc<dyn BlobStore>) {
    assert_eq!(store.get("missing").await.unwrap(), None);

    store.put("alpha", "1").await.unwrap();
    store.put("beta", "two").await.unwrap();
    assert_eq!(store.get("alpha").await.unwrap().as_deref(), Some("1"));
    assert_eq!(store.get("beta").await.unwrap().as_deref(), Some("two"));

    // Overwrite replaces wholesale
    store.put("alpha", "a much longer value than before").await.unwrap();
    assert_eq!(
        store.get("alpha").await.unwrap().as_deref(),
        Some("a much longer value than before")
    );
    store.put("alpha", "s").await.unwrap();
    assert_eq!(store.get("alpha").await.unwrap().as_deref(), Some("s"));

    // Keys are independent
    assert_eq!(store.get("beta").await.unwrap().as_deref(), Some("two"));

    for bad in ["", "..", "../outside", "dir/key"] {
        assert!(store.put(bad, "x").await.is_err(), "{bad:?} accepted");
        assert!(store.get(bad).await.is_err(), "{bad:?} accepted");
    }
}

#[tokio::test]
async fn test_in_memory_conformance() {
    check_conformance(Arc::new(InMemory::new())).await;
}

#[tokio::test]
async fn test_file_store_conformance() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).await.unwrap();
    check_conformance(Arc::new(store)).await;

    // Nothing escaped the data directory and no temp files were left behind
    let mut names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["alpha.json", "beta.json"]);
}

#[tokio::test]
async fn test_file_store_downcast() {
    let dir = tempfile::tempdir().unwrap();
    let store: Arc<dyn BlobStore> = Arc::new(FileStore::open(dir.path()).await.unwrap());

    let file_store = store
        .as_any()
        .downcast_ref::<FileStore>()
        .expect("should downcast to FileStore");
    assert_eq!(file_store.data_dir(), dir.path());
    assert!(store.as_any().downcast_ref::<InMemory>().is_none());
}

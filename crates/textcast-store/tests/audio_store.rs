use futures_util::TryStreamExt;
use object_store::path::Path;
use object_store::{Attribute, ObjectStore};
use pretty_assertions::assert_eq;
use textcast_config::{StorageBackend, TextcastConfig};
use textcast_core::AudioArtifact;
use textcast_store::{AudioStore, StorageError};

async fn keys(store: &AudioStore) -> Vec<String> {
    let inner = store.inner();
    let mut keys: Vec<String> = inner
        .list(None)
        .map_ok(|meta| meta.location.to_string())
        .try_collect()
        .await
        .expect("list objects");
    keys.sort();
    keys
}

#[tokio::test]
async fn writes_payload_under_prefixed_key() {
    let store = AudioStore::in_memory("audio");

    let object = store
        .put_audio("prefix", "a.txt", AudioArtifact::mp3(b"ID3hello".to_vec()))
        .await
        .expect("write succeeds");

    assert_eq!(object.bucket, "audio");
    assert_eq!(object.key, "prefix/a.txt.mp3");
    assert_eq!(object.size, 8);

    let body = store
        .inner()
        .get(&Path::from("prefix/a.txt.mp3"))
        .await
        .expect("object exists")
        .bytes()
        .await
        .expect("read body");
    assert_eq!(&body[..], b"ID3hello");
}

#[tokio::test]
async fn empty_prefix_writes_bare_key() {
    let store = AudioStore::in_memory("audio");
    let object = store
        .put_audio("", "notes.txt", AudioArtifact::mp3(vec![1u8, 2]))
        .await
        .unwrap();
    assert_eq!(object.key, "notes.txt.mp3");
    assert_eq!(keys(&store).await, vec!["notes.txt.mp3"]);
}

#[tokio::test]
async fn rerun_overwrites_same_key() {
    let store = AudioStore::in_memory("audio");
    store
        .put_audio("p", "a.txt", AudioArtifact::mp3(b"first".to_vec()))
        .await
        .unwrap();
    store
        .put_audio("p", "a.txt", AudioArtifact::mp3(b"second".to_vec()))
        .await
        .unwrap();

    assert_eq!(keys(&store).await, vec!["p/a.txt.mp3"]);
    let body = store
        .inner()
        .get(&Path::from("p/a.txt.mp3"))
        .await
        .unwrap()
        .bytes()
        .await
        .unwrap();
    assert_eq!(&body[..], b"second");
}

#[tokio::test]
async fn content_type_recorded_when_supported() {
    let store = AudioStore::in_memory("audio");
    store
        .put_audio("", "a.txt", AudioArtifact::mp3(b"x".to_vec()))
        .await
        .unwrap();

    let result = store.inner().get(&Path::from("a.txt.mp3")).await.unwrap();
    let content_type: Option<&str> = result
        .attributes
        .get(&Attribute::ContentType)
        .map(|value| value.as_ref());
    assert_eq!(content_type, Some("audio/mpeg"));
}

#[tokio::test]
async fn local_backend_writes_files_under_bucket_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = TextcastConfig::default();
    config.storage.backend = StorageBackend::Local;
    config.storage.local_root = tmp.path().display().to_string();

    let store = AudioStore::from_config(&config, "spoken").expect("local store");
    store
        .put_audio("2024/", "b.txt", AudioArtifact::mp3(b"mp3".to_vec()))
        .await
        .expect("local write");

    let written = tmp.path().join("spoken").join("2024").join("b.txt.mp3");
    assert_eq!(std::fs::read(written).unwrap(), b"mp3");
}

#[tokio::test]
async fn keys_keep_file_name_characters_verbatim() {
    let store = AudioStore::in_memory("audio");

    for name in ["report#1.txt", "notes.txt~", "100%.txt", "what?.txt"] {
        let object = store
            .put_audio("prefix", name, AudioArtifact::mp3(b"mp3".to_vec()))
            .await
            .expect("write succeeds");
        assert_eq!(object.key, format!("prefix/{name}.mp3"));
    }

    assert_eq!(
        keys(&store).await,
        vec![
            "prefix/100%.txt.mp3",
            "prefix/notes.txt~.mp3",
            "prefix/report#1.txt.mp3",
            "prefix/what?.txt.mp3",
        ]
    );
}

#[tokio::test]
async fn unusable_key_is_a_write_error() {
    let store = AudioStore::in_memory("audio");

    let err = store
        .put_audio("a//b", "c.txt", AudioArtifact::mp3(b"mp3".to_vec()))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::Write { ref key, .. } if key == "a//b/c.txt.mp3"));

    let err = store
        .put_audio("", "bell\u{7}.txt", AudioArtifact::mp3(b"mp3".to_vec()))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::Write { .. }));
    assert!(keys(&store).await.is_empty());
}

#[cfg(test)]
pub mod media_tests {
    use uuid::Uuid;

    use tamarsan_site::common::MediaError;
    use tamarsan_site::services::{MediaStore, MAX_IMAGE_BYTES};

    fn temp_store() -> MediaStore {
        let root = std::env::temp_dir().join(format!("tamarsan-media-test-{}", Uuid::new_v4()));
        MediaStore::new(root)
    }

    #[test]
    fn test_validate_rejects_non_image_content_type() {
        let result = MediaStore::validate("notes.txt", "text/plain", 100);
        assert!(matches!(result, Err(MediaError::NotAnImage)));
    }

    #[test]
    fn test_validate_enforces_the_size_limit() {
        let result = MediaStore::validate("big.jpg", "image/jpeg", MAX_IMAGE_BYTES + 1);
        assert!(matches!(result, Err(MediaError::TooLarge)));

        assert!(
            MediaStore::validate("edge.jpg", "image/jpeg", MAX_IMAGE_BYTES).is_ok(),
            "Exactly the limit is still accepted"
        );
    }

    #[test]
    fn test_validate_rejects_unsupported_extension() {
        // image/svg+xml passes the type check but not the extension list.
        let result = MediaStore::validate("logo.svg", "image/svg+xml", 100);
        assert!(matches!(result, Err(MediaError::UnsupportedType)));

        let result = MediaStore::validate("archive", "image/png", 100);
        assert!(matches!(result, Err(MediaError::UnsupportedType)));
    }

    #[test]
    fn test_validate_accepts_every_allowed_extension() {
        for name in ["a.jpg", "b.jpeg", "c.png", "d.gif", "e.webp", "f.PNG"] {
            assert!(
                MediaStore::validate(name, "image/png", 10).is_ok(),
                "{} should validate",
                name
            );
        }
    }

    #[tokio::test]
    async fn test_rejected_upload_writes_nothing() {
        let store = temp_store();
        let bytes = vec![0u8; MAX_IMAGE_BYTES + 1];

        let result = store.store("big.jpg", "image/jpeg", &bytes).await;

        assert!(matches!(result, Err(MediaError::TooLarge)));
        assert!(
            !store.root().exists(),
            "A rejected upload must not touch the filesystem"
        );
    }

    #[tokio::test]
    async fn test_store_and_remove_round_trip() {
        let store = temp_store();

        let url = store
            .store("photo.JPG", "image/jpeg", b"binary image data")
            .await
            .expect("Failed to store image");

        assert!(url.starts_with("/media/"));
        assert!(url.ends_with(".jpg"), "The stored name keeps a lowercased extension");

        let name = url.strip_prefix("/media/").unwrap();
        let on_disk = store.root().join(name);
        let written = std::fs::read(&on_disk).expect("The stored file should exist");
        assert_eq!(written, b"binary image data");

        let removed = store.remove(&url).await.expect("Failed to remove image");
        assert!(removed);
        assert!(!on_disk.exists());

        let _ = std::fs::remove_dir_all(store.root());
    }

    #[tokio::test]
    async fn test_stored_names_never_collide() {
        let store = temp_store();

        let first = store
            .store("photo.png", "image/png", b"one")
            .await
            .expect("Failed to store image");
        let second = store
            .store("photo.png", "image/png", b"two")
            .await
            .expect("Failed to store image");

        assert_ne!(first, second, "Equal upload names must map to distinct objects");

        let _ = std::fs::remove_dir_all(store.root());
    }

    #[tokio::test]
    async fn test_remove_leaves_external_urls_alone() {
        let store = temp_store();

        let removed = store
            .remove("https://images.example.com/pic.jpg")
            .await
            .expect("Removal should not error");

        assert!(!removed);
    }

    #[tokio::test]
    async fn test_remove_refuses_suspicious_names() {
        let store = temp_store();

        for url in ["/media/../passwd", "/media/sub/pic.jpg", "/media/", "/media"] {
            let removed = store.remove(url).await.expect("Removal should not error");
            assert!(!removed, "{} should be refused", url);
        }
    }

    #[tokio::test]
    async fn test_remove_missing_file_reports_false() {
        let store = temp_store();

        let removed = store
            .remove("/media/00000000-0000-0000-0000-000000000000.png")
            .await
            .expect("Removal should not error");

        assert!(!removed);
    }
}

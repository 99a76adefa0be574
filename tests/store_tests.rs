mod common;

#[cfg(test)]
pub mod store_tests {
    use chrono::NaiveDate;
    use sqlx::SqlitePool;
    use uuid::Uuid;

    use super::common::*;

    use tamarsan_site::common::StoreError;
    use tamarsan_site::db;
    use tamarsan_site::models::*;
    use tamarsan_site::store::{ProjectStore, ServiceStore, TestimonialStore};

    #[sqlx::test(migrations = "./migrations")]
    async fn test_fresh_store_reports_loading(pool: SqlitePool) {
        let store = ProjectStore::new(pool);
        let state = store.state();

        assert!(state.loading);
        assert!(state.list.is_empty());
        assert_eq!(state.error, None);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_refetch_loads_newest_first(pool: SqlitePool) {
        for n in [0, 2, 1] {
            db::create_project(&pool, &seed_project(n))
                .await
                .expect("Failed to seed project");
        }

        let store = ProjectStore::new(pool);
        store.refetch().await;

        let state = store.state();
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.list.len(), 3);
        assert!(
            state.list.windows(2).all(|w| w[0].date >= w[1].date),
            "Cached projects should be ordered newest first"
        );
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_repeated_refetch_returns_the_same_list(pool: SqlitePool) {
        for n in [0, 1] {
            db::create_project(&pool, &seed_project(n))
                .await
                .expect("Failed to seed project");
        }

        let store = ProjectStore::new(pool);
        store.refetch().await;
        let first = store.state().list;

        store.refetch().await;
        let second = store.state().list;

        assert_eq!(first, second, "A refresh without writes must not reshuffle the list");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_find_reads_the_cache_not_the_database(pool: SqlitePool) {
        let project = db::create_project(&pool, &seed_project(0))
            .await
            .expect("Failed to seed project");

        let store = ProjectStore::new(pool);
        assert_eq!(store.find(project.id), None, "Nothing is cached before the first fetch");

        store.refetch().await;
        assert_eq!(store.find(project.id), Some(project));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_add_prepends_after_the_insert_lands(pool: SqlitePool) {
        db::create_project(&pool, &seed_project(0))
            .await
            .expect("Failed to seed project");

        let store = ProjectStore::new(pool.clone());
        store.refetch().await;

        let created = store
            .add(&seed_project(1))
            .await
            .expect("Failed to add project");

        let state = store.state();
        assert_eq!(state.list.len(), 2);
        assert_eq!(state.list[0], created, "A new project should appear at the top");

        let fetched = db::get_project_by_id(&pool, created.id)
            .await
            .expect("Failed database query");
        assert_eq!(fetched, Some(created));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_add_without_image_stores_rate_and_lands_first(pool: SqlitePool) {
        db::create_project(&pool, &seed_project(9))
            .await
            .expect("Failed to seed project");

        let store = ProjectStore::new(pool.clone());
        store.refetch().await;

        let data = ProjectCreate {
            name: "Solar Grid".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
            location: "Berbera".to_string(),
            description: "Grid-tied solar installation".to_string(),
            image_url: None,
            rate: Some(4.5),
        };
        let created = store.add(&data).await.expect("Failed to add project");

        let top = store.state().list[0].clone();
        assert_eq!(top.id, created.id, "The new project should sit first even when backdated");
        assert_eq!(top.name, "Solar Grid");
        assert_eq!(top.image_url, None);
        assert_eq!(top.rate, Some(4.5));

        let fetched = db::get_project_by_id(&pool, created.id)
            .await
            .expect("Failed database query");
        assert_eq!(fetched, Some(created));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_add_failure_leaves_the_cache_untouched(pool: SqlitePool) {
        db::create_project(&pool, &seed_project(0))
            .await
            .expect("Failed to seed project");

        let store = ProjectStore::new(pool.clone());
        store.refetch().await;
        pool.close().await;

        let result = store.add(&seed_project(1)).await;

        assert!(
            matches!(result, Err(StoreError::Database(_))),
            "A failed insert should surface as a database error"
        );
        assert_eq!(
            store.state().list.len(),
            1,
            "An unacknowledged write must not reach the cached list"
        );
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_update_replaces_in_place(pool: SqlitePool) {
        for n in [2, 1, 0] {
            db::create_project(&pool, &seed_project(n))
                .await
                .expect("Failed to seed project");
        }

        let store = ProjectStore::new(pool);
        store.refetch().await;

        let before = store.state().list;
        let target = before[1].clone();

        let update = ProjectUpdate {
            name: Some("Rewired Installation".to_string()),
            ..Default::default()
        };
        let updated = store
            .update(target.id, &update)
            .await
            .expect("Failed to update project");

        let after = store.state().list;
        assert_eq!(
            after.iter().map(|p| p.id).collect::<Vec<_>>(),
            before.iter().map(|p| p.id).collect::<Vec<_>>(),
            "An edit must keep its position in the list"
        );
        assert_eq!(after[1], updated);
        assert_eq!(after[1].name, "Rewired Installation");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_update_missing_returns_not_found(pool: SqlitePool) {
        let store = ProjectStore::new(pool);
        store.refetch().await;

        let update = ProjectUpdate {
            name: Some("Ghost".to_string()),
            ..Default::default()
        };
        let result = store.update(Uuid::new_v4(), &update).await;

        assert!(matches!(result, Err(StoreError::NotFound)));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_delete_removes_from_cache_and_database(pool: SqlitePool) {
        for n in [0, 1] {
            db::create_project(&pool, &seed_project(n))
                .await
                .expect("Failed to seed project");
        }

        let store = ProjectStore::new(pool.clone());
        store.refetch().await;

        let target = store.state().list[0].clone();
        store
            .delete(target.id)
            .await
            .expect("Failed to delete project");

        let state = store.state();
        assert_eq!(state.list.len(), 1);
        assert!(state.list.iter().all(|p| p.id != target.id));

        let fetched = db::get_project_by_id(&pool, target.id)
            .await
            .expect("Failed database query");
        assert_eq!(fetched, None);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_delete_missing_returns_not_found(pool: SqlitePool) {
        let store = ProjectStore::new(pool);
        store.refetch().await;

        let result = store.delete(Uuid::new_v4()).await;
        assert!(matches!(result, Err(StoreError::NotFound)));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_refetch_failure_keeps_the_previous_list(pool: SqlitePool) {
        for n in [0, 1] {
            db::create_project(&pool, &seed_project(n))
                .await
                .expect("Failed to seed project");
        }

        let store = ProjectStore::new(pool.clone());
        store.refetch().await;
        assert_eq!(store.state().list.len(), 2);

        pool.close().await;
        store.refetch().await;

        let state = store.state();
        assert!(!state.loading);
        assert!(state.error.is_some(), "A failed refresh should record its error");
        assert_eq!(
            state.list.len(),
            2,
            "The last good list keeps serving after a failed refresh"
        );
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_service_store_round_trip(pool: SqlitePool) {
        let store = ServiceStore::new(pool);
        store.refetch().await;

        let created = store
            .add(&seed_service(0))
            .await
            .expect("Failed to add service");
        assert_eq!(store.state().list[0], created);

        let update = ServiceUpdate {
            icon: Some(ServiceIcon::Zap),
            ..Default::default()
        };
        let updated = store
            .update(created.id, &update)
            .await
            .expect("Failed to update service");
        assert_eq!(updated.resolved_icon(), ServiceIcon::Zap);
        assert_eq!(store.state().list[0], updated);

        store
            .delete(created.id)
            .await
            .expect("Failed to delete service");
        assert!(store.state().list.is_empty());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_testimonial_store_round_trip(pool: SqlitePool) {
        let store = TestimonialStore::new(pool);
        store.refetch().await;

        let created = store
            .add(&seed_testimonial(0))
            .await
            .expect("Failed to add testimonial");
        assert_eq!(created.rate, 4);
        assert_eq!(store.state().list[0], created);

        let update = TestimonialUpdate {
            rate: Some(5),
            ..Default::default()
        };
        let updated = store
            .update(created.id, &update)
            .await
            .expect("Failed to update testimonial");
        assert_eq!(updated.stars(), "★★★★★");

        store
            .delete(created.id)
            .await
            .expect("Failed to delete testimonial");
        assert!(store.state().list.is_empty());
    }
}

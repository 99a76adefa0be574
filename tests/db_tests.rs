mod common;

#[cfg(test)]
pub mod db_tests {
    use sqlx::SqlitePool;
    use uuid::Uuid;

    use super::common::*;

    use tamarsan_site::db;
    use tamarsan_site::models::*;

    #[sqlx::test(migrations = "./migrations")]
    async fn test_create_project_returns_stored_row(pool: SqlitePool) {
        let data = seed_project(0);

        let project = db::create_project(&pool, &data)
            .await
            .expect("Failed to create project");

        assert_eq!(project.name, data.name);
        assert_eq!(project.date, data.date);
        assert_eq!(project.location, data.location);
        assert_eq!(project.description, data.description);
        assert_eq!(project.image_url, None);
        assert_eq!(project.rate, None);

        let fetched = db::get_project_by_id(&pool, project.id)
            .await
            .expect("Failed database query");
        assert_eq!(fetched, Some(project));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_list_projects_orders_newest_first(pool: SqlitePool) {
        // Inserted out of date order on purpose.
        for n in [0, 2, 1] {
            db::create_project(&pool, &seed_project(n))
                .await
                .expect("Failed to create project");
        }

        let projects = db::list_projects(&pool)
            .await
            .expect("Failed database query");

        assert_eq!(projects.len(), 3);
        assert!(
            projects.windows(2).all(|w| w[0].date >= w[1].date),
            "Projects should come back newest first"
        );
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_update_project_keeps_unset_fields(pool: SqlitePool) {
        let mut data = seed_project(0);
        data.image_url = Some("https://images.example.com/site.jpg".to_string());
        data.rate = Some(4.5);
        let project = db::create_project(&pool, &data)
            .await
            .expect("Failed to create project");

        let update = ProjectUpdate {
            name: Some("Renamed Installation".to_string()),
            ..Default::default()
        };

        let updated = db::update_project(&pool, project.id, &update)
            .await
            .expect("Failed database query")
            .expect("Project should exist");

        assert_eq!(updated.name, "Renamed Installation");
        assert_eq!(updated.date, project.date);
        assert_eq!(updated.location, project.location);
        assert_eq!(updated.description, project.description);
        assert_eq!(updated.image_url, project.image_url);
        assert_eq!(updated.rate, project.rate);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_update_project_clears_nullable_fields(pool: SqlitePool) {
        let mut data = seed_project(0);
        data.image_url = Some("/media/old.jpg".to_string());
        data.rate = Some(3.0);
        let project = db::create_project(&pool, &data)
            .await
            .expect("Failed to create project");

        let update = ProjectUpdate {
            image_url: Some(None),
            rate: Some(None),
            ..Default::default()
        };

        let updated = db::update_project(&pool, project.id, &update)
            .await
            .expect("Failed database query")
            .expect("Project should exist");

        assert_eq!(updated.image_url, None);
        assert_eq!(updated.rate, None);
        assert_eq!(updated.name, project.name, "Unset fields must survive a clear");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_update_project_replaces_nullable_fields(pool: SqlitePool) {
        let project = db::create_project(&pool, &seed_project(0))
            .await
            .expect("Failed to create project");

        let update = ProjectUpdate {
            image_url: Some(Some("/media/new.png".to_string())),
            rate: Some(Some(5.0)),
            ..Default::default()
        };

        let updated = db::update_project(&pool, project.id, &update)
            .await
            .expect("Failed database query")
            .expect("Project should exist");

        assert_eq!(updated.image_url, Some("/media/new.png".to_string()));
        assert_eq!(updated.rate, Some(5.0));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_update_project_not_found(pool: SqlitePool) {
        let update = ProjectUpdate {
            name: Some("Ghost".to_string()),
            ..Default::default()
        };

        let result = db::update_project(&pool, Uuid::new_v4(), &update)
            .await
            .expect("Failed database query");

        assert_eq!(result, None);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_delete_project_is_idempotent_after_first_call(pool: SqlitePool) {
        let project = db::create_project(&pool, &seed_project(0))
            .await
            .expect("Failed to create project");

        assert!(db::delete_project(&pool, project.id)
            .await
            .expect("Failed database query"));

        let fetched = db::get_project_by_id(&pool, project.id)
            .await
            .expect("Failed database query");
        assert_eq!(fetched, None);

        assert!(!db::delete_project(&pool, project.id)
            .await
            .expect("Failed database query"));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_count_projects_tracks_inserts(pool: SqlitePool) {
        assert_eq!(
            db::count_projects(&pool).await.expect("Failed database query"),
            0
        );

        for n in [0, 1] {
            db::create_project(&pool, &seed_project(n))
                .await
                .expect("Failed to create project");
        }

        assert_eq!(
            db::count_projects(&pool).await.expect("Failed database query"),
            2
        );
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_create_service_stores_icon_name(pool: SqlitePool) {
        let mut data = seed_service(0);
        data.icon = ServiceIcon::Wind;

        let service = db::create_service(&pool, &data)
            .await
            .expect("Failed to create service");

        assert_eq!(service.title, data.title);
        assert_eq!(service.icon, "Wind");
        assert_eq!(service.resolved_icon(), ServiceIcon::Wind);

        let fetched = db::get_service_by_id(&pool, service.id)
            .await
            .expect("Failed database query");
        assert_eq!(fetched, Some(service));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_update_service_keeps_unset_fields(pool: SqlitePool) {
        let service = db::create_service(&pool, &seed_service(0))
            .await
            .expect("Failed to create service");

        let update = ServiceUpdate {
            icon: Some(ServiceIcon::Battery),
            ..Default::default()
        };

        let updated = db::update_service(&pool, service.id, &update)
            .await
            .expect("Failed database query")
            .expect("Service should exist");

        assert_eq!(updated.icon, "Battery");
        assert_eq!(updated.title, service.title);
        assert_eq!(updated.description, service.description);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_unknown_icon_name_falls_back_to_the_default(pool: SqlitePool) {
        let service = db::create_service(&pool, &seed_service(0))
            .await
            .expect("Failed to create service");

        // The form can only submit known names; rows written by older
        // builds may still carry anything.
        sqlx::query("UPDATE services SET icon = $1 WHERE id = $2")
            .bind("Unknown")
            .bind(service.id)
            .execute(&pool)
            .await
            .expect("Failed database query");

        let fetched = db::get_service_by_id(&pool, service.id)
            .await
            .expect("Failed database query")
            .expect("Service should exist");

        assert_eq!(fetched.icon, "Unknown", "The stored name survives as written");
        assert_eq!(fetched.resolved_icon(), ServiceIcon::Sun);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_create_testimonial_defaults_rate_to_five(pool: SqlitePool) {
        let mut data = seed_testimonial(0);
        data.rate = None;

        let testimonial = db::create_testimonial(&pool, &data)
            .await
            .expect("Failed to create testimonial");

        assert_eq!(testimonial.rate, 5);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_create_testimonial_keeps_explicit_rate(pool: SqlitePool) {
        let mut data = seed_testimonial(0);
        data.rate = Some(2);

        let testimonial = db::create_testimonial(&pool, &data)
            .await
            .expect("Failed to create testimonial");

        assert_eq!(testimonial.rate, 2);
        assert_eq!(testimonial.stars(), "★★");

        let fetched = db::get_testimonial_by_id(&pool, testimonial.id)
            .await
            .expect("Failed database query");
        assert_eq!(fetched, Some(testimonial));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_update_testimonial_keeps_unset_fields(pool: SqlitePool) {
        let testimonial = db::create_testimonial(&pool, &seed_testimonial(0))
            .await
            .expect("Failed to create testimonial");

        let update = TestimonialUpdate {
            role: Some("Factory Manager".to_string()),
            ..Default::default()
        };

        let updated = db::update_testimonial(&pool, testimonial.id, &update)
            .await
            .expect("Failed database query")
            .expect("Testimonial should exist");

        assert_eq!(updated.role, "Factory Manager");
        assert_eq!(updated.description, testimonial.description);
        assert_eq!(updated.rate, testimonial.rate);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_create_user_fails_on_duplicate_email(pool: SqlitePool) {
        let data = UserCreate {
            email: "admin@tamarsan.com".to_string(),
            password_hash: "hash-one".to_string(),
        };

        let first = db::create_user(&pool, &data)
            .await
            .expect("Failed to create user");
        assert!(first.is_some());

        let second = db::create_user(&pool, &data)
            .await
            .expect("Failed database query");
        assert!(second.is_none(), "Duplicate email should not create a second account");

        assert_eq!(
            db::count_users(&pool).await.expect("Failed database query"),
            1
        );
    }
}

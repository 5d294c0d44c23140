//! Integration tests for the repository layer against a real database:
//! - Project insert / scoped lookup / partial update / scoped delete
//! - Cascade delete of tracked-time links
//! - Unique and primary-key constraint violations
//! - Session resolution by token hash
//! - Shop item column defaults and audit log queries

use chrono::{Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use shipwrecked_db::models::hackatime_link::CreateHackatimeLink;
use shipwrecked_db::models::project::{NewProject, UpdateProject};
use shipwrecked_db::models::review::CreateReview;
use shipwrecked_db::models::session::CreateSession;
use shipwrecked_db::models::shop_item::NewShopItem;
use shipwrecked_db::models::user::{CreateUser, User};
use shipwrecked_db::repositories::{
    AuditLogRepo, HackatimeLinkRepo, ProjectRepo, ReviewRepo, SessionRepo, ShopItemRepo, UserRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_user(pool: &PgPool, email: &str) -> User {
    let input = CreateUser {
        email: email.to_string(),
        name: "Test User".to_string(),
        role: None,
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

fn new_project(user_id: Uuid, name: &str) -> NewProject {
    NewProject {
        project_id: Uuid::new_v4(),
        user_id,
        name: name.to_string(),
        description: String::new(),
        code_url: String::new(),
        playable_url: String::new(),
        screenshot: String::new(),
        shipped: false,
        viral: false,
        in_review: false,
    }
}

fn empty_update() -> UpdateProject {
    UpdateProject {
        name: None,
        description: None,
        code_url: None,
        playable_url: None,
        screenshot: None,
        shipped: None,
        viral: None,
        in_review: None,
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_user_defaults(pool: PgPool) {
    let user = seed_user(&pool, "crew@test.com").await;
    assert_eq!(user.role, "user");
    assert_eq!(user.total_shells_spent, 0);
    assert_eq!(user.purchased_progress_hours, 0.0);
    assert_eq!(user.admin_shell_adjustment, 0);

    assert!(UserRepo::exists(&pool, user.id).await.unwrap());
    assert!(!UserRepo::exists(&pool, Uuid::new_v4()).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_set_shell_balances(pool: PgPool) {
    let user = seed_user(&pool, "balances@test.com").await;

    let updated = UserRepo::set_shell_balances(&pool, user.id, 3, 10.0, -2)
        .await
        .unwrap();
    assert!(updated);

    let fetched = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(fetched.total_shells_spent, 3);
    assert_eq!(fetched.purchased_progress_hours, 10.0);
    assert_eq!(fetched.admin_shell_adjustment, -2);
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_insert_and_list_projects(pool: PgPool) {
    let user = seed_user(&pool, "maker@test.com").await;

    let first = ProjectRepo::insert(&pool, &new_project(user.id, "First"))
        .await
        .unwrap();
    assert_eq!(first.name, "First");
    assert!(!first.submitted);

    ProjectRepo::insert(&pool, &new_project(user.id, "Second"))
        .await
        .unwrap();

    let projects = ProjectRepo::list_by_user(&pool, user.id).await.unwrap();
    assert_eq!(projects.len(), 2);

    // A different user sees nothing.
    let other = seed_user(&pool, "other@test.com").await;
    let projects = ProjectRepo::list_by_user(&pool, other.id).await.unwrap();
    assert!(projects.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_project_id_violates_pk(pool: PgPool) {
    let user = seed_user(&pool, "collide@test.com").await;
    let input = new_project(user.id, "Original");
    ProjectRepo::insert(&pool, &input).await.unwrap();

    // Re-inserting the same project_id must hit the primary key.
    let err = ProjectRepo::insert(&pool, &input).await.unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("projects_pkey"));
        }
        other => panic!("expected a database error, got {other:?}"),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_scoped_lookup_hides_other_users_projects(pool: PgPool) {
    let owner = seed_user(&pool, "owner@test.com").await;
    let intruder = seed_user(&pool, "intruder@test.com").await;
    let project = ProjectRepo::insert(&pool, &new_project(owner.id, "Mine"))
        .await
        .unwrap();

    let found = ProjectRepo::find_scoped(&pool, project.project_id, owner.id)
        .await
        .unwrap();
    assert!(found.is_some());

    // Owner mismatch is indistinguishable from a missing row.
    let found = ProjectRepo::find_scoped(&pool, project.project_id, intruder.id)
        .await
        .unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_update_leaves_other_fields(pool: PgPool) {
    let user = seed_user(&pool, "editor@test.com").await;
    let mut input = new_project(user.id, "Before");
    input.description = "keep me".to_string();
    let project = ProjectRepo::insert(&pool, &input).await.unwrap();

    let patch = UpdateProject {
        name: Some("After".to_string()),
        shipped: Some(true),
        ..empty_update()
    };
    let updated = ProjectRepo::update_scoped(&pool, project.project_id, user.id, &patch)
        .await
        .unwrap()
        .expect("row should match");

    assert_eq!(updated.name, "After");
    assert!(updated.shipped);
    assert_eq!(updated.description, "keep me");

    // Wrong owner: no row is touched.
    let other = seed_user(&pool, "bystander@test.com").await;
    let missed = ProjectRepo::update_scoped(&pool, project.project_id, other.id, &patch)
        .await
        .unwrap();
    assert!(missed.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mark_in_review(pool: PgPool) {
    let user = seed_user(&pool, "reviewee@test.com").await;
    let project = ProjectRepo::insert(&pool, &new_project(user.id, "Submit me"))
        .await
        .unwrap();
    assert!(!project.in_review);

    let updated = ProjectRepo::mark_in_review(&pool, project.project_id, user.id)
        .await
        .unwrap()
        .expect("row should match");
    assert!(updated.in_review);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_cascades_to_links(pool: PgPool) {
    let user = seed_user(&pool, "deleter@test.com").await;
    let project = ProjectRepo::insert(&pool, &new_project(user.id, "Doomed"))
        .await
        .unwrap();
    HackatimeLinkRepo::create(
        &pool,
        &CreateHackatimeLink {
            project_id: project.project_id,
            hackatime_name: "doomed-tracker".to_string(),
        },
    )
    .await
    .unwrap();

    let deleted = ProjectRepo::delete_scoped(&pool, project.project_id, user.id)
        .await
        .unwrap();
    assert!(deleted);

    let links = HackatimeLinkRepo::list_by_project(&pool, project.project_id)
        .await
        .unwrap();
    assert!(links.is_empty());

    // Second delete: nothing left to remove.
    let deleted = ProjectRepo::delete_scoped(&pool, project.project_id, user.id)
        .await
        .unwrap();
    assert!(!deleted);
}

// ---------------------------------------------------------------------------
// Tracked-time links
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_link_name_violates_unique(pool: PgPool) {
    let user = seed_user(&pool, "linker@test.com").await;
    let project = ProjectRepo::insert(&pool, &new_project(user.id, "Linked"))
        .await
        .unwrap();
    let input = CreateHackatimeLink {
        project_id: project.project_id,
        hackatime_name: "tracker".to_string(),
    };
    HackatimeLinkRepo::create(&pool, &input).await.unwrap();

    let err = HackatimeLinkRepo::create(&pool, &input).await.unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(
                db_err.constraint(),
                Some("uq_hackatime_links_project_name")
            );
        }
        other => panic!("expected a database error, got {other:?}"),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_for_user_spans_projects(pool: PgPool) {
    let user = seed_user(&pool, "spanner@test.com").await;
    let first = ProjectRepo::insert(&pool, &new_project(user.id, "One"))
        .await
        .unwrap();
    let second = ProjectRepo::insert(&pool, &new_project(user.id, "Two"))
        .await
        .unwrap();

    for (project_id, name) in [(first.project_id, "alpha"), (second.project_id, "beta")] {
        HackatimeLinkRepo::create(
            &pool,
            &CreateHackatimeLink {
                project_id,
                hackatime_name: name.to_string(),
            },
        )
        .await
        .unwrap();
    }

    let links = HackatimeLinkRepo::list_for_user(&pool, user.id).await.unwrap();
    assert_eq!(links.len(), 2);

    // Overridden hours win over raw hours once set.
    let link = &links[0];
    HackatimeLinkRepo::set_hours(&pool, link.id, 4.0, Some(9.0))
        .await
        .unwrap();
    let links = HackatimeLinkRepo::list_by_project(&pool, link.project_id)
        .await
        .unwrap();
    assert_eq!(links[0].raw_hours, 4.0);
    assert_eq!(links[0].effective_hours(), 9.0);
}

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_session_lookup_by_token_hash(pool: PgPool) {
    let user = seed_user(&pool, "sailor@test.com").await;
    let input = CreateSession {
        user_id: user.id,
        token_hash: "abc123".to_string(),
        expires_at: Utc::now() + Duration::days(7),
    };
    SessionRepo::create(&pool, &input).await.unwrap();

    let session = SessionRepo::find_by_token_hash(&pool, "abc123")
        .await
        .unwrap()
        .expect("live session should resolve");
    assert_eq!(session.user_id, user.id);

    let missing = SessionRepo::find_by_token_hash(&pool, "nope").await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_expired_session_does_not_resolve(pool: PgPool) {
    let user = seed_user(&pool, "expired@test.com").await;
    let input = CreateSession {
        user_id: user.id,
        token_hash: "stale".to_string(),
        expires_at: Utc::now() - Duration::hours(1),
    };
    SessionRepo::create(&pool, &input).await.unwrap();

    let session = SessionRepo::find_by_token_hash(&pool, "stale").await.unwrap();
    assert!(session.is_none());

    let removed = SessionRepo::cleanup_expired(&pool).await.unwrap();
    assert_eq!(removed, 1);
}

// ---------------------------------------------------------------------------
// Shop items and audit logs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_shop_item_defaults(pool: PgPool) {
    let input = NewShopItem {
        name: "Compass".to_string(),
        description: "Points north".to_string(),
        image: None,
        price: 12.5,
        usd_cost: None,
        cost_type: None,
        config: None,
        use_randomized_pricing: None,
    };
    let item = ShopItemRepo::create(&pool, &input).await.unwrap();

    assert_eq!(item.price, 12.5);
    assert_eq!(item.usd_cost, 0.0);
    assert_eq!(item.cost_type, "fixed");
    assert!(item.use_randomized_pricing);
    assert!(item.config.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_shop_items_list_newest_first(pool: PgPool) {
    for name in ["Old", "New"] {
        let input = NewShopItem {
            name: name.to_string(),
            description: "desc".to_string(),
            image: None,
            price: 1.0,
            usd_cost: None,
            cost_type: None,
            config: None,
            use_randomized_pricing: None,
        };
        ShopItemRepo::create(&pool, &input).await.unwrap();
    }

    let items = ShopItemRepo::list(&pool).await.unwrap();
    assert_eq!(items.len(), 2);
    assert!(items[0].created_at >= items[1].created_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_audit_log_insert_and_query(pool: PgPool) {
    let admin = seed_user(&pool, "admin@test.com").await;
    let input = shipwrecked_db::models::audit::CreateAuditLog {
        event_type: "shop_item_created".to_string(),
        description: "Created shop item: Compass".to_string(),
        actor_user_id: Some(admin.id),
        target_user_id: Some(admin.id),
        metadata: Some(serde_json::json!({ "itemName": "Compass" })),
    };
    let entry = AuditLogRepo::insert(&pool, &input).await.unwrap();
    assert_eq!(entry.event_type, "shop_item_created");

    let entries = AuditLogRepo::list_by_event_type(&pool, "shop_item_created")
        .await
        .unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].actor_user_id, Some(admin.id));
}

// ---------------------------------------------------------------------------
// Reviews
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_review_insert_and_list(pool: PgPool) {
    let user = seed_user(&pool, "requester@test.com").await;
    let project = ProjectRepo::insert(&pool, &new_project(user.id, "Reviewable"))
        .await
        .unwrap();

    let input = CreateReview {
        project_id: project.project_id,
        requester_user_id: Some(user.id),
        review_type: "ShippedApproval".to_string(),
        comment: "Ready for a look".to_string(),
    };
    let review = ReviewRepo::create(&pool, &input).await.unwrap();
    assert_eq!(review.review_type, "ShippedApproval");

    let reviews = ReviewRepo::list_by_project(&pool, project.project_id)
        .await
        .unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].requester_user_id, Some(user.id));
}

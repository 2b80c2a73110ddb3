mod common;

use odata_menu_server::config::DatabaseConfig;
use odata_menu_server::database::{
    DbPool, MenuItemChanges, MenuItemRepository, NewMenuItem, SqliteMenuItemRepository,
    UpdateOutcome,
};
use odata_menu_server::odata::FilterPredicate;
use std::sync::Arc;

use common::memory_pool;

async fn repository() -> SqliteMenuItemRepository {
    SqliteMenuItemRepository::new(memory_pool().await)
}

fn new_item(name: &str, calories: Option<i64>) -> NewMenuItem {
    NewMenuItem {
        name: name.to_string(),
        calories,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_create_and_get() {
    let repo = repository().await;

    let created = repo
        .create(&NewMenuItem {
            name: "Ramen".to_string(),
            rating: Some(5),
            is_vegan: Some(false),
            calories: Some(880),
            description: Some("Tonkotsu".to_string()),
        })
        .await
        .unwrap();

    let fetched = repo.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched, Some(created));
}

#[tokio::test]
async fn test_get_missing() {
    let repo = repository().await;
    assert_eq!(repo.get_by_id(42).await.unwrap(), None);
}

#[tokio::test]
async fn test_list_with_predicate_excludes_null_calories() {
    let repo = repository().await;
    repo.create(&new_item("Light", Some(100))).await.unwrap();
    repo.create(&new_item("Unknown", None)).await.unwrap();
    let heavy = repo.create(&new_item("Heavy", Some(600))).await.unwrap();

    let predicate: FilterPredicate = "Calories gt 500".parse().unwrap();
    let items = repo.list(Some(predicate)).await.unwrap();

    assert_eq!(items, vec![heavy]);
    assert_eq!(repo.list(None).await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_update_outcomes() {
    let repo = repository().await;
    let item = repo.create(&new_item("Curry", Some(700))).await.unwrap();

    let unchanged = MenuItemChanges {
        calories: Some(Some(700)),
        ..Default::default()
    };
    assert_eq!(
        repo.update(item.id, &unchanged).await.unwrap(),
        Some(UpdateOutcome::Unchanged)
    );

    let changed = MenuItemChanges {
        name: Some("Green Curry".to_string()),
        is_vegan: Some(Some(true)),
        ..Default::default()
    };
    let Some(UpdateOutcome::Updated(updated)) = repo.update(item.id, &changed).await.unwrap() else {
        panic!("expected an update");
    };
    assert_eq!(updated.name, "Green Curry");
    assert_eq!(updated.is_vegan, Some(true));
    assert_eq!(updated.calories, Some(700));

    assert_eq!(repo.get_by_id(item.id).await.unwrap(), Some(updated));

    // Clearing a column that is already NULL writes nothing.
    let clear_rating = MenuItemChanges {
        name: Some("Green Curry".to_string()),
        rating: Some(None),
        ..Default::default()
    };
    assert_eq!(
        repo.update(item.id, &clear_rating).await.unwrap(),
        Some(UpdateOutcome::Unchanged)
    );

    let clear_calories = MenuItemChanges {
        calories: Some(None),
        ..Default::default()
    };
    let Some(UpdateOutcome::Updated(cleared)) = repo.update(item.id, &clear_calories).await.unwrap()
    else {
        panic!("expected an update");
    };
    assert_eq!(cleared.calories, None);
    assert_eq!(cleared.name, "Green Curry");
}

#[tokio::test]
async fn test_update_missing() {
    let repo = repository().await;
    let changes = MenuItemChanges {
        rating: Some(Some(1)),
        ..Default::default()
    };

    assert_eq!(repo.update(999999, &changes).await.unwrap(), None);
}

#[tokio::test]
async fn test_delete() {
    let repo = repository().await;
    let item = repo.create(&new_item("Nachos", None)).await.unwrap();

    assert!(repo.delete(item.id).await.unwrap());
    assert!(!repo.delete(item.id).await.unwrap());
    assert_eq!(repo.get_by_id(item.id).await.unwrap(), None);
}

#[tokio::test]
async fn test_ping() {
    let repo = repository().await;
    assert!(repo.ping().await.is_ok());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_updates_on_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let pool = DbPool::new(&DatabaseConfig {
        url: format!("sqlite://{}", dir.path().join("menu.sqlite").display()),
        pool_max_size: 8,
        pool_timeout_seconds: 30,
    })
    .await
    .unwrap();
    pool.init_schema().await.unwrap();

    let repo = Arc::new(SqliteMenuItemRepository::new(pool.clone()));
    let mut ids = Vec::new();
    for i in 0..8 {
        let item = repo.create(&new_item(&format!("Dish {}", i), Some(100))).await.unwrap();
        ids.push(item.id);
    }

    let mut handles = Vec::new();
    for round in 0..20 {
        for &id in &ids {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                let changes = MenuItemChanges {
                    rating: Some(Some(round)),
                    ..Default::default()
                };
                repo.update(id, &changes).await
            }));
        }
    }

    let mut failures = Vec::new();
    for handle in handles {
        match handle.await.unwrap() {
            Ok(Some(_)) => {}
            other => failures.push(format!("{:?}", other)),
        }
    }
    assert!(failures.is_empty(), "{} of 160 updates failed: {:?}", failures.len(), failures.first());

    for id in ids {
        let item = repo.get_by_id(id).await.unwrap().unwrap();
        assert!(item.rating.is_some());
    }

    pool.close().await;
}

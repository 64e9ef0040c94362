//! PostgreSQL store integration test.
//!
//! Runs against `DATABASE_URL` and writes into its `plants` table. Without `DATABASE_URL` the test
//! returns early.

use plant_records::{NewPlant, PlantStore, PostgresPlantStore, StoreError};

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_postgres_store_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        println!("DATABASE_URL not set; skipping PostgreSQL store test");
        return Ok(());
    };

    let store = PostgresPlantStore::connect(&database_url, 2).await?;
    store.ensure_schema().await?;
    store.ping().await?;
    assert!(store.table_exists().await?);

    let created = store
        .create(NewPlant {
            name: Some("Fern".to_string()),
            price: Some(12.5),
            ..NewPlant::default()
        })
        .await?;
    assert_eq!(created.name.as_deref(), Some("Fern"));
    assert_eq!(created.price, Some(12.5));
    assert_eq!(created.image, None);

    assert_eq!(store.find_by_id(created.id).await?, Some(created.clone()));
    assert!(store.list().await?.contains(&created));

    // Explicit ids are honored, duplicates are conflicts, and the sequence moves past them.
    let explicit_id = created.id + 1_000;
    let explicit = store
        .create(NewPlant {
            id: Some(explicit_id),
            ..NewPlant::default()
        })
        .await?;
    assert_eq!(explicit.id, explicit_id);

    let dup = store
        .create(NewPlant {
            id: Some(explicit_id),
            ..NewPlant::default()
        })
        .await;
    assert!(matches!(dup, Err(StoreError::Conflict(id)) if id == explicit_id));

    let next = store.create(NewPlant::default()).await?;
    assert!(next.id > explicit_id);

    // An explicit id below the sequence must not pull the sequence back down.
    let low_id = -next.id;
    store
        .create(NewPlant {
            id: Some(low_id),
            ..NewPlant::default()
        })
        .await?;
    let after_low = store.create(NewPlant::default()).await?;
    assert!(after_low.id > next.id);

    assert_eq!(store.find_by_id(i64::MAX).await?, None);
    Ok(())
}

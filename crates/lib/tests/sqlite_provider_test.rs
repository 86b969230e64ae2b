//! # SQLite Provider Tests
//!
//! Exercises user resolution and the recency-ordered, user-scoped crop and
//! sale queries against an in-memory Turso database.

use anyhow::Result;
use ayni::providers::db::storage::{FarmStore, RECENT_ROWS_LIMIT};
use ayni_test_utils::TestSetup;

#[tokio::test]
async fn test_find_user_id() -> Result<()> {
    let setup = TestSetup::new().await?;
    setup.add_user(7, "rosa").await?;

    assert_eq!(setup.provider.find_user_id("rosa").await?, Some(7));
    assert_eq!(setup.provider.find_user_id("nadie").await?, None);
    Ok(())
}

#[tokio::test]
async fn test_find_user_id_is_not_injectable() -> Result<()> {
    let setup = TestSetup::new().await?;
    setup.add_user(1, "rosa").await?;

    assert_eq!(setup.provider.find_user_id("' OR '1'='1").await?, None);
    Ok(())
}

#[tokio::test]
async fn test_recent_sales_are_limited_and_newest_first() -> Result<()> {
    let setup = TestSetup::new().await?;
    setup.add_user(1, "rosa").await?;
    for i in 1..=7 {
        setup
            .add_sale(1, &format!("venta-{i}"), Some(i), Some(i as f64), None)
            .await?;
    }

    let sales = setup.provider.recent_sales(1, RECENT_ROWS_LIMIT).await?;
    let names: Vec<_> = sales.iter().filter_map(|s| s.name.clone()).collect();

    assert_eq!(
        names,
        vec!["venta-7", "venta-6", "venta-5", "venta-4", "venta-3"]
    );
    assert_eq!(sales[0].unit_price, Some(7.0));
    assert_eq!(sales[0].quantity.as_deref(), Some("7"));
    assert_eq!(sales[0].description, None);
    Ok(())
}

#[tokio::test]
async fn test_recent_crops_join_products_and_keep_nulls() -> Result<()> {
    let setup = TestSetup::new().await?;
    setup.add_user(1, "rosa").await?;
    setup.add_user(2, "juan").await?;
    setup
        .seed(
            "INSERT INTO products (id, name, recommended_growing_climate, recommended_soil_type, user_id) \
                VALUES (10, 'Semilla Canchán', 'templado', 'franco', 1);
             INSERT INTO crops (id, name, watering_days, fertilize_crop, product_id, user_id) \
                VALUES (1, 'Papa', 3, 30, 10, 1);
             INSERT INTO crops (id, name, pest_cleanup_days, user_id) \
                VALUES (2, 'Maíz', 15, 1);
             INSERT INTO crops (id, name, watering_days, user_id) \
                VALUES (3, 'Café', 2, 2);",
        )
        .await?;

    let crops = setup.provider.recent_crops(1, RECENT_ROWS_LIMIT).await?;
    assert_eq!(crops.len(), 2, "only rosa's crops are returned");

    let maiz = &crops[0];
    assert_eq!(maiz.crop_name.as_deref(), Some("Maíz"));
    assert_eq!(maiz.pest_cleanup_days.as_deref(), Some("15"));
    assert_eq!(maiz.product_name, None);
    assert_eq!(maiz.watering_days, None);

    let papa = &crops[1];
    assert_eq!(papa.crop_name.as_deref(), Some("Papa"));
    assert_eq!(papa.watering_days.as_deref(), Some("3"));
    assert_eq!(papa.product_name.as_deref(), Some("Semilla Canchán"));
    assert_eq!(papa.recommended_growing_climate.as_deref(), Some("templado"));
    assert_eq!(papa.recommended_cultivation_depth, None);
    Ok(())
}

#[tokio::test]
async fn test_initialize_schema_is_idempotent() -> Result<()> {
    let setup = TestSetup::new().await?;
    setup.provider.initialize_schema().await?;
    assert_eq!(setup.provider.name(), "SQLite");
    Ok(())
}

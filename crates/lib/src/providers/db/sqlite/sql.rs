//! # SQLite Specific SQL Queries
//!
//! This module centralizes SQL query strings for the SQLite provider.
//! All lookups are parametrized; nothing here interpolates user input.

/// Resolves a username to its identifier. Expects `?1` = username.
pub const FIND_USER_ID_SQL: &str = "SELECT id FROM users WHERE username = ?1 LIMIT 1";

/// Returns the SQL for the user's most recent crops joined with their product.
///
/// Expects `?1` = user id. Column order matches `CropRecord`.
pub fn recent_crops(limit: u32) -> String {
    format!(
        "
        SELECT
            c.name,
            c.watering_days,
            c.fertilize_crop,
            c.pest_cleanup_days,
            c.pick_up_weed,
            c.oxygenate_crop,
            c.make_crop_line,
            c.make_crop_hole,
            p.name,
            p.recommended_cultivation_depth,
            p.recommended_cultivation_distance,
            p.recommended_growing_climate,
            p.recommended_growing_season,
            p.recommended_soil_type
        FROM crops c
        LEFT JOIN products p ON c.product_id = p.id
        WHERE c.user_id = ?1
        ORDER BY c.id DESC
        LIMIT {limit};
    "
    )
}

/// Returns the SQL for the user's most recent sales. Expects `?1` = user id.
pub fn recent_sales(limit: u32) -> String {
    format!(
        "
        SELECT name, quantity, unit_price, description
        FROM sales
        WHERE user_id = ?1
        ORDER BY id DESC
        LIMIT {limit};
    "
    )
}

pub const CREATE_USERS_TABLE_SQL: &str = "
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    email TEXT,
    role TEXT,
    created_at TEXT,
    updated_at TEXT
);";

pub const CREATE_PRODUCTS_TABLE_SQL: &str = "
CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    description TEXT,
    image_url TEXT,
    recommended_cultivation_depth TEXT,
    recommended_cultivation_distance TEXT,
    recommended_growing_climate TEXT,
    recommended_growing_season TEXT,
    recommended_soil_type TEXT,
    user_id INTEGER
);";

pub const CREATE_CROPS_TABLE_SQL: &str = "
CREATE TABLE IF NOT EXISTS crops (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    watering_days INTEGER,
    fertilize_crop INTEGER,
    pest_cleanup_days INTEGER,
    pick_up_weed INTEGER,
    oxygenate_crop INTEGER,
    make_crop_line TEXT,
    make_crop_hole TEXT,
    product_id INTEGER,
    user_id INTEGER
);";

pub const CREATE_SALES_TABLE_SQL: &str = "
CREATE TABLE IF NOT EXISTS sales (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    quantity INTEGER,
    unit_price REAL,
    description TEXT,
    image_url TEXT,
    user_id INTEGER
);";

pub const CREATE_CROPS_USER_INDEX_SQL: &str =
    "CREATE INDEX IF NOT EXISTS idx_crops_user_id ON crops (user_id);";

pub const CREATE_SALES_USER_INDEX_SQL: &str =
    "CREATE INDEX IF NOT EXISTS idx_sales_user_id ON sales (user_id);";

/// Every statement needed to create the schema, in dependency order.
pub const ALL_TABLE_CREATION_SQL: &[&str] = &[
    CREATE_USERS_TABLE_SQL,
    CREATE_PRODUCTS_TABLE_SQL,
    CREATE_CROPS_TABLE_SQL,
    CREATE_SALES_TABLE_SQL,
    CREATE_CROPS_USER_INDEX_SQL,
    CREATE_SALES_USER_INDEX_SQL,
];

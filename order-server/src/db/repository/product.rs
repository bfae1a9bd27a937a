//! Product repository

use super::{RepoError, RepoResult, placeholders};
use shared::models::{Product, ProductCreate, ProductUpdate};
use shared::util::snowflake_id;
use sqlx::{SqliteExecutor, SqlitePool};

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT id, name, description, category, price, stock_quantity
         FROM products ORDER BY name",
    )
    .fetch_all(pool)
    .await?;
    Ok(products)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(
        "SELECT id, name, description, category, price, stock_quantity
         FROM products WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(product)
}

/// Batch lookup for order creation. Returns whatever exists; the caller
/// decides what a missing id means.
pub async fn find_by_ids(pool: &SqlitePool, ids: &[i64]) -> RepoResult<Vec<Product>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let sql = format!(
        "SELECT id, name, description, category, price, stock_quantity
         FROM products WHERE id IN ({})",
        placeholders(ids.len())
    );
    let mut query = sqlx::query_as::<_, Product>(&sql);
    for id in ids {
        query = query.bind(id);
    }
    Ok(query.fetch_all(pool).await?)
}

pub async fn create(pool: &SqlitePool, data: ProductCreate) -> RepoResult<Product> {
    let id = snowflake_id();
    sqlx::query(
        "INSERT INTO products (id, name, description, category, price, stock_quantity)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(&data.name)
    .bind(&data.description)
    .bind(&data.category)
    .bind(data.price)
    .bind(data.stock_quantity)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Product vanished after insert".into()))
}

/// Partial update; absent fields keep their current value.
pub async fn update(pool: &SqlitePool, id: i64, data: ProductUpdate) -> RepoResult<Product> {
    let result = sqlx::query(
        "UPDATE products SET
             name = COALESCE(?, name),
             description = COALESCE(?, description),
             category = COALESCE(?, category),
             price = COALESCE(?, price),
             stock_quantity = COALESCE(?, stock_quantity)
         WHERE id = ?",
    )
    .bind(&data.name)
    .bind(&data.description)
    .bind(&data.category)
    .bind(data.price)
    .bind(data.stock_quantity)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Product {id}")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Product {id}")))
}

/// Current stock for one product, readable mid-transaction.
pub async fn current_stock<'e, E>(executor: E, id: i64) -> RepoResult<Option<i64>>
where
    E: SqliteExecutor<'e>,
{
    let row: Option<(i64,)> = sqlx::query_as("SELECT stock_quantity FROM products WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(row.map(|(stock,)| stock))
}

/// Guarded stock decrement. Returns false when current stock is below
/// `quantity`; the row is left untouched in that case.
pub async fn decrement_stock<'e, E>(executor: E, id: i64, quantity: i64) -> RepoResult<bool>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query(
        "UPDATE products SET stock_quantity = stock_quantity - ?
         WHERE id = ? AND stock_quantity >= ?",
    )
    .bind(quantity)
    .bind(id)
    .bind(quantity)
    .execute(executor)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Stock restore on order deletion. A missing product is a no-op.
pub async fn restore_stock<'e, E>(executor: E, id: i64, quantity: i64) -> RepoResult<()>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query("UPDATE products SET stock_quantity = stock_quantity + ? WHERE id = ?")
        .bind(quantity)
        .bind(id)
        .execute(executor)
        .await?;
    Ok(())
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM products WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

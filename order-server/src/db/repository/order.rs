//! Order repository
//!
//! Write helpers are generic over the executor so the order service can
//! run them inside a single transaction.

use super::RepoResult;
use shared::models::{OrderFilter, OrderItem, OrderStatus, OrderSummary};
use sqlx::sqlite::Sqlite;
use sqlx::{QueryBuilder, SqliteExecutor, SqlitePool};

const SUMMARY_SELECT: &str = "SELECT o.id, o.customer_id, \
     c.first_name || ' ' || c.last_name AS customer_name, \
     o.order_date, o.total_amount, o.status \
     FROM orders o JOIN customers c ON c.id = o.customer_id";

pub async fn find_summary_by_id(
    pool: &SqlitePool,
    id: i64,
) -> RepoResult<Option<OrderSummary>> {
    let order = sqlx::query_as::<_, OrderSummary>(&format!("{SUMMARY_SELECT} WHERE o.id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(order)
}

pub async fn find_by_customer(
    pool: &SqlitePool,
    customer_id: i64,
) -> RepoResult<Vec<OrderSummary>> {
    let orders = sqlx::query_as::<_, OrderSummary>(&format!(
        "{SUMMARY_SELECT} WHERE o.customer_id = ? ORDER BY o.order_date DESC, o.id DESC"
    ))
    .bind(customer_id)
    .fetch_all(pool)
    .await?;
    Ok(orders)
}

fn push_filter(builder: &mut QueryBuilder<'_, Sqlite>, filter: &OrderFilter) {
    builder.push(" WHERE 1=1");
    if let Some(status) = filter.status {
        builder.push(" AND o.status = ").push_bind(status.as_str());
    }
    if let Some(customer_id) = filter.customer_id {
        builder.push(" AND o.customer_id = ").push_bind(customer_id);
    }
    if let Some(min) = filter.min_price {
        builder.push(" AND o.total_amount >= ").push_bind(min);
    }
    if let Some(max) = filter.max_price {
        builder.push(" AND o.total_amount <= ").push_bind(max);
    }
}

/// Filtered page of order summaries, newest first.
pub async fn list(
    pool: &SqlitePool,
    filter: &OrderFilter,
    limit: i64,
    offset: i64,
) -> RepoResult<Vec<OrderSummary>> {
    let mut builder = QueryBuilder::new(SUMMARY_SELECT);
    push_filter(&mut builder, filter);
    builder.push(" ORDER BY o.order_date DESC, o.id DESC");
    builder.push(" LIMIT ").push_bind(limit);
    builder.push(" OFFSET ").push_bind(offset);

    let orders = builder
        .build_query_as::<OrderSummary>()
        .fetch_all(pool)
        .await?;
    Ok(orders)
}

/// Total row count for the same filter, for pagination metadata.
pub async fn count(pool: &SqlitePool, filter: &OrderFilter) -> RepoResult<i64> {
    let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM orders o");
    push_filter(&mut builder, filter);

    let (total,): (i64,) = builder.build_query_as().fetch_one(pool).await?;
    Ok(total)
}

pub async fn find_items<'e, E>(executor: E, order_id: i64) -> RepoResult<Vec<OrderItem>>
where
    E: SqliteExecutor<'e>,
{
    let items = sqlx::query_as::<_, OrderItem>(
        "SELECT id, order_id, product_id, quantity, price
         FROM order_items WHERE order_id = ? ORDER BY id",
    )
    .bind(order_id)
    .fetch_all(executor)
    .await?;
    Ok(items)
}

pub async fn insert<'e, E>(
    executor: E,
    id: i64,
    customer_id: i64,
    order_date: chrono::NaiveDate,
    total_amount: f64,
    status: OrderStatus,
) -> RepoResult<()>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query(
        "INSERT INTO orders (id, customer_id, order_date, total_amount, status)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(customer_id)
    .bind(order_date)
    .bind(total_amount)
    .bind(status.as_str())
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn insert_item<'e, E>(
    executor: E,
    id: i64,
    order_id: i64,
    product_id: i64,
    quantity: i64,
    price: f64,
) -> RepoResult<()>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query(
        "INSERT INTO order_items (id, order_id, product_id, quantity, price)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(order_id)
    .bind(product_id)
    .bind(quantity)
    .bind(price)
    .execute(executor)
    .await?;
    Ok(())
}

/// Deleting the order cascades to its items.
pub async fn delete<'e, E>(executor: E, id: i64) -> RepoResult<bool>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM orders WHERE id = ?")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::memory_pool;
    use chrono::NaiveDate;
    use shared::util::snowflake_id;

    async fn seed_customer(pool: &SqlitePool) -> i64 {
        let id = snowflake_id();
        sqlx::query(
            "INSERT INTO customers (id, first_name, last_name, email, address, city, state, zip_code)
             VALUES (?, 'Ada', 'Lovelace', ?, '1 Main St', 'Springfield', 'IL', '62701')",
        )
        .bind(id)
        .bind(format!("{id}@example.com"))
        .execute(pool)
        .await
        .unwrap();
        id
    }

    async fn seed_order(
        pool: &SqlitePool,
        customer_id: i64,
        date: NaiveDate,
        total: f64,
        status: OrderStatus,
    ) -> i64 {
        let id = snowflake_id();
        insert(pool, id, customer_id, date, total, status)
            .await
            .unwrap();
        id
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    #[tokio::test]
    async fn test_summary_joins_customer_name() {
        let pool = memory_pool().await;
        let customer_id = seed_customer(&pool).await;
        let order_id = seed_order(&pool, customer_id, day(1), 10.0, OrderStatus::Pending).await;

        let summary = find_summary_by_id(&pool, order_id).await.unwrap().unwrap();
        assert_eq!(summary.customer_name, "Ada Lovelace");
        assert_eq!(summary.total_amount, 10.0);
        assert_eq!(summary.status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn test_list_filters_and_pagination() {
        let pool = memory_pool().await;
        let customer_id = seed_customer(&pool).await;
        seed_order(&pool, customer_id, day(1), 5.0, OrderStatus::Pending).await;
        seed_order(&pool, customer_id, day(2), 15.0, OrderStatus::Completed).await;
        seed_order(&pool, customer_id, day(3), 25.0, OrderStatus::Pending).await;

        let all = OrderFilter::default();
        assert_eq!(count(&pool, &all).await.unwrap(), 3);

        let page = list(&pool, &all, 2, 0).await.unwrap();
        assert_eq!(page.len(), 2);
        // Newest first
        assert_eq!(page[0].order_date, day(3));

        let pending = OrderFilter {
            status: Some(OrderStatus::Pending),
            ..Default::default()
        };
        assert_eq!(count(&pool, &pending).await.unwrap(), 2);

        let pricey = OrderFilter {
            min_price: Some(10.0),
            max_price: Some(20.0),
            ..Default::default()
        };
        let rows = list(&pool, &pricey, 10, 0).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].total_amount, 15.0);
    }

    #[tokio::test]
    async fn test_delete_cascades_items() {
        let pool = memory_pool().await;
        let customer_id = seed_customer(&pool).await;
        let order_id = seed_order(&pool, customer_id, day(1), 9.0, OrderStatus::Pending).await;
        insert_item(&pool, snowflake_id(), order_id, 777, 3, 3.0)
            .await
            .unwrap();

        assert_eq!(find_items(&pool, order_id).await.unwrap().len(), 1);
        assert!(delete(&pool, order_id).await.unwrap());
        assert!(find_items(&pool, order_id).await.unwrap().is_empty());
        assert!(!delete(&pool, order_id).await.unwrap());
    }
}

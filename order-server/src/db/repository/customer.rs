//! Customer repository

use super::RepoResult;
use shared::models::Customer;
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Customer>> {
    let customers = sqlx::query_as::<_, Customer>(
        "SELECT id, first_name, last_name, email, phone, address, city, state, zip_code
         FROM customers ORDER BY last_name, first_name",
    )
    .fetch_all(pool)
    .await?;
    Ok(customers)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Customer>> {
    let customer = sqlx::query_as::<_, Customer>(
        "SELECT id, first_name, last_name, email, phone, address, city, state, zip_code
         FROM customers WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(customer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::memory_pool;
    use shared::util::snowflake_id;

    async fn seed_customer(pool: &SqlitePool, first: &str, last: &str, email: &str) -> i64 {
        let id = snowflake_id();
        sqlx::query(
            "INSERT INTO customers (id, first_name, last_name, email, address, city, state, zip_code)
             VALUES (?, ?, ?, ?, '1 Main St', 'Springfield', 'IL', '62701')",
        )
        .bind(id)
        .bind(first)
        .bind(last)
        .bind(email)
        .execute(pool)
        .await
        .unwrap();
        id
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let pool = memory_pool().await;
        let id = seed_customer(&pool, "Ada", "Lovelace", "ada@example.com").await;

        let found = find_by_id(&pool, id).await.unwrap().unwrap();
        assert_eq!(found.email, "ada@example.com");
        assert_eq!(found.full_name(), "Ada Lovelace");

        assert!(find_by_id(&pool, 999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_all_sorted_by_name() {
        let pool = memory_pool().await;
        seed_customer(&pool, "Grace", "Hopper", "grace@example.com").await;
        seed_customer(&pool, "Ada", "Lovelace", "ada@example.com").await;
        seed_customer(&pool, "Alan", "Hopper", "alan@example.com").await;

        let all = find_all(&pool).await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].first_name, "Alan");
        assert_eq!(all[1].first_name, "Grace");
        assert_eq!(all[2].last_name, "Lovelace");
    }
}

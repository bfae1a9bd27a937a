//! Order transaction logic
//!
//! `create_order` runs all validation against the pool, then performs
//! the order insert, item inserts, and stock decrements inside one
//! SQLite transaction. The decrement is guarded (`stock_quantity >= ?`
//! in the WHERE clause), so a concurrent writer that drains stock
//! between validation and commit aborts this transaction instead of
//! driving stock negative.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use shared::models::{
    CreatedOrder, OrderCreate, OrderDetail, OrderFilter, OrderStatus, OrderSummary, Product,
};
use shared::util::snowflake_id;
use sqlx::SqlitePool;
use std::collections::HashMap;

use super::OrderError;
use crate::db::repository::{customer, order, product};
use crate::utils::pagination::{self, PaginatedResponse};

/// Sum requested quantities per product, keeping first-appearance order.
/// Two line items for the same product count against stock together.
fn aggregate_quantities(payload: &OrderCreate) -> Vec<(i64, i64)> {
    let mut totals: Vec<(i64, i64)> = Vec::with_capacity(payload.items.len());
    for item in &payload.items {
        match totals.iter_mut().find(|(id, _)| *id == item.product_id) {
            Some((_, qty)) => *qty += item.quantity,
            None => totals.push((item.product_id, item.quantity)),
        }
    }
    totals
}

fn compute_total(payload: &OrderCreate) -> Result<f64, OrderError> {
    let mut total = Decimal::ZERO;
    for item in &payload.items {
        let price = Decimal::try_from(item.price)
            .map_err(|e| OrderError::Database(format!("Unrepresentable price: {e}")))?;
        total += price * Decimal::from(item.quantity);
    }
    total
        .round_dp(2)
        .to_f64()
        .ok_or_else(|| OrderError::Database("Order total out of range".into()))
}

pub async fn create_order(
    pool: &SqlitePool,
    payload: OrderCreate,
) -> Result<CreatedOrder, OrderError> {
    customer::find_by_id(pool, payload.customer_id)
        .await?
        .ok_or(OrderError::CustomerNotFound(payload.customer_id))?;

    let requested = aggregate_quantities(&payload);
    let ids: Vec<i64> = requested.iter().map(|(id, _)| *id).collect();
    let products: HashMap<i64, Product> = product::find_by_ids(pool, &ids)
        .await?
        .into_iter()
        .map(|p| (p.id, p))
        .collect();

    for (product_id, quantity) in &requested {
        let found = products
            .get(product_id)
            .ok_or(OrderError::ProductNotFound(*product_id))?;
        if *quantity > found.stock_quantity {
            return Err(OrderError::InsufficientStock {
                product_id: *product_id,
                name: found.name.clone(),
                requested: *quantity,
                available: found.stock_quantity,
            });
        }
    }

    let total_amount = compute_total(&payload)?;
    let order_id = snowflake_id();

    let mut tx = pool.begin().await?;
    order::insert(
        tx.as_mut(),
        order_id,
        payload.customer_id,
        payload.order_date,
        total_amount,
        OrderStatus::Pending,
    )
    .await?;
    for item in &payload.items {
        order::insert_item(
            tx.as_mut(),
            snowflake_id(),
            order_id,
            item.product_id,
            item.quantity,
            item.price,
        )
        .await?;
    }
    for (product_id, quantity) in &requested {
        if !product::decrement_stock(tx.as_mut(), *product_id, *quantity).await? {
            // Stock drained since validation; dropping tx rolls everything
            // back. Report the stock as it stands now, not the stale
            // pre-transaction snapshot.
            let available = product::current_stock(tx.as_mut(), *product_id)
                .await?
                .unwrap_or(0);
            let found = &products[product_id];
            return Err(OrderError::InsufficientStock {
                product_id: *product_id,
                name: found.name.clone(),
                requested: *quantity,
                available,
            });
        }
    }
    tx.commit().await?;

    tracing::info!(order_id, total_amount, "Order created");
    Ok(CreatedOrder {
        order_id,
        total_amount,
    })
}

/// Restores stock for every surviving product, then deletes the order;
/// the item rows go with it via cascade.
pub async fn delete_order(pool: &SqlitePool, order_id: i64) -> Result<(), OrderError> {
    if order_id <= 0 {
        return Err(OrderError::InvalidId(order_id));
    }

    let mut tx = pool.begin().await?;
    let items = order::find_items(tx.as_mut(), order_id).await?;
    for item in &items {
        // A product deleted after the sale is skipped
        product::restore_stock(tx.as_mut(), item.product_id, item.quantity).await?;
    }
    if !order::delete(tx.as_mut(), order_id).await? {
        return Err(OrderError::OrderNotFound(order_id));
    }
    tx.commit().await?;

    tracing::info!(order_id, "Order deleted, stock restored");
    Ok(())
}

pub async fn get_order(pool: &SqlitePool, order_id: i64) -> Result<OrderDetail, OrderError> {
    if order_id <= 0 {
        return Err(OrderError::InvalidId(order_id));
    }
    let summary = order::find_summary_by_id(pool, order_id)
        .await?
        .ok_or(OrderError::OrderNotFound(order_id))?;
    let items = order::find_items(pool, order_id).await?;
    Ok(OrderDetail {
        order: summary,
        items,
    })
}

pub async fn get_orders(
    pool: &SqlitePool,
    filter: OrderFilter,
    page: Option<i64>,
    page_size: Option<i64>,
) -> Result<PaginatedResponse<OrderSummary>, OrderError> {
    let (page, page_size) = pagination::normalize(page, page_size);
    let total = order::count(pool, &filter).await?;
    let rows = order::list(pool, &filter, page_size, (page - 1) * page_size).await?;
    Ok(PaginatedResponse::new(total, page, page_size, rows))
}

pub async fn get_customer_orders(
    pool: &SqlitePool,
    customer_id: i64,
) -> Result<Vec<OrderSummary>, OrderError> {
    if customer_id <= 0 {
        return Err(OrderError::InvalidId(customer_id));
    }
    customer::find_by_id(pool, customer_id)
        .await?
        .ok_or(OrderError::CustomerNotFound(customer_id))?;
    Ok(order::find_by_customer(pool, customer_id).await?)
}

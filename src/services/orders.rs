//! Transactional order persistence.
//!
//! An order is only ever persisted as a whole: the header and all of its
//! line items commit together or none of them do. Any failure between the
//! first insert and the final commit rolls the transaction back in full, so
//! a header without lines (or lines without a header) can never become
//! durable.

use crate::{
    db::DbPool,
    entities::{order, order_item, partner},
    errors::ServiceError,
    events::{Event, EventSender},
    services::order_draft::DraftItem,
};
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Persists finished order drafts and reads committed orders back.
#[derive(Clone)]
pub struct OrderService {
    db: Arc<DbPool>,
    event_sender: Option<Arc<EventSender>>,
}

/// An order header together with its line rows.
#[derive(Debug, Clone)]
pub struct OrderWithItems {
    pub order: order::Model,
    pub items: Vec<order_item::Model>,
}

impl OrderService {
    pub fn new(db: Arc<DbPool>, event_sender: Option<Arc<EventSender>>) -> Self {
        Self { db, event_sender }
    }

    /// Commits a draft for `partner_id` as one atomic transaction and
    /// returns the persisted header with its generated id.
    ///
    /// Preconditions: `items` must be non-empty (`EmptyOrder`) and the
    /// partner must exist (`PartnerNotFound`). Every early return before
    /// the final commit drops the transaction, which rolls back all
    /// inserts already issued.
    #[instrument(skip(self, items), fields(item_count = items.len()))]
    pub async fn create_order(
        &self,
        partner_id: i32,
        items: &[DraftItem],
    ) -> Result<order::Model, ServiceError> {
        if items.is_empty() {
            return Err(ServiceError::EmptyOrder);
        }

        let txn = self.db.begin().await.map_err(|e| {
            error!(error = %e, partner_id, "failed to start order transaction");
            ServiceError::DatabaseError(e)
        })?;

        // The existence check shares the transaction, so the partner cannot
        // disappear between the check and the header insert.
        let partner_exists = partner::Entity::find_by_id(partner_id)
            .one(&txn)
            .await?
            .is_some();
        if !partner_exists {
            warn!(partner_id, "order rejected: partner not found");
            return Err(ServiceError::PartnerNotFound(partner_id));
        }

        let total_amount: Decimal = items.iter().map(|item| item.total_price).sum();

        let header = order::ActiveModel {
            partner_id: Set(partner_id),
            total_amount: Set(total_amount),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let header = header.insert(&txn).await.map_err(|e| {
            error!(error = %e, partner_id, "failed to insert order header");
            ServiceError::DatabaseError(e)
        })?;

        for item in items {
            let line = order_item::ActiveModel {
                order_id: Set(header.id),
                product_id: Set(item.product_id),
                quantity: Set(item.quantity),
                unit_price: Set(item.unit_price),
                total_price: Set(item.total_price),
                ..Default::default()
            };

            line.insert(&txn).await.map_err(|e| {
                error!(
                    error = %e,
                    order_id = header.id,
                    product_id = item.product_id,
                    "failed to insert order line, rolling back"
                );
                ServiceError::DatabaseError(e)
            })?;
        }

        txn.commit().await.map_err(|e| {
            error!(error = %e, order_id = header.id, "failed to commit order transaction");
            ServiceError::DatabaseError(e)
        })?;

        info!(order_id = header.id, partner_id, %total_amount, "order committed");

        if let Some(event_sender) = &self.event_sender {
            if let Err(e) = event_sender.send(Event::OrderCreated(header.id)).await {
                warn!(error = %e, order_id = header.id, "failed to send order created event");
            }
        }

        Ok(header)
    }

    /// Fetches a committed order header with its line rows.
    #[instrument(skip(self))]
    pub async fn get_order_with_items(
        &self,
        order_id: i32,
    ) -> Result<OrderWithItems, ServiceError> {
        let order = order::Entity::find_by_id(order_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Order {} not found", order_id)))?;

        let items = order_item::Entity::find()
            .filter(order_item::Column::OrderId.eq(order_id))
            .order_by_asc(order_item::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(OrderWithItems { order, items })
    }
}

//! Read-only access to the partner/product catalog. Catalog maintenance
//! lives elsewhere; the core only consumes these records.

use crate::{
    db::DbPool,
    entities::{partner, product},
    errors::ServiceError,
};
use sea_orm::{EntityTrait, QueryOrder};
use std::sync::Arc;
use tracing::instrument;

#[derive(Clone)]
pub struct CatalogService {
    db: Arc<DbPool>,
}

impl CatalogService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    #[instrument(skip(self))]
    pub async fn get_partner(
        &self,
        partner_id: i32,
    ) -> Result<Option<partner::Model>, ServiceError> {
        Ok(partner::Entity::find_by_id(partner_id)
            .one(&*self.db)
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn get_product(
        &self,
        product_id: i32,
    ) -> Result<Option<product::Model>, ServiceError> {
        Ok(product::Entity::find_by_id(product_id)
            .one(&*self.db)
            .await?)
    }

    /// Lists all products ordered by name, the way selection screens
    /// present them.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<product::Model>, ServiceError> {
        Ok(product::Entity::find()
            .order_by_asc(product::Column::Name)
            .all(&*self.db)
            .await?)
    }

    /// Lists all partners ordered by name.
    #[instrument(skip(self))]
    pub async fn list_partners(&self) -> Result<Vec<partner::Model>, ServiceError> {
        Ok(partner::Entity::find()
            .order_by_asc(partner::Column::Name)
            .all(&*self.db)
            .await?)
    }
}

use partner_orders::{
    db::{self, DbPool},
    entities::{partner, product},
    events::{self, EventSender},
};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, Set};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::mpsc;

/// Helper harness backed by a throwaway sqlite database file.
pub struct TestApp {
    pub db: Arc<DbPool>,
    pub event_sender: EventSender,
    _event_task: tokio::task::JoinHandle<()>,
    _tmp: TempDir,
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir for test database");
        let db_path = tmp.path().join("partner_orders_test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());

        let pool = db::establish_connection(&url)
            .await
            .expect("create test database");
        db::run_migrations(&pool)
            .await
            .expect("run migrations in tests");

        let (event_tx, event_rx) = mpsc::channel(64);
        let event_sender = EventSender::new(event_tx);
        let event_task = tokio::spawn(events::process_events(event_rx));

        Self {
            db: Arc::new(pool),
            event_sender,
            _event_task: event_task,
            _tmp: tmp,
        }
    }

    pub async fn seed_partner(&self, name: &str, rating: i32) -> partner::Model {
        partner::ActiveModel {
            type_partner_id: Set(1),
            name: Set(name.to_string()),
            director: Set("Test Director".to_string()),
            address: Set("1 Test Street".to_string()),
            rating: Set(rating),
            phone: Set("+1 555 0100".to_string()),
            email: Set(None),
            ..Default::default()
        }
        .insert(&*self.db)
        .await
        .expect("seed partner")
    }

    pub async fn seed_product(&self, name: &str, price: Decimal) -> product::Model {
        product::ActiveModel {
            type_product_id: Set(1),
            name: Set(name.to_string()),
            min_partner_price: Set(price),
            ..Default::default()
        }
        .insert(&*self.db)
        .await
        .expect("seed product")
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self._event_task.abort();
    }
}

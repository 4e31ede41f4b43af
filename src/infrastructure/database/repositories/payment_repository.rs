//! SeaORM implementation of PaymentRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::db_err;
use crate::domain::payment::{Payment, PaymentMethod, PaymentRepository, PaymentStatus};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::payment;

pub struct SeaOrmPaymentRepository {
    db: DatabaseConnection,
}

impl SeaOrmPaymentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: payment::Model) -> DomainResult<Payment> {
    let status = PaymentStatus::from_str(&m.status).ok_or_else(|| {
        DomainError::Validation(format!("Unknown payment status in database: {}", m.status))
    })?;
    let method = PaymentMethod::from_str(&m.method).ok_or_else(|| {
        DomainError::Validation(format!("Unknown payment method in database: {}", m.method))
    })?;
    Ok(Payment {
        id: m.id,
        booking_id: m.booking_id,
        amount: m.amount,
        method,
        status,
        receipt_no: m.receipt_no,
        gateway_ref: m.gateway_ref,
        created_at: m.created_at,
        updated_at: m.updated_at,
    })
}

fn domain_to_active(p: Payment) -> payment::ActiveModel {
    payment::ActiveModel {
        id: Set(p.id),
        booking_id: Set(p.booking_id),
        amount: Set(p.amount),
        method: Set(p.method.as_str().to_string()),
        status: Set(p.status.as_str().to_string()),
        receipt_no: Set(p.receipt_no),
        gateway_ref: Set(p.gateway_ref),
        created_at: Set(p.created_at),
        updated_at: Set(p.updated_at),
    }
}

// ── PaymentRepository impl ──────────────────────────────────────

#[async_trait]
impl PaymentRepository for SeaOrmPaymentRepository {
    async fn save(&self, p: Payment) -> DomainResult<()> {
        debug!("Saving payment: {}", p.id);
        domain_to_active(p).insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Payment>> {
        let model = payment::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(model_to_domain).transpose()
    }

    async fn update(&self, p: Payment) -> DomainResult<()> {
        debug!("Updating payment: {}", p.id);

        let existing = payment::Entity::find_by_id(p.id.as_str())
            .one(&self.db)
            .await
            .map_err(db_err)?;

        if existing.is_none() {
            return Err(DomainError::NotFound {
                entity: "Payment",
                field: "id",
                value: p.id,
            });
        }

        domain_to_active(p).update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_for_booking(&self, booking_id: &str) -> DomainResult<Vec<Payment>> {
        let models = payment::Entity::find()
            .filter(payment::Column::BookingId.eq(booking_id))
            .order_by_desc(payment::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }

    async fn find_latest_completed(&self, booking_id: &str) -> DomainResult<Option<Payment>> {
        let model = payment::Entity::find()
            .filter(payment::Column::BookingId.eq(booking_id))
            .filter(payment::Column::Status.eq("completed"))
            .order_by_desc(payment::Column::CreatedAt)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(model_to_domain).transpose()
    }
}

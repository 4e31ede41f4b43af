//! SeaORM implementation of CancellationRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use super::db_err;
use crate::domain::cancellation::{
    BankDetails, CancellationRecord, CancellationRepository, CancellationStatus, RefundMethod,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::cancellation;

pub struct SeaOrmCancellationRepository {
    db: DatabaseConnection,
}

impl SeaOrmCancellationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: cancellation::Model) -> DomainResult<CancellationRecord> {
    let status = CancellationStatus::from_str(&m.status).ok_or_else(|| {
        DomainError::Validation(format!(
            "Unknown cancellation status in database: {}",
            m.status
        ))
    })?;
    let refund_method = match m.refund_method.as_deref() {
        None => None,
        Some(s) => Some(RefundMethod::from_str(s).ok_or_else(|| {
            DomainError::Validation(format!("Unknown refund method in database: {}", s))
        })?),
    };

    // bank details are all-or-nothing; partial rows surface as None
    let bank_details = match (m.bank_account_no, m.bank_account_name, m.bank_name) {
        (Some(account_no), Some(account_name), Some(bank_name)) => Some(BankDetails {
            account_no,
            account_name,
            bank_name,
        }),
        _ => None,
    };

    Ok(CancellationRecord {
        id: m.id,
        booking_id: m.booking_id,
        reason: m.reason,
        refund_amount: m.refund_amount,
        cancellation_fee: m.cancellation_fee,
        status,
        refund_method,
        bank_details,
        created_at: m.created_at,
        updated_at: m.updated_at,
    })
}

fn domain_to_active(r: CancellationRecord) -> cancellation::ActiveModel {
    let (account_no, account_name, bank_name) = match r.bank_details {
        Some(d) => (Some(d.account_no), Some(d.account_name), Some(d.bank_name)),
        None => (None, None, None),
    };
    cancellation::ActiveModel {
        id: Set(r.id),
        booking_id: Set(r.booking_id),
        reason: Set(r.reason),
        refund_amount: Set(r.refund_amount),
        cancellation_fee: Set(r.cancellation_fee),
        status: Set(r.status.as_str().to_string()),
        refund_method: Set(r.refund_method.map(|m| m.as_str().to_string())),
        bank_account_no: Set(account_no),
        bank_account_name: Set(account_name),
        bank_name: Set(bank_name),
        created_at: Set(r.created_at),
        updated_at: Set(r.updated_at),
    }
}

// ── CancellationRepository impl ─────────────────────────────────

#[async_trait]
impl CancellationRepository for SeaOrmCancellationRepository {
    async fn upsert_for_booking(
        &self,
        record: CancellationRecord,
    ) -> DomainResult<CancellationRecord> {
        let existing = cancellation::Entity::find()
            .filter(cancellation::Column::BookingId.eq(record.booking_id.as_str()))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        match existing {
            Some(prev) => {
                debug!(
                    "Updating existing cancellation record {} for booking {}",
                    prev.id, record.booking_id
                );
                let stored = CancellationRecord {
                    id: prev.id,
                    created_at: prev.created_at,
                    ..record
                };
                domain_to_active(stored.clone())
                    .update(&self.db)
                    .await
                    .map_err(db_err)?;
                Ok(stored)
            }
            None => {
                debug!(
                    "Inserting cancellation record {} for booking {}",
                    record.id, record.booking_id
                );
                domain_to_active(record.clone())
                    .insert(&self.db)
                    .await
                    .map_err(db_err)?;
                Ok(record)
            }
        }
    }

    async fn update(&self, record: CancellationRecord) -> DomainResult<()> {
        debug!("Updating cancellation record: {}", record.id);

        let existing = cancellation::Entity::find_by_id(record.id.as_str())
            .one(&self.db)
            .await
            .map_err(db_err)?;

        if existing.is_none() {
            return Err(DomainError::NotFound {
                entity: "Cancellation",
                field: "id",
                value: record.id,
            });
        }

        domain_to_active(record)
            .update(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<CancellationRecord>> {
        let model = cancellation::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(model_to_domain).transpose()
    }

    async fn find_by_booking(
        &self,
        booking_id: &str,
    ) -> DomainResult<Option<CancellationRecord>> {
        let model = cancellation::Entity::find()
            .filter(cancellation::Column::BookingId.eq(booking_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(model_to_domain).transpose()
    }

    async fn find_page(
        &self,
        page: u64,
        limit: u64,
    ) -> DomainResult<(Vec<CancellationRecord>, u64)> {
        let paginator = cancellation::Entity::find()
            .order_by_desc(cancellation::Column::CreatedAt)
            .paginate(&self.db, limit.max(1));
        let total = paginator.num_items().await.map_err(db_err)?;
        let models = paginator
            .fetch_page(page.max(1) - 1)
            .await
            .map_err(db_err)?;

        let records = models
            .into_iter()
            .map(model_to_domain)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok((records, total))
    }
}

//! Cancellation record entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cancellations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// One record per booking, enforced by a unique index
    #[sea_orm(unique)]
    pub booking_id: String,

    pub reason: String,

    /// Refund amount in laari
    pub refund_amount: i64,

    /// Fare kept, in laari
    pub cancellation_fee: i64,

    /// Record status: pending, no_payment, refund_failed
    pub status: String,

    /// Payout channel: gateway, bank_transfer
    #[sea_orm(nullable)]
    pub refund_method: Option<String>,

    #[sea_orm(nullable)]
    pub bank_account_no: Option<String>,

    #[sea_orm(nullable)]
    pub bank_account_name: Option<String>,

    #[sea_orm(nullable)]
    pub bank_name: Option<String>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::booking::Entity",
        from = "Column::BookingId",
        to = "super::booking::Column::Id"
    )]
    Booking,
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub mod model;
pub mod repository;

pub use model::{
    BankDetails, CancellationRecord, CancellationStatus, RefundBreakdown, RefundMethod,
    RefundPolicy,
};
pub use repository::CancellationRepository;

pub mod outbound;

pub use outbound::{RefundGateway, RefundRequest, RefundResult};

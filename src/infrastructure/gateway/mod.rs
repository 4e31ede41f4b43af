pub mod refund;

pub use refund::HttpRefundGateway;

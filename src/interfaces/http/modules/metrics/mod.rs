pub mod handlers;

pub use handlers::{render_metrics, MetricsState};

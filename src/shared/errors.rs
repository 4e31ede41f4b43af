use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Refund gateway: {0}")]
    Gateway(String),
}

impl DomainError {
    /// Whether this error is likely transient (e.g. DB connection lost,
    /// gateway timeout) and the operation may succeed if re-run.
    pub fn is_transient(&self) -> bool {
        match self {
            // DB errors mapped from repositories contain "Database error:" prefix
            DomainError::Validation(msg) => msg.starts_with("Database error:"),
            DomainError::Gateway(_) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_errors_are_transient() {
        let e = DomainError::Validation("Database error: connection reset".into());
        assert!(e.is_transient());
    }

    #[test]
    fn validation_errors_are_permanent() {
        let e = DomainError::Validation("reason must not be empty".into());
        assert!(!e.is_transient());
    }

    #[test]
    fn gateway_errors_are_transient() {
        let e = DomainError::Gateway("timeout".into());
        assert!(e.is_transient());
    }
}

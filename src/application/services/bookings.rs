//! Booking read/edit operations for the admin screens

use std::sync::Arc;

use tracing::info;

use crate::domain::{
    Booking, BookingStatus, DomainError, DomainResult, RepositoryProvider,
};

/// Dashboard counters over all bookings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingStats {
    pub total: u64,
    pub pending_payment: u64,
    pub confirmed: u64,
    pub checked_in: u64,
    pub completed: u64,
    pub cancelled: u64,
    /// Fare volume of non-cancelled bookings, in laari
    pub revenue: i64,
}

/// Service for booking reads and admin edits
pub struct BookingService {
    repos: Arc<dyn RepositoryProvider>,
}

impl BookingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn get(&self, id: &str) -> DomainResult<Booking> {
        self.repos
            .bookings()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Booking",
                field: "id",
                value: id.to_string(),
            })
    }

    pub async fn list(
        &self,
        page: u64,
        limit: u64,
        status: Option<BookingStatus>,
    ) -> DomainResult<(Vec<Booking>, u64)> {
        self.repos.bookings().find_page(page, limit, status).await
    }

    pub async fn stats(&self) -> DomainResult<BookingStats> {
        let bookings = self.repos.bookings().find_all().await?;
        let mut stats = BookingStats {
            total: bookings.len() as u64,
            ..Default::default()
        };
        for b in &bookings {
            match b.status {
                BookingStatus::PendingPayment => stats.pending_payment += 1,
                BookingStatus::Confirmed => stats.confirmed += 1,
                BookingStatus::CheckedIn => stats.checked_in += 1,
                BookingStatus::Completed => stats.completed += 1,
                BookingStatus::Cancelled => stats.cancelled += 1,
            }
            if b.status != BookingStatus::Cancelled {
                stats.revenue += b.total_fare;
            }
        }
        Ok(stats)
    }

    /// Admin edit of the booking status. Cancellation is not an edit: it
    /// must go through the cancellation flow so seats and refunds follow.
    pub async fn set_status(&self, id: &str, status: BookingStatus) -> DomainResult<Booking> {
        if status == BookingStatus::Cancelled {
            return Err(DomainError::Validation(
                "Use the cancellation flow to cancel a booking".to_string(),
            ));
        }

        let mut booking = self.get(id).await?;
        if booking.status == BookingStatus::Cancelled {
            return Err(DomainError::Validation(format!(
                "Booking {} is cancelled and can no longer be edited",
                booking.reference
            )));
        }

        booking.status = status;
        booking.updated_at = chrono::Utc::now();
        self.repos.bookings().update(booking.clone()).await?;
        info!(booking_id = id, status = %status, "Booking status updated");
        Ok(booking)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryRepositories;

    async fn service_with_bookings() -> (BookingService, Vec<String>) {
        let repos = Arc::new(InMemoryRepositories::new());
        let mut ids = Vec::new();

        let mut confirmed = Booking::new("trip-1", "Aishath Leena", 2, 10_000);
        confirmed.confirm();
        ids.push(confirmed.id.clone());
        repos.bookings().save(confirmed).await.unwrap();

        let pending = Booking::new("trip-1", "Ibrahim Naseer", 1, 2_500);
        ids.push(pending.id.clone());
        repos.bookings().save(pending).await.unwrap();

        let mut cancelled = Booking::new("trip-2", "Mariyam Shiuna", 3, 7_500);
        cancelled.cancel();
        ids.push(cancelled.id.clone());
        repos.bookings().save(cancelled).await.unwrap();

        (BookingService::new(repos), ids)
    }

    #[tokio::test]
    async fn stats_count_by_status_and_exclude_cancelled_revenue() {
        let (service, _) = service_with_bookings().await;
        let stats = service.stats().await.unwrap();

        assert_eq!(stats.total, 3);
        assert_eq!(stats.confirmed, 1);
        assert_eq!(stats.pending_payment, 1);
        assert_eq!(stats.cancelled, 1);
        assert_eq!(stats.revenue, 12_500);
    }

    #[tokio::test]
    async fn list_filters_by_status() {
        let (service, _) = service_with_bookings().await;
        let (page, total) = service
            .list(1, 50, Some(BookingStatus::Confirmed))
            .await
            .unwrap();
        assert_eq!(total, 1);
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].status, BookingStatus::Confirmed);
    }

    #[tokio::test]
    async fn set_status_rejects_cancellation() {
        let (service, ids) = service_with_bookings().await;
        let err = service
            .set_status(&ids[0], BookingStatus::Cancelled)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn set_status_rejects_editing_cancelled_booking() {
        let (service, ids) = service_with_bookings().await;
        let err = service
            .set_status(&ids[2], BookingStatus::Confirmed)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn set_status_checks_in_a_confirmed_booking() {
        let (service, ids) = service_with_bookings().await;
        let booking = service
            .set_status(&ids[0], BookingStatus::CheckedIn)
            .await
            .unwrap();
        assert_eq!(booking.status, BookingStatus::CheckedIn);
    }
}

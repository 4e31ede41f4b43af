//! Booking cancellation and refund flow
//!
//! The flow is a fixed sequence of repository calls with no surrounding
//! transaction; each stage is named and logged so a partial failure can be
//! located in the logs and the flow re-run safely (the cancellation record
//! is upserted by booking id, so a re-run updates rather than duplicates).
//!
//! Stage order: cancelling → seats_released → record_written →
//! refund_attempted → payment_updated → done.

use std::sync::Arc;

use metrics::counter;
use tracing::{info, warn};

use crate::application::ports::{RefundGateway, RefundRequest};
use crate::domain::{
    BankDetails, Booking, CancellationRecord, DomainError, DomainResult, RefundBreakdown,
    RefundMethod, RefundPolicy, RepositoryProvider,
};
use crate::shared::money;

/// Operator input for a cancellation
#[derive(Debug, Clone)]
pub struct CancelBooking {
    /// Reason shown on the cancellation record, never empty
    pub reason: String,
    /// Refund policy (full / half / none)
    pub policy: RefundPolicy,
    /// Payout channel when a refund is owed
    pub method: RefundMethod,
    /// Passenger bank account for manual payouts
    pub bank_details: Option<BankDetails>,
}

/// What the flow did, for the confirmation screen
#[derive(Debug, Clone)]
pub struct CancellationOutcome {
    /// Booking as reloaded after the flow
    pub booking: Booking,
    /// Final cancellation record
    pub record: CancellationRecord,
    /// Refund amount in laari
    pub refund_amount: i64,
    /// Cancellation fee in laari
    pub cancellation_fee: i64,
    /// Whether the payment row was moved to refunded/partially_refunded
    pub payment_updated: bool,
    /// Non-fatal step failures, already logged
    pub warnings: Vec<String>,
}

/// Named stages of the flow, one log line each
#[derive(Debug, Clone, Copy)]
enum Stage {
    Cancelling,
    SeatsReleased,
    RecordWritten,
    RefundAttempted,
    PaymentUpdated,
    Done,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Cancelling => "cancelling",
            Self::SeatsReleased => "seats_released",
            Self::RecordWritten => "record_written",
            Self::RefundAttempted => "refund_attempted",
            Self::PaymentUpdated => "payment_updated",
            Self::Done => "done",
        };
        write!(f, "{}", s)
    }
}

fn enter(booking_id: &str, stage: Stage) {
    info!(booking_id, stage = %stage, "Cancellation stage");
}

/// Service driving the cancellation/refund flow
pub struct CancellationService {
    repos: Arc<dyn RepositoryProvider>,
    gateway: Arc<dyn RefundGateway>,
}

impl CancellationService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, gateway: Arc<dyn RefundGateway>) -> Self {
        Self { repos, gateway }
    }

    /// Cancel a booking and settle its refund.
    ///
    /// Stages 1 (booking), 3 (record) and 5 (payment) fail hard; stage 2
    /// (seat release) and the gateway call inside stage 4 are best-effort
    /// and only produce warnings. A failed gateway refund marks the record
    /// `refund_failed` and deliberately leaves the payment row untouched.
    pub async fn cancel_booking(
        &self,
        booking_id: &str,
        input: CancelBooking,
    ) -> DomainResult<CancellationOutcome> {
        if input.reason.trim().is_empty() {
            return Err(DomainError::Validation(
                "Cancellation reason must not be empty".to_string(),
            ));
        }

        let mut booking = self
            .repos
            .bookings()
            .find_by_id(booking_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Booking",
                field: "id",
                value: booking_id.to_string(),
            })?;

        if !booking.is_cancellable() {
            return Err(DomainError::Validation(format!(
                "Booking {} cannot be cancelled (status: {})",
                booking.reference, booking.status
            )));
        }

        let breakdown = RefundBreakdown::for_policy(input.policy, booking.total_fare);
        let mut warnings = Vec::new();

        // ── 1. Mark the booking cancelled ───────────────────────
        enter(booking_id, Stage::Cancelling);
        booking.cancel();
        self.repos.bookings().update(booking.clone()).await?;

        // ── 2. Release the seats (best effort) ──────────────────
        enter(booking_id, Stage::SeatsReleased);
        match self
            .repos
            .seat_reservations()
            .release_for_booking(booking_id)
            .await
        {
            Ok(released) => info!(booking_id, released, "Seats released"),
            Err(e) => {
                warn!(booking_id, error = %e, "Seat release failed, continuing");
                warnings.push(format!("seat release failed: {}", e));
            }
        }

        // ── 3. Write the cancellation record ────────────────────
        enter(booking_id, Stage::RecordWritten);
        let mut record =
            CancellationRecord::new(booking_id, input.reason.trim(), breakdown);
        if breakdown.refund_amount > 0 {
            record.refund_method = Some(input.method);
        }
        let mut record = self.repos.cancellations().upsert_for_booking(record).await?;

        // ── 4 & 5. Settle the refund ────────────────────────────
        let mut payment_updated = false;
        if breakdown.refund_amount > 0 {
            enter(booking_id, Stage::RefundAttempted);

            match self
                .repos
                .payments()
                .find_latest_completed(booking_id)
                .await?
            {
                None => {
                    info!(booking_id, "No completed payment on file, nothing to refund");
                    record.mark_no_payment();
                    self.repos.cancellations().update(record.clone()).await?;
                }
                Some(mut payment) => {
                    let mut gateway_failed = false;

                    if input.method == RefundMethod::Gateway && payment.can_refund_via_gateway() {
                        counter!("gateway_refunds_attempted_total").increment(1);
                        let request = RefundRequest {
                            booking_id: booking_id.to_string(),
                            amount: breakdown.refund_amount,
                            currency: money::CURRENCY.to_string(),
                        };
                        match self.gateway.process_refund(request).await {
                            Ok(result) if result.success => {
                                info!(
                                    booking_id,
                                    amount = breakdown.refund_amount,
                                    "Gateway refund accepted"
                                );
                            }
                            Ok(result) => {
                                warn!(
                                    booking_id,
                                    message = result.message.as_deref().unwrap_or("-"),
                                    "Gateway declined the refund"
                                );
                                gateway_failed = true;
                            }
                            Err(e) => {
                                warn!(booking_id, error = %e, "Gateway refund call failed");
                                gateway_failed = true;
                            }
                        }

                        if gateway_failed {
                            counter!("gateway_refunds_failed_total").increment(1);
                            record.mark_refund_failed();
                            self.repos.cancellations().update(record.clone()).await?;
                            warnings.push(
                                "gateway refund failed; payment status left untouched".to_string(),
                            );
                        }
                    } else if let Some(details) = input.bank_details.clone() {
                        // Manual payout: gateway not chosen or not applicable
                        record.set_bank_details(details);
                        self.repos.cancellations().update(record.clone()).await?;
                    }

                    if !gateway_failed {
                        enter(booking_id, Stage::PaymentUpdated);
                        payment.mark_refunded(breakdown.refund_amount == booking.total_fare);
                        self.repos.payments().update(payment).await?;
                        payment_updated = true;
                    }
                }
            }
        }

        // ── 6. Reload for the caller ────────────────────────────
        enter(booking_id, Stage::Done);
        let booking = self
            .repos
            .bookings()
            .find_by_id(booking_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Booking",
                field: "id",
                value: booking_id.to_string(),
            })?;

        counter!("bookings_cancelled_total").increment(1);
        info!(
            booking_id,
            refund = breakdown.refund_amount,
            fee = breakdown.cancellation_fee,
            status = %record.status,
            "Booking cancelled"
        );

        Ok(CancellationOutcome {
            booking,
            record,
            refund_amount: breakdown.refund_amount,
            cancellation_fee: breakdown.cancellation_fee,
            payment_updated,
            warnings,
        })
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::domain::{
        BookingStatus, CancellationStatus, Payment, PaymentMethod, PaymentStatus, SeatReservation,
    };
    use crate::infrastructure::storage::InMemoryRepositories;

    /// Gateway double that records calls and answers per `mode`.
    struct StubGateway {
        mode: StubMode,
        calls: Mutex<Vec<RefundRequest>>,
    }

    #[derive(Clone, Copy)]
    enum StubMode {
        Accept,
        Decline,
        Error,
    }

    impl StubGateway {
        fn new(mode: StubMode) -> Arc<Self> {
            Arc::new(Self {
                mode,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<RefundRequest> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RefundGateway for StubGateway {
        async fn process_refund(
            &self,
            request: RefundRequest,
        ) -> DomainResult<crate::application::ports::RefundResult> {
            self.calls.lock().unwrap().push(request);
            match self.mode {
                StubMode::Accept => Ok(crate::application::ports::RefundResult {
                    success: true,
                    message: None,
                }),
                StubMode::Decline => Ok(crate::application::ports::RefundResult {
                    success: false,
                    message: Some("insufficient processor balance".into()),
                }),
                StubMode::Error => Err(DomainError::Gateway("connection refused".into())),
            }
        }
    }

    struct Fixture {
        repos: Arc<InMemoryRepositories>,
        gateway: Arc<StubGateway>,
        service: CancellationService,
        booking_id: String,
    }

    /// Confirmed booking for 2 passengers at 100.00 MVR with two held
    /// seats and (optionally) a completed card payment.
    async fn fixture(mode: StubMode, with_payment: bool) -> Fixture {
        let repos = Arc::new(InMemoryRepositories::new());

        let mut booking = Booking::new("trip-1", "Aishath Leena", 2, 10_000);
        booking.confirm();
        let booking_id = booking.id.clone();
        repos.bookings().save(booking).await.unwrap();

        for seat in ["A1", "A2"] {
            let mut s = SeatReservation::new("trip-1", seat);
            s.assign(&booking_id);
            repos.seat_reservations().save(s).await.unwrap();
        }

        if with_payment {
            let mut payment = Payment::new(&booking_id, 10_000, PaymentMethod::Card);
            payment.complete(Some("RCPT-1001".into()));
            repos.payments().save(payment).await.unwrap();
        }

        let gateway = StubGateway::new(mode);
        let service = CancellationService::new(repos.clone(), gateway.clone());
        Fixture {
            repos,
            gateway,
            service,
            booking_id,
        }
    }

    fn gateway_input(policy: RefundPolicy) -> CancelBooking {
        CancelBooking {
            reason: "vessel out of service".into(),
            policy,
            method: RefundMethod::Gateway,
            bank_details: None,
        }
    }

    #[tokio::test]
    async fn empty_reason_is_rejected_before_any_mutation() {
        let fx = fixture(StubMode::Accept, true).await;
        let err = fx
            .service
            .cancel_booking(
                &fx.booking_id,
                CancelBooking {
                    reason: "   ".into(),
                    policy: RefundPolicy::Full,
                    method: RefundMethod::Gateway,
                    bank_details: None,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));

        // nothing was touched
        let booking = fx
            .repos
            .bookings()
            .find_by_id(&fx.booking_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert!(fx
            .repos
            .cancellations()
            .find_by_booking(&fx.booking_id)
            .await
            .unwrap()
            .is_none());
        assert!(fx.gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn unknown_booking_is_not_found() {
        let fx = fixture(StubMode::Accept, true).await;
        let err = fx
            .service
            .cancel_booking("missing", gateway_input(RefundPolicy::Full))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn completed_booking_is_rejected() {
        let fx = fixture(StubMode::Accept, true).await;
        let mut booking = fx
            .repos
            .bookings()
            .find_by_id(&fx.booking_id)
            .await
            .unwrap()
            .unwrap();
        booking.status = BookingStatus::Completed;
        fx.repos.bookings().update(booking).await.unwrap();

        let err = fx
            .service
            .cancel_booking(&fx.booking_id, gateway_input(RefundPolicy::Full))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn none_policy_refunds_nothing() {
        let fx = fixture(StubMode::Accept, true).await;
        let outcome = fx
            .service
            .cancel_booking(&fx.booking_id, gateway_input(RefundPolicy::None))
            .await
            .unwrap();

        assert_eq!(outcome.refund_amount, 0);
        assert_eq!(outcome.cancellation_fee, 10_000);
        assert_eq!(outcome.record.status, CancellationStatus::NoPayment);
        assert!(!outcome.payment_updated);
        assert!(fx.gateway.calls().is_empty());

        // payment untouched, booking cancelled, seats free
        let payments = fx
            .repos
            .payments()
            .find_for_booking(&fx.booking_id)
            .await
            .unwrap();
        assert_eq!(payments[0].status, PaymentStatus::Completed);
        assert_eq!(outcome.booking.status, BookingStatus::Cancelled);
        assert!(fx
            .repos
            .seat_reservations()
            .find_for_booking(&fx.booking_id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn half_policy_partially_refunds() {
        let fx = fixture(StubMode::Accept, true).await;
        let outcome = fx
            .service
            .cancel_booking(&fx.booking_id, gateway_input(RefundPolicy::Half))
            .await
            .unwrap();

        assert_eq!(outcome.refund_amount, 5_000);
        assert_eq!(outcome.cancellation_fee, 5_000);
        assert_eq!(outcome.record.status, CancellationStatus::Pending);
        assert!(outcome.payment_updated);

        let calls = fx.gateway.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].amount, 5_000);
        assert_eq!(calls[0].currency, "MVR");

        let payment = fx
            .repos
            .payments()
            .find_latest_completed(&fx.booking_id)
            .await
            .unwrap();
        // the completed payment is gone: it is now partially_refunded
        assert!(payment.is_none());
        let payments = fx
            .repos
            .payments()
            .find_for_booking(&fx.booking_id)
            .await
            .unwrap();
        assert_eq!(payments[0].status, PaymentStatus::PartiallyRefunded);
    }

    #[tokio::test]
    async fn full_policy_fully_refunds() {
        let fx = fixture(StubMode::Accept, true).await;
        let outcome = fx
            .service
            .cancel_booking(&fx.booking_id, gateway_input(RefundPolicy::Full))
            .await
            .unwrap();

        assert_eq!(outcome.refund_amount, 10_000);
        assert_eq!(outcome.cancellation_fee, 0);
        assert!(outcome.payment_updated);

        let payments = fx
            .repos
            .payments()
            .find_for_booking(&fx.booking_id)
            .await
            .unwrap();
        // full refund is never partially_refunded
        assert_eq!(payments[0].status, PaymentStatus::Refunded);
    }

    #[tokio::test]
    async fn declined_gateway_refund_leaves_payment_untouched() {
        let fx = fixture(StubMode::Decline, true).await;
        let outcome = fx
            .service
            .cancel_booking(&fx.booking_id, gateway_input(RefundPolicy::Full))
            .await
            .unwrap();

        assert_eq!(outcome.record.status, CancellationStatus::RefundFailed);
        assert!(!outcome.payment_updated);
        assert!(!outcome.warnings.is_empty());

        // deliberate behavior change from the source: the payment row keeps
        // its completed status when the refund did not go through
        let payments = fx
            .repos
            .payments()
            .find_for_booking(&fx.booking_id)
            .await
            .unwrap();
        assert_eq!(payments[0].status, PaymentStatus::Completed);
        // the booking is still cancelled
        assert_eq!(outcome.booking.status, BookingStatus::Cancelled);
    }

    #[tokio::test]
    async fn gateway_transport_error_leaves_payment_untouched() {
        let fx = fixture(StubMode::Error, true).await;
        let outcome = fx
            .service
            .cancel_booking(&fx.booking_id, gateway_input(RefundPolicy::Half))
            .await
            .unwrap();

        assert_eq!(outcome.record.status, CancellationStatus::RefundFailed);
        let payments = fx
            .repos
            .payments()
            .find_for_booking(&fx.booking_id)
            .await
            .unwrap();
        assert_eq!(payments[0].status, PaymentStatus::Completed);
    }

    #[tokio::test]
    async fn cancel_twice_keeps_single_record() {
        let fx = fixture(StubMode::Accept, true).await;
        fx.service
            .cancel_booking(&fx.booking_id, gateway_input(RefundPolicy::None))
            .await
            .unwrap();
        // operator retries with a different reason
        let outcome = fx
            .service
            .cancel_booking(
                &fx.booking_id,
                CancelBooking {
                    reason: "retry after partial failure".into(),
                    policy: RefundPolicy::None,
                    method: RefundMethod::Gateway,
                    bank_details: None,
                },
            )
            .await
            .unwrap();

        let (records, total) = fx.repos.cancellations().find_page(1, 50).await.unwrap();
        assert_eq!(total, 1);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].reason, "retry after partial failure");
        assert_eq!(records[0].id, outcome.record.id);
    }

    #[tokio::test]
    async fn refund_without_completed_payment_marks_no_payment() {
        let fx = fixture(StubMode::Accept, false).await;
        let outcome = fx
            .service
            .cancel_booking(&fx.booking_id, gateway_input(RefundPolicy::Full))
            .await
            .unwrap();

        assert_eq!(outcome.record.status, CancellationStatus::NoPayment);
        assert!(!outcome.payment_updated);
        assert!(fx.gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn bank_transfer_records_details_and_skips_gateway() {
        let fx = fixture(StubMode::Accept, true).await;
        let outcome = fx
            .service
            .cancel_booking(
                &fx.booking_id,
                CancelBooking {
                    reason: "passenger request".into(),
                    policy: RefundPolicy::Half,
                    method: RefundMethod::BankTransfer,
                    bank_details: Some(BankDetails {
                        account_no: "7730000111222".into(),
                        account_name: "Aishath Leena".into(),
                        bank_name: "Bank of Maldives".into(),
                    }),
                },
            )
            .await
            .unwrap();

        assert!(fx.gateway.calls().is_empty());
        assert_eq!(outcome.record.refund_method, Some(RefundMethod::BankTransfer));
        assert_eq!(
            outcome
                .record
                .bank_details
                .as_ref()
                .map(|d| d.bank_name.as_str()),
            Some("Bank of Maldives")
        );
        // manual payout still settles the payment row
        assert!(outcome.payment_updated);
        let payments = fx
            .repos
            .payments()
            .find_for_booking(&fx.booking_id)
            .await
            .unwrap();
        assert_eq!(payments[0].status, PaymentStatus::PartiallyRefunded);
    }

    /// Provider whose seat repository always fails, for the best-effort
    /// seat-release path.
    struct BrokenSeats {
        inner: Arc<InMemoryRepositories>,
        seats: FailingSeatRepo,
    }

    struct FailingSeatRepo;

    #[async_trait]
    impl crate::domain::SeatReservationRepository for FailingSeatRepo {
        async fn save(
            &self,
            _seat: crate::domain::SeatReservation,
        ) -> DomainResult<()> {
            Err(DomainError::Validation("Database error: seats table locked".into()))
        }

        async fn find_for_booking(
            &self,
            _booking_id: &str,
        ) -> DomainResult<Vec<crate::domain::SeatReservation>> {
            Err(DomainError::Validation("Database error: seats table locked".into()))
        }

        async fn find_for_trip(
            &self,
            _trip_id: &str,
        ) -> DomainResult<Vec<crate::domain::SeatReservation>> {
            Err(DomainError::Validation("Database error: seats table locked".into()))
        }

        async fn release_for_booking(&self, _booking_id: &str) -> DomainResult<u64> {
            Err(DomainError::Validation("Database error: seats table locked".into()))
        }
    }

    impl RepositoryProvider for BrokenSeats {
        fn bookings(&self) -> &dyn crate::domain::BookingRepository {
            self.inner.bookings()
        }
        fn payments(&self) -> &dyn crate::domain::PaymentRepository {
            self.inner.payments()
        }
        fn cancellations(&self) -> &dyn crate::domain::CancellationRepository {
            self.inner.cancellations()
        }
        fn seat_reservations(&self) -> &dyn crate::domain::SeatReservationRepository {
            &self.seats
        }
        fn trips(&self) -> &dyn crate::domain::TripRepository {
            self.inner.trips()
        }
        fn vessels(&self) -> &dyn crate::domain::VesselRepository {
            self.inner.vessels()
        }
        fn routes(&self) -> &dyn crate::domain::RouteRepository {
            self.inner.routes()
        }
    }

    #[tokio::test]
    async fn seat_release_failure_does_not_abort_the_flow() {
        let inner = Arc::new(InMemoryRepositories::new());
        let mut booking = Booking::new("trip-1", "Aishath Leena", 2, 10_000);
        booking.confirm();
        let booking_id = booking.id.clone();
        inner.bookings().save(booking).await.unwrap();

        let repos = Arc::new(BrokenSeats {
            inner: inner.clone(),
            seats: FailingSeatRepo,
        });
        let gateway = StubGateway::new(StubMode::Accept);
        let service = CancellationService::new(repos, gateway);

        let outcome = service
            .cancel_booking(&booking_id, gateway_input(RefundPolicy::None))
            .await
            .unwrap();

        // booking cancelled and record written despite the seat failure
        assert_eq!(outcome.booking.status, BookingStatus::Cancelled);
        assert_eq!(outcome.record.status, CancellationStatus::NoPayment);
        assert!(outcome
            .warnings
            .iter()
            .any(|w| w.contains("seat release failed")));
    }

    #[tokio::test]
    async fn gateway_method_without_receipt_falls_back_to_manual() {
        let fx = fixture(StubMode::Accept, false).await;
        // cash payment: completed but not refundable through the gateway
        let mut payment = Payment::new(&fx.booking_id, 10_000, PaymentMethod::Cash);
        payment.complete(None);
        fx.repos.payments().save(payment).await.unwrap();

        let outcome = fx
            .service
            .cancel_booking(&fx.booking_id, gateway_input(RefundPolicy::Full))
            .await
            .unwrap();

        assert!(fx.gateway.calls().is_empty());
        assert_eq!(outcome.record.status, CancellationStatus::Pending);
        assert!(outcome.record.bank_details.is_none());
        assert!(outcome.payment_updated);
    }
}

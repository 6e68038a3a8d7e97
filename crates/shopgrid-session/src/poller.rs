//! # Alert Poller
//!
//! Recurring unread-alert check with notification dedup.
//!
//! ## Behavior
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         AlertPoller                                     │
//! │                                                                         │
//! │  start ──► immediate check (notify = false)                             │
//! │              │                                                          │
//! │              ▼                                                          │
//! │  every poll interval ──► check (notify = true)                          │
//! │                                                                         │
//! │  check(notify):                                                         │
//! │    1. GET /alerts/?is_read=false                                        │
//! │    2. when notify AND a previous check exists:                          │
//! │         notify exactly the alerts with created_at > last check time     │
//! │    3. unread set := fetched set  (always, regardless of notify)         │
//! │    4. last check time := now     (always)                               │
//! │                                                                         │
//! │  A failed fetch is logged and swallowed; the unread set, the last       │
//! │  check time, and the schedule are all left untouched.                   │
//! │                                                                         │
//! │  shutdown: triggered exactly once by the owning session, awaited.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use shopgrid_api::endpoints::AlertFilter;
use shopgrid_api::ApiClient;
use shopgrid_core::types::Alert;

/// Sink for "a new alert appeared" notifications.
pub trait AlertNotifier: Send + Sync {
    fn notify(&self, alert: &Alert);
}

/// No-op notifier for testing.
pub struct NoOpNotifier;

impl AlertNotifier for NoOpNotifier {
    fn notify(&self, _alert: &Alert) {}
}

/// Shared unread-alert state plus the check logic. The recurring schedule
/// lives in [`AlertPoller::spawn`]; callers may also run
/// [`AlertPoller::check_for_new_alerts`] directly (the post-sale recheck
/// does).
pub struct AlertPoller {
    client: Arc<ApiClient>,
    notifier: Arc<dyn AlertNotifier>,
    unread: RwLock<Vec<Alert>>,
    last_checked: Mutex<Option<DateTime<Utc>>>,
}

/// Handle for stopping a spawned poller.
pub struct PollerHandle {
    shutdown_tx: mpsc::Sender<()>,
    join: JoinHandle<()>,
}

impl PollerHandle {
    /// Triggers shutdown and waits for the loop to exit.
    pub async fn shutdown(self) {
        // The loop may already be gone; both outcomes mean "stopped".
        let _ = self.shutdown_tx.send(()).await;
        let _ = self.join.await;
    }
}

impl AlertPoller {
    pub fn new(client: Arc<ApiClient>, notifier: Arc<dyn AlertNotifier>) -> Arc<Self> {
        Arc::new(AlertPoller {
            client,
            notifier,
            unread: RwLock::new(Vec::new()),
            last_checked: Mutex::new(None),
        })
    }

    /// The unread alerts from the most recent successful check.
    pub fn unread_alerts(&self) -> Vec<Alert> {
        self.unread.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Unread badge count: the size of the fetched unread set.
    pub fn unread_count(&self) -> usize {
        self.unread.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Runs one check. Fetch failures are logged and swallowed so a flaky
    /// backend never kills the schedule.
    pub async fn check_for_new_alerts(&self, notify: bool) {
        let fetched = match self.client.alerts().list(&AlertFilter::unread()).await {
            Ok(alerts) => alerts,
            Err(e) => {
                warn!(error = %e, "alert check failed");
                return;
            }
        };

        if notify {
            // Only alerts strictly newer than the previous check; on the
            // very first check there is no baseline and nothing fires.
            if let Some(since) = *self.last_checked.lock().unwrap_or_else(|e| e.into_inner()) {
                for alert in fetched.iter().filter(|a| a.created_at > since) {
                    debug!(alert_id = alert.id, severity = %alert.severity, "new alert");
                    self.notifier.notify(alert);
                }
            }
        }

        *self.unread.write().unwrap_or_else(|e| e.into_inner()) = fetched;
        *self.last_checked.lock().unwrap_or_else(|e| e.into_inner()) = Some(Utc::now());
    }

    /// Starts the recurring schedule: one immediate silent check, then a
    /// notifying check every `poll_interval`.
    pub fn spawn(self: &Arc<Self>, poll_interval: Duration) -> PollerHandle {
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel(1);
        let poller = Arc::clone(self);

        let join = tokio::spawn(async move {
            info!(interval_secs = poll_interval.as_secs(), "alert poller starting");

            poller.check_for_new_alerts(false).await;

            let mut interval = tokio::time::interval(poll_interval);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            // The first tick completes immediately; the silent check above
            // already covered it.
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        poller.check_for_new_alerts(true).await;
                    }
                    _ = shutdown_rx.recv() => {
                        info!("alert poller shutting down");
                        break;
                    }
                }
            }

            info!("alert poller stopped");
        });

        PollerHandle { shutdown_tx, join }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;
    use serde_json::{json, Value};
    use shopgrid_api::StubTransport;

    struct RecordingNotifier {
        seen: Mutex<Vec<i64>>,
    }

    impl RecordingNotifier {
        fn new() -> Arc<Self> {
            Arc::new(RecordingNotifier {
                seen: Mutex::new(Vec::new()),
            })
        }

        fn ids(&self) -> Vec<i64> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl AlertNotifier for RecordingNotifier {
        fn notify(&self, alert: &Alert) {
            self.seen.lock().unwrap().push(alert.id);
        }
    }

    fn alert_json(id: i64, created_at: DateTime<Utc>) -> Value {
        json!({
            "id": id,
            "shop": 1,
            "alert_type": "low_stock",
            "severity": "high",
            "message": format!("Alert {id}"),
            "is_read": false,
            "created_at": created_at.to_rfc3339(),
        })
    }

    fn harness() -> (Arc<AlertPoller>, Arc<StubTransport>, Arc<RecordingNotifier>) {
        let stub = Arc::new(StubTransport::new());
        let client = Arc::new(ApiClient::with_transport(
            "http://test.local/api",
            stub.clone(),
        ));
        let notifier = RecordingNotifier::new();
        let poller = AlertPoller::new(client, notifier.clone());
        (poller, stub, notifier)
    }

    #[tokio::test]
    async fn notifies_only_alerts_newer_than_the_previous_check() {
        let (poller, stub, notifier) = harness();

        // Baseline check establishes the last-checked timestamp.
        stub.push(200, json!([]));
        poller.check_for_new_alerts(false).await;

        // One alert older than the baseline, one newer.
        let old = Utc::now() - ChronoDuration::hours(1);
        let new = Utc::now() + ChronoDuration::seconds(5);
        stub.push(200, json!([alert_json(1, old), alert_json(2, new)]));
        poller.check_for_new_alerts(true).await;

        assert_eq!(notifier.ids(), vec![2]);
        // The unread set is the whole fetched set, notified or not
        assert_eq!(poller.unread_count(), 2);
    }

    #[tokio::test]
    async fn silent_baseline_then_recheck_notifies_a_fresh_alert() {
        // The post-sale sequence: a silent check on page entry, a sale, then
        // the delayed notifying recheck. The alert created by the sale must
        // fire; without the baseline it would be swallowed as pre-existing.
        let (poller, stub, notifier) = harness();

        stub.push(200, json!([]));
        poller.check_for_new_alerts(false).await;

        let created = Utc::now() + ChronoDuration::seconds(1);
        stub.push(200, json!([alert_json(9, created)]));
        poller.check_for_new_alerts(true).await;

        assert_eq!(notifier.ids(), vec![9]);
        assert_eq!(poller.unread_count(), 1);
    }

    #[tokio::test]
    async fn first_check_never_notifies() {
        let (poller, stub, notifier) = harness();

        let recent = Utc::now() - ChronoDuration::seconds(1);
        stub.push(200, json!([alert_json(1, recent)]));
        poller.check_for_new_alerts(true).await;

        assert!(notifier.ids().is_empty());
        assert_eq!(poller.unread_count(), 1);
    }

    #[tokio::test]
    async fn failed_fetch_keeps_previous_state() {
        let (poller, stub, notifier) = harness();

        let seen = Utc::now() - ChronoDuration::minutes(5);
        stub.push(200, json!([alert_json(1, seen)]));
        poller.check_for_new_alerts(false).await;
        assert_eq!(poller.unread_count(), 1);

        stub.push_raw(500, "internal error");
        poller.check_for_new_alerts(true).await;

        assert_eq!(poller.unread_count(), 1);
        assert!(notifier.ids().is_empty());
    }

    #[tokio::test]
    async fn queried_with_the_unread_filter() {
        let (poller, stub, _) = harness();
        stub.push(200, json!([]));
        poller.check_for_new_alerts(false).await;

        assert_eq!(
            stub.last_request().unwrap().url,
            "http://test.local/api/alerts/?is_read=false"
        );
    }

    #[tokio::test]
    async fn spawned_poller_runs_an_immediate_check_and_stops_on_shutdown() {
        let (poller, stub, _) = harness();
        stub.push(200, json!([alert_json(1, Utc::now())]));

        let handle = poller.spawn(Duration::from_secs(3600));

        // Wait for the initial silent check to land.
        for _ in 0..100 {
            if !stub.requests().is_empty() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert_eq!(stub.requests().len(), 1);
        assert_eq!(poller.unread_count(), 1);

        handle.shutdown().await;
    }
}

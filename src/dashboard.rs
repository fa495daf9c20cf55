//! Dashboard state owner.
//!
//! Each [`Dashboard::select`] starts a fetch whose result is published into a
//! single-slot [`watch`] cell. Responses are tagged with a [`Ticket`]; a
//! response whose ticket is no longer current is dropped, so the published
//! state always belongs to the latest selection.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::async_client::AsyncCovidClient;
use crate::dataset::Dataset;
use crate::error::{CovidError, Result};
use crate::models::{DataPoint, Region, TimePeriod};
use crate::sequencer::{RequestSequencer, Ticket};

// ---------------------------------------------------------------------------
// DashboardState
// ---------------------------------------------------------------------------

/// Snapshot of what the dashboard is showing.
///
/// After a failed fetch, `region` and `period` name the new selection while
/// `dataset` still holds the previous one; label figures with
/// `dataset.region` and `dataset.period`.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    /// Ticket sequence of the response currently shown; 0 before any.
    pub generation: u64,
    /// The latest selection, which may still be loading.
    pub region: Region,
    pub period: TimePeriod,
    pub loading: bool,
    pub dataset: Option<Arc<Dataset>>,
    pub error: Option<Arc<CovidError>>,
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

pub struct Dashboard {
    client: AsyncCovidClient,
    sequencer: Arc<RequestSequencer>,
    state: Arc<watch::Sender<DashboardState>>,
}

impl Dashboard {
    pub fn new(client: AsyncCovidClient) -> Self {
        let (tx, _rx) = watch::channel(DashboardState::default());
        Self {
            client,
            sequencer: Arc::new(RequestSequencer::new()),
            state: Arc::new(tx),
        }
    }

    /// Change the selection and start fetching it.
    ///
    /// Must be called from within a Tokio runtime. The returned handle
    /// resolves to `true` if the response was published, `false` if a newer
    /// selection superseded it first.
    pub fn select(&self, region: Region, period: TimePeriod) -> JoinHandle<bool> {
        let ticket = self.sequencer.issue();
        self.state.send_modify(|s| {
            s.region = region;
            s.period = period;
            s.loading = true;
        });

        let client = self.client.clone();
        let sequencer = Arc::clone(&self.sequencer);
        let state = Arc::clone(&self.state);
        tokio::spawn(async move {
            let result = client.fetch_data_points(region, period).await;
            publish(&sequencer, &state, ticket, region, period, result)
        })
    }

    /// Re-fetch the current selection.
    pub fn refresh(&self) -> JoinHandle<bool> {
        let (region, period) = {
            let s = self.state.borrow();
            (s.region, s.period)
        };
        self.select(region, period)
    }

    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> DashboardState {
        self.state.borrow().clone()
    }
}

/// Apply a finished fetch if its ticket is still current.
fn publish(
    sequencer: &RequestSequencer,
    state: &watch::Sender<DashboardState>,
    ticket: Ticket,
    region: Region,
    period: TimePeriod,
    result: Result<Vec<DataPoint>>,
) -> bool {
    state.send_if_modified(|s| {
        if !sequencer.is_current(ticket) {
            debug!(
                seq = ticket.seq(),
                loc = region.identifier(),
                "discarding stale summary response"
            );
            return false;
        }
        s.generation = ticket.seq();
        s.region = region;
        s.period = period;
        s.loading = false;
        match result {
            Ok(points) => {
                s.dataset = Some(Arc::new(Dataset::new(region, period, points)));
                s.error = None;
            }
            Err(e) => {
                s.error = Some(Arc::new(e));
            }
        }
        true
    })
}

//! Front-end state: a search form or a result, swapped as lookups finish.
//!
//! Lookups run on a tokio task and report back through a channel, so the
//! caller's input loop is never blocked on the network. Only one lookup is
//! live at a time; starting a new one aborts the previous one.

use std::mem;

use tokio::{sync::mpsc, task::JoinHandle};
use tracing::debug;

use crate::{
    error::WeatherError,
    model::{Unit, WeatherReport, WeatherRequest},
    service::WeatherService,
};

/// The search form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchView {
    pub location: String,
    pub unit: Unit,
    /// Message from the last failed lookup, if any.
    pub error: Option<String>,
}

/// A successful lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub report: WeatherReport,
    /// Message from a later lookup that failed while this result was shown.
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Search(SearchView),
    Results(ResultsView),
}

impl View {
    pub fn error(&self) -> Option<&str> {
        match self {
            View::Search(v) => v.error.as_deref(),
            View::Results(v) => v.error.as_deref(),
        }
    }

    fn submitted(self, request: &WeatherRequest) -> View {
        match self {
            View::Search(_) => View::Search(SearchView {
                location: request.location.clone(),
                unit: request.unit,
                error: None,
            }),
            View::Results(v) => View::Results(ResultsView { error: None, ..v }),
        }
    }

    fn completed(self, result: Result<WeatherReport, WeatherError>) -> View {
        match result {
            Ok(report) => View::Results(ResultsView { report, error: None }),
            Err(err) => self.failed(&err),
        }
    }

    // Failures leave whatever was on screen in place.
    fn failed(self, err: &WeatherError) -> View {
        let error = Some(err.user_message());
        match self {
            View::Search(v) => View::Search(SearchView { error, ..v }),
            View::Results(v) => View::Results(ResultsView { error, ..v }),
        }
    }

    fn back_to_search(self) -> View {
        match self {
            View::Results(v) => View::Search(SearchView {
                location: v.report.observation.location().to_string(),
                unit: v.report.observation.unit(),
                error: None,
            }),
            search => search,
        }
    }
}

/// Message sent by a finished lookup task.
#[derive(Debug)]
pub struct LookupOutcome {
    pub id: u64,
    pub request: WeatherRequest,
    pub result: Result<WeatherReport, WeatherError>,
}

#[derive(Debug)]
struct InFlight {
    id: u64,
    handle: JoinHandle<()>,
}

#[derive(Debug)]
pub struct Session {
    service: WeatherService,
    view: View,
    next_id: u64,
    in_flight: Option<InFlight>,
    tx: mpsc::UnboundedSender<LookupOutcome>,
    rx: mpsc::UnboundedReceiver<LookupOutcome>,
}

impl Session {
    /// Start on an empty search form using `unit`.
    pub fn new(service: WeatherService, unit: Unit) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        Self {
            service,
            view: View::Search(SearchView { unit, ..SearchView::default() }),
            next_id: 0,
            in_flight: None,
            tx,
            rx,
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start a lookup in the background and return its id.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(&mut self, location: impl Into<String>, unit: Unit) -> u64 {
        self.abort_in_flight();

        self.next_id += 1;
        let id = self.next_id;
        let request = WeatherRequest::new(location, unit);

        self.transition(|view| view.submitted(&request));

        let service = self.service.clone();
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            let result = service.lookup_request(&request).await;
            // The receiver only goes away with the session.
            let _ = tx.send(LookupOutcome { id, request, result });
        });

        debug!(id, "lookup started");
        self.in_flight = Some(InFlight { id, handle });
        id
    }

    /// Abort the running lookup, if any. The current view stays, with a
    /// cancellation message attached.
    pub fn cancel(&mut self) -> bool {
        if !self.abort_in_flight() {
            return false;
        }

        self.transition(|view| view.failed(&WeatherError::Cancelled));
        true
    }

    /// Wait for the running lookup to report back.
    ///
    /// Returns `None` when nothing is in flight. Results of superseded
    /// lookups are skipped.
    pub async fn next_outcome(&mut self) -> Option<LookupOutcome> {
        let current = self.in_flight.as_ref()?.id;

        while let Some(outcome) = self.rx.recv().await {
            if outcome.id == current {
                return Some(outcome);
            }
            debug!(id = outcome.id, current, "dropping stale lookup result");
        }

        None
    }

    /// Apply a finished lookup. Returns `false` if it was not the live one.
    pub fn apply(&mut self, outcome: LookupOutcome) -> bool {
        match &self.in_flight {
            Some(live) if live.id == outcome.id => {}
            _ => return false,
        }

        self.in_flight = None;
        self.transition(|view| view.completed(outcome.result));
        true
    }

    /// Wait for the running lookup and apply it.
    pub async fn complete(&mut self) -> Option<&View> {
        let outcome = self.next_outcome().await?;
        self.apply(outcome);
        Some(&self.view)
    }

    /// Leave the results page for a fresh form pre-filled with the last search.
    pub fn new_search(&mut self) {
        self.transition(View::back_to_search);
    }

    fn abort_in_flight(&mut self) -> bool {
        match self.in_flight.take() {
            Some(live) => {
                live.handle.abort();
                debug!(id = live.id, "lookup aborted");
                true
            }
            None => false,
        }
    }

    fn transition(&mut self, f: impl FnOnce(View) -> View) {
        let current = mem::replace(&mut self.view, View::Search(SearchView::default()));
        self.view = f(current);
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.abort_in_flight();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        icon::IconKind,
        model::WeatherObservation,
        provider::WeatherProvider,
        service::tests::StubProvider,
    };
    use async_trait::async_trait;
    use std::sync::Arc;
    use tokio::sync::Notify;

    /// Holds "Slow" lookups until the gate opens, delegates the rest.
    #[derive(Debug, Default)]
    struct GatedProvider {
        gate: Notify,
    }

    #[async_trait]
    impl WeatherProvider for GatedProvider {
        async fn get_weather(
            &self,
            request: &WeatherRequest,
        ) -> Result<WeatherObservation, WeatherError> {
            if request.location == "Slow" {
                self.gate.notified().await;
            }
            StubProvider.get_weather(request).await
        }
    }

    fn session() -> Session {
        let service = WeatherService::new(Arc::new(GatedProvider::default()));
        Session::new(service, Unit::Metric)
    }

    #[tokio::test]
    async fn starts_on_empty_search_form() {
        let s = session();
        assert_eq!(
            s.view(),
            &View::Search(SearchView { location: String::new(), unit: Unit::Metric, error: None })
        );
        assert!(!s.is_busy());
    }

    #[tokio::test]
    async fn success_moves_to_results() {
        let mut s = session();
        s.submit("Paris", Unit::Metric);
        assert!(s.is_busy());

        let view = s.complete().await.expect("lookup in flight");
        match view {
            View::Results(results) => {
                assert_eq!(results.report.observation.location(), "Paris");
                assert_eq!(results.report.icon, IconKind::Clear);
                assert!(results.error.is_none());
            }
            other => panic!("expected results, got {other:?}"),
        }
        assert!(!s.is_busy());
    }

    #[tokio::test]
    async fn failure_keeps_search_form_with_message() {
        let mut s = session();
        s.submit("Atlantis", Unit::Imperial);
        s.complete().await;

        match s.view() {
            View::Search(form) => {
                assert_eq!(form.location, "Atlantis");
                assert_eq!(form.unit, Unit::Imperial);
                assert!(form.error.as_deref().unwrap().contains("city not found"));
            }
            other => panic!("expected search form, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn failure_keeps_previous_results() {
        let mut s = session();
        s.submit("Paris", Unit::Metric);
        s.complete().await;

        s.submit("Atlantis", Unit::Metric);
        s.complete().await;

        match s.view() {
            View::Results(results) => {
                assert_eq!(results.report.observation.location(), "Paris");
                assert!(results.error.as_deref().unwrap().starts_with("Error fetching weather:"));
            }
            other => panic!("expected results, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn new_submit_supersedes_running_lookup() {
        let mut s = session();
        let slow = s.submit("Slow", Unit::Metric);
        let fast = s.submit("Paris", Unit::Metric);
        assert_ne!(slow, fast);

        let outcome = s.next_outcome().await.expect("lookup in flight");
        assert_eq!(outcome.id, fast);
        assert!(s.apply(outcome));
        assert!(matches!(s.view(), View::Results(_)));
    }

    #[tokio::test]
    async fn cancel_aborts_and_keeps_view() {
        let mut s = session();
        s.submit("Slow", Unit::Metric);

        assert!(s.cancel());
        assert!(!s.is_busy());
        assert!(s.next_outcome().await.is_none());
        assert_eq!(
            s.view().error(),
            Some("Error fetching weather: weather lookup was cancelled")
        );

        assert!(!s.cancel());
    }

    #[tokio::test]
    async fn stale_outcome_is_ignored() {
        let mut s = session();
        s.submit("Slow", Unit::Metric);

        let stale = LookupOutcome {
            id: 42,
            request: WeatherRequest::new("Paris", Unit::Metric),
            result: Err(WeatherError::Cancelled),
        };
        assert!(!s.apply(stale));
        assert!(s.is_busy());
        assert!(s.view().error().is_none());
    }

    #[tokio::test]
    async fn new_search_prefills_last_result() {
        let mut s = session();
        s.submit("Paris", Unit::Imperial);
        s.complete().await;

        s.new_search();
        assert_eq!(
            s.view(),
            &View::Search(SearchView {
                location: "Paris".into(),
                unit: Unit::Imperial,
                error: None
            })
        );
    }
}

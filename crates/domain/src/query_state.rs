//! Query state - the lifecycle of one remote request key
//!
//! Every cached request (roster, category list, one category's members, one
//! item's detail) is tracked as a `QueryState`. The state machine is
//! `Idle -> Loading -> {Success, Error}`. Refreshing data that is already
//! present keeps it visible: the status stays where it was and only
//! `is_fetching` flips, so a screen never flashes back to empty.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

/// Lifecycle status of a query key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueryStatus {
    /// Never requested (or evicted)
    #[default]
    Idle,
    /// First request in flight, no data yet
    Loading,
    Success,
    Error,
}

/// Latest known state for one request key
#[derive(Debug, PartialEq)]
pub struct QueryState<T, E> {
    status: QueryStatus,
    data: Option<Arc<T>>,
    error: Option<E>,
    updated_at: Option<DateTime<Utc>>,
    is_fetching: bool,
}

impl<T, E: Clone> Clone for QueryState<T, E> {
    fn clone(&self) -> Self {
        Self {
            status: self.status,
            data: self.data.clone(),
            error: self.error.clone(),
            updated_at: self.updated_at,
            is_fetching: self.is_fetching,
        }
    }
}

impl<T, E> Default for QueryState<T, E> {
    fn default() -> Self {
        Self::idle()
    }
}

impl<T, E> QueryState<T, E> {
    pub fn idle() -> Self {
        Self {
            status: QueryStatus::Idle,
            data: None,
            error: None,
            updated_at: None,
            is_fetching: false,
        }
    }

    /// A settled success, as produced by a completed fetch
    pub fn success(data: T, at: DateTime<Utc>) -> Self {
        Self {
            status: QueryStatus::Success,
            data: Some(Arc::new(data)),
            error: None,
            updated_at: Some(at),
            is_fetching: false,
        }
    }

    /// A settled failure with no data
    pub fn failure(error: E, at: DateTime<Utc>) -> Self {
        Self {
            status: QueryStatus::Error,
            data: None,
            error: Some(error),
            updated_at: Some(at),
            is_fetching: false,
        }
    }

    pub fn status(&self) -> QueryStatus {
        self.status
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_deref()
    }

    pub fn error(&self) -> Option<&E> {
        self.error.as_ref()
    }

    /// When the last fetch settled; `None` if never settled or invalidated
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// True while the first request is in flight and there is nothing to show
    pub fn is_loading(&self) -> bool {
        self.status == QueryStatus::Loading
    }

    /// True while any request for this key is in flight, including refreshes
    pub fn is_fetching(&self) -> bool {
        self.is_fetching
    }

    pub fn is_success(&self) -> bool {
        self.status == QueryStatus::Success
    }

    pub fn is_error(&self) -> bool {
        self.status == QueryStatus::Error
    }

    /// Successful data younger than `stale_time` needs no network call.
    /// Errors are never fresh.
    pub fn is_fresh(&self, now: DateTime<Utc>, stale_time: Duration) -> bool {
        match (self.status, self.updated_at) {
            (QueryStatus::Success, Some(at)) => now - at < stale_time,
            _ => false,
        }
    }

    /// Transition for a request starting on this key.
    pub fn begin_fetch(&mut self) {
        self.is_fetching = true;
        if self.data.is_none() {
            self.status = QueryStatus::Loading;
            self.error = None;
        }
    }

    /// Transition for a request completing on this key. Failures keep any
    /// previously fetched data.
    pub fn settle(&mut self, result: Result<T, E>, at: DateTime<Utc>) {
        match result {
            Ok(data) => {
                self.status = QueryStatus::Success;
                self.data = Some(Arc::new(data));
                self.error = None;
            }
            Err(error) => {
                self.status = QueryStatus::Error;
                self.error = Some(error);
            }
        }
        self.updated_at = Some(at);
        self.is_fetching = false;
    }

    /// Transition for a request that was dropped before completing.
    pub fn abandon_fetch(&mut self) {
        self.is_fetching = false;
        if self.status == QueryStatus::Loading {
            self.status = QueryStatus::Idle;
        }
    }

    /// Forget the settle time so the next request refetches.
    pub fn invalidate(&mut self) {
        self.updated_at = None;
    }
}

/// Combined loading/error status of a view built from several queries
#[derive(Debug, PartialEq)]
pub struct AggregateStatus<'a, E> {
    pub loading: bool,
    pub error: Option<&'a E>,
}

impl<E> AggregateStatus<'_, E> {
    /// Neither loading nor failed
    pub fn is_ready(&self) -> bool {
        !self.loading && self.error.is_none()
    }
}

/// Fan-in of the roster query and the selected categories' member queries.
///
/// Loading if any constituent is loading. The reported error is the first
/// failed category in selection order, falling back to the roster's error.
/// With no categories this is exactly the roster's own status.
pub fn aggregate_status<'a, R, C, E>(
    roster: &'a QueryState<R, E>,
    categories: impl IntoIterator<Item = &'a QueryState<C, E>>,
) -> AggregateStatus<'a, E>
where
    R: 'a,
    C: 'a,
{
    let mut loading = roster.is_loading();
    let mut first_error = None;
    for category in categories {
        loading |= category.is_loading();
        if first_error.is_none() {
            first_error = category.error();
        }
    }
    AggregateStatus {
        loading,
        error: first_error.or_else(|| roster.error()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    type State = QueryState<Vec<u32>, String>;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn idle_to_loading_to_success() {
        let mut state = State::idle();
        assert_eq!(state.status(), QueryStatus::Idle);

        state.begin_fetch();
        assert!(state.is_loading());
        assert!(state.is_fetching());

        state.settle(Ok(vec![1, 2]), t0());
        assert!(state.is_success());
        assert!(!state.is_fetching());
        assert_eq!(state.data(), Some(&vec![1, 2]));
        assert_eq!(state.updated_at(), Some(t0()));
    }

    #[test]
    fn refresh_keeps_stale_data_visible() {
        let mut state = State::success(vec![1], t0());
        state.begin_fetch();
        assert!(!state.is_loading());
        assert!(state.is_fetching());
        assert_eq!(state.data(), Some(&vec![1]));
    }

    #[test]
    fn failed_refresh_keeps_data_and_records_error() {
        let mut state = State::success(vec![1], t0());
        state.begin_fetch();
        state.settle(Err("boom".into()), t0() + Duration::minutes(6));
        assert!(state.is_error());
        assert_eq!(state.data(), Some(&vec![1]));
        assert_eq!(state.error().map(String::as_str), Some("boom"));
    }

    #[test]
    fn retry_after_error_without_data_is_loading_again() {
        let mut state = State::failure("boom".into(), t0());
        state.begin_fetch();
        assert!(state.is_loading());
        assert!(state.error().is_none());
    }

    #[test]
    fn freshness_window() {
        let state = State::success(vec![], t0());
        let stale_time = Duration::minutes(5);
        assert!(state.is_fresh(t0() + Duration::minutes(4), stale_time));
        assert!(!state.is_fresh(t0() + Duration::minutes(5), stale_time));
    }

    #[test]
    fn errors_and_invalidated_entries_are_never_fresh() {
        let stale_time = Duration::minutes(5);
        let failed = State::failure("boom".into(), t0());
        assert!(!failed.is_fresh(t0(), stale_time));

        let mut invalidated = State::success(vec![], t0());
        invalidated.invalidate();
        assert!(!invalidated.is_fresh(t0(), stale_time));
    }

    #[test]
    fn abandoned_first_fetch_returns_to_idle() {
        let mut state = State::idle();
        state.begin_fetch();
        state.abandon_fetch();
        assert_eq!(state.status(), QueryStatus::Idle);
        assert!(!state.is_fetching());
    }

    #[test]
    fn aggregate_without_categories_is_roster_status() {
        let mut roster = State::idle();
        roster.begin_fetch();
        let status = aggregate_status(&roster, std::iter::empty::<&State>());
        assert!(status.loading);
        assert!(status.error.is_none());
    }

    #[test]
    fn aggregate_any_category_loading_means_loading() {
        let roster = State::success(vec![], t0());
        let done = State::success(vec![], t0());
        let mut pending = State::idle();
        pending.begin_fetch();

        let status = aggregate_status(&roster, [&done, &pending]);
        assert!(status.loading);
    }

    #[test]
    fn aggregate_prefers_first_category_error_over_roster_error() {
        let roster = State::failure("roster".into(), t0());
        let ok = State::success(vec![], t0());
        let first = State::failure("first".into(), t0());
        let second = State::failure("second".into(), t0());

        let status = aggregate_status(&roster, [&ok, &first, &second]);
        assert_eq!(status.error.map(String::as_str), Some("first"));

        let status = aggregate_status(&roster, [&ok]);
        assert_eq!(status.error.map(String::as_str), Some("roster"));
    }

    #[test]
    fn aggregate_ready_when_all_settled_successfully() {
        let roster = State::success(vec![], t0());
        let category = State::success(vec![], t0());
        assert!(aggregate_status(&roster, [&category]).is_ready());
    }
}

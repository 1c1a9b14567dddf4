//! Loading/error/data lifecycle for one asynchronous, fallible fetch.
//!
//! [`AsyncData`] wraps a zero-argument fetch function and exposes the current
//! [`AsyncDataState`] triple. [`AsyncData::new`] starts idle while
//! [`AsyncData::mount`] kicks off the first fetch on construction. Each call
//! to [`AsyncData::refetch`] (or a change of dependencies through
//! [`AsyncData::set_dependencies`]) moves the state machine back into
//! [`Phase::Loading`]. Resolutions that arrive after a newer
//! fetch started, or after [`AsyncData::unmount`], are discarded so a slow
//! response can never overwrite a fresher one.
//!
//! Failures keep the previously loaded data (stale-while-error); call
//! [`AsyncData::clear`] to drop it explicitly.
//!
//! # Examples
//! ```
//! use async_data::{AsyncData, Phase};
//!
//! # let runtime = tokio::runtime::Builder::new_current_thread()
//! #     .build()
//! #     .expect("runtime");
//! # runtime.block_on(async {
//! let trips = AsyncData::new(|| async { Ok::<_, String>(vec!["Lisbon"]) }, ());
//! trips.refetch().await;
//!
//! let state = trips.state();
//! assert_eq!(state.data, Some(vec!["Lisbon"]));
//! assert_eq!(trips.phase(), Phase::Success);
//! # });
//! ```

use std::fmt::Display;
use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use futures_util::future::BoxFuture;
use tokio::sync::watch;
use tracing::debug;

/// Snapshot of a fetch lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsyncDataState<T> {
    /// Most recently loaded value, if any.
    pub data: Option<T>,
    /// Whether a fetch is in flight.
    pub loading: bool,
    /// Message of the most recent failure, cleared when a fetch starts.
    pub error: Option<String>,
}

impl<T> Default for AsyncDataState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

impl<T> AsyncDataState<T> {
    /// Derive the state machine phase from the triple.
    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Error
        } else if self.data.is_some() {
            Phase::Success
        } else {
            Phase::Idle
        }
    }
}

/// Phases of the fetch state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing has been fetched yet, or the data was cleared.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The latest fetch succeeded.
    Success,
    /// The latest fetch failed.
    Error,
}

type Fetcher<T, E> = Arc<dyn Fn() -> BoxFuture<'static, Result<T, E>> + Send + Sync>;

struct Inner<T, E, D> {
    fetcher: Fetcher<T, E>,
    state: watch::Sender<AsyncDataState<T>>,
    generation: AtomicU64,
    mounted: AtomicBool,
    dependencies: Mutex<D>,
}

impl<T, E, D> Inner<T, E, D> {
    /// Start a fetch generation, returning `None` once unmounted.
    ///
    /// The generation bump and the `loading` transition happen under the
    /// watch lock so they are ordered with [`Inner::settle`].
    fn begin(&self) -> Option<u64> {
        let mut token = None;
        self.state.send_if_modified(|state| {
            if !self.mounted.load(Ordering::Acquire) {
                return false;
            }
            token = Some(self.generation.fetch_add(1, Ordering::AcqRel) + 1);
            state.loading = true;
            state.error = None;
            true
        });
        token
    }

    fn settle(&self, token: u64, result: Result<T, E>)
    where
        E: Display,
    {
        let applied = self.state.send_if_modified(|state| {
            let current = self.generation.load(Ordering::Acquire);
            if !self.mounted.load(Ordering::Acquire) || current != token {
                return false;
            }
            match result {
                Ok(data) => {
                    state.data = Some(data);
                    state.error = None;
                }
                // Stale-while-error: keep the previous data.
                Err(error) => state.error = Some(error.to_string()),
            }
            state.loading = false;
            true
        });
        if !applied {
            debug!(token, "discarding stale fetch result");
        }
    }
}

/// State container for one asynchronous fetch.
///
/// Clones share the same state, so a clone can be moved into a spawned task
/// while the owner keeps reading snapshots.
pub struct AsyncData<T, E, D = ()> {
    inner: Arc<Inner<T, E, D>>,
}

impl<T, E, D> Clone for AsyncData<T, E, D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T, E, D> AsyncData<T, E, D>
where
    T: Send + Sync + 'static,
    E: Display + Send + 'static,
    D: PartialEq + Send + 'static,
{
    /// Create an idle container around `fetcher`, tracking `dependencies`.
    ///
    /// No fetch starts until [`AsyncData::refetch`] is called; use
    /// [`AsyncData::mount`] to start the first fetch immediately.
    pub fn new<F, Fut>(fetcher: F, dependencies: D) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        let fetcher: Fetcher<T, E> = Arc::new(move || Box::pin(fetcher()));
        let (state, _) = watch::channel(AsyncDataState::default());
        Self {
            inner: Arc::new(Inner {
                fetcher,
                state,
                generation: AtomicU64::new(0),
                mounted: AtomicBool::new(true),
                dependencies: Mutex::new(dependencies),
            }),
        }
    }

    /// Create a container and start its first fetch straight away.
    ///
    /// The returned container is already in [`Phase::Loading`]; the future
    /// settles that first fetch and may be awaited or spawned.
    ///
    /// # Examples
    /// ```
    /// use async_data::{AsyncData, Phase};
    ///
    /// # let runtime = tokio::runtime::Builder::new_current_thread()
    /// #     .build()
    /// #     .expect("runtime");
    /// # runtime.block_on(async {
    /// let (trips, first) = AsyncData::mount(|| async { Ok::<_, String>(3) }, ());
    /// assert_eq!(trips.phase(), Phase::Loading);
    /// first.await;
    /// assert_eq!(trips.state().data, Some(3));
    /// # });
    /// ```
    pub fn mount<F, Fut>(
        fetcher: F,
        dependencies: D,
    ) -> (Self, impl Future<Output = ()> + Send + 'static)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        let data = Self::new(fetcher, dependencies);
        let first = data.refetch();
        (data, first)
    }

    /// Start a new fetch and return the future that settles it.
    ///
    /// The state enters [`Phase::Loading`] immediately, before the returned
    /// future is polled, and the fetch function is invoked eagerly. Any fetch
    /// started earlier becomes stale. After [`AsyncData::unmount`] this is a
    /// no-op and the fetch function is not called.
    pub fn refetch(&self) -> impl Future<Output = ()> + Send + 'static + use<T, E, D> {
        let inner = Arc::clone(&self.inner);
        let pending = inner.begin().map(|token| (token, (inner.fetcher)()));
        async move {
            let Some((token, fetch)) = pending else {
                return;
            };
            let result = fetch.await;
            inner.settle(token, result);
        }
    }

    /// Replace the dependency value, refetching only when it changed.
    ///
    /// Returns the settling future of the new fetch, or `None` when the
    /// dependencies are unchanged.
    pub fn set_dependencies(
        &self,
        dependencies: D,
    ) -> Option<impl Future<Output = ()> + Send + 'static + use<T, E, D>> {
        {
            let mut current = self
                .inner
                .dependencies
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            if *current == dependencies {
                return None;
            }
            *current = dependencies;
        }
        Some(self.refetch())
    }

    /// Drop any loaded data without touching `loading` or `error`.
    pub fn clear(&self) {
        self.inner.state.send_if_modified(|state| {
            let had_data = state.data.is_some();
            state.data = None;
            had_data
        });
    }

    /// Detach the container from its owner.
    ///
    /// In-flight fetches resolve into nothing and later refetches are
    /// ignored.
    pub fn unmount(&self) {
        self.inner.state.send_if_modified(|_| {
            self.inner.mounted.store(false, Ordering::Release);
            false
        });
    }

    /// Whether [`AsyncData::unmount`] has not been called yet.
    pub fn is_mounted(&self) -> bool {
        self.inner.mounted.load(Ordering::Acquire)
    }

    /// Current phase of the state machine.
    pub fn phase(&self) -> Phase {
        self.inner.state.borrow().phase()
    }

    /// Receiver notified on every applied state change.
    pub fn subscribe(&self) -> watch::Receiver<AsyncDataState<T>> {
        self.inner.state.subscribe()
    }
}

impl<T, E, D> AsyncData<T, E, D>
where
    T: Clone,
{
    /// Clone the current `{data, loading, error}` triple.
    pub fn state(&self) -> AsyncDataState<T> {
        self.inner.state.borrow().clone()
    }
}

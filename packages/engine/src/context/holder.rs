//! Ambient filter for the current thread or task
//!
//! Hosts that cannot pass a context explicitly install the filter here for
//! the duration of a request. A task scope, when present, shadows the thread
//! scope.

use std::cell::RefCell;
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

thread_local! {
    static THREAD_FILTERS: RefCell<Vec<Arc<str>>> = const { RefCell::new(Vec::new()) };
}

tokio::task_local! {
    static TASK_FILTER: Arc<str>;
}

/// Entry points for installing and reading the ambient filter
pub struct FilterHolder;

impl FilterHolder {
    /// Install `filter` on this thread until the guard drops
    #[must_use = "the filter is removed as soon as the guard drops"]
    pub fn enter(filter: impl Into<Arc<str>>) -> FilterGuard {
        let filter = filter.into();
        let depth = THREAD_FILTERS.with_borrow_mut(|filters| {
            let depth = filters.len();
            filters.push(filter);
            depth
        });
        FilterGuard {
            depth,
            _not_send: PhantomData,
        }
    }

    /// Run `f` with `filter` installed on this thread
    pub fn scope<R>(filter: impl Into<Arc<str>>, f: impl FnOnce() -> R) -> R {
        let _guard = Self::enter(filter);
        f()
    }

    /// Run `future` with `filter` installed for the task, across await points
    pub async fn scope_task<F: Future>(filter: impl Into<Arc<str>>, future: F) -> F::Output {
        TASK_FILTER.scope(filter.into(), future).await
    }

    /// The innermost installed filter, task scope first
    pub fn current() -> Option<Arc<str>> {
        TASK_FILTER
            .try_with(Arc::clone)
            .ok()
            .or_else(|| THREAD_FILTERS.with_borrow(|filters| filters.last().cloned()))
    }
}

/// Removes the filter installed by [`FilterHolder::enter`] and anything
/// installed after it
///
/// Not `Send`: the guard must drop on the thread that created it.
pub struct FilterGuard {
    depth: usize,
    _not_send: PhantomData<*const ()>,
}

impl Drop for FilterGuard {
    fn drop(&mut self) {
        THREAD_FILTERS.with_borrow_mut(|filters| filters.truncate(self.depth));
    }
}

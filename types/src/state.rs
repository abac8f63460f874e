//! Observable current-page state.
//!
//! [`PageStateHolder`] is the single source of truth for which page is shown.
//! Every write goes through [`PageStateHolder::set_current_index`]; observers
//! registered with [`PageStateHolder::subscribe`] run synchronously, in
//! registration order, after each successful change.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    #[error("page index {index} is out of range (page count {page_count})")]
    InvalidIndex { index: i64, page_count: usize },
}

/// Snapshot of the pager position.
///
/// Invariant: `current_index < page_count`, and `page_count >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerState {
    current_index: usize,
    page_count: usize,
}

impl PagerState {
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.page_count - 1
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current_index == self.last_index()
    }
}

/// A successful index change, as delivered to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChange {
    pub previous: usize,
    pub current: usize,
}

impl PageChange {
    /// True when the pager moved towards higher indices.
    #[must_use]
    pub fn is_forward(&self) -> bool {
        self.current > self.previous
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(PageChange)>;

pub struct PageStateHolder {
    state: PagerState,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl std::fmt::Debug for PageStateHolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageStateHolder")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl PageStateHolder {
    /// Creates a holder positioned on the first page.
    ///
    /// A zero page count is treated as one page; a deck can never be empty.
    #[must_use]
    pub fn new(page_count: usize) -> Self {
        Self {
            state: PagerState {
                current_index: 0,
                page_count: page_count.max(1),
            },
            observers: Vec::new(),
            next_id: 0,
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.state.page_count
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.state.is_last()
    }

    #[must_use]
    pub fn snapshot(&self) -> PagerState {
        self.state
    }

    pub fn subscribe(&mut self, observer: impl FnMut(PageChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Moves to `index`.
    ///
    /// Out-of-range input is rejected and leaves the state untouched. Setting
    /// the current index again is accepted but notifies nobody.
    pub fn set_current_index(&mut self, index: i64) -> Result<Option<PageChange>, StateError> {
        let page_count = self.state.page_count;
        let target = usize::try_from(index)
            .ok()
            .filter(|&i| i < page_count)
            .ok_or(StateError::InvalidIndex { index, page_count })?;

        let previous = self.state.current_index;
        if target == previous {
            return Ok(None);
        }

        self.state.current_index = target;
        let change = PageChange {
            previous,
            current: target,
        };
        notify(&mut self.observers, change);
        Ok(Some(change))
    }

    /// One page forward; `None` on the last page.
    pub fn advance(&mut self) -> Option<PageChange> {
        if self.state.is_last() {
            return None;
        }
        self.set_index_unchecked(self.state.current_index + 1)
    }

    /// One page back; `None` on the first page.
    pub fn retreat(&mut self) -> Option<PageChange> {
        let previous = self.state.current_index.checked_sub(1)?;
        self.set_index_unchecked(previous)
    }

    fn set_index_unchecked(&mut self, index: usize) -> Option<PageChange> {
        // Indices here are derived from a valid current index, so they fit.
        self.set_current_index(i64::try_from(index).ok()?).ok().flatten()
    }
}

fn notify(observers: &mut [(SubscriptionId, Observer)], change: PageChange) {
    for (_, observer) in observers.iter_mut() {
        observer(change);
    }
}

//! Which facility is highlighted, shared by the list and the map.
//!
//! [`SelectionState`] is the plain state machine. [`SelectionStore`] is a
//! cheap-clone handle around one state with subscriber notification; every
//! clone observes and mutates the same selection.

use crate::error::SelectionError;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use triage_geo::FacilitySet;

/// Which facility of one result set is selected.
///
/// `generation` names the [`FacilitySet`] the index refers to; `len` bounds it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<usize>,
    len: usize,
    generation: u64,
}

impl SelectionState {
    pub fn new(facilities: &FacilitySet) -> Self {
        Self {
            selected: None,
            len: facilities.len(),
            generation: facilities.generation(),
        }
    }

    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Number of facilities in the result set the state was last reset to.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Highlights `index`. Returns whether anything changed.
    ///
    /// An out-of-range index is refused and the previous selection stays.
    pub fn select(&mut self, index: usize) -> Result<bool, SelectionError> {
        if index >= self.len {
            return Err(SelectionError::OutOfRange {
                index,
                len: self.len,
            });
        }
        if self.selected == Some(index) {
            return Ok(false);
        }
        self.selected = Some(index);
        Ok(true)
    }

    /// Adopts a new result set and drops whatever was selected.
    pub fn reset(&mut self, facilities: &FacilitySet) {
        self.selected = None;
        self.len = facilities.len();
        self.generation = facilities.generation();
    }
}

/// Sent to subscribers after each change of the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    Selected {
        index: usize,
        previous: Option<usize>,
    },
    Reset {
        len: usize,
        generation: u64,
    },
}

/// Returned by [`SelectionStore::subscribe`]; pass it to `unsubscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Rc<dyn Fn(&SelectionEvent)>;

struct StoreInner {
    state: SelectionState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

/// Shared, observable selection.
///
/// Single-threaded: the handle is `!Send` and needs no locking. Subscribers
/// run after the state is updated and the internal borrow is released, so
/// they may read (or even mutate) the store from inside the callback.
#[derive(Clone)]
pub struct SelectionStore {
    inner: Rc<RefCell<StoreInner>>,
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::new(&FacilitySet::empty())
    }
}

impl fmt::Debug for SelectionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("SelectionStore")
            .field("state", &inner.state)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl SelectionStore {
    pub fn new(facilities: &FacilitySet) -> Self {
        Self {
            inner: Rc::new(RefCell::new(StoreInner {
                state: SelectionState::new(facilities),
                subscribers: Vec::new(),
                next_id: 0,
            })),
        }
    }

    pub fn snapshot(&self) -> SelectionState {
        self.inner.borrow().state
    }

    pub fn selected(&self) -> Option<usize> {
        self.inner.borrow().state.selected()
    }

    /// Highlights facility `index`, the single entry point for both list rows
    /// and map markers. Re-selecting the current index is a no-op.
    pub fn select(&self, index: usize) -> Result<(), SelectionError> {
        let (changed, previous) = {
            let mut inner = self.inner.borrow_mut();
            let previous = inner.state.selected();
            match inner.state.select(index) {
                Ok(changed) => (changed, previous),
                Err(err) => {
                    log::warn!("rejected selection: {err}");
                    return Err(err);
                }
            }
        };
        if changed {
            log::debug!("selection {previous:?} -> {index}");
            self.notify(&SelectionEvent::Selected { index, previous });
        }
        Ok(())
    }

    /// Clears the selection for a new result set.
    pub fn reset(&self, facilities: &FacilitySet) {
        let event = {
            let mut inner = self.inner.borrow_mut();
            inner.state.reset(facilities);
            SelectionEvent::Reset {
                len: inner.state.len(),
                generation: inner.state.generation(),
            }
        };
        log::debug!(
            "selection reset for result set {} ({} facilities)",
            facilities.generation(),
            facilities.len()
        );
        self.notify(&event);
    }

    pub fn subscribe(&self, callback: impl Fn(&SelectionEvent) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.subscribers.push((id, Rc::new(callback)));
        id
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(sid, _)| *sid != id);
        inner.subscribers.len() != before
    }

    /// True if both handles share the same underlying selection.
    pub fn shares_state_with(&self, other: &SelectionStore) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    fn notify(&self, event: &SelectionEvent) {
        let subscribers: Vec<Subscriber> = self
            .inner
            .borrow()
            .subscribers
            .iter()
            .map(|(_, s)| Rc::clone(s))
            .collect();
        for subscriber in subscribers {
            subscriber(event);
        }
    }
}

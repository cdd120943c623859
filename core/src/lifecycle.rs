//! # Vehicle Lifecycle Journal
//!
//! Every construction and destruction of a [`Vehicle`](crate::vehicle::Vehicle)
//! is logged on the `dealer::lifecycle` target and appended to a per-thread
//! journal. The journal lets callers check that each constructed instance,
//! temporaries included, is released exactly once and in scope-exit order.

use std::cell::RefCell;

use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleKind {
    DefaultConstructed,
    Constructed,
    Copied,
    Destroyed,
}

impl LifecycleKind {
    pub fn describe(self) -> &'static str {
        match self {
            LifecycleKind::DefaultConstructed => "Default Constructor called for Vehicle",
            LifecycleKind::Constructed => "Parameterized Constructor called for Vehicle",
            LifecycleKind::Copied => "Copy Constructor called for Vehicle",
            LifecycleKind::Destroyed => "Destructor called for Vehicle",
        }
    }

    pub fn is_construction(self) -> bool {
        !matches!(self, LifecycleKind::Destroyed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleEvent {
    pub kind: LifecycleKind,
    pub brand: String,
}

thread_local! {
    static JOURNAL: RefCell<Vec<LifecycleEvent>> = const { RefCell::new(Vec::new()) };
}

pub fn record(kind: LifecycleKind, brand: &str) {
    info!(target: "dealer::lifecycle", raw_msg = kind.describe(), brand);
    JOURNAL.with_borrow_mut(|journal| {
        journal.push(LifecycleEvent {
            kind,
            brand: brand.to_string(),
        })
    });
}

/// Drains the journal of the calling thread.
pub fn take() -> Vec<LifecycleEvent> {
    JOURNAL.with_borrow_mut(std::mem::take)
}

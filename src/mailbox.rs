//! Bounded input mailbox for `no_std` environments.
//!
//! A small critical-section guarded queue built on `heapless::Deque`,
//! safe to fill from an interrupt or I/O context while the control loop
//! drains it. Besides plain bounded `push` it offers `push_latest`, which
//! evicts the oldest entries when full: with a depth of 1 this is the
//! "keep only the newest pending event" coalescing discipline.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// Error returned when pushing into a full mailbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MailboxFull<T>(pub T);

/// A bounded, thread-safe mailbox.
pub struct Mailbox<T, const SIZE: usize> {
    inner: Mutex<RefCell<Deque<T, SIZE>>>,
}

impl<T, const SIZE: usize> Mailbox<T, SIZE> {
    /// Create a new empty mailbox.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this mailbox.
    ///
    /// Multiple senders can coexist; they share the same queue.
    pub const fn sender(&self) -> Sender<'_, T, SIZE> {
        Sender { mailbox: self }
    }

    /// Get a receiver handle for this mailbox.
    pub const fn receiver(&self) -> Receiver<'_, T, SIZE> {
        Receiver { mailbox: self }
    }

    /// Push a value, failing when the mailbox is full.
    pub fn push(&self, value: T) -> Result<(), MailboxFull<T>> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(value).map_err(MailboxFull)
        })
    }

    /// Push a value, evicting the oldest pending entries if full.
    ///
    /// Never fails; stale entries are dropped in favor of the new one.
    pub fn push_latest(&self, value: T) {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            let mut value = value;
            loop {
                match queue.push_back(value) {
                    Ok(()) => break,
                    Err(rejected) => {
                        queue.pop_front();
                        value = rejected;
                    }
                }
            }
        });
    }

    /// Take the oldest pending value, if any.
    pub fn take(&self) -> Option<T> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front()
        })
    }
}

impl<T, const SIZE: usize> Default for Mailbox<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// A sender handle for a [`Mailbox`].
#[derive(Clone, Copy)]
pub struct Sender<'a, T, const SIZE: usize> {
    mailbox: &'a Mailbox<T, SIZE>,
}

impl<T, const SIZE: usize> Sender<'_, T, SIZE> {
    /// Push a value, failing when the mailbox is full.
    pub fn push(&self, value: T) -> Result<(), MailboxFull<T>> {
        self.mailbox.push(value)
    }

    /// Push a value, evicting the oldest pending entries if full.
    pub fn push_latest(&self, value: T) {
        self.mailbox.push_latest(value);
    }
}

/// A receiver handle for a [`Mailbox`].
#[derive(Clone, Copy)]
pub struct Receiver<'a, T, const SIZE: usize> {
    mailbox: &'a Mailbox<T, SIZE>,
}

impl<T, const SIZE: usize> Receiver<'_, T, SIZE> {
    /// Take the oldest pending value, if any.
    pub fn take(&self) -> Option<T> {
        self.mailbox.take()
    }
}

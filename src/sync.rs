//! Locking for the session store, backed by `std` or `spin`.

use alloc::sync::Arc;

/// A game handle shared between the store and the caller holding its lock.
pub type Shared<T> = Arc<Mutex<T>>;

/// Wraps a value for shared, locked access.
#[must_use]
pub fn shared<T>(value: T) -> Shared<T> {
    Arc::new(Mutex::new(value))
}

#[cfg(feature = "std")]
pub struct Mutex<T>(std::sync::Mutex<T>);

#[cfg(feature = "std")]
impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self(std::sync::Mutex::new(value))
    }

    /// Locks the mutex. A poisoned lock still yields its guard.
    pub fn lock(&self) -> std::sync::MutexGuard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub use spin::Mutex;

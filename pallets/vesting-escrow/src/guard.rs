use core::marker::PhantomData;

use crate::{CallLock, Config, Error};

/// Exclusive-execution token for calls that hand control to the ledger.
///
/// Acquiring sets [`CallLock`]; dropping clears it, on the error path as well
/// as on success. While one is alive every other attempt to acquire fails
/// with [`Error::ReentrantCall`].
#[must_use = "the lock is released as soon as the guard is dropped"]
pub(crate) struct CallGuard<T: Config>(PhantomData<T>);

impl<T: Config> CallGuard<T> {
    pub(crate) fn acquire() -> Result<Self, Error<T>> {
        if CallLock::<T>::get() {
            log::warn!(target: crate::LOG_TARGET, "rejected re-entrant escrow call");
            return Err(Error::<T>::ReentrantCall);
        }
        CallLock::<T>::put(true);
        Ok(Self(PhantomData))
    }
}

impl<T: Config> Drop for CallGuard<T> {
    fn drop(&mut self) {
        CallLock::<T>::kill();
    }
}

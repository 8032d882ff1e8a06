//! Scoped host transaction.

use std::ops::{Deref, DerefMut};

use famkit_model::HostError;
use tracing::{debug, warn};

use crate::host::TransactionHost;

/// An open host transaction.
///
/// Commit consumes the guard. Dropping it without a successful commit rolls
/// back, so a rollback is only ever issued after a successful start and
/// before the transaction ended.
pub struct Transaction<'doc, H: TransactionHost + ?Sized> {
    host: &'doc mut H,
    name: String,
    ended: bool,
}

impl<'doc, H: TransactionHost + ?Sized> Transaction<'doc, H> {
    pub fn start(host: &'doc mut H, name: impl Into<String>) -> Result<Self, HostError> {
        let name = name.into();
        host.start_transaction(&name)?;
        debug!(transaction = %name, "transaction started");
        Ok(Self {
            host,
            name,
            ended: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Commits. On failure the guard is dropped and the transaction rolled
    /// back.
    pub fn commit(mut self) -> Result<(), HostError> {
        self.host.commit_transaction()?;
        self.ended = true;
        debug!(transaction = %self.name, "transaction committed");
        Ok(())
    }

    pub fn rollback(mut self) -> Result<(), HostError> {
        self.ended = true;
        warn!(transaction = %self.name, "rolling back transaction");
        self.host.rollback_transaction()
    }
}

impl<H: TransactionHost + ?Sized> Deref for Transaction<'_, H> {
    type Target = H;

    fn deref(&self) -> &H {
        &*self.host
    }
}

impl<H: TransactionHost + ?Sized> DerefMut for Transaction<'_, H> {
    fn deref_mut(&mut self) -> &mut H {
        &mut *self.host
    }
}

impl<H: TransactionHost + ?Sized> Drop for Transaction<'_, H> {
    fn drop(&mut self) {
        if self.ended {
            return;
        }
        warn!(transaction = %self.name, "transaction dropped before commit, rolling back");
        if let Err(error) = self.host.rollback_transaction() {
            warn!(transaction = %self.name, %error, "rollback failed");
        }
    }
}

use serde::{Deserialize, Serialize};

/// Outcome of one item inside a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ItemStatus<T> {
    Applied { value: T },
    Skipped { reason: String },
    Failed { message: String },
}

/// Per-item entry of a batch report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemReport<T> {
    /// Name the item was requested under.
    pub key: String,
    pub status: ItemStatus<T>,
    /// Diagnostic line shown to the caller.
    pub message: String,
}

impl<T> ItemReport<T> {
    pub fn applied(key: impl Into<String>, value: T, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            status: ItemStatus::Applied { value },
            message: message.into(),
        }
    }

    pub fn skipped(key: impl Into<String>, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self {
            key: key.into(),
            message: reason.clone(),
            status: ItemStatus::Skipped { reason },
        }
    }

    pub fn failed(key: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            key: key.into(),
            status: ItemStatus::Failed {
                message: message.clone(),
            },
            message,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self.status, ItemStatus::Applied { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, ItemStatus::Failed { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self.status, ItemStatus::Skipped { .. })
    }
}

/// Result of a batch of independent host mutations run in one transaction.
///
/// Item failures are recorded here; they do not decide whether the batch
/// was committed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport<T> {
    pub operation: String,
    pub items: Vec<ItemReport<T>>,
    pub committed: bool,
}

impl<T> BatchReport<T> {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            items: Vec::new(),
            committed: false,
        }
    }

    pub fn push(&mut self, item: ItemReport<T>) {
        self.items.push(item);
    }

    pub fn applied_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_applied()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_skipped()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_failed()).count()
    }

    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0
    }

    /// Values of the applied items, in request order.
    pub fn applied(&self) -> impl Iterator<Item = &T> {
        self.items.iter().filter_map(|item| match &item.status {
            ItemStatus::Applied { value } => Some(value),
            _ => None,
        })
    }

    /// Diagnostic lines of every item, in request order.
    pub fn messages(&self) -> Vec<String> {
        self.items.iter().map(|item| item.message.clone()).collect()
    }
}

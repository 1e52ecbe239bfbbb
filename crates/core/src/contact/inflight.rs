//! Messages whose delivery has started but not finished. An identical
//! message posted again in that window is refused rather than relayed twice.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::form::ContactForm;

/// Shared set of messages currently being delivered
#[derive(Debug, Clone, Default)]
pub struct InFlight {
    pending: Arc<Mutex<HashSet<ContactForm>>>,
}

/// Held for the duration of one delivery; releases the message on drop
#[derive(Debug)]
pub struct InFlightClaim {
    pending: Arc<Mutex<HashSet<ContactForm>>>,
    form: ContactForm,
}

fn lock(pending: &Mutex<HashSet<ContactForm>>) -> MutexGuard<'_, HashSet<ContactForm>> {
    pending.lock().unwrap_or_else(PoisonError::into_inner)
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `form`, or `None` if an identical message is already in flight
    pub fn try_claim(&self, form: &ContactForm) -> Option<InFlightClaim> {
        if !lock(&self.pending).insert(form.clone()) {
            return None;
        }
        Some(InFlightClaim {
            pending: self.pending.clone(),
            form: form.clone(),
        })
    }
}

impl Drop for InFlightClaim {
    fn drop(&mut self) {
        lock(&self.pending).remove(&self.form);
    }
}

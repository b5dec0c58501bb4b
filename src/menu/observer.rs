//! Outside-click observer slots.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use egui::Id;

use crate::error::{NavError, Result};

/// Registry of pointer-down observers shared by every navigation bar on the
/// UI thread.
///
/// Each owner id gets at most one slot. A slot is either attached (its
/// controller wants pointer-down events) or idle.
#[derive(Debug, Clone, Default)]
pub struct PointerHub {
    slots: Rc<RefCell<HashMap<Id, bool>>>,
}

impl PointerHub {
    /// Create a hub with no claims.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the observer slot for `owner`.
    ///
    /// Fails if a live claim already exists for the same owner.
    pub fn claim(&self, owner: Id) -> Result<ObserverClaim> {
        let mut slots = self.slots.borrow_mut();
        if slots.contains_key(&owner) {
            return Err(NavError::ObserverConflict(owner));
        }
        slots.insert(owner, false);
        Ok(ObserverClaim {
            hub: self.clone(),
            owner,
        })
    }

    /// Whether `owner` holds a claim that is currently attached.
    pub fn is_attached(&self, owner: Id) -> bool {
        self.slots.borrow().get(&owner).copied().unwrap_or(false)
    }

    /// Number of observers currently listening for pointer-down events.
    pub fn attached_count(&self) -> usize {
        self.slots.borrow().values().filter(|attached| **attached).count()
    }

    /// Number of live claims, attached or not.
    pub fn claim_count(&self) -> usize {
        self.slots.borrow().len()
    }

    fn set_attached(&self, owner: Id, attached: bool) -> bool {
        match self.slots.borrow_mut().get_mut(&owner) {
            Some(slot) if *slot != attached => {
                *slot = attached;
                true
            }
            _ => false,
        }
    }
}

/// Exclusive ownership of one slot in a [`PointerHub`].
///
/// Dropping the claim releases the slot, detaching the observer if needed.
#[derive(Debug)]
pub struct ObserverClaim {
    hub: PointerHub,
    owner: Id,
}

impl ObserverClaim {
    /// A claim on a private hub, which cannot conflict.
    pub(crate) fn standalone(owner: Id) -> Self {
        let hub = PointerHub::new();
        hub.slots.borrow_mut().insert(owner, false);
        Self { hub, owner }
    }

    /// Id of the controller holding this claim.
    pub fn owner(&self) -> Id {
        self.owner
    }

    /// Whether the observer is listening for pointer-down events.
    pub fn is_attached(&self) -> bool {
        self.hub.is_attached(self.owner)
    }

    /// Start listening. Returns `false` if already attached.
    pub fn attach(&mut self) -> bool {
        self.hub.set_attached(self.owner, true)
    }

    /// Stop listening. Returns `false` if already detached.
    pub fn detach(&mut self) -> bool {
        self.hub.set_attached(self.owner, false)
    }
}

impl Drop for ObserverClaim {
    fn drop(&mut self) {
        if self.hub.slots.borrow_mut().remove(&self.owner) == Some(true) {
            log::debug!("observer for {:?} detached on teardown", self.owner);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_claim_for_same_owner_conflicts() {
        let hub = PointerHub::new();
        let _first = hub.claim(Id::new("nav")).unwrap();
        assert_eq!(
            hub.claim(Id::new("nav")).unwrap_err(),
            NavError::ObserverConflict(Id::new("nav"))
        );
        assert!(hub.claim(Id::new("other")).is_ok());
    }

    #[test]
    fn attach_and_detach_are_idempotent() {
        let hub = PointerHub::new();
        let mut claim = hub.claim(Id::new("nav")).unwrap();

        assert!(claim.attach());
        assert!(!claim.attach());
        assert_eq!(hub.attached_count(), 1);

        assert!(claim.detach());
        assert!(!claim.detach());
        assert_eq!(hub.attached_count(), 0);
    }

    #[test]
    fn drop_releases_the_slot() {
        let hub = PointerHub::new();
        {
            let mut claim = hub.claim(Id::new("nav")).unwrap();
            claim.attach();
            assert!(hub.is_attached(Id::new("nav")));
        }
        assert_eq!(hub.claim_count(), 0);
        assert_eq!(hub.attached_count(), 0);
        assert!(hub.claim(Id::new("nav")).is_ok());
    }
}

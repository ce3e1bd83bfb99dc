//! The reservation ledger: which carriages are en route to which producer.
//!
//! A carriage is entered when a path to its chosen producer is confirmed and
//! removed the moment cargo leaves the producer's storage (not when the
//! carriage gets home).  Candidate scans skip any `(producer, resource)`
//! pair that already has an entry, so two carriages never head for the same
//! pickup.  There is no lock: exclusivity holds because scans read the
//! ledger before committing and carriages are processed one at a time.

use rustc_hash::FxHashMap;

use sl_core::{CarriageId, ProducerId, ResourceId};

use crate::{CarriageError, CarriageResult};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Reservation {
    pub carriage: CarriageId,
    pub resource: ResourceId,
}

#[derive(Default, Debug)]
pub struct ReservationLedger {
    /// Producer → carriages currently heading there.  Empty lists are removed.
    inner: FxHashMap<ProducerId, Vec<Reservation>>,
}

impl ReservationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter `carriage` as en route to `source` for `resource`.
    ///
    /// A carriage is listed at most once across all producers.
    pub fn reserve(&mut self, source: ProducerId, carriage: CarriageId, resource: ResourceId) -> CarriageResult<()> {
        if let Some(producer) = self.source_of(carriage) {
            return Err(CarriageError::AlreadyReserved { carriage, producer });
        }
        self.inner.entry(source).or_default().push(Reservation { carriage, resource });
        Ok(())
    }

    /// Remove `carriage` from `source`'s list.  Returns `false` if it was
    /// not listed there.
    pub fn release(&mut self, source: ProducerId, carriage: CarriageId) -> bool {
        let Some(list) = self.inner.get_mut(&source) else {
            return false;
        };
        let before = list.len();
        list.retain(|r| r.carriage != carriage);
        let removed = list.len() != before;
        if list.is_empty() {
            self.inner.remove(&source);
        }
        removed
    }

    /// `true` if some carriage is already fetching `resource` from `source`.
    pub fn is_reserved(&self, source: ProducerId, resource: ResourceId) -> bool {
        self.reservations(source).iter().any(|r| r.resource == resource)
    }

    pub fn reservations(&self, source: ProducerId) -> &[Reservation] {
        self.inner.get(&source).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The producer `carriage` is listed at, if any.
    pub fn source_of(&self, carriage: CarriageId) -> Option<ProducerId> {
        self.inner
            .iter()
            .find(|(_, list)| list.iter().any(|r| r.carriage == carriage))
            .map(|(&p, _)| p)
    }

    /// Total reservations across all producers.
    pub fn len(&self) -> usize {
        self.inner.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Every `(producer, reservation)` pair, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (ProducerId, &Reservation)> + '_ {
        self.inner.iter().flat_map(|(&p, list)| list.iter().map(move |r| (p, r)))
    }
}

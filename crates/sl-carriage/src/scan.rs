//! Pickup candidate scan.
//!
//! Pure functions: nothing here mutates the world or the ledger.

use sl_core::{BuildingId, ProducerId, Rect, ResourceId};
use sl_world::{Storage, World};
use tracing::trace;

use crate::{CarriageResult, PickupPlace, ReservationLedger};

/// One viable `(source, resource)` pickup.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    pub source:   ProducerId,
    pub resource: ResourceId,
    /// Source stock at scan time.
    pub stored:   u32,
    /// Whole tiles between the source footprint and the scan origin.
    pub distance: u32,
    /// Filled in by [`rate_candidates`](crate::rate_candidates).
    pub rating:   f64,
}

/// Consumed kinds the consumer still has room for.
///
/// Binary test: any kind stocked below its capacity is needed, however
/// little is missing.
pub fn needed_resources(
    world:    &World,
    consumer: BuildingId,
    consumed: &[(ResourceId, u32)],
) -> CarriageResult<Vec<ResourceId>> {
    let inventory = &world.building(consumer)?.inventory;
    Ok(consumed
        .iter()
        .filter(|&&(res, stock)| stock < inventory.get_size(res))
        .map(|&(res, _)| res)
        .collect())
}

/// Enumerate pickups for `needed` among `places`.
///
/// Visits places in order, then needed kinds in order.  A pair is skipped
/// when the source holds none of the kind, when another carriage already
/// has it reserved, or when it lies farther than `radius` from `origin`.
pub fn scan_candidates(
    world:  &World,
    ledger: &ReservationLedger,
    places: &[PickupPlace],
    needed: &[ResourceId],
    origin: Rect,
    radius: u32,
) -> CarriageResult<Vec<Candidate>> {
    let mut out = Vec::new();
    for place in places {
        let producer = world.producer(place.source)?;
        for &res in needed.iter().filter(|r| place.resources.contains(r)) {
            let stored = producer.stock(res);
            if stored == 0 || ledger.is_reserved(place.source, res) {
                continue;
            }
            let footprint = world.source_footprint(place.source)?;
            let distance = footprint.distance(&origin).floor() as u32;
            if distance > radius {
                continue;
            }
            trace!(source = %place.source, resource = %res, stored, distance, "pickup candidate");
            out.push(Candidate { source: place.source, resource: res, stored, distance, rating: 0.0 });
        }
    }
    Ok(out)
}

//! Observable outcomes of carriage and producer activity.

use sl_core::{AnimalId, BuildingId, CarriageId, ProducerId, ResourceId, Tick};

/// One thing that happened during a tick.
///
/// Events are collected into the tick's event buffer in the order they
/// happen and handed to the simulation observer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogisticsEvent {
    /// A search found nothing; the next attempt is due at `retry_at`.
    SearchFailed { carriage: CarriageId, retry_at: Tick },

    /// A selected candidate was dropped: no path, or nothing to move.
    CandidateUnreachable { carriage: CarriageId, source: ProducerId, resource: ResourceId },

    /// A reservation was made and the carriage set off.
    PickupCommitted {
        carriage: CarriageId,
        source:   ProducerId,
        resource: ResourceId,
        amount:   u32,
        arrival:  Tick,
    },

    /// Cargo was taken from the source.  `received < requested` when the
    /// source was drained in the meantime.
    Transferred {
        carriage:  CarriageId,
        source:    ProducerId,
        resource:  ResourceId,
        requested: u32,
        received:  u32,
    },

    AnimalHerded { carriage: CarriageId, animal: AnimalId },

    /// Cargo reached the consumer.  `spilled` units did not fit and were
    /// discarded.
    Delivered {
        carriage: CarriageId,
        consumer: BuildingId,
        resource: ResourceId,
        amount:   u32,
        spilled:  u32,
    },

    AnimalResumed { carriage: CarriageId, animal: AnimalId },

    Produced { producer: ProducerId, resource: ResourceId, amount: u32 },
}

impl LogisticsEvent {
    /// The carriage this event concerns, if any.
    pub fn carriage(&self) -> Option<CarriageId> {
        match *self {
            LogisticsEvent::SearchFailed { carriage, .. }
            | LogisticsEvent::CandidateUnreachable { carriage, .. }
            | LogisticsEvent::PickupCommitted { carriage, .. }
            | LogisticsEvent::Transferred { carriage, .. }
            | LogisticsEvent::AnimalHerded { carriage, .. }
            | LogisticsEvent::Delivered { carriage, .. }
            | LogisticsEvent::AnimalResumed { carriage, .. } => Some(carriage),
            LogisticsEvent::Produced { .. } => None,
        }
    }
}

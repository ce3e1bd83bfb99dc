use sl_core::{CarriageId, ProducerId};

/// A deferred unit of work.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Job {
    /// Run the carriage's search ("send") entry point.
    SendCarriage(CarriageId),
    /// Run one production step and re-arm the producer's line.
    Produce(ProducerId),
}

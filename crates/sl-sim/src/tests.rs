//! Integration tests for sl-sim: whole trips driven by the tick loop.

use sl_carriage::{CarriageError, CarriageState, LogisticsEvent};
use sl_core::{AnimalId, BuildingId, CarriageId, LogisticsConfig, Point, ProducerId, Rect, ResourceId, Tick};
use sl_spatial::{GridRouter, TileMap};
use sl_world::{BuildingSpec, ProducerSpec, Storage, World, WorldBuilder};

use crate::{EventRecorder, NoopObserver, Sim, SimBuilder, SimError};

// ── Helpers ───────────────────────────────────────────────────────────────────

const WOOD: ResourceId = ResourceId(0);
const WOOL: ResourceId = ResourceId(1);

/// One tick per second and per tile.
fn config(total_ticks: u64) -> LogisticsConfig {
    LogisticsConfig { ticks_per_second: 1, ticks_per_tile: 1, animal_ticks_per_tile: 2, total_ticks, seed: 0 }
}

/// Mill (id 0) at (2,2) with room for 8 wood; lumber camp (id 1, producer 0)
/// at (8,2) holding `stock`.
fn mill_and_camp(stock: u32) -> World {
    let mut b = WorldBuilder::new(TileMap::new(20, 10));
    b.add_building(
        BuildingSpec::new("mill", Rect::new(Point::new(2, 2), 2, 2))
            .radius(10)
            .consumes(WOOD, 8),
    );
    let camp = b.add_building(BuildingSpec::new("camp", Rect::new(Point::new(8, 2), 2, 2)));
    b.add_producer(camp, ProducerSpec::new().produces(WOOD, 20).stock(WOOD, stock)).unwrap();
    b.build()
}

fn wood_sim(stock: u32) -> Sim<GridRouter> {
    SimBuilder::new(config(1_000), mill_and_camp(stock), GridRouter)
        .building_carriage(BuildingId(0))
        .build()
        .unwrap()
}

/// Step one tick at a time until `pred` matches a recorded event.
fn run_until(
    sim:   &mut Sim<GridRouter>,
    rec:   &mut EventRecorder,
    limit: u64,
    pred:  impl Fn(&LogisticsEvent) -> bool,
) -> Tick {
    for _ in 0..limit {
        sim.run_ticks(1, rec).unwrap();
        if let Some((t, _)) = rec.events.iter().find(|(_, e)| pred(e)) {
            return *t;
        }
    }
    panic!("no matching event within {limit} ticks");
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn rejects_bad_config() {
        let bad = LogisticsConfig { ticks_per_second: 0, ..config(10) };
        let err = SimBuilder::new(bad, mill_and_camp(1), GridRouter).build().err().unwrap();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn rejects_bad_carriage() {
        let err = SimBuilder::new(config(10), mill_and_camp(1), GridRouter)
            .building_carriage(BuildingId(1)) // the camp consumes nothing
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::Carriage(CarriageError::NoConsumedResources(_))));
    }

    #[test]
    fn carriages_start_armed_at_home() {
        let sim = wood_sim(5);
        let c = sim.carriage(CarriageId(0)).unwrap();
        assert_eq!(c.state, CarriageState::SearchPending { due: Tick(2) });
        assert_eq!(sim.mobility.position(sl_mobility::Mover::Carriage(c.id)), Some(c.home));
        assert!(sim.carriage(CarriageId(1)).is_err());
    }
}

// ── Trips ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod trip_tests {
    use super::*;

    #[test]
    fn round_trip_delivers_capped_amount() {
        let mut sim = wood_sim(10);
        let mut rec = EventRecorder::new();
        run_until(&mut sim, &mut rec, 100, |e| matches!(e, LogisticsEvent::Delivered { .. }));

        let mill = sim.world.building(BuildingId(0)).unwrap();
        assert_eq!(mill.inventory.get_value(WOOD), 6);
        assert_eq!(sim.world.producer(ProducerId(0)).unwrap().stock(WOOD), 4);
        let c = sim.carriage(CarriageId(0)).unwrap();
        assert!(c.inventory.is_empty());
        // Straight back out for the remaining 2.
        assert_eq!(c.state, CarriageState::TravelingToPickup);
        assert_eq!(c.target.unwrap().amount, 2);
    }

    #[test]
    fn fills_consumer_then_idles() {
        let mut sim = wood_sim(10);
        let mut rec = EventRecorder::new();
        sim.run(&mut rec).unwrap();

        let mill = sim.world.building(BuildingId(0)).unwrap();
        assert_eq!(mill.inventory.get_value(WOOD), 8);
        assert_eq!(sim.world.producer(ProducerId(0)).unwrap().stock(WOOD), 2);
        let delivered: u32 = rec
            .matching(|e| matches!(e, LogisticsEvent::Delivered { .. }))
            .map(|(_, e)| match e {
                LogisticsEvent::Delivered { amount, .. } => *amount,
                _ => 0,
            })
            .sum();
        assert_eq!(delivered, 8);
        assert!(sim.ledger.is_empty());
        assert!(matches!(sim.carriage(CarriageId(0)).unwrap().state, CarriageState::SearchPending { .. }));
    }

    #[test]
    fn drained_source_delivers_nothing() {
        let mut sim = wood_sim(10);
        let mut rec = EventRecorder::new();
        run_until(&mut sim, &mut rec, 100, |e| matches!(e, LogisticsEvent::PickupCommitted { .. }));
        sim.world.producer_mut(ProducerId(0)).unwrap().remove_resource(WOOD, 10);

        run_until(&mut sim, &mut rec, 100, |e| matches!(e, LogisticsEvent::Delivered { .. }));
        assert!(rec.events.iter().any(|(_, e)| matches!(
            e,
            LogisticsEvent::Transferred { requested: 6, received: 0, .. }
        )));
        assert_eq!(sim.world.building(BuildingId(0)).unwrap().inventory.get_value(WOOD), 0);
        assert!(sim.carriage(CarriageId(0)).unwrap().inventory.is_empty());
    }

    #[test]
    fn out_of_range_retries_every_interval() {
        let mut world = mill_and_camp(10);
        world.building_mut(BuildingId(0)).unwrap().radius = 3;
        let mut sim = SimBuilder::new(config(11), world, GridRouter)
            .building_carriage(BuildingId(0))
            .build()
            .unwrap();
        let mut rec = EventRecorder::new();
        sim.run(&mut rec).unwrap();

        let ticks: Vec<Tick> = rec.events.iter().map(|(t, _)| *t).collect();
        assert_eq!(ticks, vec![Tick(2), Tick(4), Tick(6), Tick(8), Tick(10)]);
        assert!(rec.events.iter().all(|(_, e)| matches!(e, LogisticsEvent::SearchFailed { .. })));
        assert!(!sim.carriage(CarriageId(0)).unwrap().visible);
    }
}

// ── Selection ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod selection_tests {
    use super::*;

    /// Consumer at (10,10) with a small near producer (5 wood, 2 tiles away)
    /// and a large far one (20 wood, 8 tiles away); `near_first` decides
    /// which one is created first.
    fn tie_world(near_first: bool) -> World {
        let mut b = WorldBuilder::new(TileMap::new(32, 20));
        b.add_building(
            BuildingSpec::new("smithy", Rect::new(Point::new(10, 10), 2, 2))
                .radius(10)
                .consumes(WOOD, 30),
        );
        let near = (Point::new(13, 10), 5);
        let far = (Point::new(19, 10), 20);
        let order = if near_first { [near, far] } else { [far, near] };
        for (i, (at, stock)) in order.into_iter().enumerate() {
            let site = b.add_building(BuildingSpec::new(format!("pile-{i}"), Rect::new(at, 2, 2)));
            b.add_producer(site, ProducerSpec::new().produces(WOOD, 40).stock(WOOD, stock)).unwrap();
        }
        b.build()
    }

    fn first_pick(near_first: bool) -> Point {
        let world = tie_world(near_first);
        let mut sim = SimBuilder::new(config(100), world, GridRouter)
            .building_carriage(BuildingId(0))
            .build()
            .unwrap();
        let mut rec = EventRecorder::new();
        run_until(&mut sim, &mut rec, 10, |e| matches!(e, LogisticsEvent::PickupCommitted { .. }));
        let source = rec
            .events
            .iter()
            .find_map(|(_, e)| match e {
                LogisticsEvent::PickupCommitted { source, .. } => Some(*source),
                _ => None,
            })
            .unwrap();
        sim.world.source_footprint(source).unwrap().origin()
    }

    #[test]
    fn equal_ratings_pick_first_created() {
        // 2 + 5/20 - 2/8 == 2 + 20/20 - 8/8
        assert_eq!(first_pick(true), Point::new(13, 10));
        assert_eq!(first_pick(false), Point::new(19, 10));
    }
}

// ── Animal variant ────────────────────────────────────────────────────────────

#[cfg(test)]
mod animal_tests {
    use super::*;
    use sl_mobility::Mover;

    const FARM: BuildingId = BuildingId(0);
    const SHEEP: AnimalId = AnimalId(0);

    fn sheep_farm(wool: u32) -> World {
        let mut b = WorldBuilder::new(TileMap::new(16, 12));
        let farm = b.add_building(
            BuildingSpec::new("farm", Rect::new(Point::new(2, 2), 3, 3))
                .radius(8)
                .consumes(WOOL, 10)
                .farm(),
        );
        b.add_animal(farm, Point::new(8, 5), ProducerSpec::new().produces(WOOL, 4).stock(WOOL, wool))
            .unwrap();
        b.build()
    }

    #[test]
    fn herds_animal_home_and_releases_it_once() {
        let mut sim = SimBuilder::new(config(200), sheep_farm(3), GridRouter)
            .animal_carriage(FARM)
            .build()
            .unwrap();
        let mut rec = EventRecorder::new();
        run_until(&mut sim, &mut rec, 200, |e| matches!(e, LogisticsEvent::AnimalResumed { .. }));

        let kinds: Vec<&'static str> = rec
            .events
            .iter()
            .map(|(_, e)| match e {
                LogisticsEvent::PickupCommitted { .. } => "commit",
                LogisticsEvent::AnimalHerded { .. } => "herd",
                LogisticsEvent::Transferred { .. } => "transfer",
                LogisticsEvent::Delivered { .. } => "deliver",
                LogisticsEvent::AnimalResumed { .. } => "resume",
                LogisticsEvent::SearchFailed { .. } => "search-failed",
                _ => "other",
            })
            .collect();
        assert_eq!(kinds, vec!["commit", "herd", "transfer", "deliver", "resume", "search-failed"]);

        let home = sim.carriage(CarriageId(0)).unwrap().home;
        let sheep = sim.world.animal(SHEEP).unwrap();
        assert!(sheep.is_grazing());
        assert_eq!(sheep.position, home);
        assert_eq!(sim.mobility.position(Mover::Animal(SHEEP)), Some(home));
        assert_eq!(sim.world.building(FARM).unwrap().inventory.get_value(WOOL), 3);
    }

    #[test]
    fn empty_flock_retries_every_ten_seconds() {
        let mut sim = SimBuilder::new(config(31), sheep_farm(0), GridRouter)
            .animal_carriage(FARM)
            .build()
            .unwrap();
        let mut rec = EventRecorder::new();
        sim.run(&mut rec).unwrap();
        let ticks: Vec<Tick> = rec.events.iter().map(|(t, _)| *t).collect();
        assert_eq!(ticks, vec![Tick(10), Tick(20), Tick(30)]);
    }
}

// ── Production ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod production_tests {
    use super::*;

    #[test]
    fn lines_produce_on_their_interval() {
        let mut b = WorldBuilder::new(TileMap::new(10, 10));
        let camp = b.add_building(BuildingSpec::new("camp", Rect::new(Point::new(1, 1), 2, 2)));
        b.add_producer(camp, ProducerSpec::new().produces(WOOD, 5).line(WOOD, 2, 3)).unwrap();
        let mut sim = SimBuilder::new(config(10), b.build(), GridRouter).build().unwrap();
        let mut rec = EventRecorder::new();
        sim.run(&mut rec).unwrap();

        // Ticks 3, 6, 9: 2 + 2 + 1 (capped at 5).
        let produced: Vec<(Tick, u32)> = rec
            .events
            .iter()
            .filter_map(|(t, e)| match e {
                LogisticsEvent::Produced { amount, .. } => Some((*t, *amount)),
                _ => None,
            })
            .collect();
        assert_eq!(produced, vec![(Tick(3), 2), (Tick(6), 2), (Tick(9), 1)]);
        assert_eq!(sim.world.producer(ProducerId(0)).unwrap().stock(WOOD), 5);
    }

    #[test]
    fn herded_animals_do_not_produce() {
        let mut b = WorldBuilder::new(TileMap::new(10, 10));
        let farm = b.add_building(
            BuildingSpec::new("farm", Rect::new(Point::new(1, 1), 2, 2)).consumes(WOOL, 4).farm(),
        );
        let sheep = b
            .add_animal(farm, Point::new(6, 6), ProducerSpec::new().produces(WOOL, 4).line(WOOL, 1, 1))
            .unwrap();
        let mut sim = SimBuilder::new(config(10), b.build(), GridRouter).build().unwrap();
        sim.world.animal_mut(sheep).unwrap().herd(CarriageId(7));
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.world.producer(ProducerId(0)).unwrap().stock(WOOL), 0);
    }
}

// ── Settlement-wide invariants ────────────────────────────────────────────────

#[cfg(test)]
mod settlement_tests {
    use std::collections::HashSet;

    use proptest::prelude::*;
    use sl_core::SimRng;
    use sl_world::{random_settlement, SettlementParams};

    use super::*;

    /// Every reserved pickup belongs to exactly one carriage, and every
    /// carriage between trips carries nothing.
    fn check_invariants(sim: &Sim<GridRouter>) {
        let mut taken = HashSet::new();
        let mut en_route = 0;
        for c in &sim.carriages {
            if c.state == CarriageState::TravelingToPickup {
                let t = c.target.expect("carriage en route without a target");
                assert!(taken.insert((t.source, t.resource)), "{} doubles up on {}", c.id, t.source);
                assert_eq!(sim.ledger.source_of(c.id), Some(t.source));
                en_route += 1;
            }
            if !c.state.has_trip() {
                assert!(c.target.is_none());
                assert!(c.inventory.is_empty());
            }
            let held: u32 = c.inventory.contents().map(|(_, n)| n).sum();
            assert!(held <= c.inventory.capacity());
        }
        assert_eq!(sim.ledger.len(), en_route);
        for (source, r) in sim.ledger.iter() {
            let target = sim.carriages[r.carriage.index()].target;
            assert_eq!(target.map(|t| (t.source, t.resource)), Some((source, r.resource)));
        }
        for b in &sim.world.buildings {
            for &res in b.consumes.iter() {
                assert!(b.inventory.get_value(res) <= b.inventory.get_size(res));
            }
        }
    }

    fn settlement_sim(seed: u64) -> Sim<GridRouter> {
        let mut rng = SimRng::new(seed);
        let generated = random_settlement(&mut rng, &SettlementParams::default()).unwrap();
        let mut builder = SimBuilder::new(config(600), generated.world, GridRouter);
        for (i, &consumer) in generated.consumers.iter().enumerate() {
            builder = if i % 3 == 0 {
                builder.storage_carriage(consumer)
            } else {
                builder.building_carriage(consumer)
            };
            // A second carriage on the same consumer competes for pickups.
            builder = builder.building_carriage(consumer);
        }
        builder.build().unwrap()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(8))]

        #[test]
        fn no_pickup_is_reserved_twice(seed in 0u64..1_000) {
            let mut sim = settlement_sim(seed);
            for _ in 0..600 {
                sim.run_ticks(1, &mut NoopObserver).unwrap();
                check_invariants(&sim);
            }
        }
    }

    #[test]
    fn same_seed_same_run() {
        let mut a = EventRecorder::new();
        let mut b = EventRecorder::new();
        settlement_sim(42).run(&mut a).unwrap();
        settlement_sim(42).run(&mut b).unwrap();
        assert!(!a.events.is_empty());
        assert_eq!(a.events, b.events);
    }
}

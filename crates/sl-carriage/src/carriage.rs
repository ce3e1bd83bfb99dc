//! The carriage state machine.

use sl_core::{AnimalId, BuildingId, CarriageId, MovementKind, Point, ProducerId, Rect, ResourceId, Tick};
use sl_mobility::{MobilityError, Mover};
use sl_schedule::Job;
use sl_spatial::{MovementDomain, Path, PathFinder};
use sl_world::{ArbitraryStorage, Storage, World};
use tracing::{debug, warn};

use crate::{
    needed_resources, rate_candidates, scan_candidates, select_best, commit_amount, AnimalPolicy,
    BuildingPolicy, Candidate, CarriageError, CarriageResult, LogisticsContext, LogisticsEvent,
    PickupPolicy, StoragePolicy,
};

// ── State & target ────────────────────────────────────────────────────────────

/// Where a carriage is in its trip.
///
/// The transfer at the source and the unload at home happen synchronously
/// inside the arrival call, so they have no state of their own.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum CarriageState {
    /// Constructed but not yet armed.
    #[default]
    Idle,
    /// A search job is queued for tick `due`.
    SearchPending { due: Tick },
    TravelingToPickup,
    TravelingHome,
    /// Animal variant: heading home while the herded animal walks there too.
    TravelingToDropPoint,
    /// Animal variant: home, waiting for the herded animal to arrive.
    AwaitingAnimalArrival,
}

impl CarriageState {
    /// `true` while a pickup target is expected to exist.
    pub fn has_trip(self) -> bool {
        matches!(
            self,
            CarriageState::TravelingToPickup
                | CarriageState::TravelingHome
                | CarriageState::TravelingToDropPoint
                | CarriageState::AwaitingAnimalArrival
        )
    }
}

/// The in-flight commitment.  Exists only between commit and unload.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct PickupTarget {
    pub source:   ProducerId,
    pub resource: ResourceId,
    /// Committed amount; replaced by the amount actually received at pickup.
    pub amount:   u32,
}

// ── CarriageSpec ──────────────────────────────────────────────────────────────

/// Construction parameters.  `anchor` defaults to the consumer.
#[derive(Copy, Clone, Debug)]
pub struct CarriageSpec {
    pub consumer:       BuildingId,
    pub anchor:         Option<BuildingId>,
    pub slots:          u32,
    pub size:           u32,
    pub hide_when_idle: bool,
}

impl CarriageSpec {
    pub fn new(consumer: BuildingId) -> Self {
        Self { consumer, anchor: None, slots: 1, size: 6, hide_when_idle: true }
    }

    pub fn anchor(mut self, anchor: BuildingId) -> Self {
        self.anchor = Some(anchor);
        self
    }

    pub fn capacity(mut self, slots: u32, size: u32) -> Self {
        self.slots = slots;
        self.size = size;
        self
    }

    pub fn hide_when_idle(mut self, hide: bool) -> Self {
        self.hide_when_idle = hide;
        self
    }
}

// ── Carriage ──────────────────────────────────────────────────────────────────

pub struct Carriage {
    pub id:             CarriageId,
    policy:             Box<dyn PickupPolicy>,
    /// Building the cargo is delivered to.
    pub consumer:       BuildingId,
    /// Building whose footprint and radius bound movement.
    pub anchor:         BuildingId,
    /// Copied from the anchor at construction.  Later changes to the
    /// anchor's radius are deliberately not picked up.
    pub radius:         u32,
    pub home:           Point,
    /// Last tile the carriage stood on (updated on arrival).
    pub position:       Point,
    pub inventory:      ArbitraryStorage,
    pub target:         Option<PickupTarget>,
    /// Animal being walked home, animal variant only.
    pub escort:         Option<AnimalId>,
    pub state:          CarriageState,
    pub hide_when_idle: bool,
    pub visible:        bool,
}

impl Carriage {
    /// Build a carriage for `spec` under `policy`.
    ///
    /// # Errors
    ///
    /// - [`CarriageError::UnknownBuilding`] if the consumer or anchor does
    ///   not exist.
    /// - [`CarriageError::NoConsumedResources`] if the consumer consumes
    ///   nothing.
    /// - Whatever the policy's `check_anchor` rejects (e.g.
    ///   [`CarriageError::NotAFarm`]).
    pub fn new(
        id:     CarriageId,
        world:  &World,
        policy: Box<dyn PickupPolicy>,
        spec:   CarriageSpec,
    ) -> CarriageResult<Self> {
        let consumer = world
            .building(spec.consumer)
            .map_err(|_| CarriageError::UnknownBuilding(spec.consumer))?;
        if consumer.consumes.is_empty() {
            return Err(CarriageError::NoConsumedResources(spec.consumer));
        }
        let anchor_id = spec.anchor.unwrap_or(spec.consumer);
        let anchor = world
            .building(anchor_id)
            .map_err(|_| CarriageError::UnknownBuilding(anchor_id))?;
        policy.check_anchor(world, anchor_id)?;

        let home = home_position(anchor.footprint);
        Ok(Self {
            id,
            policy,
            consumer:       spec.consumer,
            anchor:         anchor_id,
            radius:         anchor.radius,
            home,
            position:       home,
            inventory:      ArbitraryStorage::new(spec.slots, spec.size),
            target:         None,
            escort:         None,
            state:          CarriageState::Idle,
            hide_when_idle: spec.hide_when_idle,
            visible:        !spec.hide_when_idle,
        })
    }

    /// Generic building carriage serving `consumer`.
    pub fn building(id: CarriageId, world: &World, consumer: BuildingId) -> CarriageResult<Self> {
        Self::new(id, world, Box::new(BuildingPolicy), CarriageSpec::new(consumer))
    }

    /// Road-bound carriage for a storage building.
    pub fn storage(id: CarriageId, world: &World, consumer: BuildingId) -> CarriageResult<Self> {
        Self::new(id, world, Box::new(StoragePolicy), CarriageSpec::new(consumer))
    }

    /// Herder working for `farm`.
    pub fn animal(id: CarriageId, world: &World, farm: BuildingId) -> CarriageResult<Self> {
        Self::new(id, world, Box::new(AnimalPolicy), CarriageSpec::new(farm))
    }

    pub fn policy(&self) -> &dyn PickupPolicy {
        self.policy.as_ref()
    }

    #[inline]
    fn mover(&self) -> Mover {
        Mover::Carriage(self.id)
    }

    /// Queue the first search one interval from now.
    pub fn arm<R: PathFinder>(&mut self, ctx: &mut LogisticsContext<'_, R>) {
        self.schedule_search(ctx);
    }

    // ── Search ────────────────────────────────────────────────────────────

    /// Search for a pickup and set off if one is found.
    ///
    /// Returns `Ok(false)` when nothing was found; the next attempt is
    /// already scheduled one interval later.
    pub fn send<R: PathFinder>(&mut self, ctx: &mut LogisticsContext<'_, R>) -> CarriageResult<bool> {
        if self.target.is_some() || !self.inventory.is_empty() {
            return Err(CarriageError::CarryOver(self.id));
        }
        debug!(carriage = %self.id, policy = self.policy.name(), "send");
        if self.search_job(ctx)? {
            return Ok(true);
        }
        let retry_at = self.schedule_search(ctx);
        ctx.events.push(LogisticsEvent::SearchFailed { carriage: self.id, retry_at });
        Ok(false)
    }

    fn schedule_search<R: PathFinder>(&mut self, ctx: &mut LogisticsContext<'_, R>) -> Tick {
        let delay = ctx.config.secs_to_ticks(self.policy.search_interval_secs());
        let due = ctx.scheduler.schedule_once(Job::SendCarriage(self.id), ctx.now, delay);
        self.state = CarriageState::SearchPending { due };
        due
    }

    fn search_job<R: PathFinder>(&mut self, ctx: &mut LogisticsContext<'_, R>) -> CarriageResult<bool> {
        let consumed = self.policy.consumed_resources(ctx.world, self.consumer)?;
        let needed = needed_resources(ctx.world, self.consumer, &consumed)?;
        if needed.is_empty() {
            debug!(carriage = %self.id, "consumer is full");
            return Ok(false);
        }

        let places = self.policy.pickup_places(ctx.world, self.anchor)?;
        let origin = self.scan_origin(ctx.world)?;
        let mut candidates = scan_candidates(ctx.world, ctx.ledger, &places, &needed, origin, self.radius)?;
        rate_candidates(&mut candidates);

        while let Some(best) = select_best(&candidates) {
            let candidate = candidates.remove(best);
            let Some(path) = self.confirm_and_commit(ctx, &candidate)? else {
                warn!(
                    carriage = %self.id,
                    source = %candidate.source,
                    resource = %candidate.resource,
                    "pickup candidate unreachable"
                );
                ctx.events.push(LogisticsEvent::CandidateUnreachable {
                    carriage: self.id,
                    source:   candidate.source,
                    resource: candidate.resource,
                });
                continue;
            };

            if self.hide_when_idle {
                self.visible = true;
            }
            let arrival = ctx.mobility.begin_travel(self.mover(), path, ctx.now, ctx.config.ticks_per_tile)?;
            self.state = CarriageState::TravelingToPickup;
            if let Some(t) = self.target {
                debug!(carriage = %self.id, source = %t.source, resource = %t.resource, amount = t.amount, %arrival, "pickup committed");
                ctx.events.push(LogisticsEvent::PickupCommitted {
                    carriage: self.id,
                    source:   t.source,
                    resource: t.resource,
                    amount:   t.amount,
                    arrival,
                });
            }
            return Ok(true);
        }

        debug!(carriage = %self.id, "no reachable pickup");
        Ok(false)
    }

    /// Size the pickup, confirm a path exists, and reserve it.
    ///
    /// Returns `None` (ledger untouched) if nothing can be moved or the
    /// source cannot be reached.
    fn confirm_and_commit<R: PathFinder>(
        &mut self,
        ctx:       &mut LogisticsContext<'_, R>,
        candidate: &Candidate,
    ) -> CarriageResult<Option<Path>> {
        let res = candidate.resource;
        let stock = ctx.world.producer(candidate.source)?.stock(res);
        let consumer_free = ctx.world.building(self.consumer)?.inventory.free_space(res);
        let amount = commit_amount(stock, self.inventory.get_size(res), consumer_free);
        if amount == 0 {
            return Ok(None);
        }

        let goal = ctx.world.source_footprint(candidate.source)?.origin();
        let domain = self.domain(ctx.world)?;
        let path = match ctx.mobility.find_path(&ctx.world.map, self.mover(), goal, &domain) {
            Ok(path) => path,
            Err(MobilityError::Routing(_)) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        ctx.ledger.reserve(candidate.source, self.id, res)?;
        self.target = Some(PickupTarget { source: candidate.source, resource: res, amount });
        Ok(Some(path))
    }

    /// At home the scan measures from the whole anchor footprint, elsewhere
    /// from the carriage's tile.
    fn scan_origin(&self, world: &World) -> CarriageResult<Rect> {
        if self.position == self.home {
            Ok(world.building(self.anchor)?.footprint)
        } else {
            Ok(Rect::from_point(self.position))
        }
    }

    fn domain(&self, world: &World) -> CarriageResult<MovementDomain> {
        let area = world.building(self.anchor)?.footprint;
        Ok(MovementDomain::for_kind(self.policy.movement(), area, self.radius))
    }

    // ── Arrivals ──────────────────────────────────────────────────────────

    /// The mobility engine reports this carriage arrived at `at`.
    pub fn on_arrival<R: PathFinder>(&mut self, ctx: &mut LogisticsContext<'_, R>, at: Point) -> CarriageResult<()> {
        self.position = at;
        match self.state {
            CarriageState::TravelingToPickup    => self.reached_pickup(ctx),
            CarriageState::TravelingHome        => self.unload(ctx),
            CarriageState::TravelingToDropPoint => self.reached_drop_point(ctx),
            state => Err(CarriageError::UnexpectedArrival { carriage: self.id, state }),
        }
    }

    /// The animal this carriage is escorting reached the drop point.
    pub fn on_escort_arrived<R: PathFinder>(&mut self, ctx: &mut LogisticsContext<'_, R>) -> CarriageResult<()> {
        if self.state == CarriageState::AwaitingAnimalArrival {
            self.finish_escort(ctx)?;
        }
        Ok(())
    }

    fn reached_pickup<R: PathFinder>(&mut self, ctx: &mut LogisticsContext<'_, R>) -> CarriageResult<()> {
        let target = self.target.ok_or(CarriageError::MissingTarget(self.id))?;
        let footprint = ctx.world.source_footprint(target.source)?;
        if footprint.distance_to_point(self.position) != 0.0 {
            return Err(CarriageError::ArrivalMismatch { carriage: self.id, at: self.position, footprint });
        }
        debug!(carriage = %self.id, source = %target.source, "reached pickup");

        if self.policy.escorts_source() {
            return self.herd_home(ctx, target);
        }
        self.transfer_pickup(ctx)?;
        self.travel_home(ctx)?;
        self.state = CarriageState::TravelingHome;
        Ok(())
    }

    /// Take the cargo out of the source and drop the reservation.
    fn transfer_pickup<R: PathFinder>(&mut self, ctx: &mut LogisticsContext<'_, R>) -> CarriageResult<()> {
        let target = self.target.as_mut().ok_or(CarriageError::MissingTarget(self.id))?;
        let requested = target.amount;
        let received = ctx.world.producer_mut(target.source)?.remove_resource(target.resource, requested);
        let stored = self.inventory.alter_inventory(target.resource, received as i64) as u32;
        if stored != received {
            return Err(CarriageError::HoldOverflow {
                carriage: self.id,
                resource: target.resource,
                received,
                stored,
            });
        }
        target.amount = received;
        ctx.ledger.release(target.source, self.id);

        debug!(carriage = %self.id, resource = %target.resource, requested, received, "transferred");
        ctx.events.push(LogisticsEvent::Transferred {
            carriage: self.id,
            source:   target.source,
            resource: target.resource,
            requested,
            received,
        });
        Ok(())
    }

    fn travel_home<R: PathFinder>(&mut self, ctx: &mut LogisticsContext<'_, R>) -> CarriageResult<Tick> {
        let domain = self.domain(ctx.world)?;
        let path = match ctx.mobility.find_path(&ctx.world.map, self.mover(), self.home, &domain) {
            Ok(path) => path,
            Err(MobilityError::Routing(_)) => return Err(CarriageError::NoReturnPath(self.id)),
            Err(e) => return Err(e.into()),
        };
        Ok(ctx.mobility.begin_travel(self.mover(), path, ctx.now, ctx.config.ticks_per_tile)?)
    }

    /// Deliver cargo to the consumer, clear the trip, and search again
    /// straight away.
    fn unload<R: PathFinder>(&mut self, ctx: &mut LogisticsContext<'_, R>) -> CarriageResult<()> {
        let target = self.target.ok_or(CarriageError::MissingTarget(self.id))?;
        let res = target.resource;
        let delivered = ctx
            .world
            .building_mut(self.consumer)?
            .inventory
            .alter_inventory(res, target.amount as i64) as u32;
        self.inventory.alter_inventory(res, -(target.amount as i64));
        let left = self.inventory.get_value(res);
        if left != 0 {
            return Err(CarriageError::ResidualCargo { carriage: self.id, resource: res, amount: left });
        }

        self.target = None;
        if self.hide_when_idle {
            self.visible = false;
        }
        debug!(carriage = %self.id, resource = %res, amount = delivered, "delivered");
        ctx.events.push(LogisticsEvent::Delivered {
            carriage: self.id,
            consumer: self.consumer,
            resource: res,
            amount:   delivered,
            spilled:  target.amount - delivered,
        });

        if let Some(animal) = self.escort.take() {
            ctx.world.animal_mut(animal)?.resume();
            ctx.events.push(LogisticsEvent::AnimalResumed { carriage: self.id, animal });
        }

        self.state = CarriageState::Idle;
        self.send(ctx)?;
        Ok(())
    }

    // ── Animal variant ────────────────────────────────────────────────────

    /// Herd the source animal and start both of us home.  The transfer waits
    /// until both have arrived.
    fn herd_home<R: PathFinder>(
        &mut self,
        ctx:    &mut LogisticsContext<'_, R>,
        target: PickupTarget,
    ) -> CarriageResult<()> {
        let animal = ctx
            .world
            .animal_for_producer(target.source)?
            .ok_or(CarriageError::NoAnimal(target.source))?;
        ctx.world.animal_mut(animal)?.herd(self.id);
        self.escort = Some(animal);
        ctx.events.push(LogisticsEvent::AnimalHerded { carriage: self.id, animal });

        self.travel_home(ctx)?;
        self.state = CarriageState::TravelingToDropPoint;

        let area = ctx.world.building(self.anchor)?.footprint;
        let domain = MovementDomain::for_kind(MovementKind::Radius, area, self.radius);
        let walker = Mover::Animal(animal);
        match ctx.mobility.find_path(&ctx.world.map, walker, self.home, &domain) {
            Ok(path) => {
                ctx.mobility.begin_travel(walker, path, ctx.now, ctx.config.animal_ticks_per_tile)?;
            }
            Err(MobilityError::Routing(e)) => {
                warn!(carriage = %self.id, animal = %animal, error = %e, "herded animal cannot walk home");
            }
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    fn reached_drop_point<R: PathFinder>(&mut self, ctx: &mut LogisticsContext<'_, R>) -> CarriageResult<()> {
        let animal = self.escort.ok_or(CarriageError::MissingTarget(self.id))?;
        if ctx.mobility.in_transit(Mover::Animal(animal)) {
            self.state = CarriageState::AwaitingAnimalArrival;
            return Ok(());
        }
        self.finish_escort(ctx)
    }

    fn finish_escort<R: PathFinder>(&mut self, ctx: &mut LogisticsContext<'_, R>) -> CarriageResult<()> {
        self.transfer_pickup(ctx)?;
        self.unload(ctx)
    }
}

/// Tile inside `footprint` a carriage calls home: one short of the centre,
/// clamped to the footprint's origin for narrow buildings.
fn home_position(footprint: Rect) -> Point {
    let dx = (footprint.width() as i32 / 2 - 1).max(0);
    let dy = (footprint.height() as i32 / 2 - 1).max(0);
    footprint.origin().offset(dx, dy)
}

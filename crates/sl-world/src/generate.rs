//! Random settlement generation for stress runs and the demo.
//!
//! The map is cut into 3×3 cells.  Each building takes the 2×2 top-left
//! corner of one cell; the remaining row and column of every cell become a
//! road grid, so every building touches a road.
//!
//! ```text
//!   B B R B B R
//!   B B R B B R
//!   R R R R R R
//! ```
//!
//! Cell assignment is shuffled with the caller's [`SimRng`], so the same seed
//! always yields the same layout.

use sl_core::{BuildingId, Point, Rect, ResourceId, SimRng};
use sl_spatial::TileMap;

use crate::{BuildingSpec, ProducerSpec, World, WorldBuilder, WorldError, WorldResult};

const CELL: u32 = 3;

/// Knobs for [`random_settlement`].
#[derive(Clone, Debug)]
pub struct SettlementParams {
    pub width:             u32,
    pub height:            u32,
    pub consumers:         u32,
    pub producers:         u32,
    /// Resource kinds are `ResourceId(0..resources)`.
    pub resources:         u16,
    pub radius:            u32,
    pub consumer_capacity: u32,
    pub producer_capacity: u32,
    pub max_stock:         u32,
}

impl Default for SettlementParams {
    fn default() -> Self {
        Self {
            width:             30,
            height:            30,
            consumers:         8,
            producers:         12,
            resources:         3,
            radius:            20,
            consumer_capacity: 8,
            producer_capacity: 24,
            max_stock:         12,
        }
    }
}

pub struct GeneratedSettlement {
    pub world:     World,
    /// Consuming buildings, in creation order.
    pub consumers: Vec<BuildingId>,
}

/// Generate one settlement.
pub fn random_settlement(rng: &mut SimRng, params: &SettlementParams) -> WorldResult<GeneratedSettlement> {
    let cols = params.width / CELL;
    let rows = params.height / CELL;
    let wanted = params.consumers + params.producers;
    if wanted > cols * rows {
        return Err(WorldError::Layout(format!(
            "{wanted} buildings do not fit in {cols}x{rows} cells"
        )));
    }
    if params.resources == 0 {
        return Err(WorldError::Layout("at least one resource kind is required".into()));
    }

    let mut builder = WorldBuilder::new(TileMap::new(params.width, params.height));
    for row in 0..rows {
        let y = (row * CELL + CELL - 1) as i32;
        builder.map_mut().lay_road(Point::new(0, y), Point::new(params.width as i32 - 1, y));
    }
    for col in 0..cols {
        let x = (col * CELL + CELL - 1) as i32;
        builder.map_mut().lay_road(Point::new(x, 0), Point::new(x, params.height as i32 - 1));
    }

    let mut cells: Vec<Point> = (0..rows)
        .flat_map(|r| (0..cols).map(move |c| Point::new((c * CELL) as i32, (r * CELL) as i32)))
        .collect();
    rng.shuffle(&mut cells);
    let mut cells = cells.into_iter();

    let mut consumers = Vec::with_capacity(params.consumers as usize);
    for (i, origin) in cells.by_ref().take(params.consumers as usize).enumerate() {
        let first = ResourceId(rng.gen_range(0..params.resources));
        let mut spec = BuildingSpec::new(format!("consumer-{i}"), Rect::new(origin, 2, 2))
            .radius(params.radius)
            .consumes(first, params.consumer_capacity);
        if params.resources > 1 && rng.gen_bool(0.5) {
            let second = ResourceId(rng.gen_range(0..params.resources));
            spec = spec.consumes(second, params.consumer_capacity);
        }
        consumers.push(builder.add_building(spec));
    }

    for (i, origin) in cells.take(params.producers as usize).enumerate() {
        let res = ResourceId(rng.gen_range(0..params.resources));
        let stock = rng.gen_range(0..=params.max_stock);
        let interval = rng.gen_range(2..=6u64);
        let site = builder.add_building(BuildingSpec::new(format!("producer-{i}"), Rect::new(origin, 2, 2)));
        builder.add_producer(
            site,
            ProducerSpec::new()
                .produces(res, params.producer_capacity)
                .stock(res, stock)
                .line(res, 1, interval),
        )?;
    }

    Ok(GeneratedSettlement { world: builder.build(), consumers })
}

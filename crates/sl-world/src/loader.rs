//! CSV settlement loader.
//!
//! # CSV format
//!
//! One row per building, in id order (`id` must equal the row index).
//!
//! ```csv
//! id,settlement,name,x,y,width,height,radius,consumes,produces,stock,production
//! 0,0,toolmaker,4,4,2,2,12,0:8;1:8,,,
//! 1,0,lumberjack,10,4,2,2,0,,0:20,0:6,0:2:5
//! 2,0,mine,4,10,2,2,0,,1:20,1:10,
//! ```
//!
//! List fields use `;`-separated entries:
//!
//! | Column       | Entry                     | Meaning                               |
//! |--------------|---------------------------|---------------------------------------|
//! | `consumes`   | `res:capacity`            | consumed kind and its storage limit   |
//! | `produces`   | `res:capacity`            | producible kind and its stock limit   |
//! | `stock`      | `res:amount`              | initial producer stock                |
//! | `production` | `res:amount:interval_secs`| production line (at most one)         |
//!
//! A building with an empty `produces` column has no producer site.  Farms
//! and animals are not expressible in CSV; add them with [`WorldBuilder`].

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use sl_core::{Point, Rect, ResourceId, SettlementId};
use sl_spatial::TileMap;

use crate::{BuildingSpec, ProducerSpec, World, WorldBuilder, WorldError, WorldResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct BuildingRecord {
    id:         u32,
    settlement: u16,
    name:       String,
    x:          i32,
    y:          i32,
    width:      u32,
    height:     u32,
    radius:     u32,
    consumes:   String,
    produces:   String,
    stock:      String,
    production: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a settlement from a CSV file onto `map`.
pub fn load_settlement_csv(path: &Path, map: TileMap) -> WorldResult<World> {
    let file = std::fs::File::open(path)?;
    load_settlement_reader(file, map)
}

/// Like [`load_settlement_csv`] but accepts any `Read` source.
pub fn load_settlement_reader<R: Read>(reader: R, map: TileMap) -> WorldResult<World> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut builder = WorldBuilder::new(map);

    for (row_index, result) in csv_reader.deserialize::<BuildingRecord>().enumerate() {
        let row = result.map_err(|e| WorldError::Parse(e.to_string()))?;
        if row.id as usize != row_index {
            return Err(WorldError::Parse(format!(
                "building id {} on row {row_index}: ids must be dense and in order",
                row.id
            )));
        }

        let footprint = Rect::new(Point::new(row.x, row.y), row.width, row.height);
        let mut spec = BuildingSpec::new(row.name, footprint)
            .settlement(SettlementId(row.settlement))
            .radius(row.radius);
        for (res, cap) in parse_entries(&row.consumes, "consumes", res_amount)? {
            spec = spec.consumes(res, cap);
        }
        let building = builder.add_building(spec);

        let produces = parse_entries(&row.produces, "produces", res_amount)?;
        if produces.is_empty() {
            continue;
        }
        let mut producer = ProducerSpec::new();
        for (res, cap) in produces {
            producer = producer.produces(res, cap);
        }
        for (res, amount) in parse_entries(&row.stock, "stock", res_amount)? {
            producer = producer.stock(res, amount);
        }
        match parse_entries(&row.production, "production", production_line)?.as_slice() {
            [] => {}
            &[(res, amount, secs)] => {
                producer = producer.line(res, amount, secs);
            }
            _ => {
                return Err(WorldError::Parse(format!(
                    "building {}: at most one production line allowed",
                    row.id
                )));
            }
        }
        builder.add_producer(building, producer)?;
    }

    Ok(builder.build())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Parse `"a:b;c:d"` entry by entry, narrowing each `[a, b]` with
/// `convert`.  Empty input yields no entries.  `convert` returns `None` for
/// values that do not fit their target type.
fn parse_entries<const N: usize, T>(
    field:   &str,
    column:  &str,
    convert: impl Fn([u64; N]) -> Option<T>,
) -> WorldResult<Vec<T>> {
    field
        .split(';')
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(|entry| {
            let parts: Vec<u64> = entry
                .split(':')
                .map(|p| p.trim().parse::<u64>())
                .collect::<Result<_, _>>()
                .map_err(|_| bad_entry(column, entry, N))?;
            let raw: [u64; N] = parts.try_into().map_err(|_| bad_entry(column, entry, N))?;
            convert(raw).ok_or_else(|| bad_entry(column, entry, N))
        })
        .collect()
}

/// `res:amount`, with the resource id in `u16` and the amount in `u32` range.
fn res_amount([res, amount]: [u64; 2]) -> Option<(ResourceId, u32)> {
    Some((ResourceId(u16::try_from(res).ok()?), u32::try_from(amount).ok()?))
}

fn production_line([res, amount, secs]: [u64; 3]) -> Option<(ResourceId, u32, u64)> {
    let (res, amount) = res_amount([res, amount])?;
    Some((res, amount, secs))
}

fn bad_entry(column: &str, entry: &str, n: usize) -> WorldError {
    WorldError::Parse(format!(
        "invalid {column} entry {entry:?}: expected {n} ':'-separated unsigned integers in range"
    ))
}

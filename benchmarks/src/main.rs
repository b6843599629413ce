use clap::Parser;
use common::collision_detection::rect_rect;
use common::shapes::{Rect, Size2, Vector2};
use grid2d::{Config, Grid2d, GridResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use std::process::ExitCode;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

const ENTITIES: usize = 20_000;
const GRID_CELLS: i32 = 256;
const CELL_FACTOR: u32 = 64;
const SIZE_MIN: i32 = 4;
const SIZE_MAX: i32 = 48;
const MAX_VELOCITY: i32 = 6;
const MEASURE_TICKS: usize = 200;
const QUERIES_NUM: usize = 1000;
const QUERY_SIZE: i32 = 48;
const VERIFY_EVERY: usize = 50;
const SEED: u64 = 36207250;

#[derive(Clone, Copy)]
struct Entity {
    rect: Rect,
    vx: i32,
    vy: i32,
}

/// Per-tick rebuild and query benchmark for the uniform grid.
#[derive(Parser, Debug)]
#[command(name = "grid_bench")]
struct Settings {
    /// Rectangles inserted every tick
    #[arg(long, default_value_t = ENTITIES)]
    entities: usize,

    /// Simulated ticks
    #[arg(long, default_value_t = MEASURE_TICKS)]
    ticks: usize,

    /// Queries issued per tick
    #[arg(long, default_value_t = QUERIES_NUM)]
    queries: usize,
}

fn generate_entities(rng: &mut StdRng, bounds: &Rect, count: usize) -> Vec<Entity> {
    (0..count)
        .map(|_| {
            let size = Size2::new(
                rng.gen_range(SIZE_MIN..SIZE_MAX),
                rng.gen_range(SIZE_MIN..SIZE_MAX),
            );
            Entity {
                rect: bounds.random_inside(size, rng),
                vx: rng.gen_range(-MAX_VELOCITY..=MAX_VELOCITY),
                vy: rng.gen_range(-MAX_VELOCITY..=MAX_VELOCITY),
            }
        })
        .collect()
}

// Bounces off the grid edges. The upper corners must stay inside the grid.
fn update_entity(entity: &mut Entity, bounds: &Rect) {
    let moved = entity.rect.vector.offset(entity.vx, entity.vy);
    let max_x = bounds.right() - entity.rect.width() - 1;
    let max_y = bounds.top() - entity.rect.height() - 1;
    if moved.x < bounds.left() || moved.x > max_x {
        entity.vx = -entity.vx;
    }
    if moved.y < bounds.bottom() || moved.y > max_y {
        entity.vy = -entity.vy;
    }
    entity.rect.vector = Vector2::new(
        moved.x.clamp(bounds.left(), max_x),
        moved.y.clamp(bounds.bottom(), max_y),
    );
}

fn duration_ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

fn verify(grid: &Grid2d<u32>, entities: &[Entity], queries: &[Rect]) -> GridResult<usize> {
    let mut results = grid.new_result();
    let mut mismatches = 0;
    for query in queries {
        grid.query_intersects(query, &mut results)?;
        let expected = entities
            .iter()
            .filter(|entity| rect_rect(&entity.rect, query))
            .count();
        if expected != results.len() {
            mismatches += 1;
        }
    }
    Ok(mismatches)
}

fn run(settings: &Settings) -> GridResult<()> {
    let config = Config::new(Vector2::ZERO, Size2::new(GRID_CELLS, GRID_CELLS), CELL_FACTOR)
        .with_node_capacity(settings.entities)
        .with_slot_entry_capacity(settings.entities * 4)
        .with_result_capacity(256);
    let mut grid: Grid2d<u32> = Grid2d::new(config)?;
    let bounds = grid.config().world_extent();
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut entities = generate_entities(&mut rng, &bounds, settings.entities);
    let query_size = Size2::new(QUERY_SIZE, QUERY_SIZE);
    let mut results = grid.new_result();

    info!(
        entities = settings.entities,
        ticks = settings.ticks,
        queries = settings.queries,
        seed = SEED,
        "simulation settings"
    );

    let mut rebuild_time = Duration::ZERO;
    let mut query_time = Duration::ZERO;
    let mut matches = 0usize;
    let mut mismatches = 0usize;

    for tick in 0..settings.ticks {
        for entity in entities.iter_mut() {
            update_entity(entity, &bounds);
        }

        let start = Instant::now();
        grid.clear();
        for (i, entity) in entities.iter().enumerate() {
            grid.add(entity.rect, i as u32)?;
        }
        rebuild_time += start.elapsed();

        let queries: Vec<Rect> = (0..settings.queries)
            .map(|_| bounds.random_inside(query_size, &mut rng))
            .collect();

        let start = Instant::now();
        for query in &queries {
            grid.query_intersects(black_box(query), &mut results)?;
            matches += results.len();
        }
        query_time += start.elapsed();

        if tick % VERIFY_EVERY == 0 {
            mismatches += verify(&grid, &entities, &queries)?;
        }
    }

    let ticks = settings.ticks.max(1) as f64;
    let stats = grid.debug_output();
    info!(
        rebuild_ms = format!("{:.02}", duration_ms(rebuild_time) / ticks),
        queries_ms = format!("{:.02}", duration_ms(query_time) / ticks),
        matches,
        mismatches,
        max_depth = stats.max_depth,
        "per tick"
    );
    if mismatches > 0 {
        warn!(mismatches, "queries missed rectangles larger than the corner cells");
    }
    Ok(())
}

fn main() -> ExitCode {
    let settings = Settings::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("grid_bench=info".parse().expect("static directive parses")),
        )
        .init();

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "benchmark aborted");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn settings_definition_is_consistent() {
        Settings::command().debug_assert();
    }

    #[test]
    fn settings_default_to_constants() {
        let settings = Settings::try_parse_from(["grid_bench"]).unwrap();
        assert_eq!(settings.entities, ENTITIES);
        assert_eq!(settings.ticks, MEASURE_TICKS);
        assert_eq!(settings.queries, QUERIES_NUM);
    }

    #[test]
    fn settings_parse_overrides() {
        let settings =
            Settings::try_parse_from(["grid_bench", "--entities", "500", "--ticks", "3"]).unwrap();
        assert_eq!(settings.entities, 500);
        assert_eq!(settings.ticks, 3);
        assert_eq!(settings.queries, QUERIES_NUM);
    }

    #[test]
    fn settings_reject_malformed_values() {
        assert!(Settings::try_parse_from(["grid_bench", "--entities", "abc"]).is_err());
        assert!(Settings::try_parse_from(["grid_bench", "--ticks"]).is_err());
        assert!(Settings::try_parse_from(["grid_bench", "--unknown", "1"]).is_err());
    }
}

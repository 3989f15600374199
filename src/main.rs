use dungeon_stride::constants::*;
use dungeon_stride::engine::{can_descend, GameEngine};
use dungeon_stride::events::GameEvent;
use dungeon_stride::grid::Grid;
use dungeon_stride::movement::{Direction, GameStateQuery};
use dungeon_stride::notifications::{LogFeedback, MoveFeedback};
use dungeon_stride::MovementConfig;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    puffin::set_scopes_on(std::env::var_os("DUNGEON_STRIDE_PROFILE").is_some());

    let config = match std::env::args().nth(1) {
        Some(path) => MovementConfig::load(Path::new(&path))?,
        None => MovementConfig::default(),
    };
    info!(?config, "starting demo");

    let grid = Grid::from_ascii(DEMO_FLOOR)?;
    let mut engine = GameEngine::with_feedback(&config, Some(grid), DEMO_SPAWN, LogFeedback);
    let mut rng = StdRng::seed_from_u64(DEMO_RNG_SEED);

    for _ in 0..DEMO_MOVE_COUNT {
        // Mostly pick open directions, sometimes bump into a wall
        let hints = engine.hints();
        let pool: &[Direction] = if hints.is_empty() || rng.gen_bool(0.2) {
            &Direction::ALL
        } else {
            &hints
        };
        let Some(&direction) = pool.choose(&mut rng) else {
            break;
        };
        engine.request_direction(direction);

        while engine.is_busy() {
            puffin::GlobalProfiler::lock().new_frame();
            engine.frame(DEMO_FRAME_MS);
        }

        let on_stairs = engine
            .grid
            .as_ref()
            .is_some_and(|grid| can_descend(&engine.state, grid));
        if on_stairs {
            engine.begin_floor_transition();
            let next = Grid::from_ascii(DEMO_FLOOR)?;
            engine.complete_floor_transition(next, DEMO_SPAWN);
        }

        let events: Vec<GameEvent> = engine.events.drain().collect();
        for event in events {
            if let GameEvent::MoveFinished { position } = event {
                info!(?position, hints = ?hint_names(&engine), "arrived");
            }
        }
    }

    info!(
        floor = engine.state.current_floor,
        position = ?engine.state.player_position(),
        "demo finished"
    );
    Ok(())
}

fn hint_names<F: MoveFeedback>(engine: &GameEngine<F>) -> Vec<&'static str> {
    engine.hints().iter().map(|d| d.name()).collect()
}

use std::io::{self, Write};

use tracing::{info, warn};

use crate::infra::{Position, SessionObserver};
use crate::session::{Attempt, SessionSummary, StepOutcome};
use crate::state::DangerMemory;
use crate::world::{GridWorld, World};

/// Logs every session event; optionally prints the grid after each step.
#[derive(Debug, Default)]
pub struct DefaultObserver {
    show_map: bool,
}

impl DefaultObserver {
    pub fn new(show_map: bool) -> Self {
        Self { show_map }
    }
}

impl SessionObserver for DefaultObserver {
    fn on_world_created(&mut self, world: &GridWorld, seed: u64) {
        info!("World created");
        info!("- seed: {}", seed);
        info!("- grid: {}x{}", world.size(), world.size());
        info!(
            "- wumpus: {}, pits: {}",
            world.wumpus_positions().len(),
            world.pit_positions().len()
        );
    }

    fn on_attempt_started(&mut self, attempt: &Attempt, memory: &DangerMemory) {
        info!(
            "Attempt {} started at {}, {} fatal cells remembered",
            attempt.number(),
            attempt.position(),
            memory.len()
        );
    }

    fn on_step(&mut self, outcome: &StepOutcome, attempt: &Attempt, world: &GridWorld) {
        info!(
            "attempt: {}, step: {}, pos: {}, score: {}, arrow: {} - {}",
            outcome.attempt,
            attempt.steps(),
            outcome.position,
            outcome.score,
            if attempt.has_arrow() { "ready" } else { "used" },
            outcome.event.describe()
        );

        if self.show_map {
            let map = draw_ascii_map(world, attempt);
            let _ = writeln!(io::stdout(), "{}", map);
        }
    }

    fn on_attempt_finished(&mut self, attempt: &Attempt, score: i32) {
        info!(
            "Attempt {} finished after {} steps: {} (score {})",
            attempt.number(),
            attempt.steps(),
            attempt.status().describe(),
            score
        );
    }

    fn on_session_finished(&mut self, summary: &SessionSummary) {
        if summary.step_limited > 0 {
            warn!("{} attempts stopped at the step limit", summary.step_limited);
        }
        info!("Final score: {}", summary.final_score);
    }
}

/// Three characters per cell: contents, percept, belief.
///
/// Contents: `P` agent, `W` wumpus, `O` pit, `G` gold, `.` empty.
/// Percept: `s` stench, `b` breeze, `*` both.
/// Belief: `x` known danger, `?` suspect, `+` known safe.
pub fn draw_ascii_map(world: &GridWorld, attempt: &Attempt) -> String {
    let knowledge = attempt.knowledge();
    let size = world.size();
    let mut out = String::with_capacity((size * (size * 3 + 1)) as usize);

    for row in 0..size {
        for col in 0..size {
            let pos = Position::new(row, col);
            let contents = world.cell(pos);
            let perception = world.perception(pos);

            out.push(if pos == attempt.position() {
                'P'
            } else if contents.wumpus {
                'W'
            } else if contents.pit {
                'O'
            } else if contents.gold {
                'G'
            } else {
                '.'
            });
            out.push(match (perception.stench, perception.breeze) {
                (true, true) => '*',
                (true, false) => 's',
                (false, true) => 'b',
                (false, false) => ' ',
            });
            out.push(if knowledge.is_dangerous(&pos) {
                'x'
            } else if knowledge.stench.is_suspect(&pos) || knowledge.breeze.is_suspect(&pos) {
                '?'
            } else if knowledge.is_safe(&pos) {
                '+'
            } else {
                ' '
            });
        }
        out.push('\n');
    }
    out
}

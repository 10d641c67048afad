/// Receives point changes as the agent acts.
pub trait ScoreSink {
    fn add_points(&mut self, delta: i32);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreEvent {
    Move,
    Death,
    Gold,
    ArrowShot,
    WumpusKilled,
    Impossible,
}

/// Point values for each scoring event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringRules {
    pub move_cost: i32,
    pub death_penalty: i32,
    pub gold_reward: i32,
    pub arrow_cost: i32,
    pub kill_reward: i32,
    pub impossible_penalty: i32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            move_cost: -1,
            death_penalty: -50,
            gold_reward: 100,
            arrow_cost: -5,
            kill_reward: 30,
            impossible_penalty: -10,
        }
    }
}

impl ScoringRules {
    pub fn points(&self, event: ScoreEvent) -> i32 {
        match event {
            ScoreEvent::Move => self.move_cost,
            ScoreEvent::Death => self.death_penalty,
            ScoreEvent::Gold => self.gold_reward,
            ScoreEvent::ArrowShot => self.arrow_cost,
            ScoreEvent::WumpusKilled => self.kill_reward,
            ScoreEvent::Impossible => self.impossible_penalty,
        }
    }

    pub fn award(&self, sink: &mut dyn ScoreSink, event: ScoreEvent) {
        sink.add_points(self.points(event));
    }
}

/// Running total for the current world.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    total: i32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> i32 {
        self.total
    }

    pub fn reset(&mut self) {
        self.total = 0;
    }
}

impl ScoreSink for Score {
    fn add_points(&mut self, delta: i32) {
        self.total += delta;
    }
}

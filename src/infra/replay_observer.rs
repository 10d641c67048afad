use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use time::{OffsetDateTime, format_description};
use tracing::{info, warn};

use crate::infra::SessionObserver;
use crate::session::{Attempt, SessionError, SessionSummary, StepOutcome};
use crate::state::DangerMemory;
use crate::world::{GridWorld, World};

/// Writes a plain-text transcript of every world to `replays_folder`,
/// one file per world.
pub struct ReplayObserver {
    replays_folder: PathBuf,
    file: Option<ReplayFile>,
}

impl ReplayObserver {
    pub fn new(replays_folder: impl Into<PathBuf>) -> Self {
        Self {
            replays_folder: replays_folder.into(),
            file: None,
        }
    }

    fn write(&mut self, line: impl FnOnce() -> String) {
        let Some(file) = self.file.as_mut() else {
            return;
        };
        if let Err(err) = file.append(&line()) {
            warn!("Replay transcript disabled: {}", err);
            self.file = None;
        }
    }
}

impl SessionObserver for ReplayObserver {
    fn on_world_created(&mut self, world: &GridWorld, seed: u64) {
        self.file = match ReplayFile::new(&self.replays_folder, world, seed) {
            Ok(file) => {
                info!("Writing replay to {}", file.path.display());
                Some(file)
            }
            Err(err) => {
                warn!("Could not create replay file: {}", err);
                None
            }
        };
    }

    fn on_attempt_started(&mut self, attempt: &Attempt, memory: &DangerMemory) {
        self.write(|| {
            format!(
                "attempt {} start {} remembered {}",
                attempt.number(),
                attempt.position(),
                memory.len()
            )
        });
    }

    fn on_step(&mut self, outcome: &StepOutcome, attempt: &Attempt, _world: &GridWorld) {
        self.write(|| {
            let action = outcome
                .event
                .action()
                .map(|a| a.to_string())
                .unwrap_or_else(|| "-".to_string());
            format!(
                "attempt {} step {} action {} pos {} score {} status {:?}",
                outcome.attempt,
                attempt.steps(),
                action,
                outcome.position,
                outcome.score,
                outcome.status
            )
        });
    }

    fn on_attempt_finished(&mut self, attempt: &Attempt, score: i32) {
        self.write(|| {
            format!(
                "attempt {} end {} score {}",
                attempt.number(),
                attempt.status().describe(),
                score
            )
        });
    }

    fn on_session_finished(&mut self, summary: &SessionSummary) {
        self.write(|| format!("summary {:?}", summary));
    }
}

struct ReplayFile {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl ReplayFile {
    fn new(replays_folder: &Path, world: &GridWorld, seed: u64) -> Result<Self, SessionError> {
        let path = replays_folder.join(format!("wumpus - {} - {}.replay", timestamp(), seed));

        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        let mut replay_file = ReplayFile {
            writer: BufWriter::new(File::create(&path)?),
            path,
        };

        replay_file.append(&format!("world size {} seed {}", world.size(), seed))?;
        replay_file.append(&format!("start {}", world.start()))?;
        for pos in world.wumpus_positions() {
            replay_file.append(&format!("wumpus {}", pos))?;
        }
        for pos in world.pit_positions() {
            replay_file.append(&format!("pit {}", pos))?;
        }
        if let Some(pos) = world.gold_position() {
            replay_file.append(&format!("gold {}", pos))?;
        }
        Ok(replay_file)
    }

    fn append(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()
    }
}

fn timestamp() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    format_description::parse("[year][month][day]-[hour][minute][second]")
        .ok()
        .and_then(|format| now.format(&format).ok())
        .unwrap_or_else(|| now.unix_timestamp().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::Position;
    use crate::session::Session;
    use crate::world::Item;

    #[test]
    fn test_replay_records_world_and_steps() {
        let folder = std::env::temp_dir().join(format!("wumpus-replay-test-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&folder);

        let world = GridWorld::empty(4)
            .with(Position::new(2, 0), Item::Pit)
            .with(Position::new(3, 1), Item::Pit);
        let mut session = Session::with_observer(1, ReplayObserver::new(&folder));
        session.load_world(world);
        session.step();
        session.step();

        let entries: Vec<PathBuf> = std::fs::read_dir(&folder)
            .expect("replay folder created")
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .collect();
        assert_eq!(entries.len(), 1);

        let transcript = std::fs::read_to_string(&entries[0]).expect("readable replay");
        assert!(transcript.starts_with("world size 4 seed 1\n"));
        assert!(transcript.contains("pit (2, 0)"));
        assert!(transcript.contains("attempt 1 start (3, 0) remembered 0"));
        assert!(transcript.contains("attempt 1 step 1 action move to (2, 0)"));
        assert!(transcript.contains("attempt 1 end fell to a pit at (2, 0)"));
        assert!(transcript.contains("attempt 2 start (3, 0) remembered 1"));
        assert!(transcript.contains("attempt 2 step 0 action - pos (3, 0) score -51"));

        let _ = std::fs::remove_dir_all(&folder);
    }
}

//! Map document: scene, undo history and grid
//!
//! The document is what tools edit. It hands out the command-sink capability
//! and the grid, and owns rolling back discarded groups.

use crate::commands::{Command, CommandError, CommandResult, CommandSink, UndoHistory};
use crate::config::EditorConfig;
use crate::grid::Grid;
use crate::scene::Scene;

/// What the move machinery needs from the document it edits
pub trait EditDocument: CommandSink {
    fn grid(&self) -> &Grid;
}

pub struct Document {
    pub scene: Scene,
    pub history: UndoHistory,
    pub grid: Grid,
}

impl Document {
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            history: UndoHistory::new(),
            grid: Grid::default(),
        }
    }

    pub fn from_config(scene: Scene, config: &EditorConfig) -> Self {
        Self {
            scene,
            history: UndoHistory::with_capacity(config.history_limit),
            grid: Grid::from_config(&config.grid),
        }
    }

    /// Execute a command and record it (into the open group, if any)
    pub fn submit(&mut self, mut cmd: Box<dyn Command>) -> CommandResult {
        cmd.execute(&mut self.scene)?;
        self.history.push(cmd);
        Ok(())
    }

    pub fn undo(&mut self) -> CommandResult {
        let mut cmd = self.history.pop_undo().ok_or(CommandError::NothingToUndo)?;
        log::debug!("Undo '{}'", cmd.description());
        if let Err(e) = cmd.undo(&mut self.scene) {
            self.history.push_to_undo(cmd);
            return Err(e);
        }
        self.history.push_to_redo(cmd);
        Ok(())
    }

    pub fn redo(&mut self) -> CommandResult {
        let mut cmd = self.history.pop_redo().ok_or(CommandError::NothingToRedo)?;
        log::debug!("Redo '{}'", cmd.description());
        if let Err(e) = cmd.execute(&mut self.scene) {
            self.history.push_to_redo(cmd);
            return Err(e);
        }
        self.history.push_to_undo(cmd);
        Ok(())
    }

    /// Drop the whole undo history, rolling back an unfinished group first
    pub fn clear_history(&mut self) {
        if self.history.in_group() {
            self.discard_command_group();
        }
        self.history.clear();
        log::debug!("Undo history cleared");
    }
}

impl CommandSink for Document {
    fn begin_command_group(&mut self, name: &str) {
        log::debug!("Begin command group '{}'", name);
        self.history.begin_group(name);
    }

    fn end_command_group(&mut self) {
        if let Err(e) = self.history.commit_group() {
            log::warn!("Cannot commit command group: {}", e);
        }
    }

    fn discard_command_group(&mut self) {
        let Some(mut group) = self.history.take_open_group() else {
            log::warn!("Cannot discard command group: {}", CommandError::NoOpenGroup);
            return;
        };
        log::debug!("Discard command group '{}' ({} commands)", group.name, group.len());
        if let Err(e) = group.rollback(&mut self.scene) {
            log::warn!("Rolling back '{}' failed: {}", group.name, e);
        }
    }
}

impl EditDocument for Document {
    fn grid(&self) -> &Grid {
        &self.grid
    }
}

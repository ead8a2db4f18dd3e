//! Command trait, command groups and error types

use thiserror::Error;
use crate::scene::{EntityId, Scene};

/// Result type for command execution
pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("Entity not found: {0}")]
    EntityNotFound(EntityId),
    #[error("No command group is open")]
    NoOpenGroup,
    #[error("Nothing to undo")]
    NothingToUndo,
    #[error("Nothing to redo")]
    NothingToRedo,
}

/// An edit that can be executed and undone.
///
/// Commands are the only way tools modify the scene, so every edit can be
/// reverted.
pub trait Command {
    /// Human-readable description for the undo/redo menu
    fn description(&self) -> &str;

    fn execute(&mut self, scene: &mut Scene) -> CommandResult;

    fn undo(&mut self, scene: &mut Scene) -> CommandResult;
}

/// Ordered, named sequence of commands that forms one undoable unit
pub struct CommandGroup {
    pub name: String,
    pub commands: Vec<Box<dyn Command>>,
}

impl CommandGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, cmd: Box<dyn Command>) {
        self.commands.push(cmd);
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Undo every member, newest first
    pub fn rollback(&mut self, scene: &mut Scene) -> CommandResult {
        for cmd in self.commands.iter_mut().rev() {
            cmd.undo(scene)?;
        }
        Ok(())
    }
}

impl Command for CommandGroup {
    fn description(&self) -> &str {
        &self.name
    }

    fn execute(&mut self, scene: &mut Scene) -> CommandResult {
        for cmd in &mut self.commands {
            cmd.execute(scene)?;
        }
        Ok(())
    }

    fn undo(&mut self, scene: &mut Scene) -> CommandResult {
        self.rollback(scene)
    }
}

//! Command pattern implementation for undo/redo support.
//!
//! All scene modifications go through commands. Tools open a command group
//! at the start of an interaction and commit or discard it at the end.

mod command;
mod history;
mod move_objects;

pub use command::{Command, CommandError, CommandGroup, CommandResult};
pub use history::UndoHistory;
pub use move_objects::MoveObjectsCommand;

/// Capability to open and close command groups.
///
/// Passed to tools explicitly so they can be driven against any document,
/// including test doubles.
pub trait CommandSink {
    /// Open a named group; following edits join it
    fn begin_command_group(&mut self, name: &str);

    /// Close the open group and record it as one undoable unit
    fn end_command_group(&mut self);

    /// Close the open group, reverting anything executed inside it
    fn discard_command_group(&mut self);
}

//! Undo/redo history with command groups
//!
//! Commands pushed while a group is open become part of that group, and the
//! whole group is undone and redone as one unit once committed.

use super::command::{Command, CommandError, CommandGroup};

pub struct UndoHistory {
    /// Units that can be undone (oldest first)
    undo_stack: Vec<Box<dyn Command>>,
    /// Units that can be redone
    redo_stack: Vec<Box<dyn Command>>,
    /// Maximum number of undoable units
    max_size: usize,
    /// Currently open group, if any
    open_group: Option<CommandGroup>,
}

impl Default for UndoHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl UndoHistory {
    pub const DEFAULT_MAX_SIZE: usize = 100;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_MAX_SIZE)
    }

    pub fn with_capacity(max_size: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_size: max_size.max(1),
            open_group: None,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack.last().map(|c| c.description())
    }

    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack.last().map(|c| c.description())
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    /// Open a group. Only one group can be open; a stale one is committed first.
    pub fn begin_group(&mut self, name: impl Into<String>) {
        let name = name.into();
        if let Some(stale) = self.open_group.take() {
            log::warn!("Beginning group '{}' while '{}' is still open", name, stale.name);
            if !stale.is_empty() {
                self.push_unit(Box::new(stale));
            }
        }
        self.open_group = Some(CommandGroup::new(name));
    }

    pub fn in_group(&self) -> bool {
        self.open_group.is_some()
    }

    pub fn open_group_name(&self) -> Option<&str> {
        self.open_group.as_ref().map(|g| g.name.as_str())
    }

    /// Close the open group and record it as one unit. Empty groups leave no trace.
    pub fn commit_group(&mut self) -> Result<(), CommandError> {
        let group = self.open_group.take().ok_or(CommandError::NoOpenGroup)?;
        if !group.is_empty() {
            self.push_unit(Box::new(group));
        }
        Ok(())
    }

    /// Close the open group without recording it. The caller owns rolling it back.
    pub fn take_open_group(&mut self) -> Option<CommandGroup> {
        self.open_group.take()
    }

    /// Record a command that has already been executed
    pub fn push(&mut self, cmd: Box<dyn Command>) {
        if let Some(group) = &mut self.open_group {
            group.push(cmd);
        } else {
            self.push_unit(cmd);
        }
    }

    fn push_unit(&mut self, cmd: Box<dyn Command>) {
        self.undo_stack.push(cmd);
        self.redo_stack.clear(); // Clear redo on new action

        // Limit undo stack size
        while self.undo_stack.len() > self.max_size {
            self.undo_stack.remove(0);
        }
    }

    pub fn pop_undo(&mut self) -> Option<Box<dyn Command>> {
        self.undo_stack.pop()
    }

    pub fn pop_redo(&mut self) -> Option<Box<dyn Command>> {
        self.redo_stack.pop()
    }

    /// Push a unit back onto the undo stack after redoing it
    pub fn push_to_undo(&mut self, cmd: Box<dyn Command>) {
        self.undo_stack.push(cmd);
    }

    /// Push a unit onto the redo stack after undoing it
    pub fn push_to_redo(&mut self, cmd: Box<dyn Command>) {
        self.redo_stack.push(cmd);
    }

    /// Forget all undo and redo entries. An open group stays open: only its
    /// owner can commit or roll it back.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

//! Tool input handling and event dispatch
//!
//! `ToolController` defines how a tool responds to drags, modifier changes
//! and render passes. `InputController` turns raw mouse events into the
//! drag lifecycle and routes it to tools.
//!
//! # Input Routing
//!
//! - **First-wins**: drag start. The first active tool that accepts the drag
//!   receives every event of that drag until it ends.
//! - **Broadcast**: modifier key changes and render passes go to all active
//!   tools.

use crate::input::{InputState, MouseButtons};
use crate::render::{RenderContext, RenderSurface};
use super::tool::Tool;

/// Input handling trait for tools editing documents of type `D`
pub trait ToolController<D>: Tool {
    /// Try to start a drag. Return `true` to claim it.
    fn start_drag(&mut self, _input: &InputState, _document: &mut D) -> bool {
        false
    }

    /// Continue the drag with a new cursor position.
    /// Return `false` to stop dragging now.
    fn drag(&mut self, _input: &InputState, _document: &mut D) -> bool {
        false
    }

    /// The drag is over (button released or `drag` returned false)
    fn end_drag(&mut self, _input: &InputState, _document: &mut D) {}

    /// Modifier keys changed; called with or without an active drag
    fn modifier_key_change(&mut self, _input: &InputState, _document: &mut D) {}

    /// Draw interactive feedback for the current input
    fn render(
        &mut self,
        _input: &InputState,
        _surface: &mut dyn RenderSurface,
        _context: &RenderContext,
        _document: &D,
    ) {
    }

    /// Release render resources now instead of on deactivation
    fn free_render_resources(&mut self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum MouseDrag {
    /// No button held
    #[default]
    Idle,
    /// Left button pressed, waiting for the first move
    Pending,
    /// A tool owns the drag
    Dragging(usize),
    /// Button still held but the drag was refused or stopped
    Stopped,
}

/// Routes input snapshots to tools and guarantees the drag event order
/// start -> (modifier change | drag)* -> end for each drag.
pub struct InputController<D> {
    tools: Vec<Box<dyn ToolController<D>>>,
    input: InputState,
    /// Snapshot of the left button press that may start a drag
    press_input: InputState,
    mouse_drag: MouseDrag,
}

impl<D> Default for InputController<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> InputController<D> {
    pub fn new() -> Self {
        Self {
            tools: Vec::new(),
            input: InputState::default(),
            press_input: InputState::default(),
            mouse_drag: MouseDrag::Idle,
        }
    }

    /// Add a tool; earlier tools get the first chance to claim drags
    pub fn add_tool(&mut self, tool: Box<dyn ToolController<D>>) {
        self.tools.push(tool);
    }

    pub fn tool(&self, id: &str) -> Option<&dyn ToolController<D>> {
        self.tools.iter().find(|t| t.id() == id).map(|t| t.as_ref())
    }

    /// Most recent input snapshot
    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.mouse_drag, MouseDrag::Dragging(_))
    }

    /// Id of the tool that owns the current drag
    pub fn drag_receiver(&self) -> Option<&'static str> {
        match self.mouse_drag {
            MouseDrag::Dragging(index) => self.tools.get(index).map(|t| t.id()),
            _ => None,
        }
    }

    pub fn mouse_down(&mut self, input: InputState, _document: &mut D) {
        self.input = input;
        if self.mouse_drag == MouseDrag::Idle && self.input.mouse_buttons.contains(MouseButtons::LEFT) {
            self.press_input = self.input.clone();
            self.mouse_drag = MouseDrag::Pending;
        }
    }

    /// Cursor moved. The first move after a left press offers the drag to
    /// the tools at the press position, then steps it to the current one.
    pub fn mouse_moved(&mut self, input: InputState, document: &mut D) {
        self.input = input;
        match self.mouse_drag {
            MouseDrag::Pending => {
                if !self.input.mouse_buttons.contains(MouseButtons::LEFT) {
                    self.mouse_drag = MouseDrag::Idle;
                    return;
                }
                self.mouse_drag = MouseDrag::Stopped;
                for (index, tool) in self.tools.iter_mut().enumerate() {
                    if tool.active() && tool.start_drag(&self.press_input, document) {
                        log::debug!("Drag started by '{}'", tool.id());
                        self.mouse_drag = MouseDrag::Dragging(index);
                        break;
                    }
                }
                if let MouseDrag::Dragging(index) = self.mouse_drag {
                    self.drag_step(index, document);
                }
            }
            MouseDrag::Dragging(index) => self.drag_step(index, document),
            MouseDrag::Idle | MouseDrag::Stopped => {}
        }
    }

    fn drag_step(&mut self, index: usize, document: &mut D) {
        let tool = &mut self.tools[index];
        if !tool.drag(&self.input, document) {
            tool.end_drag(&self.input, document);
            log::debug!("Drag stopped by '{}'", tool.id());
            self.mouse_drag = MouseDrag::Stopped;
        }
    }

    pub fn mouse_up(&mut self, input: InputState, document: &mut D) {
        self.input = input;
        if let MouseDrag::Dragging(index) = self.mouse_drag {
            self.tools[index].end_drag(&self.input, document);
        }
        self.mouse_drag = MouseDrag::Idle;
    }

    pub fn modifier_keys_changed(&mut self, input: InputState, document: &mut D) {
        self.input = input;
        for tool in self.tools.iter_mut().filter(|t| t.active()) {
            tool.modifier_key_change(&self.input, document);
        }
    }

    /// Render pass for every active tool using the latest snapshot
    pub fn render(&mut self, surface: &mut dyn RenderSurface, context: &RenderContext, document: &D) {
        for tool in self.tools.iter_mut().filter(|t| t.active()) {
            tool.render(&self.input, surface, context, document);
        }
    }

    /// Activate or deactivate a tool by id. A drag owned by a tool being
    /// deactivated is ended first. Returns whether the state changed.
    pub fn set_tool_active(&mut self, id: &str, active: bool, document: &mut D) -> bool {
        let Some(index) = self.tools.iter().position(|t| t.id() == id) else {
            return false;
        };

        if !active && self.mouse_drag == MouseDrag::Dragging(index) {
            log::warn!("Deactivating '{}' while it is dragging", id);
            self.tools[index].end_drag(&self.input, document);
            self.mouse_drag = MouseDrag::Stopped;
        }

        let tool = &mut self.tools[index];
        if active {
            tool.activate()
        } else {
            tool.deactivate()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::input::ModifierKeys;

    /// Document double that records every callback in order
    #[derive(Default)]
    struct EventLog(Vec<String>);

    struct TestTool {
        id: &'static str,
        active: bool,
        accepts: bool,
        /// Number of drag steps before the tool stops the drag itself
        stop_after: Option<usize>,
        steps: usize,
    }

    impl TestTool {
        fn new(id: &'static str, accepts: bool) -> Self {
            Self { id, active: true, accepts, stop_after: None, steps: 0 }
        }
    }

    impl Tool for TestTool {
        fn id(&self) -> &'static str { self.id }
        fn label(&self) -> &'static str { self.id }
        fn active(&self) -> bool { self.active }

        fn enter(&mut self) -> bool {
            self.active = true;
            true
        }

        fn leave(&mut self) -> bool {
            self.active = false;
            true
        }
    }

    impl ToolController<EventLog> for TestTool {
        fn start_drag(&mut self, _input: &InputState, log: &mut EventLog) -> bool {
            log.0.push(format!("{}:start?", self.id));
            self.accepts
        }

        fn drag(&mut self, _input: &InputState, log: &mut EventLog) -> bool {
            self.steps += 1;
            log.0.push(format!("{}:drag", self.id));
            self.stop_after.map_or(true, |n| self.steps < n)
        }

        fn end_drag(&mut self, _input: &InputState, log: &mut EventLog) {
            log.0.push(format!("{}:end", self.id));
        }

        fn modifier_key_change(&mut self, _input: &InputState, log: &mut EventLog) {
            log.0.push(format!("{}:modifiers", self.id));
        }
    }

    fn left() -> InputState {
        InputState::at(&Camera::new(), 10.0, 10.0).with_buttons(MouseButtons::LEFT)
    }

    fn released() -> InputState {
        InputState::at(&Camera::new(), 10.0, 10.0)
    }

    #[test]
    fn test_first_accepting_tool_wins() {
        let mut controller = InputController::new();
        controller.add_tool(Box::new(TestTool::new("a", false)));
        controller.add_tool(Box::new(TestTool::new("b", true)));
        controller.add_tool(Box::new(TestTool::new("c", true)));
        let mut log = EventLog::default();

        controller.mouse_down(left(), &mut log);
        assert!(!controller.is_dragging());
        controller.mouse_moved(left(), &mut log);
        assert_eq!(controller.drag_receiver(), Some("b"));
        controller.mouse_moved(left(), &mut log);
        controller.mouse_up(released(), &mut log);

        assert!(!controller.is_dragging());
        assert_eq!(log.0, vec!["a:start?", "b:start?", "b:drag", "b:drag", "b:end"]);
    }

    #[test]
    fn test_stopped_drag_does_not_restart_until_release() {
        let mut controller = InputController::new();
        let mut tool = TestTool::new("a", true);
        tool.stop_after = Some(1);
        controller.add_tool(Box::new(tool));
        let mut log = EventLog::default();

        controller.mouse_down(left(), &mut log);
        controller.mouse_moved(left(), &mut log);
        controller.mouse_moved(left(), &mut log);
        controller.mouse_moved(left(), &mut log);
        controller.mouse_up(released(), &mut log);

        assert_eq!(log.0, vec!["a:start?", "a:drag", "a:end"]);
    }

    #[test]
    fn test_inactive_tools_are_skipped() {
        let mut controller = InputController::new();
        controller.add_tool(Box::new(TestTool::new("a", true)));
        let mut log = EventLog::default();
        assert!(controller.set_tool_active("a", false, &mut log));

        controller.mouse_down(left(), &mut log);
        controller.mouse_moved(left(), &mut log);
        controller.modifier_keys_changed(left().with_modifiers(ModifierKeys::ALT), &mut log);
        assert!(!controller.is_dragging());
        assert!(log.0.is_empty());
    }

    #[test]
    fn test_deactivating_drag_owner_ends_drag() {
        let mut controller = InputController::new();
        controller.add_tool(Box::new(TestTool::new("a", true)));
        let mut log = EventLog::default();

        controller.mouse_down(left(), &mut log);
        controller.mouse_moved(left(), &mut log);
        controller.modifier_keys_changed(left().with_modifiers(ModifierKeys::ALT), &mut log);
        assert!(controller.set_tool_active("a", false, &mut log));
        assert!(!controller.is_dragging());
        controller.mouse_up(released(), &mut log);

        assert_eq!(log.0, vec!["a:start?", "a:drag", "a:modifiers", "a:end"]);
        assert!(!controller.tool("a").unwrap().active());
    }
}

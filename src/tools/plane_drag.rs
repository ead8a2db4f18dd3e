//! Plane Drag Driver
//!
//! Generic machinery for drags constrained to a plane: the handler picks a
//! plane and an initial point when the drag starts, and the driver turns
//! every later cursor position into a point on that plane.
//!
//! Key concepts:
//! - `DragStatus`: Continue, Deny (reject this step), or End
//! - `PlaneDragHandler`: start, reset, step, end, plus render hooks
//! - `PlaneDragTool`: owns the drag session and drives the handler
//!
//! Inspired by TrenchBroom's plane drag tools.

use crate::geometry::{Plane, Vec3};
use crate::input::InputState;
use crate::render::{RenderContext, RenderSurface};
use super::controller::ToolController;
use super::tool::Tool;

/// The status of a drag operation after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragStatus {
    /// Drag continues normally, the step was applied
    Continue,
    /// Drag continues but this step was rejected
    Deny,
    /// Drag should end now
    End,
}

/// Callbacks of a plane drag, for documents of type `D`
pub trait PlaneDragHandler<D>: Tool {
    /// Decide whether to start a drag. On success return the drag plane and
    /// the initial point on it.
    fn handle_start_plane_drag(&mut self, input: &InputState, document: &mut D) -> Option<(Plane, Vec3)>;

    /// Recompute plane and initial point for the current input.
    /// Return false to keep both unchanged.
    fn handle_reset_plane(&mut self, input: &InputState, plane: &mut Plane, initial_point: &mut Vec3) -> bool;

    /// One step from `last_point` to `cur_point`. The handler advances
    /// `ref_point` by whatever movement it actually applied.
    fn handle_plane_drag(
        &mut self,
        input: &InputState,
        plane: &Plane,
        last_point: Vec3,
        cur_point: Vec3,
        ref_point: &mut Vec3,
        document: &mut D,
    ) -> DragStatus;

    fn handle_end_plane_drag(&mut self, input: &InputState, document: &mut D);

    /// Whether a modifier change should reset the drag plane
    fn handle_modifier_key_change(&mut self, _input: &InputState) -> bool {
        false
    }

    fn handle_render(
        &mut self,
        _input: &InputState,
        _surface: &mut dyn RenderSurface,
        _context: &RenderContext,
        _document: &D,
    ) {
    }

    fn handle_free_render_resources(&mut self) {}
}

/// Active drag state
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    plane: Plane,
    last_point: Vec3,
    ref_point: Vec3,
}

/// Drives a `PlaneDragHandler` from controller events
pub struct PlaneDragTool<H> {
    handler: H,
    session: Option<DragSession>,
}

impl<H> PlaneDragTool<H> {
    pub fn new(handler: H) -> Self {
        Self { handler, session: None }
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Reference point of the current drag
    pub fn ref_point(&self) -> Option<Vec3> {
        self.session.map(|s| s.ref_point)
    }
}

impl<H: Tool> Tool for PlaneDragTool<H> {
    fn id(&self) -> &'static str {
        self.handler.id()
    }

    fn label(&self) -> &'static str {
        self.handler.label()
    }

    fn active(&self) -> bool {
        self.handler.active()
    }

    fn enter(&mut self) -> bool {
        self.handler.enter()
    }

    fn leave(&mut self) -> bool {
        self.handler.leave()
    }
}

impl<D, H: PlaneDragHandler<D>> ToolController<D> for PlaneDragTool<H> {
    fn start_drag(&mut self, input: &InputState, document: &mut D) -> bool {
        if self.session.is_some() || !self.active() {
            return false;
        }
        let Some((plane, initial_point)) = self.handler.handle_start_plane_drag(input, document) else {
            return false;
        };
        self.session = Some(DragSession {
            plane,
            last_point: initial_point,
            ref_point: initial_point,
        });
        true
    }

    fn drag(&mut self, input: &InputState, document: &mut D) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };

        // Parallel to the plane or behind the eye: wait for a usable ray
        let Some(distance) = session.plane.intersect_with_ray(&input.pick_ray) else {
            return true;
        };
        let cur_point = input.pick_ray.at(distance);
        if (cur_point - session.last_point).is_null() {
            return true;
        }

        let status = self.handler.handle_plane_drag(
            input,
            &session.plane,
            session.last_point,
            cur_point,
            &mut session.ref_point,
            document,
        );
        session.last_point = cur_point;
        status != DragStatus::End
    }

    fn end_drag(&mut self, input: &InputState, document: &mut D) {
        if self.session.take().is_some() {
            self.handler.handle_end_plane_drag(input, document);
        }
    }

    fn modifier_key_change(&mut self, input: &InputState, _document: &mut D) {
        if !self.handler.handle_modifier_key_change(input) {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let mut initial_point = session.ref_point;
        if self.handler.handle_reset_plane(input, &mut session.plane, &mut initial_point) {
            session.last_point = initial_point;
            session.ref_point = initial_point;
        }
    }

    fn render(
        &mut self,
        input: &InputState,
        surface: &mut dyn RenderSurface,
        context: &RenderContext,
        document: &D,
    ) {
        self.handler.handle_render(input, surface, context, document);
    }

    fn free_render_resources(&mut self) {
        self.handler.handle_free_render_resources();
    }
}

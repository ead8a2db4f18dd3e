//! Move Tool
//!
//! Plane-drag handler that moves whatever its `MoveTarget` stands for.
//! The drag is constrained by camera orientation and the axis override key:
//!
//! - Override key held: vertical plane facing the cursor ray, moves along Z
//! - Cursor ray nearly horizontal: vertical plane facing the camera, moves
//!   left/right only
//! - Otherwise: horizontal plane through the grabbed point
//!
//! Every step is snapped to the grid before it reaches the target. All steps
//! of one drag land in a single command group, which is committed if anything
//! moved and discarded otherwise.

use crate::config::MoveToolConfig;
use crate::document::EditDocument;
use crate::geometry::{Plane, Vec3};
use crate::input::{InputState, ModifierKeys, MouseButtons};
use crate::render::{IndicatorDirection, MovementIndicator, RenderContext, RenderSurface};
use super::plane_drag::{DragStatus, PlaneDragHandler};
use super::tool::Tool;

/// Modifier that switches a move to the vertical axis
pub const AXIS_OVERRIDE: ModifierKeys = ModifierKeys::ALT;

/// Axis constraint of a move drag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveDirection {
    #[default]
    Horizontal,
    LeftRight,
    Vertical,
}

impl From<MoveDirection> for IndicatorDirection {
    fn from(direction: MoveDirection) -> Self {
        match direction {
            MoveDirection::Horizontal => IndicatorDirection::Horizontal,
            MoveDirection::LeftRight => IndicatorDirection::LeftRight,
            MoveDirection::Vertical => IndicatorDirection::Vertical,
        }
    }
}

/// Outcome of applying one move step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// Stop the drag now
    Conclude,
    /// The step was applied
    Continue,
    /// The step was refused; keep dragging from the same reference point
    Deny,
}

/// What a move tool moves
pub trait MoveTarget<D> {
    /// Name of the command group a drag records into
    fn action_name(&self) -> &str;

    /// Anchor point if the input targets something this tool can move
    fn is_applicable(&self, input: &InputState, document: &D) -> Option<Vec3>;

    fn perform_move(&mut self, delta: Vec3, document: &mut D) -> MoveResult;
}

/// Modifier combinations the move tool reacts to
fn accepts_modifiers(modifiers: ModifierKeys) -> bool {
    modifiers == ModifierKeys::NONE || modifiers == AXIS_OVERRIDE
}

/// Pick the drag plane through `point` and the axis constraint for `input`.
///
/// Returns None when the override key is held and the cursor ray points
/// straight up or down, since there is no horizontal direction to face.
pub fn select_constraint(input: &InputState, point: Vec3, vertical_threshold: f32) -> Option<(Plane, MoveDirection)> {
    let ray = &input.pick_ray;
    if input.modifier_keys == AXIS_OVERRIDE {
        let normal = ray.direction.horizontal().normalize();
        if normal.is_null() {
            return None;
        }
        Some((Plane::new(normal, point), MoveDirection::Vertical))
    } else if ray.direction.z.abs() < vertical_threshold {
        let plane = Plane::vertical_drag_plane(point, input.camera.direction());
        Some((plane, MoveDirection::LeftRight))
    } else {
        Some((Plane::horizontal_drag_plane(point), MoveDirection::Horizontal))
    }
}

/// Direction a drag would take if it started with this input
pub fn hover_direction(input: &InputState, vertical_threshold: f32) -> MoveDirection {
    if input.modifier_keys == AXIS_OVERRIDE {
        MoveDirection::Vertical
    } else if input.pick_ray.direction.z.abs() < vertical_threshold {
        MoveDirection::LeftRight
    } else {
        MoveDirection::Horizontal
    }
}

/// Project a raw plane delta onto the axis constraint
pub fn constrain_delta(delta: Vec3, direction: MoveDirection, plane: &Plane) -> Vec3 {
    match direction {
        MoveDirection::Vertical => Vec3::POS_Z * delta.dot(Vec3::POS_Z),
        MoveDirection::LeftRight => {
            let axis = Vec3::POS_Z.cross(plane.normal);
            axis * delta.dot(axis)
        }
        MoveDirection::Horizontal => delta,
    }
}

pub struct MoveTool<T> {
    id: &'static str,
    label: &'static str,
    target: T,
    active: bool,
    config: MoveToolConfig,
    /// Axis constraint of the running drag
    direction: Option<MoveDirection>,
    /// Sum of all applied steps of the running drag
    total_delta: Vec3,
    indicator: Option<MovementIndicator>,
}

impl<T> MoveTool<T> {
    pub fn new(id: &'static str, label: &'static str, target: T, config: MoveToolConfig) -> Self {
        Self {
            id,
            label,
            target,
            active: false,
            config,
            direction: None,
            total_delta: Vec3::ZERO,
            indicator: None,
        }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Axis constraint of the running drag
    pub fn direction(&self) -> Option<MoveDirection> {
        self.direction
    }

    pub fn total_delta(&self) -> Vec3 {
        self.total_delta
    }

    pub fn indicator(&self) -> Option<&MovementIndicator> {
        self.indicator.as_ref()
    }
}

impl<T> Tool for MoveTool<T> {
    fn id(&self) -> &'static str {
        self.id
    }

    fn label(&self) -> &'static str {
        self.label
    }

    fn active(&self) -> bool {
        self.active
    }

    fn enter(&mut self) -> bool {
        self.active = true;
        true
    }

    fn leave(&mut self) -> bool {
        self.active = false;
        self.indicator = None;
        true
    }
}

impl<D: EditDocument, T: MoveTarget<D>> PlaneDragHandler<D> for MoveTool<T> {
    fn handle_start_plane_drag(&mut self, input: &InputState, document: &mut D) -> Option<(Plane, Vec3)> {
        if input.mouse_buttons != MouseButtons::LEFT || !accepts_modifiers(input.modifier_keys) {
            return None;
        }

        let initial_point = self.target.is_applicable(input, document)?;
        self.total_delta = Vec3::ZERO;

        let (plane, direction) = select_constraint(input, initial_point, self.config.vertical_threshold)?;
        self.direction = Some(direction);
        document.begin_command_group(self.target.action_name());
        log::debug!("{} started ({:?})", self.target.action_name(), direction);

        Some((plane, initial_point))
    }

    fn handle_reset_plane(&mut self, input: &InputState, plane: &mut Plane, initial_point: &mut Vec3) -> bool {
        let Some(distance) = plane.intersect_with_ray(&input.pick_ray) else {
            return false;
        };
        let point = input.pick_ray.at(distance);
        let Some((new_plane, direction)) = select_constraint(input, point, self.config.vertical_threshold) else {
            return false;
        };

        log::debug!("Move constraint changed to {:?}", direction);
        *plane = new_plane;
        *initial_point = point;
        self.direction = Some(direction);
        true
    }

    fn handle_plane_drag(
        &mut self,
        _input: &InputState,
        plane: &Plane,
        _last_point: Vec3,
        cur_point: Vec3,
        ref_point: &mut Vec3,
        document: &mut D,
    ) -> DragStatus {
        let direction = self.direction.unwrap_or_default();
        let delta = constrain_delta(cur_point - *ref_point, direction, plane);
        let delta = document.grid().snap(delta);
        if delta.is_null() {
            return DragStatus::Continue;
        }

        match self.target.perform_move(delta, document) {
            MoveResult::Conclude => {
                log::debug!("{} concluded by target", self.target.action_name());
                DragStatus::End
            }
            MoveResult::Continue => {
                log::trace!("Moved by ({}, {}, {})", delta.x, delta.y, delta.z);
                *ref_point += delta;
                self.total_delta += delta;
                DragStatus::Continue
            }
            MoveResult::Deny => DragStatus::Deny,
        }
    }

    fn handle_end_plane_drag(&mut self, _input: &InputState, document: &mut D) {
        if self.total_delta.is_null() {
            log::debug!("{} discarded", self.target.action_name());
            document.discard_command_group();
        } else {
            log::debug!("{} committed", self.target.action_name());
            document.end_command_group();
        }
        self.direction = None;
    }

    fn handle_modifier_key_change(&mut self, _input: &InputState) -> bool {
        self.direction.is_some()
    }

    fn handle_render(
        &mut self,
        input: &InputState,
        surface: &mut dyn RenderSurface,
        context: &RenderContext,
        document: &D,
    ) {
        let buttons = input.mouse_buttons;
        if (buttons != MouseButtons::NONE && buttons != MouseButtons::LEFT) || !accepts_modifiers(input.modifier_keys) {
            return;
        }
        if self.target.is_applicable(input, document).is_none() {
            return;
        }

        let direction = self
            .direction
            .unwrap_or_else(|| hover_direction(input, self.config.vertical_threshold));
        let (offset_right, offset_up) = self.config.indicator_offset;
        let position = context
            .camera()
            .default_point(input.x + offset_right, input.y - offset_up);

        let size = self.config.indicator_size;
        let indicator = self.indicator.get_or_insert_with(|| MovementIndicator::new(size));
        indicator.set_direction(direction.into());
        indicator.set_position(position);
        indicator.render(surface, context);
    }

    fn handle_free_render_resources(&mut self) {
        self.indicator = None;
    }
}

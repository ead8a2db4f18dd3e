//! Tool identity and activation
//!
//! A tool is switched on before it sees input and switched off when another
//! tool takes over or the editor shuts it down. Whatever a tool builds for
//! drawing (indicators, cached geometry) lives only between those two points.

/// An editor tool that can be switched on and off
///
/// `activate` and `deactivate` guard against redundant calls and only reach
/// `enter` / `leave` on a real state change. `leave` must drop every render
/// resource built while the tool was on, so a switched-off tool never draws
/// stale feedback when it comes back.
pub trait Tool {
    /// Stable key used to look the tool up (e.g. "move_objects")
    fn id(&self) -> &'static str;

    /// Name shown to the user
    fn label(&self) -> &'static str;

    fn active(&self) -> bool;

    /// Switch the tool on. False if it was already on or refused.
    fn activate(&mut self) -> bool {
        !self.active() && self.enter()
    }

    /// Switch the tool off. False if it was already off or refused.
    fn deactivate(&mut self) -> bool {
        self.active() && self.leave()
    }

    /// Mark the tool active. Returning false leaves it off.
    fn enter(&mut self) -> bool;

    /// Mark the tool inactive and release its render resources.
    fn leave(&mut self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::config::{ColorConfig, MoveToolConfig};
    use crate::document::Document;
    use crate::geometry::{BBox, Vec3};
    use crate::input::InputState;
    use crate::render::{LineBatch, RenderContext};
    use crate::scene::Scene;
    use crate::tools::{MoveObjectsTool, ToolController};

    fn document() -> Document {
        let mut scene = Scene::new();
        let id = scene.add_entity("func_box", BBox::around(Vec3::ZERO, 16.0));
        scene.select(id);
        Document::new(scene)
    }

    #[test]
    fn test_leave_drops_move_indicator() {
        let camera = Camera::looking_at(Vec3::new(0.0, -256.0, 512.0), Vec3::ZERO);
        let context = RenderContext::new(camera.clone(), ColorConfig::default());
        let hover = InputState::at(&camera, 400.0, 300.0);
        let doc = document();
        let mut tool = MoveObjectsTool::tool(MoveToolConfig::default());
        let mut batch = LineBatch::new();

        assert!(tool.activate());
        assert!(!tool.activate());
        tool.render(&hover, &mut batch, &context, &doc);
        assert!(tool.handler().indicator().is_some());
        assert!(!batch.is_empty());

        assert!(tool.deactivate());
        assert!(!tool.active());
        assert!(tool.handler().indicator().is_none());
        assert!(!tool.deactivate());

        // Back on: nothing left over until the next render
        assert!(tool.activate());
        assert!(tool.handler().indicator().is_none());
        tool.render(&hover, &mut batch, &context, &doc);
        assert!(tool.handler().indicator().is_some());
    }
}

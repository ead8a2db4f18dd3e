//! Movement indicator
//!
//! Small arrow glyph drawn next to the cursor that shows along which axes
//! a move drag will travel.

use crate::geometry::Vec3;
use super::context::RenderContext;
use super::surface::RenderSurface;

/// Which arrows the indicator shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndicatorDirection {
    /// Arrows along X and Y
    #[default]
    Horizontal,
    /// Arrows along the viewer's horizontal left/right axis
    LeftRight,
    /// Arrows up and down
    Vertical,
}

#[derive(Debug, Clone)]
pub struct MovementIndicator {
    direction: IndicatorDirection,
    position: Vec3,
    size: f32,
}

impl MovementIndicator {
    pub fn new(size: f32) -> Self {
        Self {
            direction: IndicatorDirection::default(),
            position: Vec3::ZERO,
            size,
        }
    }

    pub fn direction(&self) -> IndicatorDirection {
        self.direction
    }

    pub fn set_direction(&mut self, direction: IndicatorDirection) {
        self.direction = direction;
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// World-space axes the arrows point along (each drawn in both senses)
    fn axes(&self, context: &RenderContext) -> Vec<Vec3> {
        match self.direction {
            IndicatorDirection::Horizontal => vec![Vec3::POS_X, Vec3::POS_Y],
            IndicatorDirection::LeftRight => {
                let right = context.camera().basis_x.horizontal().normalize();
                if right.is_null() {
                    vec![Vec3::POS_X]
                } else {
                    vec![right]
                }
            }
            IndicatorDirection::Vertical => vec![Vec3::POS_Z],
        }
    }

    pub fn render(&self, surface: &mut dyn RenderSurface, context: &RenderContext) {
        let view = context.camera().direction();
        let axes = self.axes(context);

        // Outline first so the body draws on top of it
        for axis in &axes {
            self.draw_arrow(surface, *axis, view, self.size * 1.15, context.colors.indicator_outline);
            self.draw_arrow(surface, -*axis, view, self.size * 1.15, context.colors.indicator_outline);
        }
        for axis in &axes {
            self.draw_arrow(surface, *axis, view, self.size, context.colors.indicator);
            self.draw_arrow(surface, -*axis, view, self.size, context.colors.indicator);
        }
    }

    fn draw_arrow(
        &self,
        surface: &mut dyn RenderSurface,
        dir: Vec3,
        view: Vec3,
        length: f32,
        color: super::Color,
    ) {
        let mut side = dir.cross(view).normalize();
        if side.is_null() {
            // Arrow points straight at the viewer
            side = dir.cross(Vec3::POS_X).normalize();
            if side.is_null() {
                side = Vec3::POS_Y;
            }
        }

        let head = length * 0.35;
        let start = self.position + dir * (length * 0.25);
        let tip = self.position + dir * length;
        let back = tip - dir * head;

        surface.draw_line(start, tip, color);
        surface.draw_line(tip, back + side * (head * 0.6), color);
        surface.draw_line(tip, back - side * (head * 0.6), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::config::ColorConfig;
    use crate::render::LineBatch;

    fn context() -> RenderContext {
        let camera = Camera::looking_at(Vec3::new(-200.0, 0.0, 200.0), Vec3::ZERO);
        RenderContext::new(camera, ColorConfig::default())
    }

    #[test]
    fn test_line_counts_per_direction() {
        let ctx = context();
        let mut indicator = MovementIndicator::new(8.0);

        let mut batch = LineBatch::new();
        indicator.render(&mut batch, &ctx);
        // 2 axes * 2 senses * 3 lines, outline + body
        assert_eq!(batch.len(), 24);

        for direction in [IndicatorDirection::LeftRight, IndicatorDirection::Vertical] {
            indicator.set_direction(direction);
            let mut batch = LineBatch::new();
            indicator.render(&mut batch, &ctx);
            assert_eq!(batch.len(), 12);
        }
    }

    #[test]
    fn test_vertical_arrows_stay_on_z() {
        let ctx = context();
        let mut indicator = MovementIndicator::new(8.0);
        indicator.set_direction(IndicatorDirection::Vertical);
        indicator.set_position(Vec3::new(10.0, 20.0, 30.0));

        let mut batch = LineBatch::new();
        indicator.render(&mut batch, &ctx);
        let body = &batch.lines()[6..];
        // First line of each body arrow is the shaft
        let up = body[0];
        let down = body[3];
        assert!((up.end - Vec3::new(10.0, 20.0, 38.0)).is_null());
        assert!((down.end - Vec3::new(10.0, 20.0, 22.0)).is_null());
        assert_eq!(up.color, ctx.colors.indicator);
        assert_eq!(batch.lines()[0].color, ctx.colors.indicator_outline);
    }

    #[test]
    fn test_left_right_follows_camera_right() {
        let ctx = context();
        let mut indicator = MovementIndicator::new(8.0);
        indicator.set_direction(IndicatorDirection::LeftRight);

        let mut batch = LineBatch::new();
        indicator.render(&mut batch, &ctx);
        let shaft = batch.lines()[6];
        let dir = (shaft.end - shaft.start).normalize();
        assert!(dir.z.abs() < 0.001);
        assert!(dir.dot(ctx.camera.basis_x) > 0.99);
    }
}

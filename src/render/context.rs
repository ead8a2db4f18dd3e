use crate::camera::Camera;
use crate::config::ColorConfig;

/// Per-pass render state handed to tools
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub camera: Camera,
    pub colors: ColorConfig,
}

impl RenderContext {
    pub fn new(camera: Camera, colors: ColorConfig) -> Self {
        Self { camera, colors }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }
}

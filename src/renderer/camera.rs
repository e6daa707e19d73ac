//! Free-fly camera for 3D rendering

use glam::{Mat4, Vec3};

/// Perspective camera with mouse-look and scroll zoom
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,
    /// Direction the camera is looking at
    pub direction: Vec3,
    /// Up vector
    pub up: Vec3,
    /// Field of view in radians
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Aspect ratio (width / height)
    pub aspect: f32,
    /// Yaw angle (rotation around Y axis)
    yaw: f32,
    /// Pitch angle (rotation around X axis)
    pitch: f32,
}

impl Camera {
    /// Create a camera a few units back from the arena, looking at it
    pub fn new() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 3.0),
            direction: Vec3::NEG_Z,
            up: Vec3::Y,
            fov: 45.0_f32.to_radians(),
            near: 0.1,
            far: 100.0,
            aspect: 800.0 / 600.0,
            yaw: -90.0_f32.to_radians(),
            pitch: 0.0,
        }
    }

    /// Get the view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.direction, self.up)
    }

    /// Get the projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    /// Get combined view-projection matrix
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Update aspect ratio
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    /// Rotate camera using mouse delta
    pub fn rotate(&mut self, delta_x: f32, delta_y: f32, sensitivity: f32) {
        self.yaw += delta_x * sensitivity;
        self.pitch += delta_y * sensitivity;

        // Clamp pitch to avoid gimbal lock
        let max_pitch = 89.0_f32.to_radians();
        self.pitch = self.pitch.clamp(-max_pitch, max_pitch);

        // Update direction from yaw and pitch
        self.direction = Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalize();
    }

    /// Zoom by narrowing or widening the field of view.
    ///
    /// Scroll up (positive) narrows; the FOV stays within 1 to 45 degrees.
    pub fn zoom(&mut self, scroll: f32) {
        self.fov -= scroll.to_radians();
        self.fov = self
            .fov
            .clamp(1.0_f32.to_radians(), 45.0_f32.to_radians());
    }

    /// Move camera along its view direction
    pub fn move_forward(&mut self, amount: f32) {
        self.position += self.direction * amount;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_clamps_fov() {
        let mut camera = Camera::new();
        camera.zoom(100.0);
        assert_eq!(camera.fov, 1.0_f32.to_radians());

        camera.zoom(-100.0);
        assert_eq!(camera.fov, 45.0_f32.to_radians());
    }

    #[test]
    fn test_rotate_clamps_pitch() {
        let mut camera = Camera::new();
        camera.rotate(0.0, 10_000.0, 0.01);
        assert!(camera.direction.y <= 1.0);
        // Looking almost straight up, but never past the clamp
        assert!(camera.direction.y > 0.99);

        camera.rotate(0.0, -20_000.0, 0.01);
        assert!(camera.direction.y < -0.99);
    }

    #[test]
    fn test_rotate_keeps_direction_normalized() {
        let mut camera = Camera::new();
        camera.rotate(123.0, -45.0, 0.002);
        assert!((camera.direction.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_move_forward_follows_direction() {
        let mut camera = Camera::new();
        let start = camera.position;
        camera.move_forward(2.0);
        assert!((camera.position - (start + camera.direction * 2.0)).length() < 1e-6);
    }

    #[test]
    fn test_view_projection_is_finite() {
        let mut camera = Camera::new();
        camera.set_aspect(1280, 720);
        let vp = camera.view_projection_matrix();
        assert!(vp.to_cols_array().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_set_aspect_guards_zero_height() {
        let mut camera = Camera::new();
        camera.set_aspect(800, 0);
        assert_eq!(camera.aspect, 800.0);
    }
}

use glam::{Mat4, Vec3};

pub const FOV_Y_DEGREES: f32 = 75.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 1000.0;

/// Fraction of angular/zoom velocity that survives each frame (inertial
/// damping factor 0.25).
const DAMPING: f32 = 0.75;
const ROTATE_SENSITIVITY: f32 = 0.005;
const ZOOM_SENSITIVITY: f32 = 0.05;
const MIN_RADIUS: f32 = 1.0;
const MAX_RADIUS: f32 = 2000.0;
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Orbit camera: a target point, a distance and two angles, with damped
/// drag/zoom input. Starts on the +Z axis at distance 200, where the legacy
/// page put its camera.
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f32,
    pub yaw: f32,
    pub pitch: f32,
    yaw_velocity: f32,
    pitch_velocity: f32,
    zoom_velocity: f32,
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self {
            target: Vec3::ZERO,
            radius: 200.0,
            yaw: 0.0,
            pitch: 0.0,
            yaw_velocity: 0.0,
            pitch_velocity: 0.0,
            zoom_velocity: 0.0,
        }
    }

    pub fn eye(&self) -> Vec3 {
        let offset = Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        );
        self.target + offset * self.radius
    }

    /// Feed a pointer drag delta (pixels) into the angular velocities.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw_velocity -= dx * ROTATE_SENSITIVITY;
        self.pitch_velocity += dy * ROTATE_SENSITIVITY;
    }

    /// Feed a wheel step (positive = zoom in).
    pub fn zoom(&mut self, steps: f32) {
        self.zoom_velocity += steps * ZOOM_SENSITIVITY;
    }

    /// Jump the orbit distance, used by alignment presets.
    pub fn set_distance(&mut self, distance: f32) {
        self.radius = distance.clamp(MIN_RADIUS, MAX_RADIUS);
        self.zoom_velocity = 0.0;
    }

    /// Integrate velocities and decay them; called once per frame.
    pub fn update(&mut self) {
        self.yaw += self.yaw_velocity;
        self.pitch = (self.pitch + self.pitch_velocity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.radius = (self.radius * (1.0 - self.zoom_velocity)).clamp(MIN_RADIUS, MAX_RADIUS);

        self.yaw_velocity *= DAMPING;
        self.pitch_velocity *= DAMPING;
        self.zoom_velocity *= DAMPING;
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let proj = Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), aspect, Z_NEAR, Z_FAR);
        let view = Mat4::look_at_rh(self.eye(), self.target, Vec3::Y);
        proj * view
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

// Shared viewer tuning constants used by both the core logic and the web frontend.

// Viewport / projection
pub const FOV_Y_DEGREES: f32 = 45.0;
pub const INITIAL_EYE: [f32; 3] = [0.0, 0.0, 10.0]; // starting pose before the first auto-fit
pub const INITIAL_ZNEAR: f32 = 0.1;
pub const INITIAL_ZFAR: f32 = 1000.0;

// Camera framing
pub const DEFAULT_FIT_MARGIN: f32 = 1.5; // multiplicative slack over the minimum fitting distance
pub const NEAR_PLANE_DIVISOR: f32 = 100.0; // znear = distance / this
pub const FAR_PLANE_MULTIPLIER: f32 = 100.0; // zfar = distance * this
pub const MAX_ORBIT_DISTANCE_FACTOR: f32 = 10.0; // orbit dolly-out limit relative to fit distance

// Focus transitions
pub const FOCUS_DURATION_MS: u64 = 1000;

// Orbit controls
pub const ORBIT_DAMPING_FACTOR: f32 = 0.05;
pub const ORBIT_ROTATE_SPEED: f32 = 0.005; // radians per dragged pixel
pub const ORBIT_PITCH_LIMIT: f32 = 1.5; // keeps the camera off the poles
pub const ORBIT_DOLLY_STEP: f32 = 0.95; // multiplicative radius change per wheel notch

// Screen panels (CSS pixel dimensions of the overlaid DOM content)
pub const MONITOR_PIXEL_SIZE: [f32; 2] = [1280.0, 720.0];
pub const TABLET_PIXEL_SIZE: [f32; 2] = [768.0, 1024.0];

// Hand-tuned inspection offsets, expressed in the panel's local frame and
// rotated by the panel orientation at focus time.
pub const MONITOR_FOCUS_OFFSET: [f32; 3] = [0.0, 0.0, 0.6];
pub const TABLET_FOCUS_OFFSET: [f32; 3] = [0.0, 0.0, 0.5];

// Theme backgrounds (sRGB, 0x202025 and 0xf0f0f0)
pub const BACKGROUND_DARK: [f32; 3] = [0.1255, 0.1255, 0.1451];
pub const BACKGROUND_LIGHT: [f32; 3] = [0.9412, 0.9412, 0.9412];

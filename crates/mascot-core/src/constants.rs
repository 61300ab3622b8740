// Shared motion tuning constants used by the engine and the web frontend.

// Frame pacing
pub const REFERENCE_HZ: f32 = 60.0; // smoothing coefficients are expressed per tick at this rate

// Body smoothing
pub const BODY_SMOOTHING: f32 = 0.05; // fraction of remaining distance covered per reference tick
pub const POINTER_TILT_GAIN: f32 = 0.2; // body pitch/roll per unit of normalized pointer

// Gimbal tracking
pub const GIMBAL_SMOOTHING: f32 = 0.2; // faster than the body on purpose
pub const GIMBAL_GAIN: f32 = 0.8; // gimbal pitch/yaw per unit of normalized pointer

// Rotors
pub const ROTOR_COUNT: usize = 4;
pub const ROTOR_SPIN_PER_TICK: f32 = 0.3; // radians per reference tick
pub const ROTOR_HIGHLIGHTS_BOOST: f32 = 1.5;

// Procedural idle bob
pub const IDLE_BOB_RATE: f32 = 1.2; // radians per second
pub const IDLE_BOB_AMPLITUDE: f32 = 0.1;

// Skeletal clips
pub const CLIP_CROSSFADE_SEC: f32 = 0.5;

// Entrance
pub const ENTRANCE_DELAY_SEC: f32 = 0.1; // hold at the entrance pose before flying home
pub const DRONE_ENTRANCE_POSITION: [f32; 3] = [0.0, 10.0, 0.0]; // drops in from above
pub const ROBOT_ENTRANCE_POSITION: [f32; 3] = [10.0, 0.0, 0.0]; // walks in from the side
pub const ENTRANCE_ROTATION: [f32; 3] = [0.0, -0.2, 0.0];
pub const ENTRANCE_SCALE: f32 = 1.2;

// Skeletal model framing
pub const ROBOT_Y_OFFSET: f32 = -1.0; // lowers the model so it stands on the fold
pub const ROBOT_SCALE_FACTOR: f32 = 0.42; // glTF model is authored large

// Scene tuning constants shared by the web and native frontends.

// Star field
pub const STAR_COUNT: usize = 30;
pub const STAR_SPREAD_RADIUS: f32 = 20.0; // respawn boundary around the origin
pub const STAR_SPEED: f32 = 0.01; // world units per frame
pub const STAR_SIZE: f32 = 0.04; // billboard diameter
pub const STAR_COLOR: [f32; 3] = [1.0, 0.816, 1.0]; // 0xffd0ff

// Light path
pub const PATH_POINTS: usize = 1000;
pub const PATH_CONTROL_POINTS: [[f32; 3]; 11] = [
    [-7.0, 6.1, 0.0],
    [0.0, 5.6, 1.0],
    [7.0, 5.1, 0.0],
    [0.0, 4.45, -1.0],
    [-7.0, 3.8, 0.0],
    [0.0, 3.3, 1.0],
    [7.0, 2.8, 0.0],
    [0.0, 2.15, -1.0],
    [-7.0, 1.5, 0.0],
    [0.0, 1.0, 1.0],
    [7.0, 0.5, 0.0],
];

// Traveling light
pub const FADE_DURATION: f32 = 0.05; // fraction of the path spent ramping at each end
pub const PATH_SEGMENTS: usize = 5; // odd segments are traversed faster
pub const SEGMENT_SKIP: usize = 3; // extra indices skipped per tick in odd segments
pub const LIGHT_COLOR: [f32; 3] = [0.565, 0.0, 1.0]; // 0x9000ff
pub const LIGHT_RANGE: f32 = 5.0; // distance cutoff
pub const LIGHT_START: [f32; 3] = [-4.0, 5.5, 0.0];
pub const GLOW_SIZE: f32 = 0.2; // glow sprite billboard diameter

// Camera
pub const WIDE_ASPECT_THRESHOLD: f32 = 0.7;
pub const CAMERA_WIDE_EYE: [f32; 3] = [-1.0, 4.0, 12.0];
pub const CAMERA_NARROW_EYE: [f32; 3] = [0.0, 4.0, 28.0];
pub const CAMERA_TARGET: [f32; 3] = [0.0, 3.0, 0.0];
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Decorative text
pub const TEXT_SIZE: f32 = 2.0;
pub const TEXT_HEIGHT: f32 = 0.2; // extrusion depth
pub const TEXT_CURVE_SEGMENTS: usize = 12;
pub const TEXT_LINES: [(&str, [f32; 3]); 3] = [
    ("Маша,", [-4.5, 4.6, 0.0]),
    ("я скучаю", [-6.0, 2.3, 0.0]),
    ("по тебе", [-5.0, 0.0, 0.0]),
];

// Frame statistics
pub const FRAME_STATS_INTERVAL_SEC: f64 = 5.0;

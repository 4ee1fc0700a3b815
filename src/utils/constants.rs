pub const DEFAULT_TICK_HZ: f64 = 60.0; // Fixed simulation ticks per second

pub const MIN_TICK_HZ: f64 = 1.0;
pub const MAX_TICK_HZ: f64 = 1000.0;

// Scene colours (sRGB)
pub const SKY_COLOR: [u8; 3] = [0x87, 0xCE, 0xEB];
pub const GRASS_COLOR: [u8; 3] = [0x22, 0x8B, 0x22];
pub const RUNWAY_COLOR: [u8; 3] = [0x44, 0x44, 0x44];
pub const BUSH_COLOR: [u8; 3] = [0x0F, 0x5F, 0x0F];
pub const BUILDING_COLOR: [u8; 3] = [0x8B, 0x45, 0x13];

pub const GROUND_SIZE: f32 = 1000.0;
pub const RUNWAY_WIDTH: f32 = 12.0;
pub const RUNWAY_LENGTH: f32 = 500.0;
pub const BUSH_RADIUS: f32 = 2.0;
pub const BUSH_FLATTEN: f32 = 0.8;
pub const BUILDING_SIZE: [f32; 3] = [10.0, 8.0, 15.0];

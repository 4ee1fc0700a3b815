mod control;
mod driver;
mod input;
mod recycler;

pub use control::tick;
pub use driver::{
    driver_running, frame_driver_system, log_config_source_system, present_frame_system,
    start_driver_system,
};
pub use input::keyboard_sampler_system;
pub use recycler::advance;

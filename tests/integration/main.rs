#[path = "../common/mod.rs"]
mod common;

mod driver_tests;
mod flight_tests;
mod keyboard_tests;

#[macro_use]
extern crate log;

mod vitalog;
pub use vitalog::Vitalog;

extern crate nyx_frames as nyx;

mod julian;
mod sidereal;

mod pointer;
mod wheel;

pub use pointer::wire_orbit_drag;
pub use wheel::wire_wheel_pan;

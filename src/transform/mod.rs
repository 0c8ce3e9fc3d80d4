//! Page transform math: the cube mapping and its projection helpers.

pub mod cube;
pub mod linear;
pub mod non_linear;
pub mod projection;

pub mod key_rotation;
pub mod peertube;
pub mod youtube;

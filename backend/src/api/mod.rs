pub mod likes;
pub mod peertube;
pub mod youtube;

pub use likes::*;
pub use peertube::*;
pub use youtube::*;

#[cfg(test)]
mod tests;

pub mod location;

pub use location::Line;

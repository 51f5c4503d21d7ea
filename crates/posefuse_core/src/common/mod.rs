pub mod sequence;
pub mod skeleton;
pub mod types;

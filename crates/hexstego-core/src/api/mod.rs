pub mod hide;
pub mod retrieve;

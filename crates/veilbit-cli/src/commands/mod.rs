pub mod analyse;
pub mod extract;
pub mod hide;

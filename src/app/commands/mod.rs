pub mod export;
pub mod ideas;
pub mod outline;

pub mod assignment;
pub mod config;
pub mod delivery;
pub mod exchange;
pub mod export;
pub mod roster;

// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export database components

pub mod hotel_repository;
pub mod place_repository;
pub mod restaurant_repository;
pub mod trip_repository;

pub use hotel_repository::*;
pub use place_repository::*;
pub use restaurant_repository::*;
pub use trip_repository::*;

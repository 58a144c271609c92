// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod ai;
pub mod distance;
pub mod envelope;
pub mod hotel;
pub mod place;
pub mod restaurant;
pub mod transport;
pub mod trip;
pub mod weather;

pub use ai::*;
pub use distance::*;
pub use envelope::*;
pub use hotel::*;
pub use place::*;
pub use restaurant::*;
pub use transport::*;
pub use trip::*;
pub use weather::*;

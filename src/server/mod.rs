pub mod app;
pub mod error;
pub mod rng;
mod routes;

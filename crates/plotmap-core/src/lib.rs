pub mod calibrate;
pub mod error;
pub mod geometry;
pub mod io;
pub mod plot;
pub mod render;
pub mod store;
pub mod viewport;

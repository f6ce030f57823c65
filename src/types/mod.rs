pub mod sample;
pub mod series;
pub mod window;

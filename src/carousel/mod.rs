//! Wrap-around slider state shared by the services panel.

pub mod state;

pub use state::{Carousel, CarouselConfig, CarouselWheel};

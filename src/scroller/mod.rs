//! Full-viewport section navigation.
//!
//! `engine` is the DOM-free state machine, `component` wires it to wheel,
//! touch, keyboard, animation frames and the visual viewport, and `handle`
//! is the one-method command channel a parent uses to drive it.

pub mod component;
pub mod easing;
pub mod engine;
pub mod handle;

pub use component::SectionScroller;
pub use easing::Easing;
pub use engine::ScrollerConfig;
pub use handle::ScrollerHandle;

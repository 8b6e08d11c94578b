//! Page sections, in scroll order.

pub mod contact;
pub mod footer;
pub mod hero;
pub mod process;
pub mod services;
pub mod testimonials;

pub use contact::ContactSection;
pub use footer::Footer;
pub use hero::HeroSection;
pub use services::ServicesSection;
pub use testimonials::TestimonialSection;

pub const HERO: usize = 0;
pub const SERVICES: usize = 1;
pub const TESTIMONIALS: usize = 2;
pub const CONTACT: usize = 3;

//! Route pages and the landing sections they are built from.

pub mod about;
pub mod blog;
pub mod contact;
pub mod hero;
pub mod landing;
pub mod not_found;
pub mod portfolio;
pub mod pricing;
pub mod pricing_page;
pub mod services;
pub mod services_page;
pub mod team;
pub mod tech_stack;
pub mod testimonials;

pub use about::AboutPage;
pub use blog::BlogPage;
pub use landing::Landing;
pub use not_found::NotFound;
pub use pricing_page::PricingPage;
pub use services_page::ServicesPage;

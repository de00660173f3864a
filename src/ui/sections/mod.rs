//! Landing page sections, top to bottom
//!
//! - Navigation bar (scroll-aware, collapsible on mobile)
//! - Hero banner
//! - Feature list
//! - Product catalog
//! - Contact panel
//! - Footer
//!
//! plus the shared animation styles and the reveal-on-scroll script.

mod contact;
mod features;
mod footer;
mod hero;
mod navbar;
mod products;
mod styles;

pub use contact::ContactPanel;
pub use features::FeatureList;
pub use footer::Footer;
pub use hero::HeroBanner;
pub use navbar::NavigationBar;
pub use products::ProductCatalog;
pub use styles::{LandingStyles, RevealOnScroll};

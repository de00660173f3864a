//! Page content, business details and the navigation state model

pub mod business;
#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod nav;
pub mod seo;

pub use business::{BUSINESS_INFO, BusinessInfo};
pub use content::*;
pub use nav::{NavAppearance, NavBarState};

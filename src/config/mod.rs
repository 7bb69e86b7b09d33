//! Configuration module

mod site;

pub use site::CoverImageConfig;
pub use site::ListingConfig;
pub use site::ServerConfig;
pub use site::SiteConfig;
pub use site::DEFAULT_COVER_IMAGE;

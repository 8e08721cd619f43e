pub mod anchor;
pub mod config;
pub mod constants;
pub mod error;
pub mod form;
pub mod modal;
pub mod nav;
pub mod particles;
pub mod reveal;
pub mod tabs;
pub mod video;

pub use config::SiteConfig;
pub use constants::*;
pub use error::SetupError;

// Shaders bundled as string constants
pub static PARTICLES_WGSL: &str = include_str!("../../shaders/particles.wgsl");

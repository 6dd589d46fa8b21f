//! Application layer - Use cases and orchestration

pub mod init;
pub mod render;

pub use init::InitService;
pub use render::PageRenderer;

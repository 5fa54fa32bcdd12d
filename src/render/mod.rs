pub mod card;
pub mod surface;

pub use card::{build_card, link_icon, RenderedCard, RenderedLink, FALLBACK_LINK_ICON};
pub use surface::{DisplaySurface, MemorySurface};

// Landing page sections
// Developed with 💀 by The CodeX Team (c)2025

mod cta;
mod features;
mod footer;
mod gallery;
mod hero;
mod icons;
mod nav;
mod scroll_to_top;
mod stats;

pub use cta::FinalCta;
pub use features::Features;
pub use footer::Footer;
pub use gallery::Gallery;
pub use hero::Hero;
pub use icons::LucideIcon;
pub use nav::Nav;
pub use scroll_to_top::ScrollToTop;
pub use stats::Stats;

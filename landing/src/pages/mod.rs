// Landing page routes
// Developed with 💀 by The CodeX Team (c)2025

mod home;
mod legal;
mod privacy;
mod terms;

pub use home::HomePage;
pub use privacy::PrivacyPage;
pub use terms::TermsPage;

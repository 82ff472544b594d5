//! UI Components

pub mod footer;
pub mod mode_toggle;
pub mod navbar;
pub mod notice;
pub mod token_select;

pub use footer::Footer;
pub use mode_toggle::ModeToggle;
pub use navbar::Navbar;
pub use notice::NoticeBanner;
pub use token_select::{LegControl, Side, TokenSelect};

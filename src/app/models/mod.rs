mod main;
pub use main::*;

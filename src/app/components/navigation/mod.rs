mod navigation;
pub use navigation::*;

mod navigation_model;
pub use navigation_model::*;

mod factory;
pub use factory::*;

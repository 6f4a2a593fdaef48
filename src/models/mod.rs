pub mod advice;
pub mod calendar;
pub mod farm_profile;
pub mod knowledge;

pub use advice::*;
pub use calendar::*;
pub use farm_profile::*;
pub use knowledge::*;

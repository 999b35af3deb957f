mod controls;
mod health;
mod results;
mod tag_cloud;

pub use self::{controls::*, health::*, results::*, tag_cloud::*};

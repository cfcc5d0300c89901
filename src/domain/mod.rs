pub mod history;
pub mod model;
pub mod puzzle;
pub mod reply;

pub mod check;
pub mod deploy;
pub mod list;
pub mod project;

pub mod chrome;
pub mod form;
pub mod status_bar;
pub mod summary;

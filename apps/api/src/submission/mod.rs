pub mod flow;
pub mod form;
pub mod handlers;

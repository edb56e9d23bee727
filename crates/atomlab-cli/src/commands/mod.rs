pub mod catalog;
pub mod dispatch;
pub mod element;
pub mod session;
pub mod shells;

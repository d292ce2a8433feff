pub mod error_boundary;
pub mod notification;

pub mod contact;
pub mod project;
pub mod quote;
pub mod service;

//! Usecase layer.

mod check_service;

pub use check_service::CheckService;

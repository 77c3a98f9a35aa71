//! Application pages module
//!
//! This module contains all the page components for the application:
//! - Registration page
//! - Passenger landing page
//! - Driver landing page
//! - Not found page

mod main_driver;
mod main_passenger;
mod not_found;
mod register;

pub use main_driver::MainDriverPage;
pub use main_passenger::MainPassengerPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;

pub mod tax_controller;

pub use tax_controller::{compute_tax, configure_tax_routes, list_brackets};

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{TaxBracket, TaxBracketTable, TaxComputation, TaxComputationRequest};
pub use services::{BracketTaxProvider, RemoteTaxProvider, TaxCalculator, TaxProvider};

pub mod remote_tax_provider;
pub mod tax_calculator;
pub mod tax_provider;

pub use remote_tax_provider::RemoteTaxProvider;
pub use tax_calculator::TaxCalculator;
pub use tax_provider::{BracketTaxProvider, TaxProvider};

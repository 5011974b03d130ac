pub mod tax_bracket;
pub mod tax_computation;

pub use tax_bracket::{TaxBracket, TaxBracketTable};
pub use tax_computation::{TaxComputation, TaxComputationRequest};

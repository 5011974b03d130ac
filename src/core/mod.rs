pub mod error;
pub mod money;

pub use error::{AppError, Result};
pub use money::{format_peso, max_amount, round_centavos};

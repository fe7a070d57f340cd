pub mod dictionary;
pub mod error;
pub mod expand;
pub mod grouping;
pub mod index;
pub mod language;
pub mod loader;
pub mod normalize;
pub mod preprocess;
pub mod run;
pub mod validate;

pub use dictionary::{Dictionary, load_dictionary};
pub use error::{LadinoError, Result};
pub use run::RunContext;

#[cfg(test)]
mod tests;

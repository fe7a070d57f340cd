pub mod conjugator;

pub use conjugator::{LadinoConjugator, VerbClass};

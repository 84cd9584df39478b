//! Command implementations

pub mod hint;
pub mod interactive;
pub mod openers;
pub mod simulate;

pub use hint::parse_history;
pub use interactive::run_interactive;
pub use openers::run_openers;
pub use simulate::simulate_words;

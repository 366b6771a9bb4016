pub mod state;
pub mod validate;

pub use state::{Field, FormState};

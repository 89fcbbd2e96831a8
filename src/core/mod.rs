pub mod input;
pub mod normalize;
pub mod session;
pub mod store;
pub mod table;

pub use crate::domain::model::{Patient, Registration, Statistics};
pub use crate::domain::ports::Prompter;
pub use crate::utils::error::Result;

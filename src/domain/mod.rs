pub mod account;
pub mod common;

pub use account::{Account, Movement, MovementKind};
pub use common::{Displayable, Identifiable, NamedEntity};

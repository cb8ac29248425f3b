#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod id;
pub mod purchase;
pub mod verify;

pub use id::{EmptyProductId, ProductId};
pub use purchase::Purchase;
pub use verify::VerificationResponse;

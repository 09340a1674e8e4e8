//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the
//! application.

pub mod discount;
pub mod letter;
pub mod user;

pub use discount::{DiscountRepository, RedeemInput, RedeemOutcome};
pub use letter::{CreateLetterInput, LetterRepository};
pub use user::UserRepository;

pub mod cards;
pub mod users;
pub mod verification_tokens;

pub mod card;
pub mod user;
pub mod verification_token;

pub use card::BusinessCard;
pub use user::User;
pub use verification_token::VerificationToken;

pub mod matchmaking;
pub mod rank;
pub mod user;

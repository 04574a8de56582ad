pub mod errors;
pub mod matchmaking_service;
pub mod rank_filter;
pub mod scoring;

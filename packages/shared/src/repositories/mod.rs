pub mod errors;
pub mod memory_profile_repository;
pub mod profile_repository;

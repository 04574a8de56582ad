pub mod profile_repository_errors;

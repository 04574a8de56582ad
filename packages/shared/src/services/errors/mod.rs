pub mod matchmaking_service_errors;

/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// League queries and win recording.
pub mod league_service;
/// Game session orchestration shared by the WebSocket bridge and the CLI.
pub mod session_service;
/// WebSocket connection and message handling service.
pub mod websocket_service;

/// Player model persisted in the league snapshot.
pub mod models;
/// League storage backends.
pub mod player_store;
/// Storage error types shared by every backend.
pub mod storage;

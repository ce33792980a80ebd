pub mod filesystem;
pub mod in_memory;

use futures::future::BoxFuture;

use crate::dao::models::League;

pub use self::{filesystem::FileSystemPlayerStore, in_memory::InMemoryPlayerStore};

/// Win-count ledger shared by the HTTP layer and running game sessions.
pub trait PlayerStore: Send + Sync {
    /// Current win count for `name`, or `0` when the player is unknown.
    fn score<'a>(&'a self, name: &'a str) -> BoxFuture<'a, u32>;
    /// Add one win for `name`, creating the player on its first win.
    fn record_win<'a>(&'a self, name: &'a str) -> BoxFuture<'a, ()>;
    /// Every player, sorted by wins in descending order.
    fn league(&self) -> BoxFuture<'_, League>;
    /// Number of players in the league, without sorting it.
    fn player_count(&self) -> BoxFuture<'_, usize>;
}

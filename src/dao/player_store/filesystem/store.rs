use std::{
    fs::{File, OpenOptions},
    io::{self, Read, Seek, SeekFrom, Write},
    path::Path,
};

use futures::future::BoxFuture;
use tokio::sync::RwLock;
use tracing::{error, info};

use super::tape::{Tape, Truncate};
use crate::dao::{
    models::{League, Player, decode_league, find_player_mut, sort_by_wins},
    player_store::PlayerStore,
    storage::{StorageError, StorageResult},
};

/// League persisted as a JSON array in a single seekable resource.
///
/// One lock guards both the in-memory league and the resource, so every
/// snapshot write runs alone.
pub struct FileSystemPlayerStore<R = File> {
    ledger: RwLock<Ledger<R>>,
}

struct Ledger<R> {
    league: League,
    tape: Tape<R>,
}

impl FileSystemPlayerStore<File> {
    /// Open (or create) the database file at `path` and load its league.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .map_err(|source| StorageError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        let store = Self::new(file)?;
        info!(path = %path.display(), "loaded player store from file");
        Ok(store)
    }
}

impl<R> FileSystemPlayerStore<R>
where
    R: Read + Write + Seek + Truncate,
{
    /// Build a store over an already opened resource, seeding it with `[]` when empty.
    pub fn new(mut resource: R) -> StorageResult<Self> {
        initialize(&mut resource).map_err(|source| StorageError::Initialize { source })?;
        let league = decode_league(&mut resource)?;

        Ok(Self {
            ledger: RwLock::new(Ledger {
                league,
                tape: Tape::new(resource),
            }),
        })
    }
}

impl<R> Ledger<R>
where
    R: Write + Seek + Truncate,
{
    fn persist(&mut self) -> StorageResult<()> {
        let bytes =
            serde_json::to_vec(&self.league).map_err(|source| StorageError::Encode { source })?;
        self.tape
            .rewrite(&bytes)
            .map_err(|source| StorageError::Write { source })
    }
}

fn initialize<R: Write + Seek>(resource: &mut R) -> io::Result<()> {
    let len = resource.seek(SeekFrom::End(0))?;
    if len == 0 {
        resource.write_all(b"[]")?;
        resource.flush()?;
    }
    resource.seek(SeekFrom::Start(0))?;
    Ok(())
}

impl<R> PlayerStore for FileSystemPlayerStore<R>
where
    R: Read + Write + Seek + Truncate + Send + Sync,
{
    fn score<'a>(&'a self, name: &'a str) -> BoxFuture<'a, u32> {
        Box::pin(async move {
            let ledger = self.ledger.read().await;
            ledger
                .league
                .iter()
                .find(|player| player.name == name)
                .map_or(0, |player| player.wins)
        })
    }

    fn record_win<'a>(&'a self, name: &'a str) -> BoxFuture<'a, ()> {
        Box::pin(async move {
            let mut guard = self.ledger.write().await;
            let ledger = &mut *guard;
            match find_player_mut(&mut ledger.league, name) {
                Some(player) => player.wins += 1,
                None => ledger.league.push(Player::new(name, 1)),
            }

            // Blocking write under the guard; the snapshot is one small JSON array.
            // The in-memory league stays authoritative when the snapshot fails.
            if let Err(err) = ledger.persist() {
                error!(player = %name, error = %err, "couldn't persist the league");
            }
        })
    }

    fn league(&self) -> BoxFuture<'_, League> {
        Box::pin(async move {
            let mut league = self.ledger.read().await.league.clone();
            sort_by_wins(&mut league);
            league
        })
    }

    fn player_count(&self) -> BoxFuture<'_, usize> {
        Box::pin(async move { self.ledger.read().await.league.len() })
    }
}

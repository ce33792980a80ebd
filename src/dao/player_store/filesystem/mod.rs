mod store;
pub mod tape;

pub use self::store::FileSystemPlayerStore;

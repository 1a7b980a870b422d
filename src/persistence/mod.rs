//! Snapshot persistence.
//!
//! ## Key Types
//!
//! - `Storage`: key-value storage seam (`MemoryStorage` in process)
//! - `SnapshotFormat`: JSON or `bincode`
//! - `PersistenceConfig`: storage key and format of the live game

pub mod snapshot;
pub mod storage;

pub use snapshot::{
    decode_snapshot, delete_game, encode_snapshot, game_key, import_legacy_json, load_game, load_key, save_game,
    PersistenceConfig, SnapshotError, SnapshotFormat, CURRENT_GAME_KEY,
};
pub use storage::{MemoryStorage, Storage, StorageError};

//! Инфраструктура: источники случайности и хранилище снапшотов.

pub mod persistence;
pub mod rng;
pub mod rng_seed;

pub use persistence::{InMemorySnapshotStore, SnapshotStore, StoreError, VersionedSnapshot};
pub use rng::{DeterministicRng, SystemRng};
pub use rng_seed::RngSeed;

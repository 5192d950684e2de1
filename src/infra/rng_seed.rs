//! RngSeed — доменно-хэшированный seed для воспроизводимых раздач.
//!
//! Базовый seed расширяется через SHA-256 с доменным префиксом и номером
//! раздачи: new = H(domain || old || hand_index). Так каждая раздача
//! получает независимую, но детерминированно выводимую колоду.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::infra::rng::DeterministicRng;

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Создать seed из u64 (удобно в тестах).
    pub fn from_u64(x: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes }
    }

    /// Вывести seed следующей раздачи из текущего и её номера.
    pub fn derive(&self, hand_index: u64) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(b"HOLDEM_ENGINE_RNG_V1");
        hasher.update(self.bytes);
        hasher.update(hand_index.to_le_bytes());

        let hash = hasher.finalize();
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&hash[..32]);
        Self { bytes }
    }

    /// Построить DeterministicRng из этого seed.
    pub fn to_rng(&self) -> DeterministicRng {
        DeterministicRng::from_seed(self.bytes)
    }
}

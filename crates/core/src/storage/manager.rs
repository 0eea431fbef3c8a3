use crate::errors::CoreError;
use crate::models::book::SubscriptionBook;

/// High-level storage operations: save/load the subscription book to and
/// from JSON bytes or files.
pub struct StorageManager;

impl StorageManager {
    /// Serialize the book to pretty-printed JSON bytes (portable,
    /// platform-independent). Use this for WASM or hosts that handle
    /// file I/O themselves.
    pub fn save_to_bytes(book: &SubscriptionBook) -> Result<Vec<u8>, CoreError> {
        serde_json::to_vec_pretty(book)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize book: {e}")))
    }

    /// Deserialize a book from JSON bytes.
    ///
    /// Records written by earlier app versions load unchanged: missing
    /// optional fields normalize to their defaults here, once, so no
    /// downstream computation needs defaulting logic.
    pub fn load_from_bytes(data: &[u8]) -> Result<SubscriptionBook, CoreError> {
        serde_json::from_slice(data)
            .map_err(|e| CoreError::Deserialization(format!("Failed to deserialize book: {e}")))
    }

    /// Save the book to a JSON file on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(book: &SubscriptionBook, path: &str) -> Result<(), CoreError> {
        let bytes = Self::save_to_bytes(book)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Load the book from a JSON file on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str) -> Result<SubscriptionBook, CoreError> {
        let bytes = std::fs::read(path)?;
        Self::load_from_bytes(&bytes)
    }
}

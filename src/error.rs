// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Error types shared by the registry, collections and the provider.
//!
//! Every error is raised synchronously and handed straight back to the
//! caller. Apart from `Device` and `Config` they all indicate misuse of the
//! API rather than a transient condition.

/// Provider result type
pub type ProviderResult<T> = Result<T, ProviderError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// Collection id is not registered (never created or already destroyed)
    InvalidHandle(u64),
    /// A freshly allocated collection id is already registered
    DuplicateHandle(u64),
    /// Every collection id has been handed out once
    HandlesExhausted,
    /// Add called with a name already in the collection
    DuplicateName(String),
    /// Remove/Set/Get called with a name not in the collection
    NameNotFound(String),
    /// start_sprite_batch called while a batch is open
    BatchAlreadyStarted,
    /// end_sprite_batch called without a matching start
    NoActiveBatch,
    /// The underlying device rejected a call
    Device(String),
    /// Configuration or logging setup failed
    Config(String),
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderError::InvalidHandle(id) => {
                write!(f, "invalid collection id {} passed to provider", id)
            }
            ProviderError::DuplicateHandle(id) => {
                write!(f, "collection id {} already in use", id)
            }
            ProviderError::HandlesExhausted => write!(f, "no collection ids left"),
            ProviderError::DuplicateName(name) => {
                write!(f, "name '{}' already exists in collection", name)
            }
            ProviderError::NameNotFound(name) => {
                write!(f, "name '{}' not found in collection", name)
            }
            ProviderError::BatchAlreadyStarted => write!(f, "sprite batch already started"),
            ProviderError::NoActiveBatch => write!(f, "no active sprite batch"),
            ProviderError::Device(msg) => write!(f, "device error: {}", msg),
            ProviderError::Config(msg) => write!(f, "config error: {}", msg),
        }
    }
}

impl std::error::Error for ProviderError {}

//! Error types for orrery_3d

use thiserror::Error;

/// Errors raised while building or querying the scene
#[derive(Error, Debug)]
pub enum SceneError {
    /// No body with this name exists in the catalog
    #[error("Unknown body: {0}")]
    UnknownBody(String),

    /// A scene node with this name was registered twice
    #[error("Duplicate scene node: {0}")]
    DuplicateNode(String),

    /// A node referenced a parent that is not registered
    #[error("Parent node '{parent}' of '{child}' is not registered")]
    MissingParent { parent: String, child: String },

    /// Configuration value out of its valid range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration text could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration could not be written back out
    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

/// Errors raised while probing texture candidates
#[derive(Error, Debug)]
pub enum TextureError {
    /// The candidate does not exist or could not be read
    #[error("Texture not found: {0}")]
    NotFound(String),

    /// The candidate exists but is not a decodable image
    #[error("Texture decode failed for {path}: {reason}")]
    Decode { path: String, reason: String },

    /// The image decoded but is a 1x1 (or empty) placeholder
    #[error("Texture {path} is a {width}x{height} placeholder")]
    Degenerate { path: String, width: u32, height: u32 },

    /// The source cannot serve this kind of location
    #[error("Unsupported texture location: {0}")]
    Unsupported(String),
}

/// Result type for scene operations
pub type Result<T> = std::result::Result<T, SceneError>;

// tableau-rs: NeoForge Mod Metadata Toolchain
//
// SPDX-FileCopyrightText: 2026 Tableau Contributors
// SPDX-License-Identifier: MIT

//! Error handling module.
//!
//! ```text
//!            TableauError (~24 bytes)
//!                    |
//!     +--------+-----+-----+---------+
//!     |    |   |     |     |     |   |
//!     v    v   v     v     v     v   v
//!   Bail  Cfg Rslv  Insp  Desc  Fs  Io/Other
//!         Box Box   Box   Box   Box Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Config     ParseError, MissingKey, InvalidValue
//!   Resolve    LockfileRead, LockfileParse, MissingConfiguration
//!   Inspect    OpenArchive, ReadEntry, ParseDescriptor
//!   Descriptor CreateDirs, ParseExisting, WriteFailed, PersistFailed
//!   Fs         NotFound, IoError
//!
//! All variants boxed => TableauError fits in 24 bytes.
//! ```
//!
//! Recoverable per-artifact failures ([`InspectError`]) are absorbed where an
//! empty result can safely substitute; everything else bubbles to the command
//! boundary. Fatal variants carry remediation text in their display strings.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`TableauError`].
pub type TableauResult<T> = std::result::Result<T, TableauError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum TableauError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Dependency resolution error.
    #[error("resolve error: {0}")]
    Resolve(#[from] Box<ResolveError>),

    /// Artifact inspection error.
    #[error("inspect error: {0}")]
    Inspect(#[from] Box<InspectError>),

    /// Descriptor generation error.
    #[error("descriptor error: {0}")]
    Descriptor(#[from] Box<DescriptorError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Create a fatal [`TableauError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> TableauError {
    TableauError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for TableauError {
                fn from(err: $error) -> Self {
                    TableauError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    ResolveError => Resolve,
    InspectError => Inspect,
    DescriptorError => Descriptor,
    FsError => Fs,
    std::io::Error => Io,
}

// --- Config Errors ---

/// Configuration-related errors.
///
/// These are user data problems: every display string names the implicated
/// section/key and tells the user what to change.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error(
        "missing required config key '{key}' in section '[{section}]' \
         (set it in tableau.toml)"
    )]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}

// --- Resolve Errors ---

/// Dependency resolution errors.
///
/// An unresolvable configuration indicates a fundamentally broken build, so
/// these are fatal; unlike per-jar [`InspectError`]s, they are never
/// swallowed.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Failed to read the resolution lockfile.
    #[error(
        "failed to read lockfile '{path}': {source} \
         (run your build's resolution step, or pass --lockfile)"
    )]
    LockfileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the resolution lockfile.
    #[error("failed to parse lockfile '{path}': {message}")]
    LockfileParse { path: PathBuf, message: String },

    /// The lockfile lacks a named dependency configuration.
    #[error("lockfile '{path}' has no '{configuration}' configuration")]
    MissingConfiguration {
        path: PathBuf,
        configuration: String,
    },
}

// --- Inspect Errors ---

/// Artifact jar inspection errors.
///
/// Recoverable: one unreadable dependency jar must not fail metadata
/// deduction for all the others. The resolver logs these at warn level and
/// substitutes an empty result.
#[derive(Debug, Error)]
pub enum InspectError {
    /// Failed to open the artifact as a zip archive.
    #[error("failed to open archive '{path}': {source}")]
    OpenArchive {
        path: PathBuf,
        #[source]
        source: Box<zip::result::ZipError>,
    },

    /// Failed to read a descriptor entry from the archive.
    #[error("failed to read '{entry}' from '{path}': {message}")]
    ReadEntry {
        path: PathBuf,
        entry: String,
        message: String,
    },

    /// The embedded descriptor is not valid TOML.
    #[error("malformed descriptor '{entry}' in '{path}': {message}")]
    ParseDescriptor {
        path: PathBuf,
        entry: String,
        message: String,
    },
}

// --- Descriptor Errors ---

/// Descriptor generation errors.
///
/// Fatal: a partial or silently wrong descriptor must never be produced.
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// Failed to create the output file's parent directories.
    #[error("failed to create output directory '{path}': {source}")]
    CreateDirs {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A pre-existing descriptor could not be parsed.
    #[error(
        "existing descriptor '{path}' is not valid TOML: {message} \
         (fix or delete the file; tableau preserves manual edits and \
         cannot merge into a file it cannot parse)"
    )]
    ParseExisting { path: PathBuf, message: String },

    /// Failed to write the descriptor.
    #[error("failed to write descriptor '{path}': {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to atomically move the descriptor into place.
    #[error("failed to persist descriptor '{path}': {message}")]
    PersistFailed { path: PathBuf, message: String },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

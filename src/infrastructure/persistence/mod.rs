//! Persistence implementations

mod manifest_writer;

pub use manifest_writer::{
    MANIFEST_FILE, ManifestError, ManifestPair, RunManifest, RunManifestWriter, sha256_file,
};

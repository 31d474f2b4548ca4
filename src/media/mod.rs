//! Media uploads — moves locally picked images into remote object storage.
//!
//! The pipeline is thin glue: read the file, decode it, hand the bytes to
//! the backend, report the public URL. Everything stateful (auth, retries,
//! consistency) belongs to the backend client behind [`ObjectStorage`].

pub mod backend;
pub mod pipeline;
pub mod source;

pub use backend::{HttpObjectStorage, ObjectStorage};
pub use pipeline::MediaPipeline;
pub use source::{FileSource, LocalFileSource};

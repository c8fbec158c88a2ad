//! tastetrail-storage
//!
//! Document storage. One [`objects::ObjectStore`] in front of either a local
//! directory of JSON files or an S3 bucket.

pub mod client;
pub mod documents;
pub mod error;
pub mod local;
pub mod objects;
pub mod s3;

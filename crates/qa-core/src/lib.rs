pub mod catalog;
pub mod error;
pub mod io;
pub mod options;
pub mod paths;
pub mod render;
pub mod template;

pub use catalog::{ArtifactKind, Descriptor};
pub use error::{QaError, Result};
pub use options::{resolve, Config, Resolved};
pub use render::{create_artifact, render};

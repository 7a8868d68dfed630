pub mod store;

pub use store::{ArchiveStore, load_archive_file};

//! Live reload of settings: file watcher + `watch` channel publication.

mod manager;


pub use manager::ReloadManager;

//! File watcher for live settings reload.

mod config_watcher;


pub use config_watcher::ConfigWatcher;

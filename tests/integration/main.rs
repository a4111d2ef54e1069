//! Integration tests: sync controller wired to real row remotes.

mod helpers;

mod local_remote_test;
mod store_test;
mod sync_test;

//! Local front end for reelhouse: the JSON save-file store and the batch
//! spin simulator behind the CLI.

pub mod sim;
pub mod store;

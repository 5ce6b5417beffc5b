// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit header parsing.

mod message;

pub use message::ParsedCommitTitle;

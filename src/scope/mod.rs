// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Project scope policy.

mod policy;

pub use policy::{check_scope, ScopeOutcome};

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use vergen::EmitBuilder;

fn main() {
    // Builds from a source tarball have no git metadata; the version string
    // then falls back to the crate version.
    if let Err(e) = EmitBuilder::builder()
        .git_sha(true)
        .git_commit_date()
        .emit()
    {
        println!("cargo:warning=prlint: git metadata unavailable: {}", e);
    }
}

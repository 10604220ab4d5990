// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Embedded into `validate-commit version` and the generated hook scripts.
    EmitBuilder::builder()
        .git_sha(true)
        .git_commit_date()
        .git_describe(true, true, None)
        .emit()?;
    Ok(())
}

//! `lpm buildpkg` handler.

use std::path::PathBuf;

use anyhow::Result;
use lpm_core::WheelBuildRequest;

use crate::bootstrap::CliContext;
use crate::commands::BuildpkgArgs;
use crate::error::CliError;

/// Execute the buildpkg command and print the result line.
pub fn execute(ctx: &CliContext, args: BuildpkgArgs) -> Result<()> {
    let package = args.python_pip.clone();
    let interpreter = build(ctx, args)?;
    println!(
        "Built {package} using interpreter: {}",
        interpreter.display()
    );
    Ok(())
}

/// Build the requested wheel, returning the interpreter that ran pip.
pub fn build(ctx: &CliContext, args: BuildpkgArgs) -> Result<PathBuf, CliError> {
    if args.python_pip.is_empty() {
        return Err(CliError::Arguments(
            "buildpkg requires a non-empty --python-pip package".to_string(),
        ));
    }

    let mut request =
        WheelBuildRequest::new(args.python_pip, args.output_dir).with_extra_args(args.pip_args);
    if let Some(python) = args.python_executable {
        request = request.with_python_executable(python);
    }

    Ok(ctx.builder().build_wheel(&request)?)
}

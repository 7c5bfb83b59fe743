use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// A request to build a single wheel with `pip wheel`.
///
/// # Example
///
/// ```
/// use lpm_core::WheelBuildRequest;
///
/// let request = WheelBuildRequest::new("requests==2.32.3", "build/python")
///     .with_extra_args(["--no-binary", ":all:"]);
/// assert_eq!(request.extra_args.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelBuildRequest {
    /// Any requirement specifier `pip wheel` accepts.
    pub package: String,
    /// Directory receiving the built wheel. Created if missing.
    pub destination: PathBuf,
    /// Interpreter override; skips resolution entirely when set.
    pub python_executable: Option<PathBuf>,
    /// Forwarded to `pip wheel` verbatim, after the fixed arguments.
    pub extra_args: Vec<String>,
    /// Replaces the child's environment when set.
    pub env: Option<BTreeMap<String, String>>,
}

impl WheelBuildRequest {
    pub fn new(package: impl Into<String>, destination: impl Into<PathBuf>) -> Self {
        Self {
            package: package.into(),
            destination: destination.into(),
            python_executable: None,
            extra_args: Vec::new(),
            env: None,
        }
    }

    #[must_use]
    pub fn with_python_executable(mut self, path: impl Into<PathBuf>) -> Self {
        self.python_executable = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_extra_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_args.extend(args.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_env(mut self, env: BTreeMap<String, String>) -> Self {
        self.env = Some(env);
        self
    }

    /// Directory the wheel is written to. An empty destination means the
    /// current directory.
    pub fn output_dir(&self) -> &Path {
        if self.destination.as_os_str().is_empty() {
            Path::new(".")
        } else {
            &self.destination
        }
    }
}

/// A fully assembled external command, ready for a [`CommandRunnerPort`].
///
/// [`CommandRunnerPort`]: crate::ports::CommandRunnerPort
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelInvocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    /// `None` inherits the parent environment.
    pub env: Option<BTreeMap<String, String>>,
}

impl WheelInvocation {
    /// Assemble `<interpreter> -m pip wheel <package> --no-deps -w <destination> [extra...]`.
    pub fn pip_wheel(interpreter: &Path, request: &WheelBuildRequest) -> Self {
        let mut args: Vec<OsString> = ["-m", "pip", "wheel"]
            .into_iter()
            .map(OsString::from)
            .collect();
        args.push(OsString::from(&request.package));
        args.push(OsString::from("--no-deps"));
        args.push(OsString::from("-w"));
        args.push(request.output_dir().as_os_str().to_os_string());
        args.extend(request.extra_args.iter().map(OsString::from));

        Self {
            program: interpreter.to_path_buf(),
            args,
            env: request.env.clone(),
        }
    }
}

impl fmt::Display for WheelInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// How a finished child process exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitOutcome {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl ExitOutcome {
    pub const fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub const fn signalled() -> Self {
        Self { code: None }
    }

    pub const fn success(self) -> bool {
        matches!(self.code, Some(0))
    }
}

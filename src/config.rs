//! Translation options
//!
//! Everything a single file translation needs from its caller: the Go
//! package name and command line for the preamble, and the policy for an
//! enum whose first enumerator has no explicit value.

use std::fmt;

use clap::ValueEnum;

/// What an enum's first enumerator gets when it carries no `= value`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FirstEnumerator {
    /// Follow C: the first enumerator is 0.
    #[default]
    Zero,
    /// Make no assumption: emit it diagnostic-marked.
    Flag,
}

/// Operating systems a translation can be generated for.
///
/// Only used to name written output files (`h-<base>_<system>.go`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum System {
    Linux,
    Freebsd,
    Openbsd,
    Darwin,
    Plan9,
}

impl System {
    pub const ALL: [System; 5] = [
        System::Linux,
        System::Freebsd,
        System::Openbsd,
        System::Darwin,
        System::Plan9,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            System::Linux => "linux",
            System::Freebsd => "freebsd",
            System::Openbsd => "openbsd",
            System::Darwin => "darwin",
            System::Plan9 => "plan9",
        }
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for translating one header
#[derive(Debug, Clone)]
pub struct TranslateOptions {
    /// Go package name written in the preamble
    pub package: String,
    /// Invocation recorded in the first preamble comment
    pub command_line: String,
    pub first_enumerator: FirstEnumerator,
}

impl TranslateOptions {
    pub fn new(package: impl Into<String>) -> Self {
        TranslateOptions {
            package: package.into(),
            command_line: "goheader".to_string(),
            first_enumerator: FirstEnumerator::default(),
        }
    }

    pub fn with_command_line(mut self, command_line: impl Into<String>) -> Self {
        self.command_line = command_line.into();
        self
    }

    pub fn with_first_enumerator(mut self, policy: FirstEnumerator) -> Self {
        self.first_enumerator = policy;
        self
    }

    /// Fixed text every translation starts with
    pub fn preamble(&self) -> String {
        format!(
            "// {}\n// MACHINE GENERATED; DO NOT EDIT\n// ===\n\npackage {}\n\n",
            self.command_line, self.package
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preamble() {
        let options = TranslateOptions::new("syscall").with_command_line("goheader -s linux -p syscall");
        assert_eq!(
            options.preamble(),
            "// goheader -s linux -p syscall\n// MACHINE GENERATED; DO NOT EDIT\n// ===\n\npackage syscall\n\n"
        );
    }

    #[test]
    fn test_system_names() {
        let names: Vec<&str> = System::ALL.iter().map(System::as_str).collect();
        assert_eq!(names, ["linux", "freebsd", "openbsd", "darwin", "plan9"]);
    }
}

use std::fmt;

/// A fully assembled argument vector: `[executable, ...prefix, ...flags, ...positional]`.
///
/// Every element is one literal argument; nothing is shell-interpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RobotCommand {
    pub args: Vec<String>,
}

impl RobotCommand {
    pub fn new(args: Vec<String>) -> Self {
        Self { args }
    }

    pub fn program(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    pub fn arguments(&self) -> &[String] {
        self.args.get(1..).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn push(&mut self, arg: impl Into<String>) {
        self.args.push(arg.into());
    }

    pub fn extend<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
    }

    /// The line recorded in the request trace: tokens joined by single spaces, unquoted.
    pub fn to_request_line(&self) -> String {
        self.args.join(" ")
    }

    /// Human-oriented rendering; tokens containing spaces are single-quoted.
    pub fn to_shell_command(&self) -> String {
        let mut cmd = String::new();
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                cmd.push(' ');
            }
            if arg.contains(' ') {
                cmd.push_str(&format!("'{arg}'"));
            } else {
                cmd.push_str(arg);
            }
        }
        cmd
    }
}

impl fmt::Display for RobotCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_shell_command())
    }
}

impl From<Vec<String>> for RobotCommand {
    fn from(args: Vec<String>) -> Self {
        Self::new(args)
    }
}

impl AsRef<[String]> for RobotCommand {
    fn as_ref(&self) -> &[String] {
        &self.args
    }
}

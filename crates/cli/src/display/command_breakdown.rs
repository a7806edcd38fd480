use robotrun_core::{RobotCommand, command::Environment};

/// Flags that never take a value.
const SWITCHES: [&str; 3] = ["--timestampoutputs", "--nostatusrc", "--version"];

pub fn print_command_breakdown(command: &RobotCommand) {
    println!("   🔧 Command breakdown:");
    for line in breakdown_lines(command) {
        println!("      • {line}");
    }
}

pub fn breakdown_lines(command: &RobotCommand) -> Vec<String> {
    let mut lines = Vec::new();

    let launcher = [Environment::Python, Environment::Java, Environment::Ubuntu]
        .into_iter()
        .map(|env| env.prefix())
        .find(|prefix| {
            command.args.len() >= prefix.len()
                && command.args.iter().zip(prefix.iter()).all(|(a, p)| a == p)
        });
    let skip = match launcher {
        Some(prefix) => {
            lines.push(format!("launcher: {}", prefix.join(" ")));
            prefix.len()
        }
        None => {
            if let Some(program) = command.program() {
                lines.push(format!("launcher: {program}"));
            }
            1
        }
    };

    let mut args = command.args.iter().skip(skip);
    while let Some(arg) = args.next() {
        if let Some(flag) = arg.strip_prefix("--") {
            if SWITCHES.contains(&arg.as_str()) {
                lines.push(format!("{flag}: on"));
            } else if let Some(value) = args.next() {
                lines.push(format!("{flag}: {value}"));
            } else {
                lines.push(format!("{flag}: <missing value>"));
            }
        } else {
            lines.push(format!("source: {arg}"));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(args: &[&str]) -> RobotCommand {
        RobotCommand::new(args.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_breakdown_groups_flag_values() {
        let lines = breakdown_lines(&command(&[
            "python",
            "-m",
            "robot",
            "--output",
            "NONE",
            "--nostatusrc",
            "--variable",
            "a:1",
            "suites/",
        ]));

        assert_eq!(
            lines,
            vec![
                "launcher: python -m robot",
                "output: NONE",
                "nostatusrc: on",
                "variable: a:1",
                "source: suites/",
            ]
        );
    }

    #[test]
    fn test_breakdown_native_launcher() {
        let lines = breakdown_lines(&command(&["robot", "--version"]));
        assert_eq!(lines, vec!["launcher: robot", "version: on"]);
    }
}

//! Command-Line Argument Parsing
//!
//! Five optional positional values: Mass Road_Type Condition velocity Steepness.
//! Only the exact help and version flags are recognised so negative numbers
//! stay positional.

use param_validator::{RawArgs, RoadCondition, RoadType};

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub command: Command,
}

/// What the invocation asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run one simulation
    Simulate {
        raw: RawArgs,
        /// Positional values past the fifth, ignored
        extra: Vec<String>,
    },
    Help,
    Version,
}

impl Args {
    /// Parse an argument list whose first item is the program name
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        if values.iter().any(|v| v == "-h" || v == "--help") {
            return Self {
                command: Command::Help,
            };
        }
        if values.iter().any(|v| v == "-V" || v == "--version") {
            return Self {
                command: Command::Version,
            };
        }

        let (raw, extra) = RawArgs::from_positional(values);
        Self {
            command: Command::Simulate { raw, extra },
        }
    }

    /// Parse the process arguments
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }
}

/// Usage text for `--help`
pub fn usage() -> String {
    let roads: Vec<&str> = RoadType::ALL.iter().map(|r| r.as_str()).collect();
    let conditions: Vec<&str> = RoadCondition::ALL.iter().map(|c| c.as_str()).collect();
    format!(
        "Simulate and plot velocity and distance when braking\n\n\
         Usage: braking-sim [Mass] [Road_Type] [Condition] [velocity] [Steepness]\n\n\
         Arguments:\n  \
           Mass       Vehicle mass in kg (default 2000)\n  \
           Road_Type  {} (default concrete)\n  \
           Condition  {} (default dry)\n  \
           velocity   Initial velocity in m/s (default 27.5)\n  \
           Steepness  Road inclination in degrees (default 0)\n\n\
         Options:\n  \
           -h, --help     Print help\n  \
           -V, --version  Print version\n",
        roads.join(", "),
        conditions.join(", ")
    )
}

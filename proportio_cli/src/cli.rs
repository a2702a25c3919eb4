use clap::{Parser, Subcommand};

/// Proportio proportion and percentage calculator.
#[derive(Parser)]
#[command(
    name = "proportio",
    version,
    about = "Proportion and percentage calculator with an LLM-friendly tool surface"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Calculate what percentage a part is of a whole.
    Percent(PercentArgs),
    /// Solve the missing term of the proportion a/b = c/d.
    Proportion(ProportionArgs),
    /// Scale a value by a ratio.
    Scale(ScaleArgs),
    /// Find the constant k in the direct variation y = kx.
    DirectK(DirectKArgs),
    /// Resize a width/height pair by a uniform scale factor.
    Resize(ResizeArgs),
    /// Prompt for an operation's fields interactively (empty = solve for it).
    Form(FormArgs),
    /// Print the auto-generated callable-tool schemas as JSON.
    Tools,
    /// Invoke an operation by name with a JSON argument object.
    Call(CallArgs),
}

/// Arguments for the `percent` subcommand.
#[derive(clap::Args)]
pub struct PercentArgs {
    /// The part value.
    #[arg(long)]
    pub part: f64,

    /// The whole value (cannot be zero).
    #[arg(long)]
    pub whole: f64,
}

/// Arguments for the `proportion` subcommand. Omit exactly one flag;
/// the omitted slot is the one solved for.
#[derive(clap::Args)]
pub struct ProportionArgs {
    /// First numerator.
    #[arg(long)]
    pub a: Option<f64>,

    /// First denominator.
    #[arg(long)]
    pub b: Option<f64>,

    /// Second numerator.
    #[arg(long)]
    pub c: Option<f64>,

    /// Second denominator.
    #[arg(long)]
    pub d: Option<f64>,
}

/// Arguments for the `scale` subcommand.
#[derive(clap::Args)]
pub struct ScaleArgs {
    /// The value to scale.
    #[arg(long)]
    pub value: f64,

    /// The scaling ratio.
    #[arg(long)]
    pub ratio: f64,
}

/// Arguments for the `direct-k` subcommand.
#[derive(clap::Args)]
pub struct DirectKArgs {
    /// The x value (cannot be zero).
    #[arg(short, long)]
    pub x: f64,

    /// The y value.
    #[arg(short, long)]
    pub y: f64,
}

/// Arguments for the `resize` subcommand.
#[derive(clap::Args)]
pub struct ResizeArgs {
    /// Original width (>= 0).
    #[arg(long)]
    pub width: f64,

    /// Original height (>= 0).
    #[arg(long)]
    pub height: f64,

    /// Scale factor (> 0).
    #[arg(long)]
    pub scale: f64,
}

/// Arguments for the `form` subcommand.
#[derive(clap::Args)]
pub struct FormArgs {
    /// Operation name (e.g., percent_of, solve_proportion).
    pub operation: String,
}

/// Arguments for the `call` subcommand.
#[derive(clap::Args)]
pub struct CallArgs {
    /// Operation name (e.g., percent_of).
    pub name: String,

    /// Argument object as JSON, e.g. '{"part": 25, "whole": 100}'.
    pub args: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_percent() {
        let cli = Cli::try_parse_from(["proportio", "percent", "--part", "25", "--whole", "100"])
            .unwrap();
        match cli.command {
            Command::Percent(args) => {
                assert_eq!(args.part, 25.0);
                assert_eq!(args.whole, 100.0);
            }
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn test_omitted_proportion_flag_is_missing_marker() {
        let cli = Cli::try_parse_from([
            "proportio",
            "proportion",
            "--a",
            "3",
            "--b",
            "4",
            "--c",
            "6",
        ])
        .unwrap();
        match cli.command {
            Command::Proportion(args) => {
                assert_eq!(args.a, Some(3.0));
                assert_eq!(args.d, None);
            }
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn test_verbose_count() {
        let cli = Cli::try_parse_from(["proportio", "-vv", "tools"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}

//! Subcommand implementations. All calculation goes through proportio_core;
//! this module only converts arguments, formats results, and surfaces
//! failures.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use proportio_core::operations::{direct_k, percent_of, resize_dimensions, scale_by_ratio};
use proportio_core::operations::proportion::{calculate as solve, ProportionInput};
use proportio_core::registry::{dispatch, tool_schemas, Operation};
use proportio_core::CalcError;
use serde_json::Value;

use crate::cli::{
    CallArgs, Command, DirectKArgs, FormArgs, PercentArgs, ProportionArgs, ResizeArgs, ScaleArgs,
};

pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Percent(args) => percent(args),
        Command::Proportion(args) => proportion(args),
        Command::Scale(args) => scale(args),
        Command::DirectK(args) => direct_k_cmd(args),
        Command::Resize(args) => resize(args),
        Command::Form(args) => form(args),
        Command::Tools => tools(),
        Command::Call(args) => call(args),
    }
}

fn percent(args: PercentArgs) -> Result<()> {
    let percentage = percent_of(args.part, args.whole)?;
    println!("{} is {:.2}% of {}", args.part, percentage, args.whole);
    Ok(())
}

fn proportion(args: ProportionArgs) -> Result<()> {
    let input = ProportionInput {
        a: args.a,
        b: args.b,
        c: args.c,
        d: args.d,
    };
    let result = solve(&input)?;
    println!("Missing value: {:.4}", result.missing);
    Ok(())
}

fn scale(args: ScaleArgs) -> Result<()> {
    let result = scale_by_ratio(args.value, args.ratio)?;
    println!("{} x {} = {:.4}", args.value, args.ratio, result);
    Ok(())
}

fn direct_k_cmd(args: DirectKArgs) -> Result<()> {
    let k = direct_k(args.x, args.y)?;
    println!("k = {k:.4} (where y = kx)");
    Ok(())
}

fn resize(args: ResizeArgs) -> Result<()> {
    let (width, height) = resize_dimensions(args.width, args.height, args.scale)?;
    println!("New dimensions: {width:.2} x {height:.2}");
    Ok(())
}

/// Interactive form mode: prompt for each declared field of the chosen
/// operation. An empty line on an optional field is the missing marker.
fn form(args: FormArgs) -> Result<()> {
    let op = Operation::from_name(&args.operation)
        .ok_or_else(|| CalcError::unknown_operation(&args.operation))?;
    let meta = op.metadata();
    println!("{} - {}", meta.name, meta.description);

    let mut fields = serde_json::Map::new();
    for param in &meta.params {
        let hint = if param.required {
            ""
        } else {
            ", leave empty to solve for it"
        };
        print!("{} ({}{}): ", param.name, param.description, hint);
        io::stdout().flush().context("flush stdout")?;

        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .context("read stdin")?;
        let entry = line.trim();

        if entry.is_empty() {
            if param.required {
                return Err(
                    CalcError::invalid_arguments(format!("'{}' is required", param.name)).into(),
                );
            }
            // missing marker: leave the slot out of the payload
            continue;
        }
        let value: f64 = entry.parse().map_err(|_| {
            CalcError::invalid_arguments(format!("'{}' is not a number: {entry}", param.name))
        })?;
        fields.insert(param.name.to_string(), value.into());
    }

    let result = dispatch(op.name(), &Value::Object(fields))?;
    println!();
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn tools() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&tool_schemas())?);
    Ok(())
}

fn call(args: CallArgs) -> Result<()> {
    let payload: Value = serde_json::from_str(&args.args)
        .map_err(|e| CalcError::invalid_arguments(format!("argument JSON: {e}")))?;
    let result = dispatch(&args.name, &payload)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

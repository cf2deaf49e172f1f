//! The `run` command - execute a script of array operations.

use std::io::Write;
use std::str::FromStr;

use growlist::GrowableArray;

use crate::cli::RunArgs;
use crate::common::state::{write_growth, write_state};
use crate::common::{CliError, CliResult};

/// A single scripted operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    Append(i64),
    Get(usize),
    Set { index: usize, value: i64 },
    Top,
    Pop,
    Len,
    Capacity,
    Factor(f64),
}

impl FromStr for Op {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| CliError::InvalidOp {
            op: s.to_string(),
            reason,
        };

        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };

        match (name, arg) {
            ("top", None) => Ok(Op::Top),
            ("pop", None) => Ok(Op::Pop),
            ("len", None) => Ok(Op::Len),
            ("capacity", None) => Ok(Op::Capacity),
            ("append", Some(arg)) => arg
                .parse()
                .map(Op::Append)
                .map_err(|_| invalid("expected an integer value")),
            ("get", Some(arg)) => arg
                .parse()
                .map(Op::Get)
                .map_err(|_| invalid("expected a non-negative index")),
            ("set", Some(arg)) => {
                let (index, value) = arg
                    .split_once('=')
                    .ok_or_else(|| invalid("expected <index>=<value>"))?;
                let index = index
                    .parse()
                    .map_err(|_| invalid("expected a non-negative index"))?;
                let value = value
                    .parse()
                    .map_err(|_| invalid("expected an integer value"))?;
                Ok(Op::Set { index, value })
            }
            ("factor", Some(arg)) => arg
                .parse()
                .map(Op::Factor)
                .map_err(|_| invalid("expected a number")),
            ("top" | "pop" | "len" | "capacity", Some(_)) => Err(invalid("takes no argument")),
            ("append" | "get" | "set" | "factor", None) => Err(invalid("missing argument")),
            _ => Err(invalid("unknown operation")),
        }
    }
}

/// Run the run command.
///
/// All operations are parsed before any of them executes, so a typo late in
/// the script produces no partial output.
pub fn run(args: RunArgs, out: &mut impl Write) -> CliResult<()> {
    let ops = args
        .ops
        .iter()
        .map(|op| op.parse())
        .collect::<Result<Vec<Op>, _>>()?;

    let mut list = GrowableArray::with_options(args.array.options())?;
    for op in ops {
        execute(&mut list, op, out)?;
    }

    write_state(out, &list)?;
    Ok(())
}

fn execute(list: &mut GrowableArray<i64>, op: Op, out: &mut impl Write) -> CliResult<()> {
    tracing::trace!(?op, "executing");
    match op {
        Op::Append(value) => {
            let before = list.capacity();
            list.append(value)?;
            write_growth(out, before, list.capacity())?;
        }
        Op::Get(index) => writeln!(out, "{:?}", list.get(index))?,
        Op::Set { index, value } => list.set(index, value),
        Op::Top => writeln!(out, "{:?}", list.top())?,
        Op::Pop => writeln!(out, "{:?}", list.pop())?,
        Op::Len => writeln!(out, "{}", list.len())?,
        Op::Capacity => writeln!(out, "{}", list.capacity())?,
        Op::Factor(rate) => list.set_growth_factor(rate),
    }
    Ok(())
}

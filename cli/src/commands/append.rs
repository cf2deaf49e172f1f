//! The `append` command - append values and report growth.

use std::io::Write;

use growlist::GrowableArray;

use crate::cli::AppendArgs;
use crate::common::CliResult;
use crate::common::state::{write_growth, write_state};

/// Run the append command.
pub fn run(args: AppendArgs, out: &mut impl Write) -> CliResult<()> {
    let mut list = GrowableArray::with_options(args.array.options())?;

    for value in args.values {
        let before = list.capacity();
        list.append(value)?;
        write_growth(out, before, list.capacity())?;
    }

    write_state(out, &list)?;
    Ok(())
}

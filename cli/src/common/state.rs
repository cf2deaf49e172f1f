//! Printing array state.

use std::fmt::Display;
use std::io::Write;

use growlist::GrowableArray;

/// Write the summary line printed at the end of every command:
/// `len=<n> capacity=<c> [<elements>]`.
pub fn write_state<T: Display>(
    out: &mut impl Write,
    list: &GrowableArray<T>,
) -> std::io::Result<()> {
    write!(out, "len={} capacity={} [", list.len(), list.capacity())?;
    for (i, value) in list.as_slice().iter().enumerate() {
        if i > 0 {
            write!(out, ", ")?;
        }
        write!(out, "{value}")?;
    }
    writeln!(out, "]")
}

/// Write `grow <old> -> <new>` if the capacity changed.
pub fn write_growth(out: &mut impl Write, before: usize, after: usize) -> std::io::Result<()> {
    if before != after {
        writeln!(out, "grow {before} -> {after}")?;
    }
    Ok(())
}

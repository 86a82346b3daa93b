//! Plain-text reporting of student sequences
//!
//! Output format:
//!
//! ```text
//! Failed Students (Strategy 1) (2 students)
//!   Name: A, Grade: 40
//!   Name: D, Grade: 10
//!
//! ```

use crate::record::StudentRecord;
use crate::sequence::Sequence;
use crate::Result;
use std::io::Write;

/// Write `title`, the element count, then one line per record, then a blank line.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if writing to `out` fails.
pub fn display<S, W>(out: &mut W, students: &S, title: &str) -> Result<()>
where
    S: Sequence<Item = StudentRecord>,
    W: Write + ?Sized,
{
    writeln!(out, "{title} ({} students)", students.len())?;
    for student in students.iter() {
        writeln!(out, "  {student}")?;
    }
    writeln!(out)?;
    Ok(())
}

/// Write only the heading line (and the trailing blank line).
///
/// Used when record listing is disabled for large datasets.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if writing to `out` fails.
pub fn display_summary<S, W>(out: &mut W, students: &S, title: &str) -> Result<()>
where
    S: Sequence<Item = StudentRecord>,
    W: Write + ?Sized,
{
    writeln!(out, "{title} ({} students)", students.len())?;
    writeln!(out)?;
    Ok(())
}


use std::io::{self, Write};

use automata::parser::TraceRecord;

const STEP_WIDTH: usize = 6;
const STACK_WIDTH: usize = 15;
const INPUT_WIDTH: usize = 15;

/*
 * Writes everything it is given to two writers,
 * so that one trace can go to the terminal and to a file.
 */
pub struct Tee<A, B> {
    first: A,
    second: B,
}

impl<A: Write, B: Write> Tee<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Tee {first, second}
    }
}

impl<A: Write, B: Write> Write for Tee<A, B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.first.write_all(buf)?;
        self.second.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.first.flush()?;
        self.second.flush()
    }
}

fn write_row<W: Write>(out: &mut W, step: &str, stack: &str, input: &str, action: &str)
    -> io::Result<()>
{
    writeln!(
        out, "{:<sw$}{:<kw$}{:<iw$}{}",
        step, stack, input, action,
        sw = STEP_WIDTH, kw = STACK_WIDTH, iw = INPUT_WIDTH,
    )
}

pub fn write_header<W: Write>(out: &mut W) -> io::Result<()> {
    write_row(out, "Step", "Stack", "Input", "Action")
}

pub fn write_record<W: Write>(out: &mut W, record: &TraceRecord) -> io::Result<()> {
    write_row(
        out,
        &record.step.to_string(),
        &record.stack_string(),
        &record.input_string(),
        &record.action.to_string(),
    )
}

/// Writes the header and every record, returns the number of records.
pub fn write_trace<W, I>(out: &mut W, records: I) -> io::Result<usize>
    where W: Write,
          I: IntoIterator<Item = TraceRecord>,
{
    write_header(out)?;

    let mut count = 0;
    for record in records {
        write_record(out, &record)?;
        count += 1;
    }

    out.flush()?;
    Ok(count)
}

use std::io::{self, Write};

use log::debug;
use tabled::{
    builder::Builder,
    settings::{object::Columns, Alignment, Padding, Style},
    Table, Tabled,
};

use crate::defs::*;

/// Label of the only row in the person table.
const ROW_LABEL: &str = "0";

pub fn output_greeting<W: Write>(writer: &mut W, name: &str) -> io::Result<()> {
    writeln!(writer, "Hello, my name is {}! Here's my info:", name)
}

/// Escapes the characters that would otherwise break a cell across lines
/// or columns.
fn escape_cell(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\t' => escaped.push_str("\\t"),
            '\r' => escaped.push_str("\\r"),
            '\n' => escaped.push_str("\\n"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Lays out the record as an unbordered frame: a left-aligned row label
/// column, then one right-aligned column per field, two spaces apart.
fn person_table(record: &PersonRecord) -> Table {
    let mut header = vec![String::new()];
    header.extend(PersonRecord::headers().into_iter().map(|h| h.into_owned()));

    let mut row = vec![ROW_LABEL.to_string()];
    row.extend(record.fields().iter().map(|f| escape_cell(f)));

    let mut builder = Builder::default();
    builder.push_record(header);
    builder.push_record(row);

    let mut table = builder.build();
    table
        .with(Style::empty())
        .modify(Columns::first(), Padding::zero())
        .modify(Columns::new(1..), Padding::new(2, 0, 0, 0))
        .modify(Columns::new(1..), Alignment::right());
    table
}

pub fn output_person_table<W: Write>(writer: &mut W, record: &PersonRecord) -> io::Result<()> {
    let table = person_table(record);
    debug!(
        "Rendering a {}x{} person table",
        table.count_rows(),
        table.count_columns()
    );
    writeln!(writer, "{}", table)
}

pub fn output_report<W: Write>(writer: &mut W, record: &PersonRecord) -> io::Result<()> {
    output_greeting(writer, &record.name)?;
    output_person_table(writer, record)?;
    writer.flush()
}

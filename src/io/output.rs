//! Output writers for the two views the engine produces: raw record cards
//! and the monthly breakdown table.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};

use crate::core::{Record, SummaryRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl OutputFormat {
    /// Parse a format name from configuration.
    pub fn parse(name: &str) -> Option<OutputFormat> {
        match name {
            "json" => Some(OutputFormat::Json),
            "markdown" => Some(OutputFormat::Markdown),
            "terminal" => Some(OutputFormat::Terminal),
            _ => None,
        }
    }
}

pub trait OutputWriter {
    /// Raw filtered records, card-style.
    fn write_records(&mut self, records: &[Record]) -> anyhow::Result<()>;
    /// Monthly breakdown rows, tabular.
    fn write_breakdown(&mut self, rows: &[SummaryRow]) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_records(&mut self, records: &[Record]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(records)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_breakdown(&mut self, rows: &[SummaryRow]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(rows)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_records(&mut self, records: &[Record]) -> anyhow::Result<()> {
        writeln!(self.writer, "## Records")?;
        writeln!(self.writer)?;
        if records.is_empty() {
            writeln!(self.writer, "No records found.")?;
            return Ok(());
        }

        writeln!(
            self.writer,
            "| SKU | Description | Customer | Rep | Qty | Price | Cost | Invoice |"
        )?;
        writeln!(
            self.writer,
            "|-----|-------------|----------|-----|-----|-------|------|---------|"
        )?;
        for record in records {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} | {} | {} |",
                record.sku,
                record.description,
                record.customer,
                record.rep.as_deref().unwrap_or("-"),
                format_qty(record.qty),
                money(record.price),
                money(record.cost),
                record.invoice_number.as_deref().unwrap_or("-"),
            )?;
        }
        Ok(())
    }

    fn write_breakdown(&mut self, rows: &[SummaryRow]) -> anyhow::Result<()> {
        writeln!(self.writer, "## Filtered Monthly Breakdown")?;
        writeln!(self.writer)?;
        if rows.is_empty() {
            writeln!(self.writer, "No data matches the selected filters.")?;
            return Ok(());
        }

        writeln!(
            self.writer,
            "| Customer | Month | Total Qty | Total Price | Total Cost | Avg Price | Avg Cost |"
        )?;
        writeln!(
            self.writer,
            "|----------|-------|-----------|-------------|------------|-----------|----------|"
        )?;
        for row in rows {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} | {} |",
                row.customer,
                row.month,
                format_qty(row.total_qty),
                money(row.total_price_amount),
                money(row.total_cost_amount),
                money(row.avg_price),
                money(row.avg_cost),
            )?;
        }
        Ok(())
    }
}

/// Writes styled cards and tables to stdout.
pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for TerminalWriter {
    fn write_records(&mut self, records: &[Record]) -> anyhow::Result<()> {
        if records.is_empty() {
            println!("No records found.");
            return Ok(());
        }

        for record in records {
            print_card(record);
        }
        println!("{} record(s)", records.len());
        Ok(())
    }

    fn write_breakdown(&mut self, rows: &[SummaryRow]) -> anyhow::Result<()> {
        if rows.is_empty() {
            println!("No data matches the selected filters.");
            return Ok(());
        }

        println!("{}", "Filtered Monthly Breakdown".bold().blue());
        println!("{}", "==========================".blue());
        println!("{}", breakdown_table(rows));
        Ok(())
    }
}

fn print_card(record: &Record) {
    println!("{}", record.description.bold());
    println!("  SKU:      {}", record.sku);
    println!("  Customer: {}", record.customer);
    println!("  Qty:      {}", format_qty(record.qty));
    println!("  Price:    {}", money(record.price).green());
    println!("  Cost:     {}", money(record.cost).yellow());
    println!("  Rep:      {}", record.rep.as_deref().unwrap_or("-"));
    println!(
        "  Invoice:  {}",
        record.invoice_number.as_deref().unwrap_or("-")
    );
    println!();
}

fn breakdown_table(rows: &[SummaryRow]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Customer",
            "Month",
            "Total Qty",
            "Total Price",
            "Total Cost",
            "Avg Price",
            "Avg Cost",
        ]);

    for row in rows {
        table.add_row(vec![
            Cell::new(&row.customer),
            Cell::new(&row.month),
            Cell::new(format_qty(row.total_qty)).set_alignment(CellAlignment::Right),
            Cell::new(money(row.total_price_amount)).set_alignment(CellAlignment::Right),
            Cell::new(money(row.total_cost_amount)).set_alignment(CellAlignment::Right),
            Cell::new(money(row.avg_price)).set_alignment(CellAlignment::Right),
            Cell::new(money(row.avg_cost)).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

fn money(value: f64) -> String {
    format!("${:.2}", value)
}

// Quantities are usually whole; only show decimals when the data has them.
fn format_qty(qty: f64) -> String {
    if qty.fract() == 0.0 {
        format!("{:.0}", qty)
    } else {
        format!("{:.2}", qty)
    }
}

/// Writer for stdout in the requested format.
pub fn create_writer(format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new()),
    }
}

/// Writer for `--output`; the terminal format falls back to markdown since
/// ANSI styling has no place in a file.
pub fn create_file_writer(format: OutputFormat, path: &Path) -> anyhow::Result<Box<dyn OutputWriter>> {
    let file = File::create(path)?;
    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(file)),
        OutputFormat::Markdown | OutputFormat::Terminal => Box::new(MarkdownWriter::new(file)),
    })
}

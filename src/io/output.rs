use crate::core::CascadeReport;
use crate::formatting::{format_investment, ColoredFormatter, FormattingConfig, OutputFormatter};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Markdown,
}

pub trait ReportWriter {
    fn write_report(&mut self, report: &CascadeReport) -> anyhow::Result<()>;
}

/// The line the calculator has always printed for an estimate.
pub fn result_line(report: &CascadeReport) -> String {
    format!(
        ">> Previsão de visualizações para {} reais investidos: {}",
        format_investment(report.investment),
        report.total_views
    )
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &CascadeReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
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

impl<W: Write> ReportWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &CascadeReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Ad View Estimate")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Investment: R$ {}",
            format_investment(report.investment)
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Stage | Clicks | Shares | Views |")?;
        writeln!(self.writer, "|-------|--------|--------|-------|")?;
        writeln!(
            self.writer,
            "| Paid | - | - | {} |",
            report.initial_views
        )?;
        for round in &report.rounds {
            writeln!(
                self.writer,
                "| Round {} | {} | {} | {} |",
                round.round, round.clicks, round.shares, round.views
            )?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "**Total views: {}**", report.total_views)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: ColoredFormatter,
    show_breakdown: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig, show_breakdown: bool) -> Self {
        Self {
            writer,
            formatter: ColoredFormatter::new(formatting),
            show_breakdown,
        }
    }

    fn write_breakdown(&mut self, report: &CascadeReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.formatter.header("Cascade breakdown"))?;
        writeln!(
            self.writer,
            "  {} {}",
            self.formatter.dim("paid views:"),
            report.initial_views
        )?;
        for round in &report.rounds {
            let label = format!("round {}:", round.round);
            writeln!(
                self.writer,
                "  {} {} clicks, {} shares, {} views",
                self.formatter.dim(&label),
                round.clicks,
                round.shares,
                self.formatter.bold(&round.views.to_string())
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> ReportWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &CascadeReport) -> anyhow::Result<()> {
        if self.show_breakdown {
            self.write_breakdown(report)?;
        }
        writeln!(self.writer, "{}", result_line(report))?;
        Ok(())
    }
}

pub fn create_writer(
    format: OutputFormat,
    formatting: FormattingConfig,
    show_breakdown: bool,
) -> Box<dyn ReportWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(
            std::io::stdout(),
            formatting,
            show_breakdown,
        )),
    }
}

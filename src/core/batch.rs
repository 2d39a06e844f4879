use crate::core::converter::{classify_with, AmountConverter};
use crate::domain::model::{ConversionOptions, ConversionOutcome, OutputFormat};
use crate::domain::ports::{CurrencyConverter, DistanceConverter, NumberFormatter, NumberParser};
use crate::utils::error::{ConverterError, Result};
use std::io::{BufRead, Write};

#[derive(Debug, Default)]
pub struct BatchReport {
    pub total: usize,
    pub failed: usize,
    pub first_failure: Option<ConverterError>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.total - self.failed
    }
}

/// Reads one amount per line; blank lines are skipped.
pub fn read_amounts<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut amounts = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            amounts.push(trimmed.to_string());
        }
    }
    Ok(amounts)
}

/// Converts a list of amounts with shared options and writes one record per
/// amount. A failed amount is recorded in the output and the report; it does
/// not stop the run.
pub struct BatchRunner<'a, P, F, C, D> {
    converter: &'a AmountConverter<P, F, C, D>,
    options: ConversionOptions,
    format: OutputFormat,
}

impl<'a, P, F, C, D> BatchRunner<'a, P, F, C, D>
where
    P: NumberParser,
    F: NumberFormatter,
    C: CurrencyConverter,
    D: DistanceConverter,
{
    pub fn new(
        converter: &'a AmountConverter<P, F, C, D>,
        options: ConversionOptions,
        format: OutputFormat,
    ) -> Self {
        Self {
            converter,
            options,
            format,
        }
    }

    pub fn convert_all(&self, amounts: &[String]) -> (Vec<ConversionOutcome>, BatchReport) {
        let mut report = BatchReport::default();
        let mut outcomes = Vec::with_capacity(amounts.len());

        for amount in amounts {
            report.total += 1;
            let classified = classify_with(amount, &self.options);
            let marker = classified.marker;
            match self.converter.convert_classified(
                classified,
                self.options.rate,
                self.options.use_large_units,
            ) {
                Ok(output) => outcomes.push(ConversionOutcome {
                    input: amount.clone(),
                    marker: marker.token().to_string(),
                    output: Some(output),
                    error: None,
                }),
                Err(e) => {
                    tracing::warn!("Failed to convert {:?}: {}", amount, e);
                    report.failed += 1;
                    outcomes.push(ConversionOutcome {
                        input: amount.clone(),
                        marker: marker.token().to_string(),
                        output: None,
                        error: Some(e.to_string()),
                    });
                    if report.first_failure.is_none() {
                        report.first_failure = Some(e);
                    }
                }
            }
        }

        (outcomes, report)
    }

    pub fn write_outcomes<W: Write>(
        &self,
        outcomes: &[ConversionOutcome],
        mut writer: W,
    ) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                for outcome in outcomes {
                    match (&outcome.output, &outcome.error) {
                        (Some(output), _) => writeln!(writer, "{}", output)?,
                        (None, Some(error)) => {
                            writeln!(writer, "error: {}: {}", outcome.input, error)?
                        }
                        (None, None) => writeln!(writer, "error: {}", outcome.input)?,
                    }
                }
            }
            OutputFormat::Json => {
                for outcome in outcomes {
                    serde_json::to_writer(&mut writer, outcome)?;
                    writeln!(writer)?;
                }
            }
            OutputFormat::Csv => {
                let mut csv_writer = csv::Writer::from_writer(&mut writer);
                for outcome in outcomes {
                    csv_writer.serialize(outcome)?;
                }
                csv_writer.flush()?;
            }
        }
        writer.flush()?;
        Ok(())
    }

    pub fn run<W: Write>(&self, amounts: &[String], writer: W) -> Result<BatchReport> {
        tracing::debug!("Converting {} amounts", amounts.len());
        let (outcomes, report) = self.convert_all(amounts);
        self.write_outcomes(&outcomes, writer)?;
        tracing::info!(
            "Converted {} of {} amounts ({} failed)",
            report.succeeded(),
            report.total,
            report.failed
        );
        Ok(report)
    }
}

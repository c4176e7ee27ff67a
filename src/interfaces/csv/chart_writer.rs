use crate::domain::chart::{Chart, DropdownOption, SliderSpec};
use crate::domain::ports::ChartSink;
use crate::error::Result;
use std::io::Write;

const PIE_HEADER: [&str; 2] = ["group", "count"];
const SCATTER_HEADER: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "class",
    "Booster Version Category",
];

/// Writes charts as CSV blocks: a `# <title>` line, a header row, then the rows.
pub struct CsvChartWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvChartWriter<W> {
    pub fn new(sink: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_writer(sink);
        Self { writer }
    }

    pub fn write_chart(&mut self, chart: &Chart) -> Result<()> {
        self.writer.write_record([format!("# {}", chart.title())])?;
        match chart {
            Chart::Pie { slices, .. } => {
                self.writer.write_record(PIE_HEADER)?;
                for slice in slices {
                    self.writer.serialize(slice)?;
                }
            }
            Chart::Scatter { points, .. } => {
                self.writer.write_record(SCATTER_HEADER)?;
                for point in points {
                    self.writer.serialize(point)?;
                }
            }
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Writes the site dropdown options followed by the payload slider settings.
    pub fn write_widgets(&mut self, options: &[DropdownOption], slider: &SliderSpec) -> Result<()> {
        self.writer.write_record(["# Launch Sites"])?;
        self.writer.write_record(["label", "value"])?;
        for option in options {
            self.writer.serialize(option)?;
        }
        self.writer.write_record(["# Payload Range (Kg)"])?;
        self.writer.write_record(["min", "max", "step", "low", "high"])?;
        self.writer.write_record([
            slider.min.to_string(),
            slider.max.to_string(),
            slider.step.to_string(),
            slider.value.min.to_string(),
            slider.value.max.to_string(),
        ])?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> ChartSink for CsvChartWriter<W> {
    fn emit(&mut self, chart: &Chart) -> Result<()> {
        self.write_chart(chart)
    }
}

use crate::domain::chart::{Chart, DropdownOption, SliderSpec};
use crate::domain::ports::ChartSink;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct Widgets<'a> {
    dropdown: &'a [DropdownOption],
    slider: &'a SliderSpec,
}

/// Writes each chart as one JSON object per line.
pub struct JsonChartWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonChartWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_chart(&mut self, chart: &Chart) -> Result<()> {
        serde_json::to_writer(&mut self.writer, chart)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn write_widgets(&mut self, options: &[DropdownOption], slider: &SliderSpec) -> Result<()> {
        let widgets = Widgets {
            dropdown: options,
            slider,
        };
        serde_json::to_writer(&mut self.writer, &widgets)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> ChartSink for JsonChartWriter<W> {
    fn emit(&mut self, chart: &Chart) -> Result<()> {
        self.write_chart(chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::launch::{Kilograms, Outcome};
    use crate::domain::selection::{GroupKey, ScatterPoint, SuccessSummary};
    use rust_decimal_macros::dec;
    use serde_json::{Value, json};

    #[test]
    fn test_pie_line() {
        let summary: SuccessSummary = ["B", "A", "B"]
            .into_iter()
            .map(|s| GroupKey::Site(s.to_string()))
            .collect();
        let mut buffer = Vec::new();
        JsonChartWriter::new(&mut buffer)
            .write_chart(&Chart::pie("Pie", &summary))
            .unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.ends_with('\n'));
        let value: Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(
            value,
            json!({
                "chart": "pie",
                "title": "Pie",
                "slices": [
                    {"group": "A", "count": 1},
                    {"group": "B", "count": 2}
                ]
            })
        );
    }

    #[test]
    fn test_scatter_line_has_numeric_payloads() {
        let points = vec![
            ScatterPoint {
                launch_site: "CCAFS LC-40".to_string(),
                payload_mass_kg: Kilograms::new(dec!(525.0)),
                outcome: Outcome::Failure,
                booster_version_category: "v1.0".to_string(),
            },
            ScatterPoint {
                launch_site: "KSC LC-39A".to_string(),
                payload_mass_kg: Kilograms::new(dec!(2534.67)),
                outcome: Outcome::Success,
                booster_version_category: "FT".to_string(),
            },
        ];
        let mut buffer = Vec::new();
        JsonChartWriter::new(&mut buffer)
            .write_chart(&Chart::scatter("Scatter", points))
            .unwrap();

        let value: Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["chart"], "scatter");
        assert_eq!(
            value["points"][0],
            json!({
                "Launch Site": "CCAFS LC-40",
                "Payload Mass (kg)": 525,
                "class": 0,
                "Booster Version Category": "v1.0"
            })
        );
        assert_eq!(value["points"][1]["Payload Mass (kg)"].as_f64(), Some(2534.67));
    }
}

use crate::domain::chart::Chart;
use crate::domain::ports::ChartSink;
use crate::error::Result;

/// A chart sink that keeps every emitted chart in memory.
///
/// Useful for embedding the dashboard in another front end, and for tests.
#[derive(Debug, Default, Clone)]
pub struct InMemoryChartSink {
    charts: Vec<Chart>,
}

impl InMemoryChartSink {
    /// Creates a new, empty in-memory chart sink.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn charts(&self) -> &[Chart] {
        &self.charts
    }

    pub fn last(&self) -> Option<&Chart> {
        self.charts.last()
    }

    pub fn into_charts(self) -> Vec<Chart> {
        self.charts
    }
}

impl ChartSink for InMemoryChartSink {
    fn emit(&mut self, chart: &Chart) -> Result<()> {
        self.charts.push(chart.clone());
        Ok(())
    }
}

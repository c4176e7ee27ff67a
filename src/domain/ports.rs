use super::chart::Chart;
use crate::error::Result;

/// Receives chart descriptions from the dashboard and owns their presentation.
pub trait ChartSink {
    fn emit(&mut self, chart: &Chart) -> Result<()>;
}

pub type ChartSinkBox = Box<dyn ChartSink>;

impl<S: ChartSink + ?Sized> ChartSink for Box<S> {
    fn emit(&mut self, chart: &Chart) -> Result<()> {
        (**self).emit(chart)
    }
}

impl<S: ChartSink + ?Sized> ChartSink for &mut S {
    fn emit(&mut self, chart: &Chart) -> Result<()> {
        (**self).emit(chart)
    }
}

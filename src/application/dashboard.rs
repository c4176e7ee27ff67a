use super::engine::{pie_chart, scatter_chart};
use crate::domain::dataset::Dataset;
use crate::domain::ports::ChartSink;
use crate::domain::selection::{PayloadRange, SiteFilter};
use crate::error::{DashboardError, Result};

/// A change of one of the dashboard widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    SiteSelected(SiteFilter),
    PayloadChanged(PayloadRange),
}

/// Owns the widget state and reacts to widget changes.
///
/// Every event updates the state and re-emits exactly the charts that depend on
/// the changed widget: a site change affects both charts, a payload change only
/// the scatter chart. The dataset is borrowed and never modified.
pub struct Dashboard<'a, S: ChartSink> {
    dataset: &'a Dataset,
    site: SiteFilter,
    payload: PayloadRange,
    sink: S,
}

impl<'a, S: ChartSink> Dashboard<'a, S> {
    /// Creates a dashboard in its initial state: every site, full payload range.
    pub fn new(dataset: &'a Dataset, sink: S) -> Result<Self> {
        let payload = dataset
            .payload_bounds()
            .ok_or(DashboardError::EmptyDataset)?;
        Ok(Self {
            dataset,
            site: SiteFilter::All,
            payload,
            sink,
        })
    }

    pub fn render_all(&mut self) -> Result<()> {
        self.render_pie()?;
        self.render_scatter()
    }

    pub fn handle(&mut self, event: WidgetEvent) -> Result<()> {
        log::debug!("widget event: {event:?}");
        match event {
            WidgetEvent::SiteSelected(site) => {
                self.site = site;
                self.render_all()
            }
            WidgetEvent::PayloadChanged(range) => {
                self.payload = range;
                self.render_scatter()
            }
        }
    }

    /// Consumes the dashboard and hands back its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn render_pie(&mut self) -> Result<()> {
        let chart = pie_chart(self.dataset, &self.site);
        self.sink.emit(&chart)
    }

    fn render_scatter(&mut self) -> Result<()> {
        let chart = scatter_chart(self.dataset, &self.site, &self.payload);
        self.sink.emit(&chart)
    }
}

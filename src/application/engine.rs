use crate::domain::chart::{Chart, DropdownOption, SliderSpec};
use crate::domain::dataset::Dataset;
use crate::domain::selection::{
    ALL_SITES, GroupKey, PayloadRange, ScatterPoint, SiteFilter, SuccessSummary,
};

pub const ALL_SITES_LABEL: &str = "All Sites";
pub const SLIDER_MIN_KG: u32 = 0;
pub const SLIDER_MAX_KG: u32 = 10_000;
pub const SLIDER_STEP_KG: u32 = 1_000;

/// Computes the pie chart table for the given site selection.
///
/// With every site selected, successful launches are counted per site. With a
/// single site selected, that site's launches are counted per outcome class.
/// Groups with no records are left out; an unknown site yields an empty summary.
pub fn compute_success_summary(dataset: &Dataset, site_filter: &SiteFilter) -> SuccessSummary {
    let records = dataset.records().iter();
    let summary: SuccessSummary = match site_filter {
        SiteFilter::All => records
            .filter(|r| r.is_success())
            .map(|r| GroupKey::Site(r.launch_site.clone()))
            .collect(),
        SiteFilter::Site(_) => records
            .filter(|r| site_filter.matches(r))
            .map(|r| GroupKey::Outcome(r.outcome))
            .collect(),
    };
    log::debug!(
        "success summary for {site_filter}: {} groups, {} launches",
        summary.len(),
        summary.total()
    );
    summary
}

/// Computes the scatter chart rows: records whose payload lies in `payload_range`
/// (both ends inclusive) and, unless every site is selected, launched from the
/// selected site. Dataset order is preserved.
pub fn compute_scatter_points(
    dataset: &Dataset,
    site_filter: &SiteFilter,
    payload_range: &PayloadRange,
) -> Vec<ScatterPoint> {
    let points: Vec<ScatterPoint> = dataset
        .records()
        .iter()
        .filter(|r| payload_range.contains(r.payload_mass_kg))
        .filter(|r| site_filter.matches(r))
        .map(ScatterPoint::from)
        .collect();
    log::debug!(
        "scatter for {site_filter} within {payload_range}: {} points",
        points.len()
    );
    points
}

pub fn pie_chart(dataset: &Dataset, site_filter: &SiteFilter) -> Chart {
    let title = match site_filter {
        SiteFilter::All => "Total Success Launches By Site".to_string(),
        SiteFilter::Site(site) => format!("Total Success Launches By {site}"),
    };
    Chart::pie(title, &compute_success_summary(dataset, site_filter))
}

pub fn scatter_chart(
    dataset: &Dataset,
    site_filter: &SiteFilter,
    payload_range: &PayloadRange,
) -> Chart {
    let title = match site_filter {
        SiteFilter::All => "Correlation between Payload and Success for all Sites".to_string(),
        SiteFilter::Site(site) => format!("Correlation between Payload and Success for {site}"),
    };
    Chart::scatter(
        title,
        compute_scatter_points(dataset, site_filter, payload_range),
    )
}

/// Site dropdown entries: "All Sites" first, then each distinct site.
pub fn dropdown_options(dataset: &Dataset) -> Vec<DropdownOption> {
    std::iter::once(DropdownOption {
        label: ALL_SITES_LABEL.to_string(),
        value: ALL_SITES.to_string(),
    })
    .chain(dataset.sites().into_iter().map(|site| DropdownOption {
        label: site.to_string(),
        value: site.to_string(),
    }))
    .collect()
}

pub fn payload_slider(initial: PayloadRange) -> SliderSpec {
    SliderSpec {
        min: SLIDER_MIN_KG,
        max: SLIDER_MAX_KG,
        step: SLIDER_STEP_KG,
        value: initial,
    }
}

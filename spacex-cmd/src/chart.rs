//! JSON output of the dashboard's chart specs.

use anyhow::Context;
use spacex_charts::{payload_scatter_chart, success_pie_chart, PayloadRange, SiteSelection};
use spacex_launch::LaunchDataset;

/// Pretty-printed pie chart spec for `site` ("ALL" for every site).
pub fn pie_json(dataset: &LaunchDataset, site: &str) -> anyhow::Result<String> {
    let selection = SiteSelection::from_value(site);
    warn_unknown_site(dataset, &selection);
    let spec = success_pie_chart(dataset, &selection);
    serde_json::to_string_pretty(&spec).context("serializing pie chart spec")
}

/// Pretty-printed scatter chart spec. Missing bounds default to the dataset's
/// payload bounds, exactly like the dashboard's initial slider value.
pub fn scatter_json(
    dataset: &LaunchDataset,
    site: &str,
    low: Option<f64>,
    high: Option<f64>,
) -> anyhow::Result<String> {
    let selection = SiteSelection::from_value(site);
    warn_unknown_site(dataset, &selection);
    let initial = PayloadRange::from_dataset(dataset);
    let range = PayloadRange::new(
        low.unwrap_or(initial.low()),
        high.unwrap_or(initial.high()),
    );
    let spec = payload_scatter_chart(dataset, &selection, &range);
    serde_json::to_string_pretty(&spec).context("serializing scatter chart spec")
}

fn warn_unknown_site(dataset: &LaunchDataset, selection: &SiteSelection) {
    if let SiteSelection::Site(site) = selection {
        if !dataset.sites().contains(site) {
            log::warn!("Site {:?} does not appear in the dataset; chart will be empty", site);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version Category
1,CCAFS,1,500,v1.0
2,CCAFS,0,1500,v1.1
3,KSC,1,3000,FT
";

    fn dataset() -> LaunchDataset {
        LaunchDataset::from_csv_str(CSV).unwrap()
    }

    #[test]
    fn pie_json_for_site() {
        let json: serde_json::Value =
            serde_json::from_str(&pie_json(&dataset(), "CCAFS").unwrap()).unwrap();
        assert_eq!(json["kind"], "pie");
        assert_eq!(json["title"], "Total success launches for CCAFS");
        assert_eq!(json["slices"][0]["label"], "Failure");
        assert_eq!(json["slices"][1]["label"], "Success");
    }

    #[test]
    fn scatter_json_defaults_to_dataset_bounds() {
        let json: serde_json::Value =
            serde_json::from_str(&scatter_json(&dataset(), "ALL", None, None).unwrap()).unwrap();
        assert_eq!(json["points"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn scatter_json_swaps_reversed_bounds() {
        let json: serde_json::Value = serde_json::from_str(
            &scatter_json(&dataset(), "ALL", Some(2000.0), Some(400.0)).unwrap(),
        )
        .unwrap();
        let xs: Vec<f64> = json["points"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["x"].as_f64().unwrap())
            .collect();
        assert_eq!(xs, vec![500.0, 1500.0]);
    }
}

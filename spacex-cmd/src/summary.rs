//! Plain-text overview of a launch dataset.

use spacex_charts::{site_options, PayloadRange};
use spacex_launch::LaunchDataset;
use std::fmt::Write;

/// Record count, payload bounds, initial slider value and per-site totals.
pub fn summary_report(dataset: &LaunchDataset) -> String {
    let (min, max) = dataset.payload_bounds();
    let initial = PayloadRange::from_dataset(dataset);
    let mut out = String::new();

    let _ = writeln!(out, "Launch records: {}", dataset.len());
    let _ = writeln!(out, "Successful launches: {}", dataset.success_count());
    let _ = writeln!(out, "Payload mass (kg): {} - {}", min, max);
    let _ = writeln!(out, "Initial payload range: {} - {}", initial.low(), initial.high());
    let _ = writeln!(out, "Site options: {}", site_options(dataset).len());
    let _ = writeln!(out);
    let _ = writeln!(out, "{:<16} {:>8} {:>10}", "Site", "Launches", "Successes");

    for site in dataset.sites() {
        let launches = dataset.records_at(site).count();
        let successes = dataset
            .records_at(site)
            .filter(|r| r.outcome.is_success())
            .count();
        let _ = writeln!(out, "{:<16} {:>8} {:>10}", site, launches, successes);
    }

    log::info!("Summarized {} records", dataset.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lists_each_site() {
        let csv = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version Category
1,CCAFS,1,500,v1.0
2,CCAFS,0,1500,v1.1
3,KSC,1,3000,FT
";
        let dataset = LaunchDataset::from_csv_str(csv).unwrap();
        let report = summary_report(&dataset);

        assert!(report.contains("Launch records: 3"));
        assert!(report.contains("Successful launches: 2"));
        assert!(report.contains("Payload mass (kg): 500 - 3000"));
        assert!(report.contains("Site options: 3"));
        assert!(report
            .lines()
            .any(|l| l.split_whitespace().collect::<Vec<_>>() == ["CCAFS", "2", "1"]));
        assert!(report
            .lines()
            .any(|l| l.split_whitespace().collect::<Vec<_>>() == ["KSC", "1", "1"]));
    }
}

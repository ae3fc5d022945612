//! The two chart update functions. Both are pure: same dataset and inputs,
//! same `ChartSpec`.

use crate::chart::{ChartSpec, PieChart, PieSlice, ScatterChart, ScatterPoint};
use crate::payload::PayloadRange;
use crate::selection::SiteSelection;
use spacex_launch::{LaunchDataset, Outcome};

const ALL_SITES_PIE_TITLE: &str = "Total success launches by site";
const SCATTER_TITLE: &str = "Total success launches by site";
const SCATTER_X_LABEL: &str = "Payload Mass (kg)";
const SCATTER_Y_LABEL: &str = "class";
const SCATTER_COLOR_BY: &str = "Booster Version Category";

/// Success breakdown for the selected site.
///
/// - `All`: one slice per site (first-seen order) holding its success count.
/// - `Site(s)`: a "Failure" and a "Success" slice counting the records of
///   `s` in each class. Labels are bound to the class value, not to slice
///   position. A site with no records yields zero slices.
pub fn success_pie_chart(dataset: &LaunchDataset, site: &SiteSelection) -> ChartSpec {
    let (title, slices) = match site {
        SiteSelection::All => {
            let slices = dataset
                .sites()
                .iter()
                .map(|s| PieSlice {
                    label: s.clone(),
                    value: dataset
                        .records_at(s)
                        .filter(|r| r.outcome.is_success())
                        .count() as u32,
                })
                .collect();
            (ALL_SITES_PIE_TITLE.to_string(), slices)
        }
        SiteSelection::Site(s) => {
            let mut counts = [0u32; 2];
            for record in dataset.records_at(s) {
                counts[usize::from(record.outcome.class())] += 1;
            }
            let slices = if counts.iter().sum::<u32>() == 0 {
                Vec::new()
            } else {
                Outcome::ALL
                    .iter()
                    .map(|outcome| PieSlice {
                        label: outcome.label().to_string(),
                        value: counts[usize::from(outcome.class())],
                    })
                    .collect()
            };
            (format!("Total success launches for {}", s), slices)
        }
    };

    log::debug!("success_pie_chart({}): {} slices", site.value(), slices.len());
    ChartSpec::Pie(PieChart { title, slices })
}

/// Payload vs. outcome for launches in `range` (inclusive), optionally
/// restricted to one site. One point per surviving record, in dataset order,
/// coloured by booster version category.
pub fn payload_scatter_chart(
    dataset: &LaunchDataset,
    site: &SiteSelection,
    range: &PayloadRange,
) -> ChartSpec {
    let mut groups: Vec<String> = Vec::new();
    let points: Vec<ScatterPoint> = dataset
        .records()
        .iter()
        .filter(|r| site.matches(r) && range.contains(r.payload_mass_kg))
        .map(|r| {
            if !groups.contains(&r.booster_version_category) {
                groups.push(r.booster_version_category.clone());
            }
            ScatterPoint {
                x: r.payload_mass_kg,
                y: r.outcome.class(),
                group: r.booster_version_category.clone(),
                flight_number: r.flight_number,
                booster_version: r.booster_version.clone(),
            }
        })
        .collect();

    log::debug!(
        "payload_scatter_chart({}, {}-{}): {} points",
        site.value(),
        range.low(),
        range.high(),
        points.len()
    );
    ChartSpec::Scatter(ScatterChart {
        title: SCATTER_TITLE.to_string(),
        x_label: SCATTER_X_LABEL.to_string(),
        y_label: SCATTER_Y_LABEL.to_string(),
        color_by: SCATTER_COLOR_BY.to_string(),
        groups,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO_CSV: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version Category
1,CCAFS,1,500,v1.0
2,CCAFS,0,1500,v1.1
3,KSC,1,3000,FT
";

    fn scenario() -> LaunchDataset {
        LaunchDataset::from_csv_str(SCENARIO_CSV).unwrap()
    }

    fn fixture() -> LaunchDataset {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../fixtures/spacex_launch_dash.csv");
        LaunchDataset::from_path(path).unwrap()
    }

    fn slices(spec: &ChartSpec) -> Vec<(String, u32)> {
        match spec {
            ChartSpec::Pie(pie) => pie
                .slices
                .iter()
                .map(|s| (s.label.clone(), s.value))
                .collect(),
            other => panic!("expected pie chart, got {:?}", other.kind()),
        }
    }

    fn points(spec: &ChartSpec) -> Vec<&ScatterPoint> {
        match spec {
            ChartSpec::Scatter(scatter) => scatter.points.iter().collect(),
            other => panic!("expected scatter chart, got {:?}", other.kind()),
        }
    }

    // ───────────────────── Scenario ─────────────────────

    #[test]
    fn scenario_pie_all_sites() {
        let spec = success_pie_chart(&scenario(), &SiteSelection::All);
        assert_eq!(spec.title(), "Total success launches by site");
        assert_eq!(
            slices(&spec),
            vec![("CCAFS".to_string(), 1), ("KSC".to_string(), 1)]
        );
    }

    #[test]
    fn scenario_pie_single_site() {
        let spec = success_pie_chart(&scenario(), &SiteSelection::from_value("CCAFS"));
        assert_eq!(spec.title(), "Total success launches for CCAFS");
        assert_eq!(
            slices(&spec),
            vec![("Failure".to_string(), 1), ("Success".to_string(), 1)]
        );
    }

    #[test]
    fn scenario_scatter_single_site() {
        let spec = payload_scatter_chart(
            &scenario(),
            &SiteSelection::from_value("KSC"),
            &PayloadRange::full(),
        );
        assert_eq!(spec.title(), "Total success launches by site");
        let pts = points(&spec);
        assert_eq!(pts.len(), 1);
        assert_eq!((pts[0].x, pts[0].y), (3000.0, 1));
        assert_eq!(pts[0].group, "FT");
    }

    // ───────────────────── Pie chart ─────────────────────

    #[test]
    fn all_sites_slices_sum_to_total_successes() {
        let dataset = fixture();
        let spec = success_pie_chart(&dataset, &SiteSelection::All);
        let total: u32 = slices(&spec).iter().map(|(_, v)| v).sum();
        assert_eq!(total as usize, dataset.success_count());
        assert_eq!(slices(&spec).len(), dataset.sites().len());
    }

    #[test]
    fn site_slices_sum_to_site_record_count() {
        let dataset = fixture();
        for site in dataset.sites() {
            let spec = success_pie_chart(&dataset, &SiteSelection::Site(site.clone()));
            let total: u32 = slices(&spec).iter().map(|(_, v)| v).sum();
            assert_eq!(total as usize, dataset.records_at(site).count(), "site {}", site);
        }
    }

    #[test]
    fn site_labels_bound_to_class() {
        let csv = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version Category
1,KSC,1,500,FT
2,KSC,1,600,FT
3,KSC,0,700,FT
";
        let dataset = LaunchDataset::from_csv_str(csv).unwrap();
        let spec = success_pie_chart(&dataset, &SiteSelection::from_value("KSC"));
        assert_eq!(
            slices(&spec),
            vec![("Failure".to_string(), 1), ("Success".to_string(), 2)]
        );
    }

    #[test]
    fn site_with_single_class_keeps_both_slices() {
        let csv = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version Category
1,KSC,1,500,FT
";
        let dataset = LaunchDataset::from_csv_str(csv).unwrap();
        let spec = success_pie_chart(&dataset, &SiteSelection::from_value("KSC"));
        assert_eq!(
            slices(&spec),
            vec![("Failure".to_string(), 0), ("Success".to_string(), 1)]
        );
    }

    #[test]
    fn unknown_site_is_empty_pie() {
        let spec = success_pie_chart(&scenario(), &SiteSelection::from_value("Boca Chica"));
        assert!(spec.is_empty());
        assert_eq!(spec.title(), "Total success launches for Boca Chica");
    }

    #[test]
    fn fixture_site_totals() {
        let spec = success_pie_chart(&fixture(), &SiteSelection::All);
        assert_eq!(
            slices(&spec),
            vec![
                ("CCAFS LC-40".to_string(), 7),
                ("VAFB SLC-4E".to_string(), 4),
                ("KSC LC-39A".to_string(), 10),
                ("CCAFS SLC-40".to_string(), 3),
            ]
        );
    }

    // ───────────────────── Scatter chart ─────────────────────

    #[test]
    fn scatter_points_stay_inside_range() {
        let dataset = fixture();
        let ranges = [
            (0.0, 18000.0),
            (2000.0, 5000.0),
            (5000.0, 2000.0),
            (-1000.0, 4000.0),
            (6000.0, 40000.0),
            (9600.0, 9600.0),
        ];
        for (a, b) in ranges {
            let range = PayloadRange::new(a, b);
            let spec = payload_scatter_chart(&dataset, &SiteSelection::All, &range);
            for point in points(&spec) {
                assert!(
                    point.x >= range.low() && point.x <= range.high(),
                    "{} outside [{}, {}]",
                    point.x,
                    range.low(),
                    range.high()
                );
            }
        }
    }

    #[test]
    fn scatter_filters_by_site() {
        let dataset = fixture();
        for site in dataset.sites() {
            let spec = payload_scatter_chart(
                &dataset,
                &SiteSelection::Site(site.clone()),
                &PayloadRange::full(),
            );
            let flights: Vec<u32> = points(&spec).iter().map(|p| p.flight_number).collect();
            assert_eq!(flights.len(), dataset.records_at(site).count());
            for flight in flights {
                let record = dataset
                    .records()
                    .iter()
                    .find(|r| r.flight_number == flight)
                    .unwrap();
                assert_eq!(&record.launch_site, site);
            }
        }
    }

    #[test]
    fn scatter_range_is_inclusive() {
        let spec = payload_scatter_chart(
            &scenario(),
            &SiteSelection::All,
            &PayloadRange::new(500.0, 1500.0),
        );
        let xs: Vec<f64> = points(&spec).iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![500.0, 1500.0]);
    }

    #[test]
    fn scatter_groups_in_first_seen_order() {
        let spec = payload_scatter_chart(&scenario(), &SiteSelection::All, &PayloadRange::full());
        match spec {
            ChartSpec::Scatter(scatter) => {
                assert_eq!(scatter.groups, vec!["v1.0", "v1.1", "FT"]);
                assert_eq!(scatter.x_label, "Payload Mass (kg)");
                assert_eq!(scatter.color_by, "Booster Version Category");
            }
            other => panic!("expected scatter chart, got {:?}", other.kind()),
        }
    }

    #[test]
    fn empty_intersection_is_empty_scatter() {
        let spec = payload_scatter_chart(
            &scenario(),
            &SiteSelection::from_value("KSC"),
            &PayloadRange::new(0.0, 1000.0),
        );
        assert!(spec.is_empty());
    }

    #[test]
    fn updates_are_idempotent() {
        let dataset = fixture();
        let site = SiteSelection::from_value("KSC LC-39A");
        let range = PayloadRange::new(2000.0, 7000.0);

        assert_eq!(
            success_pie_chart(&dataset, &site),
            success_pie_chart(&dataset, &site)
        );
        assert_eq!(
            payload_scatter_chart(&dataset, &site, &range),
            payload_scatter_chart(&dataset, &site, &range)
        );
    }
}

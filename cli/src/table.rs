use pulpboard_core::{DashboardRecord, RecommendationReport};
use tabled::settings::Style;
use tabled::{Table, Tabled};

// Helper struct for Table Row
#[derive(Tabled)]
struct DashboardRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Actual")]
    actual: String,
    #[tabled(rename = "Carryover")]
    carryover: String,
    #[tabled(rename = "Weeks (prod)")]
    weeks: String,
    #[tabled(rename = "Sugar (kg)")]
    sugar: String,
    #[tabled(rename = "Pulp (kg)")]
    pulp: String,
}

pub fn render_dashboard(records: &[DashboardRecord]) -> String {
    let rows: Vec<DashboardRow> = records
        .iter()
        .map(|r| DashboardRow {
            month: r.month.clone(),
            target: format!("{}", r.target_production),
            actual: format!("{}", r.actual_production),
            carryover: format!("{:+}", r.carryover),
            weeks: if r.weeks.is_empty() {
                "-".to_string()
            } else {
                r.weeks
                    .iter()
                    .map(|w| format!("{}", w.production))
                    .collect::<Vec<_>>()
                    .join(" / ")
            },
            sugar: format!("{}", r.raw_materials_bought.sugar),
            pulp: format!("{}", r.raw_materials_bought.mango_pulp),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

pub fn print_reports(reports: &[RecommendationReport]) {
    for report in reports {
        println!("\n\x1b[1;36m{}\x1b[0m", report.month);
        println!("  {}", report.overall);
        println!("  Short term:");
        for item in &report.short_term {
            println!("    - {}", item);
        }
        println!("  Long term:");
        for item in &report.long_term {
            println!("    - {}", item);
        }
        if !report.weekly.is_empty() {
            println!("  Weekly:");
            for item in &report.weekly {
                println!("    - {}", item);
            }
        }
    }
}

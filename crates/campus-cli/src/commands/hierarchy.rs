//! Seniority containment report.

use anyhow::Result;
use campus_config::CampusConfig;
use campus_rbac::hierarchy::seniority_report;
use campus_rbac::standard_table;
use campus_types::Role;

use crate::style::{colors::SemanticStyle, print_grid, print_heading};

pub fn run(config: &CampusConfig) -> Result<()> {
    let columns = ["senior", "junior", "contains", "uncovered"].map(String::from);
    let mut violations = 0;

    for role in Role::ALL {
        let report = seniority_report(
            standard_table(),
            role,
            config.matrix.resources.as_slice(),
            config.matrix.actions.as_slice(),
        );
        if report.is_empty() {
            continue;
        }

        let rows: Vec<Vec<String>> = report
            .iter()
            .map(|entry| {
                let uncovered = entry
                    .uncovered
                    .iter()
                    .map(|(resource, action)| format!("{action} {resource}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                vec![
                    entry.senior.to_string(),
                    entry.junior.to_string(),
                    if entry.holds() { "yes" } else { "no" }.to_string(),
                    uncovered,
                ]
            })
            .collect();
        violations += report.iter().filter(|entry| !entry.holds()).count();

        print_heading(&format!("{role} sub-roles"));
        print_grid(&columns, &rows);
        println!();
    }

    if violations == 0 {
        println!("{}", "Every senior sub-role contains its juniors.".success());
    } else {
        println!(
            "{}",
            format!("{violations} sub-role pair(s) are not contained.").warning()
        );
    }

    Ok(())
}

use comfy_table::Table;

use crate::controllers::playback::{StatTarget, format_stat};
use crate::core::actions::derive_statistics::IterationStatistics;
use crate::core::data::construction_history::ConstructionHistory;

/// Builds one row per level with the same formatting as the stat panel.
#[must_use]
pub fn statistics_table(history: &ConstructionHistory) -> Table {
    let mut table = Table::new();

    let mut header = vec!["Iteration".to_string()];
    header.extend(StatTarget::ALL.iter().map(|target| target.label().to_string()));
    header.push("ln(segments)".to_string());
    table.set_header(header);

    for index in 0..history.depth() {
        if let Some(stats) = IterationStatistics::derive(history, index) {
            table.add_row(statistics_row(&stats));
        }
    }

    table
}

fn statistics_row(stats: &IterationStatistics) -> Vec<String> {
    let mut row = vec![stats.index.to_string()];
    row.extend(StatTarget::ALL.iter().map(|&target| {
        format_stat(target.value(stats), target.decimals(), target.suffix())
    }));
    row.push(format_stat(stats.log_segment_count, 3, ""));
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_construction::generate_construction;
    use crate::core::data::interval::Interval;

    #[test]
    fn test_table_has_a_row_per_level() {
        let history = generate_construction(Interval::UNIT, 5).unwrap();
        let table = statistics_table(&history);

        assert_eq!(table.row_iter().count(), 5);
    }

    #[test]
    fn test_rendered_table_shows_formatted_values() {
        let history = generate_construction(Interval::UNIT, 3).unwrap();
        let rendered = statistics_table(&history).to_string();

        assert!(rendered.contains("Fractal dimension"));
        assert!(rendered.contains("0.631"));
        assert!(rendered.contains("44.4%"));
        assert!(rendered.contains("100.0%"));
    }

    #[test]
    fn test_row_for_second_level() {
        let history = generate_construction(Interval::UNIT, 3).unwrap();
        let stats = IterationStatistics::derive(&history, 1).unwrap();

        assert_eq!(
            statistics_row(&stats),
            vec!["1", "2", "0.667", "0.631", "66.7%", "0.693"]
        );
    }
}

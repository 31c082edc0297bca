use contracts::domain::a005_project::{Project, ProjectStatus};
use once_cell::sync::Lazy;

use crate::domain::common::SeedSource;

#[allow(clippy::too_many_arguments)]
fn project(
    id: &str,
    code: &str,
    name: &str,
    client: &str,
    manager: &str,
    start_date: &str,
    end_date: &str,
    amount: i64,
    progress: u8,
    status: ProjectStatus,
) -> Project {
    Project {
        id: id.to_string(),
        code: code.to_string(),
        name: name.to_string(),
        client: client.to_string(),
        manager: manager.to_string(),
        start_date: start_date.to_string(),
        end_date: end_date.to_string(),
        amount,
        progress,
        status,
        description: None,
    }
}

static SAMPLES: Lazy<Vec<Project>> = Lazy::new(|| {
    use ProjectStatus::*;
    vec![
        project("prj-001", "PRJ-2025-001", "第2組立ライン更新", "中部オートパーツ", "山本", "2025-01-06", "2025-06-30", 48_000_000, 35, Active),
        project("prj-002", "PRJ-2025-002", "油圧プレス改造", "北陸機工", "田中", "2025-01-15", "2025-04-25", 8_600_000, 80, Active),
        project("prj-003", "PRJ-2025-003", "検査工程自動化", "東邦精密", "鈴木", "2025-04-01", "2025-09-30", 12_500_000, 0, Planning),
        project("prj-004", "PRJ-2024-011", "治具標準化", "中部オートパーツ", "田中", "2024-10-01", "2025-03-31", 3_200_000, 100, Completed),
        project("prj-005", "PRJ-2024-014", "溶接セル導入", "北陸機工", "山本", "2024-11-11", "2025-03-20", 22_000_000, 20, Aborted),
    ]
});

impl SeedSource for Project {
    fn builtin() -> Vec<Self> {
        SAMPLES.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::service::new_page;
    use crate::shared::event_bus::PanelEvent;
    use crate::shared::record_filter::FixedClock;
    use chrono::NaiveDate;
    use contracts::shared::record_filter::{FilterEvent, FilterKind};

    #[test]
    fn test_progress_filter_on_projects() {
        let clock = FixedClock(NaiveDate::from_ymd_opt(2025, 4, 15).unwrap());
        let mut page = new_page(Project::builtin(), Box::new(clock)).unwrap();

        page.handle(&PanelEvent::Filter(FilterEvent::new(FilterKind::ProgressRange, "51-99%")));
        assert_eq!(page.visible_ids(), vec!["prj-002"]);

        page.handle(&PanelEvent::Filter(FilterEvent::new(FilterKind::ProgressRange, "0%")));
        assert_eq!(page.visible_ids(), vec!["prj-003"]);

        page.handle(&PanelEvent::Filter(FilterEvent::new(FilterKind::DateRange, "今月")));
        assert_eq!(page.visible_ids(), Vec::<String>::new());

        page.handle(&PanelEvent::Filter(FilterEvent::new(FilterKind::ProgressRange, "すべて")));
        assert_eq!(page.visible_ids(), vec!["prj-002"]);
    }
}

use contracts::domain::a002_arrangement::{Arrangement, ArrangementStatus};
use once_cell::sync::Lazy;

use crate::domain::common::SeedSource;

#[allow(clippy::too_many_arguments)]
fn arrangement(
    id: &str,
    code: &str,
    name: &str,
    supplier: &str,
    manager: &str,
    order_no: Option<&str>,
    quantity: u32,
    required_date: &str,
    amount: i64,
    status: ArrangementStatus,
) -> Arrangement {
    Arrangement {
        id: id.to_string(),
        code: code.to_string(),
        name: name.to_string(),
        supplier: supplier.to_string(),
        manager: manager.to_string(),
        order_no: order_no.map(str::to_string),
        quantity,
        required_date: required_date.to_string(),
        amount,
        status,
        note: None,
    }
}

static SAMPLES: Lazy<Vec<Arrangement>> = Lazy::new(|| {
    use ArrangementStatus::*;
    vec![
        arrangement("arr-001", "ARR-2025-0001", "油圧ポンプ", "東海油機", "佐藤", Some("ORD-2025-001"), 2, "2025-04-20", 500_000, NotArranged),
        arrangement("arr-002", "ARR-2025-0002", "制御盤筐体", "北斗電装", "佐藤", Some("ORD-2025-001"), 1, "2025-01-31", 2_000_000, Arranged),
        arrangement("arr-003", "ARR-2025-0003", "ポンプ架台", "三河鉄工", "高橋", Some("ORD-2025-002"), 4, "2025-04-01", 1_000_000, InProgress),
        arrangement("arr-004", "ARR-2025-0004", "サーボモーター", "関東精機", "高橋", Some("ORD-2025-003"), 6, "2025-05-12", 6_300_000, InProgress),
        arrangement("arr-005", "ARR-2025-0005", "搬送ロボット", "関東精機", "伊藤", None, 1, "2025-06-02", 12_000_000, Cancelled),
        Arrangement {
            note: Some("仕様確定待ち".to_string()),
            ..arrangement("arr-006", "ARR-2025-0006", "配線材一式", "北斗電装", "伊藤", Some("ORD-2025-004"), 30, "未定", 180_000, NotArranged)
        },
        arrangement("arr-007", "ARR-2025-0007", "安全柵", "三河鉄工", "佐藤", Some("ORD-2025-004"), 12, "2025-04-18", 2_400_000, InProgress),
    ]
});

impl SeedSource for Arrangement {
    fn builtin() -> Vec<Self> {
        SAMPLES.clone()
    }
}

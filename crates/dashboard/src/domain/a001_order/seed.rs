use contracts::domain::a001_order::{Order, OrderStatus};
use once_cell::sync::Lazy;

use crate::domain::common::SeedSource;

#[allow(clippy::too_many_arguments)]
fn order(
    id: &str,
    order_no: &str,
    name: &str,
    client: &str,
    manager: &str,
    order_date: &str,
    due_date: &str,
    amount: i64,
    status: OrderStatus,
) -> Order {
    Order {
        id: id.to_string(),
        order_no: order_no.to_string(),
        name: name.to_string(),
        client: client.to_string(),
        manager: manager.to_string(),
        order_date: order_date.to_string(),
        due_date: due_date.to_string(),
        amount,
        status,
        description: None,
    }
}

static SAMPLES: Lazy<Vec<Order>> = Lazy::new(|| {
    use OrderStatus::*;
    vec![
        order("ord-001", "ORD-2025-001", "油圧プレス改造", "北陸機工", "田中", "2025-01-15", "2025-04-25", 8_600_000, InProduction),
        order("ord-002", "ORD-2025-002", "ポンプユニット", "東邦精密", "鈴木", "2025-02-03", "2025-04-10", 2_750_000, Shipped),
        order("ord-003", "ORD-2025-003", "組立治具", "中部オートパーツ", "田中", "2025-02-20", "2025-03-31", 640_000, Completed),
        Order {
            description: Some("第2工場向け、据付工事込み".to_string()),
            ..order("ord-004", "ORD-2025-004", "搬送コンベア", "中部オートパーツ", "山本", "2025-03-12", "2025-05-30", 15_400_000, Received)
        },
        order("ord-005", "ORD-2025-005", "検査装置", "東邦精密", "鈴木", "2025-03-25", "2025-05-15", 4_980_000, Received),
        order("ord-006", "ORD-2025-006", "溶接ロボットセル", "北陸機工", "山本", "2025-01-08", "2025-03-20", 22_000_000, Cancelled),
    ]
});

impl SeedSource for Order {
    fn builtin() -> Vec<Self> {
        SAMPLES.clone()
    }
}

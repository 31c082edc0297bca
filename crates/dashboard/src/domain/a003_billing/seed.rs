use contracts::domain::a003_billing::{Billing, BillingStatus};
use once_cell::sync::Lazy;

use crate::domain::common::SeedSource;

#[allow(clippy::too_many_arguments)]
fn billing(
    id: &str,
    invoice_no: &str,
    client: &str,
    subject: &str,
    manager: &str,
    issue_date: Option<&str>,
    due_date: &str,
    amount: i64,
    status: BillingStatus,
) -> Billing {
    Billing {
        id: id.to_string(),
        invoice_no: invoice_no.to_string(),
        client: client.to_string(),
        subject: subject.to_string(),
        manager: manager.to_string(),
        issue_date: issue_date.map(str::to_string),
        due_date: due_date.to_string(),
        amount,
        status,
        note: None,
    }
}

static SAMPLES: Lazy<Vec<Billing>> = Lazy::new(|| {
    use BillingStatus::*;
    vec![
        billing("bil-001", "INV-2025-0001", "中部オートパーツ", "組立治具", "田中", Some("2025-03-31"), "2025-04-30", 704_000, Billed),
        billing("bil-002", "INV-2025-0002", "東邦精密", "ポンプユニット", "鈴木", Some("2025-03-10"), "2025-04-10", 3_025_000, Paid),
        billing("bil-003", "INV-2025-0003", "北陸機工", "油圧プレス改造 着手金", "田中", Some("2025-02-28"), "2025-03-31", 2_580_000, Billed),
        billing("bil-004", "INV-2025-0004", "中部オートパーツ", "搬送コンベア 前受金", "山本", None, "2025-05-31", 4_620_000, NotBilled),
        billing("bil-005", "INV-2025-0005", "北陸機工", "溶接ロボットセル", "山本", None, "2025-04-15", 24_200_000, Cancelled),
    ]
});

impl SeedSource for Billing {
    fn builtin() -> Vec<Self> {
        SAMPLES.clone()
    }
}

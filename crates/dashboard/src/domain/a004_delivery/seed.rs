use contracts::domain::a004_delivery::{Delivery, DeliveryStatus};
use once_cell::sync::Lazy;

use crate::domain::common::SeedSource;

#[allow(clippy::too_many_arguments)]
fn delivery(
    id: &str,
    delivery_no: &str,
    name: &str,
    client: &str,
    address: &str,
    carrier: Option<&str>,
    delivery_date: &str,
    amount: i64,
    status: DeliveryStatus,
) -> Delivery {
    Delivery {
        id: id.to_string(),
        delivery_no: delivery_no.to_string(),
        name: name.to_string(),
        client: client.to_string(),
        address: address.to_string(),
        carrier: carrier.map(str::to_string),
        delivery_date: delivery_date.to_string(),
        amount,
        status,
    }
}

static SAMPLES: Lazy<Vec<Delivery>> = Lazy::new(|| {
    use DeliveryStatus::*;
    vec![
        delivery("dlv-001", "DLV-2025-0001", "ポンプユニット", "東邦精密", "愛知県豊田市", Some("中部運輸"), "2025-04-08", 2_750_000, Delivered),
        delivery("dlv-002", "DLV-2025-0002", "組立治具", "中部オートパーツ", "岐阜県各務原市", Some("中部運輸"), "2025-03-28", 640_000, Delivered),
        delivery("dlv-003", "DLV-2025-0003", "油圧プレス改造部品", "北陸機工", "富山県高岡市", Some("北陸ロジ"), "2025-04-17", 1_200_000, InTransit),
        delivery("dlv-004", "DLV-2025-0004", "検査装置", "東邦精密", "愛知県豊田市", None, "2025-05-15", 4_980_000, NotShipped),
        delivery("dlv-005", "DLV-2025-0005", "搬送コンベア", "中部オートパーツ", "岐阜県各務原市", None, "2025-05-30", 15_400_000, NotShipped),
        delivery("dlv-006", "DLV-2025-0006", "予備部品", "北陸機工", "富山県高岡市", Some("北陸ロジ"), "2025-04-03", 85_000, InTransit),
    ]
});

impl SeedSource for Delivery {
    fn builtin() -> Vec<Self> {
        SAMPLES.clone()
    }
}

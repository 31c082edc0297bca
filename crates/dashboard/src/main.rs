use std::cell::RefCell;
use std::rc::Rc;

use contracts::domain::a001_order::Order;
use contracts::domain::a002_arrangement::Arrangement;
use contracts::domain::a003_billing::Billing;
use contracts::domain::a004_delivery::Delivery;
use contracts::domain::a005_project::Project;
use contracts::shared::record_filter::FilterQuery;
use dashboard::domain::common::{load_records, service, SeedSource};
use dashboard::shared::config::{get_seed_path, load_config, Config, ConfigSource};
use dashboard::shared::event_bus::{EventBus, PanelEvent};
use dashboard::shared::format::format_yen;
use dashboard::shared::logger::init_tracing;
use dashboard::shared::record_filter::{Clock, FixedClock, SystemClock};

const USAGE: &str = "usage: dashboard <orders|arrangements|billings|deliveries|projects> [query.json]";

fn main() -> anyhow::Result<()> {
    let (config, source) = load_config()?;
    init_tracing(&config.logging)?;
    match &source {
        ConfigSource::File(_) => tracing::info!("Loaded config from: {}", source),
        ConfigSource::Embedded { missing: Some(_) } => tracing::warn!("Using {}", source),
        ConfigSource::Embedded { missing: None } => tracing::info!("Using {}", source),
    }

    let mut args = std::env::args().skip(1);
    let domain = args.next().unwrap_or_else(|| "arrangements".to_string());
    let query = match args.next() {
        Some(path) => {
            let contents = std::fs::read_to_string(&path)?;
            let query: FilterQuery = serde_json::from_str(&contents)?;
            tracing::info!("Query loaded from {}", path);
            query
        }
        None => FilterQuery::default(),
    };

    match domain.as_str() {
        "orders" => run::<Order>(&config, query),
        "arrangements" => run::<Arrangement>(&config, query),
        "billings" => run::<Billing>(&config, query),
        "deliveries" => run::<Delivery>(&config, query),
        "projects" => run::<Project>(&config, query),
        other => anyhow::bail!("unknown domain {:?}\n{}", other, USAGE),
    }
}

fn make_clock(config: &Config) -> anyhow::Result<Box<dyn Clock>> {
    let clock: Box<dyn Clock> = match config.filter.fixed_today()? {
        Some(today) => {
            tracing::info!("Using fixed today {}", today);
            Box::new(FixedClock(today))
        }
        None => Box::new(SystemClock),
    };
    Ok(clock)
}

fn run<R: SeedSource + 'static>(config: &Config, query: FilterQuery) -> anyhow::Result<()> {
    let records: Vec<R> = load_records(get_seed_path(config).as_deref())?;
    let page = Rc::new(RefCell::new(service::new_page(records, make_clock(config)?)?));

    let mut bus = EventBus::new();
    let subscriber = page.clone();
    bus.subscribe(move |event| subscriber.borrow_mut().handle(event));
    for event in PanelEvent::from_query(&query) {
        bus.publish(&event);
    }

    let mut page = page.borrow_mut();
    let date_field = page.config().date_field.clone();

    println!("{}", R::list_name());
    for tag in page.filter_tags() {
        println!("  [{}]", tag.display_text);
    }
    if !query.search_term.trim().is_empty() {
        println!("  検索: {}", query.search_term.trim());
    }

    let active = page.selection().active().map(str::to_string);
    for record in page.visible() {
        let marker = if active.as_deref() == Some(record.id()) { ">" } else { " " };
        println!(
            "{} {:<12} {:<8} {:<12} {:>14}",
            marker,
            record.id(),
            record.status(),
            record.date_field(&date_field).unwrap_or("-"),
            format_yen(record.amount()),
        );
    }

    let count = page.visible_count();
    let total = page.visible_amount_total();
    println!("{} 件 / 合計 {}", count, format_yen(total));

    let counts: Vec<String> = page
        .status_counts()
        .into_iter()
        .map(|(status, n)| format!("{} {}", status, n))
        .collect();
    println!("{}", counts.join(" | "));

    Ok(())
}

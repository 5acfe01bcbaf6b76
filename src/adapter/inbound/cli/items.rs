//! Handler for the `items` command.

use rust_decimal::Decimal;
use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::ItemsArgs;
use crate::adapter::inbound::cli::output;
use crate::domain::{Item, Page, PageRequest};
use crate::error::Result;
use crate::infrastructure::bootstrap::build_catalog;
use crate::infrastructure::config::settings::Config;

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Tradable")]
    tradable: String,
    #[tabled(rename = "Non-tradable")]
    non_tradable: String,
    #[tabled(rename = "Suggested")]
    suggested: String,
}

impl From<&Item> for ItemRow {
    fn from(item: &Item) -> Self {
        Self {
            name: item.market_hash_name.clone(),
            tradable: price(item.min_price_tradable, &item.currency),
            non_tradable: price(item.min_price_non_tradable, &item.currency),
            suggested: price(item.suggested_price, &item.currency),
        }
    }
}

fn price(value: Option<Decimal>, currency: &str) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v} {currency}"))
}

/// Sort by name and cut out the requested page.
pub(crate) fn paginate(mut items: Vec<Item>, request: PageRequest) -> Page<Item> {
    items.sort_by(|a, b| a.market_hash_name.cmp(&b.market_hash_name));
    Page::slice(&items, request)
}

/// Execute the items command.
pub async fn execute(config: &Config, args: &ItemsArgs) -> Result<()> {
    let catalog = build_catalog(config)?;
    let items = catalog.service.get_items().await?;
    let page = paginate(items, PageRequest::new(args.page, args.limit));

    if output::is_json() {
        output::json_output(json!({
            "command": "items",
            "page": page.page,
            "limit": page.limit,
            "total": page.total,
            "total_pages": page.total_pages,
            "items": page.items,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Currency", &config.skinport.currency);
    output::field(
        "Page",
        format!("{} of {} ({} items)", page.page, page.total_pages, page.total),
    );
    println!();

    let rows: Vec<ItemRow> = page.items.iter().map(ItemRow::from).collect();
    output::lines(&Table::new(rows).to_string());

    Ok(())
}

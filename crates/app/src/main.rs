use anyhow::{bail, Context};
use chrono::Utc;

use storefront_app::pages::{
    cart_page, categories_page, dashboard_page, deals_page, home_page, inventory_page,
    product_detail_page, shop_page, table_query_from_pairs, ShopParams,
};
use storefront_app::render::{render, Page};
use storefront_app::{load_app_config, StoreContext};
use storefront_auth::StaticSessionProvider;
use storefront_sales::Cart;

fn main() -> anyhow::Result<()> {
    let config = load_app_config().context("loading configuration")?;
    storefront_observability::init(config.log_format);

    let sessions = if config.auth_bypass {
        tracing::warn!("STOREFRONT_AUTH_BYPASS set; acting as dev admin");
        StaticSessionProvider::dev_admin()
    } else {
        StaticSessionProvider::signed_out()
    };

    let now = Utc::now();
    let ctx = StoreContext::load(config, now).context("loading store data")?;
    tracing::info!(
        products = ctx.catalog.len(),
        inventory = ctx.inventory.len(),
        deals = ctx.deals.len(),
        "store loaded"
    );

    let mut args = std::env::args().skip(1);
    let page_name = args.next().unwrap_or_else(|| "home".to_string());

    let page = match page_name.as_str() {
        "home" => Page::Home(home_page(&ctx)),
        "shop" => Page::Shop(shop_page(&ctx, &ShopParams::from_pairs(args)?)?),
        "product" => {
            let Some(id) = args.next() else {
                bail!("usage: storefront product <id>");
            };
            Page::ProductDetail(product_detail_page(&ctx, &id)?)
        }
        "categories" => Page::Categories(categories_page(&ctx)),
        "deals" => Page::Deals(deals_page(&ctx, now)?),
        "cart" => Page::Cart(cart_page(&ctx, &Cart::new())),
        "dashboard" => Page::Dashboard(dashboard_page(&ctx, &sessions)),
        "inventory" => Page::Inventory(inventory_page(
            &ctx,
            &sessions,
            &table_query_from_pairs(args)?,
        )),
        other => bail!(
            "unknown page '{other}' (expected home, shop, product, categories, deals, cart, dashboard or inventory)"
        ),
    };

    tracing::info!(page = %page_name, "rendering page");
    print!("{}", render(&page));
    Ok(())
}

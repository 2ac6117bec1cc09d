use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use scoro::models::{Product, Quote, QuoteLine};
use scoro::types::{Bool, DateTime, Decimal, LocalizedString, DEFAULT_LANG};
use scoro::{Scoro, Settings};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::new()?;
    let scoro = Scoro::from_settings(&settings)?;

    info!(company_id = %settings.scoro.company_id, "Starting product/quote walkthrough");

    println!("Create product: ");
    let product = scoro
        .products()
        .modify(&Product {
            code: Some("435345".to_string()),
            names: LocalizedString::single("Example product", DEFAULT_LANG),
            description: LocalizedString::single("Example product description", DEFAULT_LANG),
            is_active: Bool(true),
            modified_date: DateTime::now(),
            ..Product::default()
        })
        .await?;
    print_object(&product)?;
    let product_id = product.id.context("created product has no id")?;

    println!("Create quote: ");
    let quote = scoro
        .quotes()
        .modify(&Quote {
            currency: Some("USD".to_string()),
            description: Some("Sample description".to_string()),
            owner_id: Some(1),
            lines: vec![QuoteLine {
                product_id,
                amount: Decimal::from_f64(100.12)?,
                sum: Decimal::from_f64(1001.2)?,
                unit_price: Decimal::from(10_i64),
                comment: LocalizedString::single("Test comment", DEFAULT_LANG),
                ..QuoteLine::default()
            }],
            ..Quote::default()
        })
        .await?;
    print_object(&quote)?;
    let quote_id = quote.id.context("created quote has no id")?;

    println!("Remove quote: ");
    scoro.quotes().delete(quote_id).await?;
    println!("OK!");

    println!("Remove product: ");
    scoro.products().delete(product_id).await?;
    println!("OK!");

    Ok(())
}

fn print_object(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

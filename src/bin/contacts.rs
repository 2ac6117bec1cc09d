use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing_subscriber::EnvFilter;

use scoro::models::{Address, Contact};
use scoro::types::{Bool, Date, DateTime};
use scoro::{Scoro, Settings};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::new()?;
    let contacts = Scoro::from_settings(&settings)?.contacts();

    println!("List contacts: ");
    let listed = contacts.list(&(), 0, 3).await?;
    println!("{}", serde_json::to_string_pretty(&listed)?);

    println!("Create contact: ");
    let birthday = NaiveDate::from_ymd_opt(1984, 4, 3).context("invalid birthday")?;
    let mut contact = contacts
        .modify(&Contact {
            name: Some("Viktor".to_string()),
            lastname: Some("Ladochkin".to_string()),
            birthday: Date::new(birthday),
            contact_type: Some("person".to_string()),
            is_client: Some(Bool(true)),
            modified_date: DateTime::now(),
            sex: Some("M".to_string()),
            ..Contact::default()
        })
        .await?;
    println!("{}", serde_json::to_string_pretty(&contact)?);

    println!("Modify contact: ");
    contact.addresses = vec![Address {
        city: Some("Tomsk".to_string()),
        country: Some("Russia".to_string()),
        ..Address::default()
    }];
    let contact = contacts.modify(&contact).await?;
    println!("{}", serde_json::to_string_pretty(&contact)?);

    println!("Remove contact: ");
    let contact_id = contact.id.context("modified contact has no id")?;
    contacts.delete(contact_id).await?;
    println!("OK!");

    Ok(())
}

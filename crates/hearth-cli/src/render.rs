//! Terminal rendering of listings, details, and the user profile.

use hearth_core::listing::{PropertyDetail, PropertySummary};
use hearth_core::session::Session;

/// Formats a whole-unit price as "$1,234,567".
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${}", grouped)
}

pub fn print_listings(rows: &[PropertySummary]) {
    println!(
        "{:<10} {:<30} {:>12} {:<24} {:<12} {:<10}",
        "ID", "PROPERTY", "PRICE", "DETAILS", "TYPE", "STATUS"
    );
    for row in rows {
        println!(
            "{:<10} {:<30} {:>12} {:<24} {:<12} {:<10}",
            row.id,
            row.title,
            format_price(row.price),
            format!("{} bed / {} bath / {} sqft", row.bedrooms, row.bathrooms, row.sqft),
            row.kind,
            row.status.to_string(),
        );
        println!("{:<10} {}", "", row.address);
    }
}

pub fn print_detail(detail: &PropertyDetail) {
    let summary = &detail.summary;
    println!("{}", summary.title);
    println!("{}", summary.address);
    println!();
    println!("Price:        {}", format_price(summary.price));
    println!("Type:         {}", summary.kind);
    println!("Status:       {}", summary.status);
    println!("Bedrooms:     {}", summary.bedrooms);
    println!("Bathrooms:    {}", summary.bathrooms);
    println!("Square feet:  {}", summary.sqft);
    if let Some(year_built) = detail.year_built {
        println!("Year built:   {}", year_built);
    }
    if let Some(lot_size) = detail.lot_size {
        println!("Lot size:     {} sqft", lot_size);
    }
    if let Some(garage) = detail.garage {
        println!("Garage:       {} car(s)", garage);
    }
    if let Some(description) = &detail.description {
        println!();
        println!("{}", description);
    }
    if !detail.features.is_empty() {
        println!();
        println!("Features: {}", detail.features.join(", "));
    }
    if !detail.images.is_empty() {
        println!();
        println!("Images:");
        for image in &detail.images {
            println!("  {}", image);
        }
    }
}

pub fn print_profile(session: &Session) {
    let user = &session.user;
    println!("Name:            {}", user.name);
    println!("Email:           {}", user.email);
    println!(
        "Email verified:  {}",
        if user.email_verified { "yes" } else { "no" }
    );
    println!("Account created: {}", user.created_at.format("%Y-%m-%d"));
    println!(
        "Session expires: {}",
        session.info.expires_at.format("%Y-%m-%d %H:%M UTC")
    );
}

//! # Seed Data Generator
//!
//! Populates the database with sample back office data for development.
//!
//! ## Usage
//! ```bash
//! # Seed ./loja.db (or $LOJA_DB_PATH) with 50 customers (default)
//! cargo run -p loja-db --bin seed
//!
//! # Generate a custom number of customers
//! cargo run -p loja-db --bin seed -- --count 500
//!
//! # Specify database path
//! cargo run -p loja-db --bin seed -- --db ./data/loja.db
//! ```
//!
//! ## Generated Data
//! - One category per entry in `CATEGORIES`
//! - Every product in `PRODUCTS`, with cost 50-70% of the sale price
//! - `count` customers with well-formed, distinct CPFs
//!
//! Everything goes through [`BackOffice`], so seeded rows pass the same
//! checks as form submissions.

use std::env;

use loja_core::{CategoryInput, CustomerInput, Money, ProductInput};
use loja_db::{BackOffice, Database, DbConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Categories with a short description
const CATEGORIES: &[(&str, &str)] = &[
    ("Sutiãs", "Com e sem bojo"),
    ("Calcinhas", "Algodão, renda e microfibra"),
    ("Pijamas", "Curtos e longos"),
    ("Camisolas", ""),
    ("Meias", "Meia-calça e soquetes"),
    ("Moda praia", "Biquínis e maiôs"),
];

/// Product name, brand and sale price in cents
const PRODUCTS: &[(&str, &str, i64)] = &[
    ("Sutiã renda com bojo", "Lunar", 7990),
    ("Sutiã nadador", "Lunar", 5990),
    ("Sutiã amamentação", "Mamãe Bem", 8990),
    ("Calcinha algodão", "Lunar", 1990),
    ("Calcinha renda", "Delicada", 2990),
    ("Calcinha cintura alta", "Delicada", 3490),
    ("Pijama curto estampado", "Sonho Bom", 8990),
    ("Pijama longo flanela", "Sonho Bom", 12990),
    ("Camisola cetim", "", 9990),
    ("Camisola amamentação", "Mamãe Bem", 10990),
    ("Meia-calça fio 40", "Passo Leve", 2490),
    ("Soquete kit 3 pares", "Passo Leve", 2990),
    ("Biquíni cortininha", "Verão", 11990),
    ("Maiô decote costas", "Verão", 15990),
];

const FIRST_NAMES: &[&str] = &[
    "Ana", "Beatriz", "Camila", "Daniela", "Eduarda", "Fernanda", "Gabriela", "Helena",
    "Isabela", "Juliana", "Larissa", "Mariana", "Natália", "Patrícia", "Renata",
];

const LAST_NAMES: &[&str] = &[
    "Silva", "Souza", "Oliveira", "Santos", "Pereira", "Lima", "Costa", "Ferreira", "Almeida",
];

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,loja=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 50;
    let mut config = DbConfig::from_env()?;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(50);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    config.database_path = args[i + 1].clone().into();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Loja Back Office Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of customers to generate (default: 50)");
                println!("  -d, --db <PATH>    Database file path (default: $LOJA_DB_PATH or ./loja.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    info!(
        path = %config.database_path.display(),
        customers = count,
        "Seeding database"
    );

    let db = Database::new(config).await?;

    let existing = db.categories().count().await?;
    if existing > 0 {
        warn!(existing, "Database already has categories, skipping seed");
        println!("Delete the database file to regenerate.");
        return Ok(());
    }

    let office = BackOffice::new(db.clone());
    let start = std::time::Instant::now();

    for (name, description) in CATEGORIES {
        office
            .create_category(&CategoryInput::new(*name).description(*description))
            .await?;
    }

    for (seed, (name, brand, sale_cents)) in PRODUCTS.iter().enumerate() {
        let cost_pct = 50 + (seed * 7 % 21) as i64;
        let input = ProductInput::new(
            *name,
            Money::from_cents(sale_cents * cost_pct / 100),
            Money::from_cents(*sale_cents),
        )
        .brand(*brand);
        office.create_product(&input).await?;
    }

    let mut generated = 0;
    for seed in 0..count {
        let input = generate_customer(seed);
        if let Err(e) = office.register_customer(&input).await {
            warn!(cpf = %input.cpf, error = %e, "Skipping customer");
            continue;
        }
        generated += 1;
    }

    info!(
        categories = CATEGORIES.len(),
        products = PRODUCTS.len(),
        customers = generated,
        elapsed = ?start.elapsed(),
        "Seed complete"
    );

    db.close().await;
    Ok(())
}

/// Generates a customer with a distinct, well-formed CPF.
fn generate_customer(seed: usize) -> CustomerInput {
    let first = FIRST_NAMES[seed % FIRST_NAMES.len()];
    let last = LAST_NAMES[(seed / FIRST_NAMES.len()) % LAST_NAMES.len()];
    let name = format!("{} {}", first, last);

    let digits = format!("{:011}", 10_000_000_000u64 + (seed as u64) * 7_919);
    let cpf = format!(
        "{}.{}.{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11]
    );

    let mut input = CustomerInput::new(name, cpf);
    if seed % 3 != 0 {
        let email = format!(
            "{}.{}{}@example.com",
            first.to_lowercase(),
            last.to_lowercase(),
            seed
        );
        input = input.email(email);
    }
    if seed % 2 == 0 {
        input = input.phone(format!("(11) 9{:04}-{:04}", seed % 10_000, (seed * 37) % 10_000));
    }
    input
}

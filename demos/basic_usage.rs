//! # Basic Usage Example
//!
//! This example demonstrates the fundamental concepts of JobHaus:
//! - Connecting with a `DatabaseConfig`
//! - Ensuring the schema exists
//! - Basic CRUD operations on companies and jobs
//! - Partial updates through `UpdatePayload`
//!
//! This is the perfect starting point for new users. It expects a local
//! PostgreSQL instance (see the config below).

use jobhaus::prelude::*;
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🚀 JobHaus Basic Usage Example");
    println!("==============================");

    // 1. Setup Database Connection
    println!("\n📊 Step 1: Database Setup");
    println!("--------------------------");

    let config = DatabaseConfig::new(
        "localhost".to_string(),
        5432,
        "jobhaus".to_string(),
        "postgres".to_string(),
        "password".to_string(),
        1,  // min_connections
        5,  // max_connections
        30, // connection_timeout_seconds
        600,  // idle_timeout_seconds
        3600, // max_lifetime_seconds
    );

    let jobhaus = JobHaus::new(config).await?;
    jobhaus.ensure_schema().await?;
    jobhaus.health_check().await?;
    println!("✅ Connected and schema ready");

    // 2. Create a company
    println!("\n🏢 Step 2: Create a Company");
    println!("---------------------------");

    let _ = jobhaus.companies().remove("acme").await;
    let company = jobhaus
        .companies()
        .create(NewCompany {
            handle: "acme".to_string(),
            name: "Acme Corp".to_string(),
            description: Some("Anvils and rockets".to_string()),
            num_employees: Some(250),
            logo_url: None,
        })
        .await?;
    println!("✅ Created company: {} ({})", company.name, company.handle);

    // 3. Create jobs for it
    println!("\n💼 Step 3: Create Jobs");
    println!("----------------------");

    let tester = jobhaus
        .jobs()
        .create(NewJob {
            title: "Anvil Tester".to_string(),
            salary: Some(60_000),
            equity: None,
            company_handle: "acme".to_string(),
        })
        .await?;
    let engineer = jobhaus
        .jobs()
        .create(NewJob {
            title: "Rocket Engineer".to_string(),
            salary: Some(120_000),
            equity: Some(0.02),
            company_handle: "acme".to_string(),
        })
        .await?;
    println!("✅ Created jobs #{} and #{}", tester.id, engineer.id);

    // 4. Filtered listing
    println!("\n🔍 Step 4: Filtered Listing");
    println!("---------------------------");

    let filter = JobFilter {
        title: None,
        min_salary: Some(100_000),
        has_equity: Some(true),
    };
    let senior_jobs = jobhaus.jobs().find_all(Some(&filter)).await?;
    for job in &senior_jobs {
        println!(
            "  {} at {} ({:?})",
            job.title, job.company_handle, job.salary
        );
    }

    // 5. Partial update
    println!("\n✏️  Step 5: Partial Update");
    println!("--------------------------");

    let payload = UpdatePayload::new()
        .set("numEmployees", json!(300))
        .set("logoUrl", json!("https://example.com/acme.png"));
    let updated = jobhaus.companies().update("acme", &payload).await?;
    println!(
        "✅ {} now has {} employees",
        updated.name,
        updated.num_employees.unwrap_or(0)
    );

    // 6. Fetch a company with its jobs
    println!("\n📦 Step 6: Company With Jobs");
    println!("----------------------------");

    let with_jobs = jobhaus.companies().get("acme").await?;
    println!(
        "{} has {} open positions",
        with_jobs.company.name,
        with_jobs.jobs.len()
    );

    // 7. Cleanup
    println!("\n🧹 Step 7: Cleanup");
    println!("------------------");

    jobhaus.companies().remove("acme").await?;
    println!("✅ Removed company (jobs cascade)");

    Ok(())
}

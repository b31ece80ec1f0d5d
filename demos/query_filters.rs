//! # Query Construction Example
//!
//! Shows the SQL fragments the two builders produce, without touching a
//! database: the partial-update SET builder and the rule-driven WHERE
//! builder, including the validation failures they report.

use jobhaus::job_store::repositories::{COMPANY_FILTER_RULES, JOB_FILTER_RULES};
use jobhaus::prelude::*;
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🔧 JobHaus Query Construction Example");
    println!("=====================================");

    // Partial update: sparse payload -> SET fragment.
    let payload = UpdatePayload::new()
        .set("name", json!("Acme Corp"))
        .set("numEmployees", json!(300))
        .set("logoUrl", json!(null));
    let fragment = build_set_clause(
        &payload,
        &[("numEmployees", "num_employees"), ("logoUrl", "logo_url")],
    )?;
    println!("\nSET fragment:  {}", fragment.text());
    println!("bind values:   {:?}", fragment.values());

    // Company filters: typed filter -> WHERE fragment.
    let filter = CompanyFilter {
        name_like: Some("acme".to_string()),
        min_employees: Some(10),
        max_employees: Some(500),
    };
    let fragment = build_where_clause(&FilterRequest::from(&filter), &COMPANY_FILTER_RULES)?;
    println!("\ncompany WHERE: {}", fragment.where_clause());
    println!("bind values:   {:?}", fragment.values());

    // Job filters: the equity flag emits a static predicate, no value.
    let filter = JobFilter {
        title: Some("engineer".to_string()),
        min_salary: Some(90_000),
        has_equity: Some(true),
    };
    let fragment = build_where_clause(&FilterRequest::from(&filter), &JOB_FILTER_RULES)?;
    println!("\njob WHERE:     {}", fragment.where_clause());
    println!("bind values:   {:?}", fragment.values());

    // Validation: every unrecognized key is reported at once.
    let request = FilterRequest::new()
        .with("favoriteColor", json!("red"))
        .with("minSalary", json!(1))
        .with("shoeSize", json!(42));
    match build_where_clause(&request, &JOB_FILTER_RULES) {
        Err(err) => println!("\nrejected:      {err}"),
        Ok(_) => unreachable!("unrecognized keys must be rejected"),
    }

    // Validation: inconsistent ranges fail before any SQL is emitted.
    let request = FilterRequest::new()
        .with("minEmployees", json!(100))
        .with("maxEmployees", json!(10));
    match build_where_clause(&request, &COMPANY_FILTER_RULES) {
        Err(err) => println!("rejected:      {err}"),
        Ok(_) => unreachable!("min > max must be rejected"),
    }

    Ok(())
}

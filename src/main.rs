use crate::db::connection::{init_db, Database};
use crate::domain::classify::{classify, Classification};
use crate::domain::comparison::{compare, Cheaper};
use crate::domain::record::{AddressQuery, ResultRecord};
use crate::valuation::ZillowClient;

mod address;
mod db;
mod domain;
mod errors;
mod search;
mod valuation;

#[cfg(test)]
mod tests;

const DEFAULT_DB_PATH: &str = "utilicost.sqlite3";

fn usage() -> ! {
    eprintln!("Usage: utilicost [--json] <street address> <zipcode> [db path]");
    eprintln!("       utilicost --compare <address A> <zip A> <address B> <zip B> [db path]");
    std::process::exit(2);
}

fn main() {
    let mut positional = Vec::new();
    let mut as_json = false;
    let mut compare_mode = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => as_json = true,
            "--compare" => compare_mode = true,
            _ => positional.push(arg),
        }
    }

    if positional.len() < 2 {
        usage();
    }

    let db_path_index = if compare_mode { 4 } else { 2 };
    let db_path = positional
        .get(db_path_index)
        .cloned()
        .unwrap_or_else(|| DEFAULT_DB_PATH.to_string());

    let db = Database::new(db_path);
    if let Err(e) = init_db(&db, "sql/schema.sql") {
        eprintln!("❌ Database initialization failed: {e}");
        std::process::exit(1);
    }

    let client = match ZillowClient::new() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ Valuation client init failed: {e}");
            std::process::exit(1);
        }
    };

    if compare_mode {
        if positional.len() < 4 {
            usage();
        }
        let first = search::handle_search(
            &db,
            &client,
            &AddressQuery {
                raw_address: positional[0].clone(),
                zipcode: positional[1].clone(),
            },
        );
        let second = search::handle_search(
            &db,
            &client,
            &AddressQuery {
                raw_address: positional[2].clone(),
                zipcode: positional[3].clone(),
            },
        );

        print_report(&first);
        println!();
        print_report(&second);
        println!();
        print_comparison(&first, &second);
        return;
    }

    let query = AddressQuery {
        raw_address: positional[0].clone(),
        zipcode: positional[1].clone(),
    };
    let record = search::handle_search(&db, &client, &query);

    if as_json {
        match serde_json::to_string_pretty(&record) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("❌ Failed to serialize record: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    print_report(&record);
}

fn print_comparison(first: &ResultRecord, second: &ResultRecord) {
    let comparison = compare(first, second);
    match comparison.total_cost_delta {
        Some(delta) => {
            println!("Total cost difference (B minus A): {}", signed_dollars(delta));
            match comparison.cheaper() {
                Some(Cheaper::Previous) => {
                    println!("{} is the cheaper address.", first.cooked_address)
                }
                Some(Cheaper::Current) => {
                    println!("{} is the cheaper address.", second.cooked_address)
                }
                Some(Cheaper::Even) | None => println!("The two addresses cost the same."),
            }
        }
        None => println!("Not enough data to compare total costs."),
    }
}

fn signed_dollars(value: f64) -> String {
    if value < 0.0 {
        format!("-${}", -value)
    } else {
        format!("${value}")
    }
}

fn print_report(record: &ResultRecord) {
    match classify(record) {
        Classification::Complete => {
            println!("Full listing for {}:", record.cooked_address);
        }
        Classification::Empty => {
            println!("No data found for {}.", record.cooked_address);
            println!("Double-check the address, or resubmit it for manual review.");
        }
        Classification::Partial(_) => {
            println!(
                "Partial results for {} (missing figures shown as $--):",
                record.cooked_address
            );
        }
    }

    println!("Zipcode: {}", record.zipcode);
    println!("High: {}", dollars(record.high));
    println!("Low: {}", dollars(record.low));
    println!("Avg: {}", dollars(record.avg));
    println!("Rent Zestimate: {}", dollars(record.zestimate));
    println!("Cost per Sq Ft: {}", dollars(record.avg_utility_cost_per_sq_ft));
    println!("Total Monthly Cost: {}", dollars(record.total_cost));
}

fn dollars(value: f64) -> String {
    if value >= 0.0 {
        format!("${value}")
    } else {
        "$--".to_string()
    }
}

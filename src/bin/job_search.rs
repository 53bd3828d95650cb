use anyhow::{bail, Result};
use jobdata::JobStore;
use std::{env, process::exit};
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        print_usage(&args[0]);
        exit(1);
    }
    if let Err(e) = run(&args[1], &args[2], &args[3..]) {
        eprintln!("Error: {:#}", e);
        exit(1);
    }
}

fn print_usage(prog: &str) {
    eprintln!("Usage: {} <CSV_FILE> <COMMAND> [ARGS]", prog);
    eprintln!("Commands:");
    eprintln!("  fields                      list column names");
    eprintln!("  list <FIELD>                distinct values of FIELD");
    eprintln!("  search <TERM>               search every column for TERM");
    eprintln!("  search-in <COLUMN> <TERM>   search one column for TERM");
    eprintln!("  all                         dump every row");
}

fn run(csv_file: &str, command: &str, args: &[String]) -> Result<()> {
    let store = JobStore::new(csv_file);

    match (command, args) {
        ("fields", []) => {
            for header in store.headers() {
                println!("{}", header);
            }
        }
        ("list", [field]) => {
            let values = store.distinct_values(field);
            println!("{}", serde_json::to_string_pretty(&values)?);
        }
        ("search", [term]) => {
            let rows = store.find_by_value(term);
            println!("{}", serde_json::to_string_pretty(&rows)?);
            eprintln!("{} matching rows", rows.len());
        }
        ("search-in", [column, term]) => {
            let rows = store.find_by_column_and_value(column, term);
            println!("{}", serde_json::to_string_pretty(&rows)?);
            eprintln!("{} matching rows", rows.len());
        }
        ("all", []) => {
            let rows = store.all_rows();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        _ => bail!("unknown command or wrong arguments: {}", command),
    }

    // surface a failed load on stderr; the query output above is empty then
    if let jobdata::LoadStatus::Failed(msg) = store.load_status() {
        eprintln!("warning: load failed: {}", msg);
    }
    Ok(())
}

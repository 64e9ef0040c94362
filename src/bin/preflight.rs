use plant_records::infra::config::{Config, StoreBackend};
use plant_records::{PlantStore, PostgresPlantStore};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight -- [--init-schema]\n\
         \n\
         Requires env vars:\n\
           DATABASE_URL (unless PLANT_STORE=memory)\n\
         Optional:\n\
           PLANT_STORE, DB_MAX_CONNECTIONS, BIND_ADDR\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }
    let init_schema = args.iter().any(|a| a == "--init-schema");

    // Nice error messages if anything is missing.
    let config = Config::from_env()?;

    println!("> Preflight:");
    println!("  BIND_ADDR={}", config.bind_addr);
    println!("  DB_MAX_CONNECTIONS={}", config.max_connections);

    let database_url = match &config.store {
        StoreBackend::Memory => {
            println!("  PLANT_STORE=memory (nothing to check)");
            println!("> Preflight OK.");
            return Ok(());
        }
        StoreBackend::Postgres { database_url } => database_url,
    };
    println!("  PLANT_STORE=postgres");

    let store = PostgresPlantStore::connect(database_url, config.max_connections)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to DATABASE_URL: {}", e))?;
    store.ping().await?;
    println!("  Database is reachable.");

    if store.table_exists().await? {
        println!("  Table `plants` exists ({} rows).", store.count().await?);
    } else if init_schema {
        println!("  Table `plants` missing -> creating it...");
        store.ensure_schema().await?;
        println!("  Table `plants` created.");
    } else {
        return Err(anyhow::anyhow!(
            "Table `plants` does not exist. Re-run with --init-schema (the server also creates it on startup)"
        ));
    }

    println!("> Preflight OK.");
    Ok(())
}

use mimir::{startup, Config, EveId};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let mut ids: Vec<EveId> = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.parse() {
            Ok(id) => ids.push(id),
            Err(e) => {
                eprintln!("Invalid ID `{}`: {}", arg, e);
                std::process::exit(2);
            }
        }
    }

    let directory = match startup::build_directory(&config) {
        Ok(directory) => directory,
        Err(e) => {
            eprintln!("Failed to build ESI client: {}", e);
            std::process::exit(1);
        }
    };
    let resolver = startup::build_resolver(&config, directory);

    tracing::info!("Resolving {} IDs against {}", ids.len(), config.esi_url);

    let names = resolver.id_to_name_batch(&ids).await;
    for id in &ids {
        if let Some(name) = names.get(id) {
            println!("{}\t{}", id, name);
        }
    }
}

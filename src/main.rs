use std::env;
use serde_json::json;
use tracing::error;
use tracing_subscriber::EnvFilter;

pub fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();
    let source = match args.get(1) {
        Some(s) => s.clone(),
        None => env::var(gita_web::SOURCE_ENV_VAR).unwrap_or_default(),
    };
    let conf = json!({
        "source": source
    });
    if let Err(e) = rocket::execute(gita_web::rocket(conf).launch()) {
        error!("Server did not launch: {}", e);
        std::process::exit(1);
    }
}

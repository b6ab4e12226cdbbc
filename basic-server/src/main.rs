use std::sync::Arc;
use std::time::Duration;
use std::{env, path, process};

use folio::AppBuilder;
use folio_content_adapter_memory::ContentAdapterMemory;

pub struct Config {
	pub listen: String,
	pub data_dir: path::PathBuf,
	pub admin_user: String,
	pub admin_password: String,
	pub session_ttl: Duration,
}

impl Config {
	fn from_env() -> Result<Self, String> {
		let session_ttl = match env::var("SESSION_TTL_SECS") {
			Ok(secs) => Duration::from_secs(
				secs.parse().map_err(|_| format!("SESSION_TTL_SECS is not a number: {}", secs))?,
			),
			Err(_) => Duration::from_secs(3600),
		};
		Ok(Config {
			listen: env::var("LISTEN").unwrap_or("127.0.0.1:8080".to_string()),
			data_dir: path::PathBuf::from(env::var("DATA_DIR").unwrap_or("./data".to_string())),
			admin_user: env::var("ADMIN_USER").unwrap_or("admin".to_string()),
			admin_password: env::var("ADMIN_PASSWORD").unwrap_or("admin123".to_string()),
			session_ttl,
		})
	}
}

#[tokio::main]
async fn main() {
	let mut builder = AppBuilder::new();

	let config = match Config::from_env() {
		Ok(config) => config,
		Err(err) => {
			tracing::error!("FATAL: {}", err);
			process::exit(1);
		}
	};
	if env::var("ADMIN_PASSWORD").is_err() {
		tracing::warn!("ADMIN_PASSWORD not set, using the default admin password");
	}

	builder
		.listen(config.listen)
		.data_dir(config.data_dir)
		.credentials(config.admin_user, config.admin_password)
		.session_ttl(config.session_ttl)
		.content_adapter(Arc::new(ContentAdapterMemory::seeded()));

	if let Err(err) = builder.run().await {
		tracing::error!("FATAL: {}", err);
		process::exit(1);
	}
}

// vim: ts=4

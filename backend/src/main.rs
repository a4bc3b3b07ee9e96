use std::{net::{IpAddr, Ipv4Addr, SocketAddr}, time::Duration};
use farm_backend::{router, AppState, Submitter};
use tracing::Level;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	macro_rules! dotenv_num{
		($key:expr, $default:expr, $type:ident) => {
			dotenv::var($key).ok()
				.and_then(|v| v.parse::<$type>().ok())
				.unwrap_or($default)
		}
	}

	// a missing .env is fine; everything has a default
	if let Err(e) = dotenv::dotenv() {
		eprintln!("Not reading .env: {e}");
	}

	let log_level = dotenv_num!("LOG_LEVEL", Level::INFO, Level);
	tracing_subscriber::fmt()
		.with_max_level(log_level)
		.init();

	let backend_port = dotenv_num!("BACKEND_PORT", 8080, u16);
	let bind_addr = dotenv_num!("BIND_ADDR", IpAddr::V4(Ipv4Addr::LOCALHOST), IpAddr);
	let contact_delay = dotenv_num!("CONTACT_DELAY_MS", 1000, u64);
	let force_failure = dotenv_num!("CONTACT_FORCE_FAILURE", false, bool);

	let site_url = dotenv::var("SITE_URL")
		.map(|url| url.trim_end_matches('/').to_owned())
		.unwrap_or_else(|_| "https://glennleighfarms.com".into());

	let asset_dir = dotenv::var("ASSET_DIR").ok().and_then(|d| (!d.is_empty()).then_some(d));

	if force_failure {
		tracing::warn!("CONTACT_FORCE_FAILURE is set; every contact form submission will fail");
	}

	let submitter = Submitter {
		delay: Duration::from_millis(contact_delay),
		force_failure
	};
	let state = AppState::new(submitter, site_url);

	let app = router(state, asset_dir);

	let addr = SocketAddr::from((bind_addr, backend_port));
	let listener = tokio::net::TcpListener::bind(addr).await?;

	tracing::info!("Serving axum on {addr}...");

	axum::serve(listener, app).await?;

	Ok(())
}

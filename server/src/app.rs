//! App builder - constructs and runs the Folio application

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use folio_content::ContentService;
use folio_core::{
	AuthState, LoginConfig, LoginService, RateLimitConfig, RateLimiter, RuleSet, SessionConfig,
	SessionEvent, SessionManager, SessionWatcher, StaticCredentialVerifier,
};
use folio_session_adapter_fs::SessionAdapterFs;
use folio_types::clock::{Clock, SystemClock};
use folio_types::content_adapter::ContentAdapter;
use folio_types::session_adapter::SessionAdapter;

use crate::prelude::*;
use crate::routes;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub rules: Arc<RuleSet>,
	pub login: LoginService,
	pub sessions: Arc<SessionManager>,
	pub content: ContentService,
	/// Whether an admin is logged in, kept in sync by the login handlers and the session watcher
	pub auth: AuthState,
}

pub type App = Arc<AppState>;

pub struct AppBuilderOpts {
	listen: Box<str>,
	data_dir: Box<Path>,
	admin_user: Box<str>,
	admin_password: Box<str>,
	session: SessionConfig,
	watch_interval: Duration,
	login: LoginConfig,
	rate_limit: RateLimitConfig,
}

pub struct AppBuilder {
	opts: AppBuilderOpts,
	session_adapter: Option<Arc<dyn SessionAdapter>>,
	content_adapter: Option<Arc<dyn ContentAdapter>>,
	clock: Arc<dyn Clock>,
}

impl AppBuilder {
	pub fn new() -> Self {
		// Several apps may be built in one process (tests), only the first one installs it
		let _ = tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_target(false)
			.try_init();
		AppBuilder {
			opts: AppBuilderOpts {
				listen: "127.0.0.1:8080".into(),
				data_dir: PathBuf::from("./data").into(),
				admin_user: "admin".into(),
				admin_password: "admin123".into(),
				session: SessionConfig::default(),
				watch_interval: Duration::from_secs(60),
				login: LoginConfig::default(),
				rate_limit: RateLimitConfig::default(),
			},
			session_adapter: None,
			content_adapter: None,
			clock: Arc::new(SystemClock),
		}
	}

	// Opts
	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self {
		self.opts.listen = listen.into();
		self
	}

	/// Directory of the default file based session store
	pub fn data_dir(&mut self, data_dir: impl Into<Box<Path>>) -> &mut Self {
		self.opts.data_dir = data_dir.into();
		self
	}

	pub fn credentials(
		&mut self,
		username: impl Into<Box<str>>,
		password: impl Into<Box<str>>,
	) -> &mut Self {
		self.opts.admin_user = username.into();
		self.opts.admin_password = password.into();
		self
	}

	pub fn session_ttl(&mut self, ttl: Duration) -> &mut Self {
		self.opts.session.ttl = ttl;
		self
	}

	pub fn watch_interval(&mut self, interval: Duration) -> &mut Self {
		self.opts.watch_interval = interval;
		self
	}

	pub fn login_config(&mut self, config: LoginConfig) -> &mut Self {
		self.opts.login = config;
		self
	}

	pub fn rate_limit_config(&mut self, config: RateLimitConfig) -> &mut Self {
		self.opts.rate_limit = config;
		self
	}

	// Adapters
	pub fn session_adapter(&mut self, session_adapter: Arc<dyn SessionAdapter>) -> &mut Self {
		self.session_adapter = Some(session_adapter);
		self
	}

	pub fn content_adapter(&mut self, content_adapter: Arc<dyn ContentAdapter>) -> &mut Self {
		self.content_adapter = Some(content_adapter);
		self
	}

	pub fn clock(&mut self, clock: Arc<dyn Clock>) -> &mut Self {
		self.clock = clock;
		self
	}

	/// Builds the shared state without serving it
	pub async fn build(self) -> ClResult<App> {
		let opts = self.opts;
		let Some(content_adapter) = self.content_adapter else {
			error!("FATAL: No content adapter configured");
			return Err(Error::ConfigError("No content adapter configured".to_string()));
		};
		if opts.admin_password.is_empty() {
			error!("FATAL: Empty admin password");
			return Err(Error::ConfigError("Empty admin password".to_string()));
		}
		let session_adapter: Arc<dyn SessionAdapter> = match self.session_adapter {
			Some(adapter) => adapter,
			None => Arc::new(SessionAdapterFs::new(opts.data_dir.join("sessions").into()).await?),
		};

		let rules = Arc::new(RuleSet::standard()?);
		let sessions = Arc::new(SessionManager::with_clock(
			session_adapter,
			opts.session,
			self.clock.clone(),
		));
		let limiter = Arc::new(RateLimiter::with_clock(opts.rate_limit, self.clock.clone()));
		let verifier = Arc::new(StaticCredentialVerifier::new(opts.admin_user, opts.admin_password));
		let login =
			LoginService::new(rules.clone(), limiter, sessions.clone(), verifier, opts.login);
		let content = ContentService::with_clock(content_adapter, rules.clone(), self.clock);

		// A session surviving a restart still counts as logged in
		let auth = AuthState::new();
		auth.set_authenticated(sessions.get_session().await.is_some());

		Ok(Arc::new(AppState { rules, login, sessions, content, auth }))
	}

	pub async fn run(self) -> ClResult<()> {
		info!("Folio V{}", VERSION);

		let listen = self.opts.listen.clone();
		let watch_interval = self.opts.watch_interval;
		let app = self.build().await?;

		let (watcher, events) =
			SessionWatcher::spawn(app.sessions.clone(), app.auth.clone(), watch_interval);
		let event_logger = tokio::spawn(async move {
			while let Ok(event) = events.recv_async().await {
				match event {
					SessionEvent::Expired => info!("Admin session expired"),
					SessionEvent::ExpiringSoon { remaining } => {
						debug!("Admin session expires in {}s", remaining.as_secs());
					}
				}
			}
		});

		let router = routes::init(app);
		let listener = tokio::net::TcpListener::bind(listen.as_ref()).await?;
		info!("Listening on {}", listen);
		axum::serve(listener, router.into_make_service_with_connect_info::<SocketAddr>())
			.with_graceful_shutdown(shutdown_signal())
			.await?;

		info!("Shutting down");
		watcher.stop().await;
		if let Err(err) = event_logger.await {
			warn!("session event logger failed: {}", err);
		}
		Ok(())
	}
}

impl Default for AppBuilder {
	fn default() -> Self {
		Self::new()
	}
}

async fn shutdown_signal() {
	if let Err(err) = tokio::signal::ctrl_c().await {
		error!("Failed to listen for shutdown signal: {}", err);
		std::future::pending::<()>().await;
	}
}

// vim: ts=4

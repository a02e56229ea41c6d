use std::sync::Arc;
use std::time::Duration;

use metadata::{GenreMap, LanguageMap, MetadataProvider, OmdbProvider, TmdbProvider};
use omdb::OmdbClient;
use sqlx::SqlitePool;
use tmdb::TmdbClient;

use crate::infra::Config;
use crate::services::{create_notifier, CrawlService, NotifierHandle};

/// Infrastructure layer - core dependencies
pub struct AppInfra {
    pub db: SqlitePool,
    pub config: Arc<Config>,
}

/// API clients layer - external service clients
pub struct AppClients {
    pub tmdb: Arc<TmdbClient>,
    pub omdb: Arc<OmdbClient>,
}

/// Business services layer - core application services
#[derive(Clone)]
pub struct AppServices {
    pub crawl: Arc<CrawlService>,
    pub notifier: NotifierHandle,
    pub languages: Arc<LanguageMap>,
}

/// Application state - organized into logical groups
#[derive(Clone)]
pub struct AppState {
    pub infra: Arc<AppInfra>,
    pub clients: Arc<AppClients>,
    pub services: AppServices,
}

impl AppState {
    pub fn new(db: SqlitePool, config: Config) -> Self {
        let config = Arc::new(config);

        let http_client = build_http_client(&config);
        let clients = Arc::new(build_api_clients(&config, &http_client));
        let notifier = create_notifier(http_client, config.result_webhook_url.clone());
        let providers = build_provider_registry(&config, &clients);

        let crawl = Arc::new(CrawlService::new(db.clone(), providers, notifier.clone()));

        Self {
            infra: Arc::new(AppInfra {
                db,
                config,
            }),
            clients,
            services: AppServices {
                crawl,
                notifier,
                languages: Arc::new(LanguageMap::defaults()),
            },
        }
    }
}

/// Build the shared HTTP client. The request timeout set here is the
/// per-provider deadline; the coordinator imposes none of its own.
fn build_http_client(config: &Config) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.provider_timeout_secs))
        .build()
        .expect("Failed to build HTTP client")
}

/// Build all external API clients
fn build_api_clients(config: &Config, http_client: &reqwest::Client) -> AppClients {
    let tmdb = Arc::new(
        TmdbClient::new(http_client.clone(), config.tmdb.token.clone())
            .with_lang(config.tmdb.language.clone()),
    );
    let omdb = Arc::new(OmdbClient::new(
        http_client.clone(),
        config.omdb.token.clone(),
    ));

    AppClients { tmdb, omdb }
}

/// Build the provider registry, constructed once at startup.
///
/// The vector order is the merge priority order: TMDb first, OMDb
/// second.
fn build_provider_registry(
    config: &Config,
    clients: &AppClients,
) -> Vec<Arc<dyn MetadataProvider>> {
    vec![
        Arc::new(TmdbProvider::new(
            Arc::clone(&clients.tmdb),
            GenreMap::tmdb_tv(),
            config.tmdb.cast_limit,
        )),
        Arc::new(OmdbProvider::new(Arc::clone(&clients.omdb))),
    ]
}

use anyhow::Result;
use once_cell::sync::OnceCell;
use std::path::PathBuf;
use std::sync::Arc;
use trackdeck_runtime::{
    Config, DashboardClient, HttpClient, LocalClient, require_source, resolve_api_base,
    resolve_data_file,
};

/// Shared command state: resolved configuration, the data-service client,
/// and the async runtime the sync command handlers block on.
pub struct ExecutionContext {
    api_base_flag: Option<String>,
    data_flag: Option<PathBuf>,
    config: OnceCell<Config>,
    client: OnceCell<Arc<dyn DashboardClient>>,
    runtime: tokio::runtime::Runtime,
}

impl ExecutionContext {
    pub fn new(api_base: Option<String>, data: Option<PathBuf>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        Ok(Self {
            api_base_flag: api_base,
            data_flag: data,
            config: OnceCell::new(),
            client: OnceCell::new(),
            runtime,
        })
    }

    fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| Ok(Config::load()?))
    }

    /// Resolve the client once: an explicit data file wins over HTTP so the
    /// offline path stays predictable, then flag > env > config per source.
    pub fn client(&self) -> Result<Arc<dyn DashboardClient>> {
        let client = self.client.get_or_try_init(|| -> Result<_> {
            let config = self.config()?;
            let api_base = resolve_api_base(self.api_base_flag.as_deref(), config);
            let data_file = resolve_data_file(self.data_flag.as_deref(), config);
            require_source(&api_base, &data_file)?;

            let client: Arc<dyn DashboardClient> = match data_file {
                Some(path) => Arc::new(LocalClient::from_path(&path)?),
                None => Arc::new(HttpClient::new(api_base.expect("checked by require_source"))),
            };
            Ok(client)
        })?;
        Ok(Arc::clone(client))
    }

    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}

//! Application context for the Bread Board CLI.
//!
//! Bundles the parsed arguments with lazily-resolved config, anchor and API
//! so handlers don't thread them through every call.

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use once_cell::unsync::OnceCell;
use tracing::info;

use breadboard_core::{DashboardApi, Layout, MockApi};

use crate::cli::Cli;
use crate::config::{load_config, write_config, BreadboardConfig};
use crate::ui::progress::with_spinner;
use crate::ui::UiContext;

use super::resolver::{
    missing_config_error, parse_timezone, resolve_anchor, resolve_config_path, ConfigLocation,
};

pub struct AppContext<'a> {
    cli: &'a Cli,
    ui: OnceCell<UiContext>,
    location: OnceCell<ConfigLocation>,
    config: OnceCell<BreadboardConfig>,
    api: OnceCell<MockApi>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            ui: OnceCell::new(),
            location: OnceCell::new(),
            config: OnceCell::new(),
            api: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    pub fn ui(&self) -> &UiContext {
        self.ui.get_or_init(|| {
            UiContext::from_env(
                self.cli.json,
                self.cli.format.as_deref(),
                self.cli.no_color,
                self.cli.ascii,
            )
        })
    }

    pub fn config_location(&self) -> anyhow::Result<&ConfigLocation> {
        self.location
            .get_or_try_init(|| resolve_config_path(self.cli))
    }

    /// The config file, or defaults when the XDG file does not exist.
    ///
    /// A location chosen with `--config` or `BREADBOARD_CONFIG` must exist.
    pub fn config(&self) -> anyhow::Result<&BreadboardConfig> {
        self.config.get_or_try_init(|| {
            let location = self.config_location()?;
            if location.explicit && !location.path.exists() {
                return Err(missing_config_error(&location.path).into());
            }
            load_config(&location.path)
        })
    }

    pub fn anchor(&self) -> anyhow::Result<DateTime<Utc>> {
        Ok(resolve_anchor(self.cli, self.config()?)?)
    }

    /// Display timezone from `[ui] timezone`; UTC when unset.
    pub fn timezone(&self) -> anyhow::Result<Option<Tz>> {
        match self.config()?.ui.timezone.as_deref() {
            Some(name) => Ok(Some(parse_timezone(name)?)),
            None => Ok(None),
        }
    }

    /// The mock API, built on first use.
    pub fn api(&self) -> anyhow::Result<&MockApi> {
        self.api.get_or_try_init(|| {
            let anchor = self.anchor()?;
            let latency = Duration::from_millis(self.config()?.api.latency_ms);
            info!(%anchor, latency_ms = latency.as_millis() as u64, "Building dataset");
            Ok(MockApi::new(anchor).with_latency(latency))
        })
    }

    /// Run a query against the API behind a spinner.
    pub fn fetch<T>(
        &self,
        message: &str,
        query: impl FnOnce(&dyn DashboardApi) -> T,
    ) -> anyhow::Result<T> {
        let api = self.api()?;
        let latency = api.latency();
        let api: &dyn DashboardApi = api;
        Ok(with_spinner(self.ui(), message, latency, || query(api)))
    }

    /// The persisted dashboard layout.
    pub fn layout(&self) -> anyhow::Result<Layout> {
        Ok(self.config()?.dashboard.layout())
    }

    /// Persist `layout` into the config file, keeping every other section.
    pub fn save_layout(&self, layout: &Layout) -> anyhow::Result<PathBuf> {
        let mut config = self.config()?.clone();
        config.dashboard = layout.clone().into();
        let path = self.config_location()?.path.clone();
        write_config(&path, &config)?;
        info!(path = %path.display(), widgets = layout.widgets.len(), "Saved layout");
        Ok(path)
    }
}

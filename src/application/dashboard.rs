//! Dashboard coordinator: one method per page panel, each tying a fetch to
//! its render target. Panels write disjoint DOM regions and never depend on
//! each other.

use crate::domain::{
    logging::LogComponent,
    stocks::services::{gainer_badge, loser_badge},
    stocks::{Month, StockCategory},
};
use crate::infrastructure::{dom, http::DashboardHttpClient, rendering::SectorPieRenderer};
use crate::{log_debug, log_error, log_warn};
use std::cell::{Cell, RefCell};
use web_sys::AbortController;

const SECTOR_CHART_WIDTH: u32 = 600;
const SECTOR_CHART_HEIGHT: u32 = 400;

thread_local! {
    /// Monotonic id of the latest search; responses carrying an older id
    /// are discarded instead of overwriting newer results.
    static SEARCH_EPOCH: Cell<u64> = const { Cell::new(0) };

    /// Abort handle of the in-flight search, replaced on every new search.
    static SEARCH_ABORT: RefCell<Option<AbortController>> = const { RefCell::new(None) };
}

#[derive(Clone, Default)]
pub struct DashboardService {
    client: DashboardHttpClient,
}

impl DashboardService {
    pub fn new() -> Self {
        Self {
            client: DashboardHttpClient::new(),
        }
    }

    pub fn with_client(client: DashboardHttpClient) -> Self {
        Self { client }
    }

    /// Category search behind the search button. Shows the loading label and
    /// disables the button for the duration; on any failure the label is
    /// hidden and the button re-enabled, with the table left untouched.
    pub async fn run_search(&self, category: &str) {
        let month = match dom::month_input_value() {
            Ok(value) => Month::from(value),
            Err(e) => {
                log_error!(
                    LogComponent::Application("Search"),
                    "Cannot read month input: {}",
                    e
                );
                return;
            }
        };

        if let Err(e) = dom::show_loading_label() {
            log_warn!(
                LogComponent::Application("Search"),
                "Cannot show loading label: {}",
                e
            );
        }
        if let Err(e) = dom::set_search_button_disabled(true) {
            log_warn!(
                LogComponent::Application("Search"),
                "Cannot disable search button: {}",
                e
            );
        }

        let epoch = SEARCH_EPOCH.with(|current| {
            current.set(current.get() + 1);
            current.get()
        });

        // A newer search supersedes the in-flight one
        let controller = AbortController::new().ok();
        SEARCH_ABORT.with(|slot| {
            if let Some(previous) = slot.replace(controller.clone()) {
                previous.abort();
            }
        });
        let signal = controller.as_ref().map(|c| c.signal());

        let result = self
            .client
            .get_stocks(category, Some(&month), signal.as_ref())
            .await;

        let is_stale = SEARCH_EPOCH.with(|current| current.get() != epoch);
        if is_stale {
            log_debug!(
                LogComponent::Application("Search"),
                "Discarding stale search response (epoch {})",
                epoch
            );
            return;
        }

        if let Err(e) = dom::hide_loading_label() {
            log_warn!(
                LogComponent::Application("Search"),
                "Cannot hide loading label: {}",
                e
            );
        }
        if let Err(e) = dom::set_search_button_disabled(false) {
            log_warn!(
                LogComponent::Application("Search"),
                "Cannot enable search button: {}",
                e
            );
        }

        match result {
            Ok(stocks) => {
                if let Err(e) = dom::render_search_table(&stocks) {
                    log_error!(
                        LogComponent::Application("Search"),
                        "Failed to render search table: {}",
                        e
                    );
                }
            }
            Err(e) => {
                // Table keeps its previous contents
                log_error!(
                    LogComponent::Application("Search"),
                    "Error fetching data: {}",
                    e
                );
            }
        }
    }

    /// ATH ticker strip: unfiltered listing rendered as inline badges.
    pub async fn load_ath_strip(&self) {
        match self
            .client
            .get_stocks(StockCategory::All.as_query_value(), None, None)
            .await
        {
            Ok(stocks) => {
                if let Err(e) = dom::render_ath_strip(&stocks) {
                    log_error!(
                        LogComponent::Application("AthStrip"),
                        "Failed to render ATH strip: {}",
                        e
                    );
                }
            }
            Err(e) => {
                log_error!(
                    LogComponent::Application("AthStrip"),
                    "Error fetching ATH stocks: {}",
                    e
                );
            }
        }
    }

    /// Top movers: gainers and losers rendered into their own panels.
    pub async fn load_top_movers(&self) {
        match self.client.get_top_stocks().await {
            Ok(top) => {
                let gainers: Vec<String> = top.gainers.iter().map(gainer_badge).collect();
                let losers: Vec<String> = top.losers.iter().map(loser_badge).collect();

                if let Err(e) = dom::render_mover_badges(dom::ids::TOP_GAINERS, "stock-up", &gainers)
                {
                    log_error!(
                        LogComponent::Application("TopMovers"),
                        "Failed to render gainers: {}",
                        e
                    );
                }
                if let Err(e) = dom::render_mover_badges(dom::ids::TOP_LOSERS, "stock-down", &losers)
                {
                    log_error!(
                        LogComponent::Application("TopMovers"),
                        "Failed to render losers: {}",
                        e
                    );
                }
            }
            Err(e) => {
                log_error!(
                    LogComponent::Application("TopMovers"),
                    "Error fetching top stocks: {}",
                    e
                );
            }
        }
    }

    /// Sector pie chart drawn into the chart canvas.
    pub async fn load_sector_chart(&self) {
        match self.client.get_sector_data().await {
            Ok(breakdown) => {
                let renderer = SectorPieRenderer::new(
                    dom::ids::SECTOR_CHART.to_string(),
                    SECTOR_CHART_WIDTH,
                    SECTOR_CHART_HEIGHT,
                );
                if let Err(e) = renderer.render(&breakdown) {
                    log_error!(
                        LogComponent::Application("SectorChart"),
                        "Failed to render sector chart: {:?}",
                        e
                    );
                }
            }
            Err(e) => {
                log_error!(
                    LogComponent::Application("SectorChart"),
                    "Error fetching sector data: {}",
                    e
                );
            }
        }
    }
}

/// Fire the three load-time panels concurrently; none depends on another.
pub fn bootstrap_panels() {
    use wasm_bindgen_futures::spawn_local;

    let service = DashboardService::new();

    let ath = service.clone();
    spawn_local(async move { ath.load_ath_strip().await });

    let movers = service.clone();
    spawn_local(async move { movers.load_top_movers().await });

    spawn_local(async move { service.load_sector_chart().await });
}

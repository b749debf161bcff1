use shared::ChartGeometry;

/// `<meta>` tag the host page can use to point the dashboard at another API origin
pub const API_BASE_META: &str = "dashboard-api-base";

/// Runtime settings for the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Prefix for every endpoint; empty means same-origin
    pub api_base_url: String,
    pub chart_width: u32,
    pub chart_height: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            chart_width: 800,
            chart_height: 350,
        }
    }
}

impl DashboardConfig {
    /// Defaults, overridden by whatever the host page declares
    pub fn from_document() -> Self {
        let mut config = Self::default();
        if let Some(base) = read_meta(API_BASE_META) {
            config.api_base_url = base;
        }
        config
    }

    pub fn chart_geometry(&self) -> ChartGeometry {
        ChartGeometry::new(self.chart_width, self.chart_height)
    }
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()??;
    element
        .get_attribute("content")
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}

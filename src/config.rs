use std::path::PathBuf;
use std::time::Duration;

/// One tracked stock position: the ticker and its static cost basis.
#[derive(Debug, Clone)]
pub struct Holding {
    pub symbol: String,
    pub cost_basis: f64,
}

/// Settings for the optional e-paper screenshot step.
#[derive(Debug, Clone)]
pub struct ScreenshotConfig {
    pub enabled: bool,
    /// Headless browser binary used to capture the page.
    pub browser_path: String,
    /// External command handed the screenshot path (e.g. a display driver
    /// script); skipped when unset.
    pub display_command: Option<String>,
    pub output_path: PathBuf,
    pub viewport: (u32, u32),
    pub interval: Duration,
}

/// Full dashboard configuration.
///
/// Ships with working defaults; every value can be overridden via
/// `DASHBOARD_*` environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Directory served over HTTP; generated files are written here too.
    pub public_dir: PathBuf,
    pub holdings: Vec<Holding>,
    pub cities: Vec<String>,
    pub stock_interval: Duration,
    pub weather_interval: Duration,
    pub screenshot: ScreenshotConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            public_dir: PathBuf::from("public"),
            holdings: default_holdings(),
            cities: default_cities(),
            stock_interval: Duration::from_secs(15 * 60),
            weather_interval: Duration::from_secs(30),
            screenshot: ScreenshotConfig {
                enabled: false,
                browser_path: "/usr/bin/chromium".to_string(),
                display_command: None,
                output_path: PathBuf::from("images/background.png"),
                viewport: (800, 480),
                interval: Duration::from_secs(60),
            },
        }
    }
}

impl Config {
    /// Load configuration from environment variables with defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("DASHBOARD_HOST") {
            config.host = host;
        }
        if let Ok(port) = std::env::var("DASHBOARD_PORT") {
            if let Ok(p) = port.parse() {
                config.port = p;
            }
        }
        if let Ok(dir) = std::env::var("DASHBOARD_PUBLIC_DIR") {
            config.public_dir = PathBuf::from(dir);
        }
        if let Ok(holdings) = std::env::var("DASHBOARD_HOLDINGS") {
            if let Some(parsed) = parse_holdings(&holdings) {
                config.holdings = parsed;
            }
        }
        if let Ok(cities) = std::env::var("DASHBOARD_CITIES") {
            let parsed: Vec<String> = cities
                .split(',')
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .collect();
            if !parsed.is_empty() {
                config.cities = parsed;
            }
        }
        if let Ok(secs) = std::env::var("DASHBOARD_STOCK_INTERVAL_SECS") {
            if let Ok(s) = secs.parse() {
                config.stock_interval = Duration::from_secs(s);
            }
        }
        if let Ok(secs) = std::env::var("DASHBOARD_WEATHER_INTERVAL_SECS") {
            if let Ok(s) = secs.parse() {
                config.weather_interval = Duration::from_secs(s);
            }
        }
        if let Ok(enabled) = std::env::var("DASHBOARD_SCREENSHOT_ENABLED") {
            config.screenshot.enabled = enabled == "1" || enabled.eq_ignore_ascii_case("true");
        }
        if let Ok(browser) = std::env::var("DASHBOARD_SCREENSHOT_BROWSER") {
            config.screenshot.browser_path = browser;
        }
        if let Ok(cmd) = std::env::var("DASHBOARD_DISPLAY_COMMAND") {
            config.screenshot.display_command = Some(cmd);
        }
        if let Ok(secs) = std::env::var("DASHBOARD_SCREENSHOT_INTERVAL_SECS") {
            if let Ok(s) = secs.parse() {
                config.screenshot.interval = Duration::from_secs(s);
            }
        }

        config
    }

    /// Full server bind address.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// URL of the served front page, used by the screenshot step.
    pub fn page_url(&self) -> String {
        format!("http://127.0.0.1:{}/index.html", self.port)
    }

    pub fn stock_output_path(&self) -> PathBuf {
        self.public_dir.join("stock-data.json")
    }

    pub fn weather_output_path(&self) -> PathBuf {
        self.public_dir.join("weather-data.json")
    }

    pub fn graph_output_path(&self) -> PathBuf {
        self.public_dir.join("weather-graph.png")
    }
}

/// Parse `"SYM:COST,SYM:COST"` into holdings; `None` if nothing parses.
fn parse_holdings(raw: &str) -> Option<Vec<Holding>> {
    let holdings: Vec<Holding> = raw
        .split(',')
        .filter_map(|entry| {
            let (symbol, cost) = entry.split_once(':')?;
            let cost_basis = cost.trim().parse().ok()?;
            Some(Holding {
                symbol: symbol.trim().to_string(),
                cost_basis,
            })
        })
        .collect();

    if holdings.is_empty() {
        None
    } else {
        Some(holdings)
    }
}

fn default_holdings() -> Vec<Holding> {
    [
        ("AAPL", 185.25),
        ("AMZN", 179.31),
        ("DASH", 111.56),
        ("FSELX", 23.29),
        ("GOOGL", 149.76),
        ("NOW", 750.00),
        ("NVDA", 102.45),
        ("RDDT", 48.08),
    ]
    .iter()
    .map(|(symbol, cost_basis)| Holding {
        symbol: symbol.to_string(),
        cost_basis: *cost_basis,
    })
    .collect()
}

fn default_cities() -> Vec<String> {
    [
        "Albuquerque, Nm",
        "Sandia Peak, Nm",
        "Roswell, Nm",
        "Los Angeles, Ca",
        "San Diego, Ca",
        "Crown Point, Ca",
        "Death Valley, Ca",
        "Honolulu, Hi",
        "Waimea Bay, Hi",
        "New York, Ny",
        "Seattle, Wa",
        "Chicago, Il",
        "Denver, Co",
        "Colorado Springs, Co",
        "Phoenix, Az",
        "Yuma, Az",
        "Anchorage, Ak",
        "Prudhoe Bay, Ak",
        "El Alto, Bolivia",
        "Paris, France",
        "Tokyo, Japan",
        "London, En",
        "Stockholm, Sweden",
        "Amsterdam, Netherlands",
        "Auckland, New Zealand",
        "Melbourne",
        "Teahupo'o, Tahiti",
        "McMurdo Station",
        "North Pole",
        "South Pole",
    ]
    .iter()
    .map(|c| c.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.holdings.len(), 8);
        assert_eq!(config.cities.len(), 30);
        assert!(!config.screenshot.enabled);
        assert_eq!(
            config.stock_output_path(),
            PathBuf::from("public/stock-data.json")
        );
    }

    #[test]
    fn test_parse_holdings() {
        let parsed = parse_holdings("AAPL:185.25, MSFT:310.1").unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].symbol, "AAPL");
        assert_eq!(parsed[0].cost_basis, 185.25);
        assert_eq!(parsed[1].symbol, "MSFT");

        assert!(parse_holdings("garbage").is_none());
        assert!(parse_holdings("").is_none());
    }
}

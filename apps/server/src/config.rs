use std::{net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub backend_url: String,
    pub backend_timeout: Duration,
    /// Fixed gate secret; a random one is generated at startup when absent.
    pub report_token: Option<String>,
    pub report_token_rotation: Option<Duration>,
    pub report_base_url: String,
    pub export_timeout: Duration,
    pub chrome_path: Option<PathBuf>,
    pub chrome_sandbox: bool,
    pub request_timeout: Duration,
    pub static_dir: String,
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    match env_string(key) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid {}={}", key, raw);
            default
        }),
        None => default,
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let port: u16 = env_parse("PORT", 3000);
        let default_listen = SocketAddr::from(([0, 0, 0, 0], port));
        let listen_addr: SocketAddr = env_parse("PATOCASH_LISTEN_ADDR", default_listen);

        let backend_host = env_string("HOST_BACKEND").unwrap_or_else(|| "localhost".into());
        let backend_port: u16 = env_parse("PORT_BACKEND", 5000);
        let backend_timeout_ms: u64 = env_parse("PATOCASH_BACKEND_TIMEOUT_MS", 30_000);

        let report_base_url = env_string("PATOCASH_REPORT_BASE_URL")
            .unwrap_or_else(|| format!("http://127.0.0.1:{}", listen_addr.port()));
        let rotation_secs: u64 = env_parse("PATOCASH_REPORT_TOKEN_ROTATE_SECS", 0);
        let export_timeout_secs: u64 = env_parse("PATOCASH_EXPORT_TIMEOUT_SECS", 60);
        let timeout_ms: u64 = env_parse("PATOCASH_REQUEST_TIMEOUT_MS", 90_000);

        Self {
            listen_addr,
            backend_url: format!("http://{}:{}", backend_host, backend_port),
            backend_timeout: Duration::from_millis(backend_timeout_ms),
            report_token: env_string("PATOCASH_REPORT_TOKEN"),
            report_token_rotation: (rotation_secs > 0).then(|| Duration::from_secs(rotation_secs)),
            report_base_url,
            export_timeout: Duration::from_secs(export_timeout_secs),
            chrome_path: env_string("PATOCASH_CHROME_PATH").map(PathBuf::from),
            chrome_sandbox: env_parse("PATOCASH_CHROME_SANDBOX", true),
            request_timeout: Duration::from_millis(timeout_ms),
            static_dir: env_string("PATOCASH_STATIC_DIR").unwrap_or_else(|| "public".into()),
        }
    }
}

use std::env;

const ADDR_VAR: &'static str = "POSTS_ADDR";
const DEFAULT_ADDR: &'static str = "localhost:8080";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Address the HTTP server binds to, e.g. `0.0.0.0:8080`.
    pub addr: String,
}

impl Config {
    pub fn from_env() -> Config {
        Config::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Config
        where F: Fn(&str) -> Option<String>
    {
        let addr = lookup(ADDR_VAR)
            .map(|addr| addr.trim().to_string())
            .and_then(|addr| if addr.is_empty() { None } else { Some(addr) })
            .unwrap_or_else(|| DEFAULT_ADDR.to_string());
        Config { addr: addr }
    }
}

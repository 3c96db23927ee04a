use std::net::Ipv4Addr;

const BACKEND_PORT: &str = "BACKEND_PORT";

const DEFAULT_PORT: u16 = 8000;

pub fn get_port() -> u16 {
    let port_from_env = std::env::var(BACKEND_PORT);
    port_from_env.map_or(DEFAULT_PORT, |res| res.parse().unwrap_or(DEFAULT_PORT))
}

const BACKEND_ADDR: &str = "BACKEND_ADDR";

const DEFAULT_ADDR: Ipv4Addr = Ipv4Addr::new(0, 0, 0, 0);

pub fn get_addr() -> Ipv4Addr {
    let addr_from_env = std::env::var(BACKEND_ADDR);
    addr_from_env.map_or(DEFAULT_ADDR, |res| res.parse().unwrap_or(DEFAULT_ADDR))
}

pub fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

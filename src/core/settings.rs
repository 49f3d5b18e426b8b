use std::{
    fs::File,
    io::{BufReader, ErrorKind, Read, Result},
    net::{IpAddr, Ipv4Addr, SocketAddr},
};

use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Settings {
    pub ipv4_addr: Ipv4Setting,
    pub port: U16Setting,
    pub api_base_url: StrSetting,
    pub storage_base_url: StrSetting,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StrSetting {
    pub name: String,
    pub value: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct U16Setting {
    pub name: String,
    pub value: u16,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Ipv4Setting {
    pub name: String,
    pub value: Ipv4Addr,
}

impl Settings {
    /// Reads the settings file. A missing file means the built-in
    /// defaults; a present but unreadable file is a startup error.
    pub fn load(path: &str) -> Result<Self> {
        match File::open(path) {
            Ok(file) => {
                let mut buffer = Vec::new();
                let mut reader = BufReader::new(file);
                reader.read_to_end(&mut buffer)?;
                serde_json::from_slice::<Settings>(&buffer).map_err(Into::into)
            }
            Err(error) if error.kind() == ErrorKind::NotFound => {
                warn!(path, "settings file not found, using defaults");
                Ok(Settings::new())
            }
            Err(error) => Err(error),
        }
    }

    pub fn new() -> Self {
        Settings {
            ipv4_addr: Ipv4Setting {
                name: "Ipv4 Address".to_string(),
                value: Ipv4Addr::new(127, 0, 0, 1),
            },
            port: U16Setting {
                name: "Port".to_string(),
                value: 4020,
            },
            api_base_url: StrSetting {
                name: "Content API base URL".to_string(),
                value: "http://sunnexgulf.com/admin/public/api".to_string(),
            },
            storage_base_url: StrSetting {
                name: "Storage base URL".to_string(),
                value: "http://sunnexgulf.com/admin/public/storage".to_string(),
            },
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(self.ipv4_addr.value), self.port.value)
    }

    pub fn api_base(&self) -> &str {
        &self.api_base_url.value
    }

    pub fn storage_base(&self) -> &str {
        &self.storage_base_url.value
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_round_trip_through_json() {
        let settings = Settings::new();
        let json = serde_json::to_string_pretty(&settings).unwrap();
        let reloaded: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded.addr(), settings.addr());
        assert_eq!(reloaded.api_base(), settings.api_base());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings = Settings::load("does/not/exist.json").unwrap();
        assert_eq!(settings.api_base(), Settings::new().api_base());
    }
}

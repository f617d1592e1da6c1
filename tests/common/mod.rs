#![allow(dead_code)]
use librassetdesk::{BearerToken, EnvConfig};

pub const TOKEN: &str = "test-token-123";

pub const ASSETS_JSON: &str = r#"[
  {
    "id": 11,
    "device_name": "ThinkPad X1",
    "brand": "Lenovo",
    "model": "Carbon Gen 11",
    "asset_type": "Laptop",
    "status": "live",
    "location": "HQ 3F",
    "created_at": "2024-03-05T20:00:00.000000Z",
    "user": {"id": 4, "name": "Dewi Lestari"},
    "department": {"id": 1, "name": "IT"}
  },
  {
    "id": 3,
    "device_name": "Spare Monitor",
    "brand": "LG",
    "model": "27UL500",
    "asset_type": "Monitor",
    "status": "backup",
    "location": "Storage B",
    "created_at": null,
    "user": null,
    "department": null
  }
]"#;

pub fn config(server: &mockito::ServerGuard) -> EnvConfig {
    EnvConfig::from_values(server.url())
}

pub fn token() -> BearerToken {
    BearerToken::new(TOKEN).unwrap()
}

pub fn bearer() -> String {
    format!("Bearer {}", TOKEN)
}

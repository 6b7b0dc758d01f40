use std::collections::BTreeMap;

use serde::Serialize;

pub const VITE_AMAP_KEY: &str = "VITE_AMAP_KEY";
pub const NODE_ENV: &str = "NODE_ENV";
pub const BASE_URL: &str = "BASE_URL";

/// Claves reconocidas y su significado
pub const RECOGNISED_KEYS: &[(&str, &str)] = &[
    (VITE_AMAP_KEY, "credencial del servicio de mapas AMap"),
    (NODE_ENV, "modo de compilación (development | production)"),
    (BASE_URL, "ruta base pública de la app"),
];

const DEFAULT_MODE: &str = "development";
const DEFAULT_BASE_URL: &str = "/";

/// Instantánea clave/valor del entorno (ordenada para logs estables)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Valores inyectados en tiempo de compilación (ver build.rs)
    pub fn compiled() -> Self {
        let compiled = [
            (VITE_AMAP_KEY, option_env!("VITE_AMAP_KEY")),
            (NODE_ENV, option_env!("NODE_ENV")),
            (BASE_URL, option_env!("BASE_URL")),
        ];
        Self::from_pairs(
            compiled
                .into_iter()
                .filter_map(|(k, v)| v.map(|v| (k, v))),
        )
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Entradas con prefijo VITE_
    pub fn vite_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars
            .iter()
            .filter(|(k, _)| k.starts_with("VITE_"))
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Claves relacionadas con AMap o expuestas al frontend
    pub fn amap_related(&self) -> Vec<&str> {
        self.vars
            .keys()
            .filter(|k| k.contains("AMAP") || k.starts_with("VITE_"))
            .map(String::as_str)
            .collect()
    }
}

/// Configuración explícita que recibe el arranque
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct AppConfig {
    #[serde(rename = "VITE_AMAP_KEY")]
    pub amap_key: Option<String>,
    pub node_env: String,
    pub base_url: String,
    pub mode: String,
    pub dev: bool,
    pub prod: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env(&EnvSnapshot::default())
    }
}

impl AppConfig {
    pub fn from_env(env: &EnvSnapshot) -> Self {
        let node_env = env
            .get(NODE_ENV)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_MODE)
            .to_string();
        let prod = node_env == "production";
        Self {
            amap_key: env
                .get(VITE_AMAP_KEY)
                .filter(|v| !v.is_empty())
                .map(str::to_string),
            base_url: env
                .get(BASE_URL)
                .filter(|v| !v.is_empty())
                .unwrap_or(DEFAULT_BASE_URL)
                .to_string(),
            mode: node_env.clone(),
            dev: !prod,
            prod,
            node_env,
        }
    }

    pub fn has_amap_key(&self) -> bool {
        self.amap_key.is_some()
    }

    pub fn log_level(&self) -> log::Level {
        if self.dev {
            log::Level::Debug
        } else {
            log::Level::Info
        }
    }
}

/// Ocultar credenciales: primeros 4 caracteres + "***"
pub fn mask_secret(value: Option<&str>) -> String {
    match value {
        None | Some("") => "<unset>".to_string(),
        Some(v) => {
            let head: String = v.chars().take(4).collect();
            format!("{}***", head)
        }
    }
}

/// Líneas del informe de depuración del entorno
pub fn debug_report(env: &EnvSnapshot, config: &AppConfig) -> Vec<String> {
    let mut lines = vec!["=== Variables de entorno ===".to_string()];
    lines.push(format!("{}: {}", NODE_ENV, config.node_env));
    lines.push(format!("{}: {}", VITE_AMAP_KEY, mask_secret(config.amap_key.as_deref())));
    lines.push(format!("Claves AMap/VITE_*: {:?}", env.amap_related()));
    lines.push("Variables VITE_*:".to_string());
    for (key, value) in env.vite_entries() {
        let shown = if key == VITE_AMAP_KEY {
            mask_secret(Some(value))
        } else {
            value.to_string()
        };
        lines.push(format!("  {}: {}", key, shown));
    }
    let mut redacted = config.clone();
    redacted.amap_key = config.amap_key.as_deref().map(|k| mask_secret(Some(k)));
    match serde_json::to_string(&redacted) {
        Ok(json) => lines.push(format!("config: {}", json)),
        Err(e) => lines.push(format!("config: <error serializando: {}>", e)),
    }
    lines.push("============================".to_string());
    lines
}

// Configuración global estática para código fuera del arranque
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env(&EnvSnapshot::compiled());
}

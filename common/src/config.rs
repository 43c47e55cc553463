use std::{collections::HashMap, path::Path};

use anyhow::{anyhow, Context, Result};
use hocon::{Hocon, HoconLoader};
use log::debug;

/// Layered configuration lookup.
///
/// Values are resolved in order from the environment (`{PREFIX}_{NAME}` upper-cased), the scoped
/// block of the HOCON file, and finally the root of the HOCON file.
#[derive(Debug)]
pub struct ConfigLoader {
    hocon: Hocon,
    env: HashMap<String, String>,
    env_prefix: String,
    scope: String,
}

impl ConfigLoader {
    pub fn new(path: impl AsRef<Path>, scope: String, env_prefix: String) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(anyhow!("The config file {:?} was not found", path));
        }

        let hocon = HoconLoader::new()
            .load_file(path)
            .with_context(|| format!("Failed to find or load config file at: {:?}", path))?
            .hocon()?;

        debug!("Loaded config file {:?}", path);

        Ok(Self::with_hocon(hocon, scope, env_prefix))
    }

    pub fn from_hocon_str(config: &str, scope: String, env_prefix: String) -> Result<Self> {
        let hocon = HoconLoader::new()
            .load_str(config)
            .with_context(|| "Failed to parse config")?
            .hocon()?;

        Ok(Self::with_hocon(hocon, scope, env_prefix))
    }

    /// A loader backed only by the environment.
    pub fn from_env(scope: String, env_prefix: String) -> Result<Self> {
        Self::from_hocon_str("{}", scope, env_prefix)
    }

    fn with_hocon(hocon: Hocon, scope: String, env_prefix: String) -> Self {
        let env = std::env::vars().collect::<HashMap<_, _>>();

        Self {
            hocon,
            env,
            env_prefix,
            scope,
        }
    }

    /// Replaces the captured process environment with `env`.
    pub fn with_env(self, env: HashMap<String, String>) -> Self {
        Self { env, ..self }
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.env.get(&self.env_key(name)) {
            return Some(Value::String(value.clone()));
        }

        let scope = &self.hocon[self.scope.as_str()];
        if matches!(scope, Hocon::Hash(_)) {
            if let Some(value) = Self::map_hocon(&scope[name]) {
                return Some(value);
            }
        }

        Self::map_hocon(&self.hocon[name])
    }

    pub fn load<T: Config>(&self) -> Result<T> {
        let res = T::load(self)?;
        Ok(res)
    }

    fn env_key(&self, name: &str) -> String {
        format!("{}_{}", self.env_prefix, name).to_uppercase()
    }

    fn map_hocon(hocon: &Hocon) -> Option<Value> {
        match hocon {
            Hocon::Real(f64) => Some(Value::Float(*f64)),
            Hocon::Integer(i64) => Some(Value::Integer(*i64)),
            Hocon::String(string) => Some(Value::String(string.clone())),
            Hocon::Boolean(bool) => Some(Value::Boolean(*bool)),
            Hocon::Array(items) => items
                .iter()
                .map(Self::map_hocon)
                .collect::<Option<Vec<_>>>()
                .map(Value::List),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    List(Vec<Value>),
}

impl Value {
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Integer(val) => u64::try_from(*val).ok(),
            Value::String(val) => val.trim().parse::<u64>().ok(),
            _ => None,
        }
    }

    /// Renders the value as a string. Lists are joined with commas.
    pub fn as_string(&self) -> Option<String> {
        match self {
            Value::String(val) => Some(val.clone()),
            Value::Boolean(true) => Some("true".to_string()),
            Value::Boolean(false) => Some("false".to_string()),
            Value::Float(val) => Some(val.to_string()),
            Value::Integer(val) => Some(val.to_string()),
            Value::List(items) => items
                .iter()
                .map(Value::as_string)
                .collect::<Option<Vec<_>>>()
                .map(|items| items.join(",")),
        }
    }
}

pub trait Config {
    fn load(config: &ConfigLoader) -> Result<Self>
    where
        Self: Sized;
}

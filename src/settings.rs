use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use config::{Config, Environment};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub port: u16,
    pub data_dir: String,
    pub public_dir: String,
}

impl Settings {
    pub fn new() -> Self {
        Config::builder()
            .set_default("port", 3000)
            .unwrap()
            .set_default("data_dir", "data")
            .unwrap()
            .set_default("public_dir", "public")
            .unwrap()
            .add_source(Environment::default())
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    pub fn database_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join("collection.db")
    }

    pub fn upload_dir(&self) -> PathBuf {
        Path::new(&self.data_dir).join("uploads")
    }

    pub fn ensure_directories(&self) -> io::Result<()> {
        fs::create_dir_all(self.upload_dir())?;
        fs::create_dir_all(&self.public_dir)
    }
}

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entity::ExpandLinksMode;
use crate::lang::Labels;

pub const DEFAULT_PATH: &str = "config.dat";

#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub expand_links: ExpandLinksMode,
    pub labels: Labels,
}

impl Config {
    pub fn load(path: &Path) -> io::Result<Self> {
        if path.exists() {
            log::debug!("loading config from {}", path.display());
            rmp_serde::decode::from_read(BufReader::new(File::open(path)?))
                .map_err(io::Error::other)
        } else {
            log::debug!("creating default config");
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        log::debug!("saving config to {}", path.display());
        let file = File::options().write(true).truncate(true).create(true).open(path)?;
        let mut writer = BufWriter::new(file);
        rmp_serde::encode::write_named(&mut writer, self).map_err(io::Error::other)?;
        writer.flush()
    }
}

//! Record table loading.
//!
//! The data file is a YAML document mapping section id to an ordered list of
//! [`FeatureRecord`]s. Section ids are the containers the page shell fills;
//! record order within a section is meaningful (the renderer prepends, so
//! later records display first).

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::FeatureRecord;

/// Feature tables keyed by section id.
pub type TableData = HashMap<String, Vec<FeatureRecord>>;

pub fn from_reader(reader: impl Read) -> Result<TableData> {
    Ok(serde_yaml::from_reader(reader)?)
}

pub fn from_file(path: impl AsRef<Path>) -> Result<TableData> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("failed to open data file {}", path.display()))?;
    from_reader(file).with_context(|| format!("failed to parse data file {}", path.display()))
}

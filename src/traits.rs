//! JSON persistence for configuration types.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use serde::{Serialize, de::DeserializeOwned};

use crate::error::Error;

/// A configuration document stored as JSON.
///
/// Every method has a default implementation on top of `serde`, so an
/// implementation is a one-line `impl JsonConfig for T {}`.
///
/// # Example
///
/// ```rust,no_run
/// use langcodec_accesskey::{MixerConfig, traits::JsonConfig};
/// let mixer = MixerConfig::read_from("accesskeys.json")?.build()?;
/// # Ok::<(), langcodec_accesskey::Error>(())
/// ```
pub trait JsonConfig: Serialize + DeserializeOwned {
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        serde_json::from_reader(reader).map_err(Error::Parse)
    }

    fn from_json_str(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(Error::Parse)
    }

    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Writes pretty-printed JSON.
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error> {
        serde_json::to_writer_pretty(writer, self).map_err(Error::Parse)
    }

    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.to_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

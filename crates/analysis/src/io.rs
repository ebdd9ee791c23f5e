use crate::errors::CompareError;
use flate2::read::MultiGzDecoder;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Open a plain or gzip-compressed (`.gz`) text file for buffered reading.
pub fn open_reader(path: impl AsRef<Path>) -> Result<BufReader<Box<dyn Read>>, CompareError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader: Box<dyn Read> = if path.extension() == Some(OsStr::new("gz")) {
        Box::new(MultiGzDecoder::new(file))
    } else {
        Box::new(file)
    };
    Ok(BufReader::new(reader))
}

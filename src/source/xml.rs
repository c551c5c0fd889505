//! Stack Exchange XML dump reader
//!
//! Every `<row>` element becomes one record; its attributes are the fields.

use super::SourceResult;
use crate::post::Record;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::BufRead;
use tracing::debug;

const ROW: &[u8] = b"row";

/// Read all `<row>` elements
pub fn read_records<R: BufRead>(input: R) -> SourceResult<Vec<Record>> {
    let mut reader = Reader::from_reader(input);
    reader.config_mut().trim_text(true);

    let mut records = Vec::new();
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) | Event::Empty(ref e) if e.name().as_ref() == ROW => {
                records.push(row_to_record(e)?);
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    debug!("Read {} rows from XML dump", records.len());
    Ok(records)
}

fn row_to_record(row: &BytesStart<'_>) -> SourceResult<Record> {
    let mut record = Record::new();
    for attr in row.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        record.insert(key, value);
    }
    Ok(record)
}

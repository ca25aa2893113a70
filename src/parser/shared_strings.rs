//! Shared-string table parsing.

use std::io::BufReader;

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

/// Parse `xl/sharedStrings.xml` into an indexable table.
///
/// Rich-text entries (`<si>` with multiple runs) are flattened to their
/// concatenated plain text, which is all a name placard needs. A missing
/// table is fine; sheets without string cells simply omit it.
pub(super) fn parse_shared_strings<R: std::io::Read + std::io::Seek>(
    archive: &mut ZipArchive<R>,
) -> Vec<String> {
    let Ok(file) = archive.by_name("xl/sharedStrings.xml") else {
        return Vec::new();
    };

    let reader = BufReader::new(file);
    let mut xml = Reader::from_reader(reader);
    xml.trim_text(false);

    let mut strings = Vec::new();
    let mut buf = Vec::new();
    let mut current = String::new();
    let mut in_si = false;
    let mut in_t = false;

    loop {
        match xml.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"si" => {
                    in_si = true;
                    current.clear();
                }
                b"t" if in_si => in_t = true,
                _ => {}
            },
            Ok(Event::Text(ref e)) if in_t => {
                if let Ok(text) = e.unescape() {
                    current.push_str(&text);
                }
            }
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"si" => {
                    strings.push(std::mem::take(&mut current));
                    in_si = false;
                }
                b"t" => in_t = false,
                _ => {}
            },
            Ok(Event::Eof) | Err(_) => break,
            _ => {}
        }
        buf.clear();
    }

    strings
}

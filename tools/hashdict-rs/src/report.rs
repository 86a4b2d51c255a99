use hashdict::HashDictionary;
use serde::Serialize;

/// JSON shape of a collision report. Kept as a DTO so the wire format stays
/// stable independently of the library types.
#[derive(Serialize)]
pub struct ReportJson {
    pub word_count: usize,
    pub table_len: usize,
    pub multiplier: isize,
    pub collisions: usize,
    pub longest_chain: usize,
}

impl From<&HashDictionary> for ReportJson {
    fn from(dict: &HashDictionary) -> Self {
        ReportJson {
            word_count: dict.word_count(),
            table_len: dict.table_len(),
            multiplier: dict.multiplier(),
            collisions: dict.collisions(),
            longest_chain: dict.longest_chain(),
        }
    }
}

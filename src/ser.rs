use serde::{
    ser::{Serialize, SerializeMap, SerializeSeq},
    Serializer,
};

use crate::value::{Document, Record};

struct Records<'a>(&'a [Record]);

impl<'a> Serialize for Records<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;

        for record in self.0 {
            seq.serialize_element(record)?;
        }

        seq.end()
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.arrays.len()))?;

        for (key, records) in &self.arrays {
            map.serialize_entry(key, &Records(records))?;
        }

        map.end()
    }
}

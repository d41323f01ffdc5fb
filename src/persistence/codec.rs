//! Binary layout of the save file.
//!
//! Exactly `SLOT_COUNT` records, in slot order, with no header:
//!
//! ```text
//! offset: i64 little-endian
//! label:  7-bit encoded byte length (1..=5 bytes), then UTF-8 bytes
//! ```
//!
//! Running state is never stored. Bytes after the last record are ignored.

use crate::domain::{ChronoSlot, ChronoStore, SLOT_COUNT};
use crate::error::PersistError;

/// Largest label length the prefix may carry
const MAX_LABEL_LEN: u64 = i32::MAX as u64;

/// Serialize every slot's offset and label.
///
/// Open intervals are not folded here; callers finalize the store first when
/// the running time should be kept.
pub fn encode_store(store: &ChronoStore) -> Vec<u8> {
    let mut out = Vec::new();
    for slot in store.slots() {
        out.extend_from_slice(&slot.accumulated_offset.to_le_bytes());
        write_label(&mut out, &slot.label);
    }
    out
}

/// Parse a save file. Every slot comes back stopped.
pub fn decode_store(bytes: &[u8]) -> Result<ChronoStore, PersistError> {
    let mut reader = Reader { bytes, pos: 0 };
    let mut slots: [ChronoSlot; SLOT_COUNT] = Default::default();

    for (index, slot) in slots.iter_mut().enumerate() {
        let offset = reader.read_i64(index)?;
        if offset < 0 {
            return Err(PersistError::NegativeOffset { slot: index, offset });
        }
        let label = reader.read_label(index)?;
        *slot = ChronoSlot::stopped(offset, label);
    }

    Ok(ChronoStore::from_slots(slots))
}

fn write_label(out: &mut Vec<u8>, label: &str) {
    let bytes = label.as_bytes();
    write_7bit_len(out, bytes.len() as u64);
    out.extend_from_slice(bytes);
}

fn write_7bit_len(out: &mut Vec<u8>, mut value: u64) {
    while value >= 0x80 {
        out.push((value as u8 & 0x7f) | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn take(&mut self, len: usize, slot: usize) -> Result<&'a [u8], PersistError> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|end| *end <= self.bytes.len())
            .ok_or(PersistError::Truncated { slot })?;
        let bytes = self.bytes;
        let chunk = &bytes[self.pos..end];
        self.pos = end;
        Ok(chunk)
    }

    fn read_i64(&mut self, slot: usize) -> Result<i64, PersistError> {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(self.take(8, slot)?);
        Ok(i64::from_le_bytes(buf))
    }

    fn read_7bit_len(&mut self, slot: usize) -> Result<usize, PersistError> {
        let mut value: u64 = 0;
        for shift in (0..35).step_by(7) {
            let byte = self.take(1, slot)?[0];
            value |= u64::from(byte & 0x7f) << shift;
            if byte & 0x80 == 0 {
                if value > MAX_LABEL_LEN {
                    return Err(PersistError::LengthOverflow { slot });
                }
                return Ok(value as usize);
            }
        }
        Err(PersistError::LengthOverflow { slot })
    }

    fn read_label(&mut self, slot: usize) -> Result<String, PersistError> {
        let len = self.read_7bit_len(slot)?;
        let raw = self.take(len, slot)?;
        String::from_utf8(raw.to_vec()).map_err(|_| PersistError::InvalidUtf8 { slot })
    }
}

//! Stored-entry ZIP container assembler.
//!
//! Entries are written uncompressed (method 0), so compressed and
//! uncompressed sizes are identical and every size and CRC is known before
//! the local header is emitted. The central directory is accumulated
//! alongside the entries and its offset fields are patched in a second pass
//! once every preceding entry's length is final.

use crate::crc32::crc32;

const LOCAL_HEADER_SIG: [u8; 4] = [0x50, 0x4b, 0x03, 0x04];
const CENTRAL_HEADER_SIG: [u8; 4] = [0x50, 0x4b, 0x01, 0x02];
const EOCD_SIG: [u8; 4] = [0x50, 0x4b, 0x05, 0x06];

/// Byte position of the local-header-offset field inside a central
/// directory header.
const CENTRAL_OFFSET_FIELD: usize = 42;

/// ZIP version 2.0, the minimum for any modern archive.
const VERSION: [u8; 2] = [20, 0];

struct Entry {
    local_header: Vec<u8>,
    data: Vec<u8>,
    central_header: Vec<u8>,
}

/// In-memory builder for a stored-method ZIP archive.
pub struct ZipArchive {
    entries: Vec<Entry>,
}

impl ZipArchive {
    pub fn new() -> Self {
        ZipArchive {
            entries: Vec::new(),
        }
    }

    /// Append one entry. The name is stored verbatim; data is stored
    /// uncompressed with its CRC-32 in both headers.
    pub fn add_entry(&mut self, name: &str, data: Vec<u8>) {
        let crc = crc32(&data);
        let size = data.len() as u32;
        let name_bytes = name.as_bytes();
        let name_len = (name_bytes.len() as u16).to_le_bytes();

        let mut local = Vec::with_capacity(30 + name_bytes.len());
        local.extend_from_slice(&LOCAL_HEADER_SIG);
        local.extend_from_slice(&VERSION); // version needed
        local.extend_from_slice(&[0, 0]); // general purpose flags
        local.extend_from_slice(&[0, 0]); // method 0 = stored
        local.extend_from_slice(&[0, 0, 0, 0]); // mod time/date
        local.extend_from_slice(&crc.to_le_bytes());
        local.extend_from_slice(&size.to_le_bytes()); // compressed size
        local.extend_from_slice(&size.to_le_bytes()); // uncompressed size
        local.extend_from_slice(&name_len);
        local.extend_from_slice(&[0, 0]); // extra field length
        local.extend_from_slice(name_bytes);

        // Same metadata again; the offset field stays zero until finish().
        let mut central = Vec::with_capacity(46 + name_bytes.len());
        central.extend_from_slice(&CENTRAL_HEADER_SIG);
        central.extend_from_slice(&VERSION); // version made by
        central.extend_from_slice(&VERSION); // version needed
        central.extend_from_slice(&[0, 0]); // general purpose flags
        central.extend_from_slice(&[0, 0]); // method 0 = stored
        central.extend_from_slice(&[0, 0, 0, 0]); // mod time/date
        central.extend_from_slice(&crc.to_le_bytes());
        central.extend_from_slice(&size.to_le_bytes()); // compressed size
        central.extend_from_slice(&size.to_le_bytes()); // uncompressed size
        central.extend_from_slice(&name_len);
        central.extend_from_slice(&[0, 0]); // extra field length
        central.extend_from_slice(&[0, 0]); // file comment length
        central.extend_from_slice(&[0, 0]); // disk number start
        central.extend_from_slice(&[0, 0]); // internal attributes
        central.extend_from_slice(&[0, 0, 0, 0]); // external attributes
        central.extend_from_slice(&[0, 0, 0, 0]); // local header offset
        central.extend_from_slice(name_bytes);

        self.entries.push(Entry {
            local_header: local,
            data,
            central_header: central,
        });
    }

    /// Serialize the archive: local headers with data, then the central
    /// directory with patched offsets, then the end-of-central-directory
    /// record.
    pub fn finish(mut self) -> Vec<u8> {
        let mut offset = 0u32;
        for entry in &mut self.entries {
            entry.central_header[CENTRAL_OFFSET_FIELD..CENTRAL_OFFSET_FIELD + 4]
                .copy_from_slice(&offset.to_le_bytes());
            offset += (entry.local_header.len() + entry.data.len()) as u32;
        }
        let central_dir_offset = offset;

        let central_dir_size: u32 = self
            .entries
            .iter()
            .map(|e| e.central_header.len() as u32)
            .sum();
        let total_len = central_dir_offset as usize + central_dir_size as usize + 22;

        let mut buffer = Vec::with_capacity(total_len);
        for entry in &self.entries {
            buffer.extend_from_slice(&entry.local_header);
            buffer.extend_from_slice(&entry.data);
        }
        for entry in &self.entries {
            buffer.extend_from_slice(&entry.central_header);
        }

        let entry_count = (self.entries.len() as u16).to_le_bytes();
        buffer.extend_from_slice(&EOCD_SIG);
        buffer.extend_from_slice(&[0, 0]); // disk number
        buffer.extend_from_slice(&[0, 0]); // disk with central directory
        buffer.extend_from_slice(&entry_count); // entries on this disk
        buffer.extend_from_slice(&entry_count); // total entries
        buffer.extend_from_slice(&central_dir_size.to_le_bytes());
        buffer.extend_from_slice(&central_dir_offset.to_le_bytes());
        buffer.extend_from_slice(&[0, 0]); // comment length

        buffer
    }
}

impl Default for ZipArchive {
    fn default() -> Self {
        ZipArchive::new()
    }
}

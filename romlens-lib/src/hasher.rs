use std::io::{self, Read, SeekFrom};

use romlens_core::ReadSeek;

const CHUNK_SIZE: usize = 64 * 1024; // 64 KB

/// Only the start of the file is hashed; the digest is an identity key for
/// de-duplication, not an integrity check.
pub const DIGEST_LIMIT: u64 = 1024 * 1024;

/// Number of hex characters kept from the MD5.
pub const DIGEST_HEX_LEN: usize = 16;

/// MD5 over the first [`DIGEST_LIMIT`] bytes (or the whole file if smaller),
/// truncated to [`DIGEST_HEX_LEN`] lowercase hex characters.
///
/// Hashes raw file bytes, so the same cartridge in two byte orders gets two
/// different digests.
pub fn content_digest(reader: &mut dyn ReadSeek) -> io::Result<String> {
    reader.seek(SeekFrom::Start(0))?;

    let mut context = md5::Context::new();
    let mut limited = Read::take(&mut *reader, DIGEST_LIMIT);
    let mut buf = vec![0u8; CHUNK_SIZE];

    loop {
        let n = match limited.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        context.consume(&buf[..n]);
    }

    let mut hex = format!("{:x}", context.compute());
    hex.truncate(DIGEST_HEX_LEN);
    Ok(hex)
}

#[cfg(test)]
#[path = "tests/hasher_tests.rs"]
mod tests;

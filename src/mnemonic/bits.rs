//! Flat, MSB-first bit vector shared by the encoder and validator.
//!
//! Bit `i` lives in byte `i / 8` at position `7 - i % 8`, so entropy bytes
//! keep their natural order and every read is an explicit index walk.

use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

/// Growable bit buffer whose storage is wiped on drop.
pub struct BitBuffer {
    bytes: Zeroizing<Vec<u8>>,
    len: usize,
}

impl BitBuffer {
    /// Empty buffer with room for `bits` bits
    #[must_use]
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Zeroizing::new(Vec::with_capacity(bits.div_ceil(8))),
            len: 0,
        }
    }

    /// Buffer holding `data` bit for bit
    #[must_use]
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut buf = Self::with_capacity(data.len() * 8 + 8);
        buf.bytes.extend_from_slice(data);
        buf.len = data.len() * 8;
        buf
    }

    /// Number of bits stored
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer holds no bits
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append the low `width` bits of `value`, most significant first.
    ///
    /// Crate-internal: every caller passes 11 or a checksum length of at
    /// most 8.
    ///
    /// # Panics
    /// Panics if `width` exceeds 32
    pub(crate) fn push_bits(&mut self, value: u32, width: usize) {
        assert!(width <= 32, "cannot push more than 32 bits at once");
        for shift in (0..width).rev() {
            self.push((value >> shift) & 1 == 1);
        }
    }

    fn push(&mut self, bit: bool) {
        let offset = self.len % 8;
        if offset == 0 {
            self.bytes.push(0);
        }
        if bit {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 0x80 >> offset;
        }
        self.len += 1;
    }

    /// Bit at `index`, or `None` past the end
    #[must_use]
    pub fn bit(&self, index: usize) -> Option<bool> {
        (index < self.len).then(|| self.bytes[index / 8] & (0x80 >> (index % 8)) != 0)
    }

    /// Read `width` bits starting at `start` as an unsigned integer, MSB first.
    ///
    /// Returns `None` if the range runs past the end or `width` exceeds 32.
    #[must_use]
    pub fn read(&self, start: usize, width: usize) -> Option<u32> {
        if width > 32 || start.checked_add(width)? > self.len {
            return None;
        }
        let mut value = 0u32;
        for index in start..start + width {
            value = (value << 1) | u32::from(self.bytes[index / 8] & (0x80 >> (index % 8)) != 0);
        }
        Some(value)
    }

    /// Copy of the first `bits` bits as bytes.
    ///
    /// Returns `None` unless `bits` is a whole number of bytes within the buffer.
    #[must_use]
    pub fn prefix_bytes(&self, bits: usize) -> Option<Zeroizing<Vec<u8>>> {
        if bits % 8 != 0 || bits > self.len {
            return None;
        }
        Some(Zeroizing::new(self.bytes[..bits / 8].to_vec()))
    }

    /// Iterate over consecutive `width`-bit groups; a short tail is dropped.
    pub fn groups(&self, width: usize) -> impl Iterator<Item = u32> + '_ {
        (0..self.len / width.max(1)).filter_map(move |i| self.read(i * width, width))
    }
}

/// Top `count` bits of SHA-256(`entropy`), as a right-aligned integer.
///
/// Not re-exported; `count` always comes from `EntropySize::checksum_bits`.
///
/// # Panics
/// Panics if `count` exceeds 32
#[must_use]
pub fn checksum_bits(entropy: &[u8], count: usize) -> u32 {
    assert!(count <= 32, "checksum longer than 32 bits");
    let digest = Sha256::digest(entropy);
    let mut value = 0u32;
    for index in 0..count {
        value = (value << 1) | u32::from(digest[index / 8] & (0x80 >> (index % 8)) != 0);
    }
    value
}

#![deny(clippy::disallowed_methods)]

//! The polynomial string hash `s[0]*m^(n-1) + s[1]*m^(n-2) + ... + s[n-1]`
//! evaluated in 32-bit two's-complement arithmetic.

use std::{
    hash::{BuildHasher, Hasher},
    num::Wrapping,
};


// multiplier used by java.lang.String::hashCode
pub const DEFAULT_MULTIPLIER: i32 = 31;

/// Hashes `s` with the recurrence `h = multiplier * h + c` over its UTF-16 code
/// units, wrapping at every step. With a multiplier of 31 this is
/// `String.hashCode` from the JDK.
#[inline]
pub fn hash(s: &str, multiplier: i32) -> i32 {
    hash_units(s.encode_utf16(), multiplier)
}

/// Same recurrence as [`hash`] over code units the caller already has.
#[inline]
pub fn hash_units<I: IntoIterator<Item = u16>>(units: I, multiplier: i32) -> i32 {
    let multiplier = Wrapping(multiplier);
    units
        .into_iter()
        .fold(Wrapping(0i32), |h, c| multiplier * h + Wrapping(i32::from(c)))
        .0
}

/// [`Hasher`] running the multiplicative recurrence.
///
/// `write` treats valid UTF-8 input as text and feeds its UTF-16 code units;
/// anything else is fed byte by byte. Note that `<str as Hash>::hash` also
/// writes a `0xff` terminator, so use [`MulHasher::write_str_units`] or
/// [`BuildMulHasher::hash_str`] to get exactly [`hash`].
#[derive(Clone, Copy, Debug)]
pub struct MulHasher {
    hash: Wrapping<i32>,
    multiplier: Wrapping<i32>,
}

impl MulHasher {
    pub fn new(multiplier: i32) -> Self {
        MulHasher {
            hash: Wrapping(0),
            multiplier: Wrapping(multiplier),
        }
    }
    #[inline]
    fn push(&mut self, code: u16) {
        self.hash = self.multiplier * self.hash + Wrapping(i32::from(code));
    }
    pub fn write_str_units(&mut self, s: &str) {
        for c in s.encode_utf16() {
            self.push(c);
        }
    }
    pub fn value(&self) -> i32 {
        self.hash.0
    }
}

impl Default for MulHasher {
    fn default() -> Self {
        MulHasher::new(DEFAULT_MULTIPLIER)
    }
}

impl Hasher for MulHasher {
    fn finish(&self) -> u64 {
        // sign extends, so negative hashes stay distinct from positive ones
        i64::from(self.hash.0) as u64
    }

    fn write(&mut self, bytes: &[u8]) {
        match std::str::from_utf8(bytes) {
            Ok(s) => self.write_str_units(s),
            Err(_) => {
                for &b in bytes {
                    self.push(u16::from(b));
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildMulHasher {
    pub multiplier: i32,
}

impl BuildMulHasher {
    pub fn new(multiplier: i32) -> Self {
        BuildMulHasher { multiplier }
    }
    pub fn hash_str(&self, s: &str) -> i32 {
        let mut hasher = self.build_hasher();
        hasher.write_str_units(s);
        hasher.value()
    }
}

impl Default for BuildMulHasher {
    fn default() -> Self {
        BuildMulHasher::new(DEFAULT_MULTIPLIER)
    }
}

impl BuildHasher for BuildMulHasher {
    type Hasher = MulHasher;

    fn build_hasher(&self) -> MulHasher {
        MulHasher::new(self.multiplier)
    }
}

//! Length and concatenation of byte sequences.
//!
//! Inputs are any slice of `AsRef<[u8]>` values, so `&[u8]`, `Vec<u8>`,
//! byte arrays and [`Bytes`] can be mixed freely by the caller.

use bytes::{BufMut, Bytes, BytesMut};

/// Returns the sum of the lengths of all parts.
///
/// # Example
///
/// ```
/// use bytesep::total_length;
///
/// let parts: [&[u8]; 3] = [&[0x01], &[0x02, 0x03], &[]];
/// assert_eq!(total_length(&parts), 3);
///
/// let empty: [&[u8]; 0] = [];
/// assert_eq!(total_length(&empty), 0);
/// ```
pub fn total_length<S: AsRef<[u8]>>(parts: &[S]) -> usize {
    parts.iter().map(|part| part.as_ref().len()).sum()
}

/// Concatenates all parts, in order, into a newly allocated buffer.
///
/// The output is allocated once with exactly [`total_length`] bytes.
///
/// # Example
///
/// ```
/// use bytesep::concat;
///
/// let joined = concat(&[vec![1u8, 2], vec![], vec![3]]);
/// assert_eq!(&joined[..], &[1, 2, 3]);
/// ```
pub fn concat<S: AsRef<[u8]>>(parts: &[S]) -> Bytes {
    let mut out = BytesMut::with_capacity(total_length(parts));
    concat_into(&mut out, parts);
    out.freeze()
}

/// Appends all parts, in order, to `dst`.
///
/// Space for the whole concatenation is reserved before copying.
///
/// # Example
///
/// ```
/// use bytes::BytesMut;
/// use bytesep::concat_into;
///
/// let mut buf = BytesMut::from(&b"key="[..]);
/// concat_into(&mut buf, &[&b"a"[..], &b"bc"[..]]);
/// assert_eq!(&buf[..], b"key=abc");
/// ```
pub fn concat_into<S: AsRef<[u8]>>(dst: &mut BytesMut, parts: &[S]) {
    dst.reserve(total_length(parts));
    for part in parts {
        dst.put_slice(part.as_ref());
    }
}

//! Conversion between Rust strings and NUL-terminated `wchar_t` buffers.
//!
//! `wchar_t` is UTF-16 on Windows and UTF-32 everywhere else MediaInfo
//! ships, so both directions are selected per target.

use super::types::wchar_t;

/// Encode `s` as a NUL-terminated wide string.
///
/// Interior NUL characters are not rejected here; callers that care must
/// check with [`has_interior_nul`] first, otherwise the native side will
/// see a truncated string.
#[cfg(windows)]
pub fn to_wide(s: &str) -> Vec<wchar_t> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

#[cfg(not(windows))]
pub fn to_wide(s: &str) -> Vec<wchar_t> {
    s.chars()
        .map(|c| c as wchar_t)
        .chain(std::iter::once(0))
        .collect()
}

/// Decode a wide slice (without terminator), replacing invalid units.
#[cfg(windows)]
pub fn from_wide(units: &[wchar_t]) -> String {
    String::from_utf16_lossy(units)
}

#[cfg(not(windows))]
pub fn from_wide(units: &[wchar_t]) -> String {
    units
        .iter()
        .map(|&unit| char::from_u32(unit as u32).unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

/// Decode a NUL-terminated wide string owned by the native library.
///
/// A null pointer decodes to an empty string.
///
/// # Safety
/// `ptr` must be null or point to a readable, NUL-terminated `wchar_t`
/// sequence that stays valid for the duration of this call.
pub unsafe fn from_wide_ptr(ptr: *const wchar_t) -> String {
    if ptr.is_null() {
        return String::new();
    }

    let mut len = 0;
    while *ptr.add(len) != 0 {
        len += 1;
    }

    from_wide(std::slice::from_raw_parts(ptr, len))
}

/// Whether `s` would be cut short when passed as a C string.
pub fn has_interior_nul(s: &str) -> bool {
    s.contains('\0')
}

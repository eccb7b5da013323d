// Callers must ensure pointer validity; the per-function docs state the contracts.
#![allow(clippy::missing_safety_doc)]

// boggle-ffi: C-compatible FFI layer for the Boggle solver.
//
// Memory management rules:
// - Opaque `Solver` pointer: created by `boggle_new_from_file` or
//   `boggle_new_from_words`, freed by `boggle_free`.
// - Returned strings: caller must free with `boggle_free_str`.
// - Returned string arrays: caller must free with `boggle_free_str_array`.
// - All input strings are UTF-8 encoded, null-terminated C strings.
//
// A handle may be shared by several threads for lookups and solves, but
// `boggle_set_threads` must not race with them.

use std::ffi::{CStr, CString, c_char, c_int};
use std::fmt;
use std::num::NonZeroUsize;
use std::ptr;
use std::slice;

use boggle_solver::{Board, Solver, Trie, dictionary};

// ── Handle lifecycle ─────────────────────────────────────────────

/// Create a solver from a newline-delimited word list on disk.
///
/// Returns an opaque pointer on success, NULL on failure.
/// On failure, if `error_out` is non-NULL, it receives a heap-allocated error string
/// that the caller must free with `boggle_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn boggle_new_from_file(
    path: *const c_char,
    error_out: *mut *mut c_char,
) -> *mut Solver {
    let Some(path) = c_arg(path).and_then(|p| p.to_str().ok()) else {
        set_error(error_out, "path is null or not valid UTF-8");
        return ptr::null_mut();
    };

    match Solver::from_dictionary_file(path) {
        Ok(solver) => Box::into_raw(Box::new(solver)),
        Err(e) => {
            set_error(error_out, e);
            ptr::null_mut()
        }
    }
}

/// Create a solver from an array of `count` C strings.
///
/// Words go through the same filter as dictionary files: entries with
/// anything but ASCII letters are skipped, the rest are upper-cased.
/// Returns NULL (and sets `error_out`) if `words` is NULL while `count` is
/// non-zero.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn boggle_new_from_words(
    words: *const *const c_char,
    count: usize,
    error_out: *mut *mut c_char,
) -> *mut Solver {
    if words.is_null() && count != 0 {
        set_error(error_out, "words is null");
        return ptr::null_mut();
    }

    let entries: &[*const c_char] = if count == 0 {
        &[]
    } else {
        unsafe { slice::from_raw_parts(words, count) }
    };

    let trie: Trie = entries
        .iter()
        .filter_map(|&p| c_arg(p))
        .filter_map(|word| dictionary::normalize_line(word.to_bytes()))
        .collect();
    Box::into_raw(Box::new(Solver::new(trie)))
}

/// Free a solver created by `boggle_new_from_file` or `boggle_new_from_words`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn boggle_free(handle: *mut Solver) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle) });
    }
}

// ── Lookups ─────────────────────────────────────────────────────

/// Check whether a word is in the dictionary.
/// Returns 1 if it is, 0 if not, -1 on error.
///
/// The word is upper-cased first; anything but ASCII letters (including
/// bytes that are not UTF-8) is "not a word".
#[unsafe(no_mangle)]
pub unsafe extern "C" fn boggle_has_word(handle: *const Solver, word: *const c_char) -> c_int {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return -1;
    };
    let Some(word) = c_arg(word) else {
        return -1;
    };
    match dictionary::normalize_line(word.to_bytes()) {
        Some(key) if handle.is_word(&key) => 1,
        _ => 0,
    }
}

/// Check whether some dictionary word starts with `prefix`.
/// Returns 1 if so, 0 if not, -1 on error. The empty prefix matches.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn boggle_has_prefix(handle: *const Solver, prefix: *const c_char) -> c_int {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return -1;
    };
    let Some(prefix) = c_arg(prefix) else {
        return -1;
    };
    if prefix.is_empty() {
        return 1;
    }
    match dictionary::normalize_line(prefix.to_bytes()) {
        Some(key) if handle.is_prefix(&key) => 1,
        _ => 0,
    }
}

/// Number of distinct words in the dictionary, or 0 for a NULL handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn boggle_word_count(handle: *const Solver) -> usize {
    unsafe { handle.as_ref() }.map_or(0, |h| h.trie().len())
}

// ── Options ─────────────────────────────────────────────────────

/// Set the number of search threads. Zero or negative restores the default
/// (hardware parallelism).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn boggle_set_threads(handle: *mut Solver, threads: c_int) {
    if let Some(handle) = unsafe { handle.as_mut() } {
        let threads = usize::try_from(threads).ok().and_then(NonZeroUsize::new);
        handle.set_threads(threads);
    }
}

// ── Solving ─────────────────────────────────────────────────────

/// Find every dictionary word on a `rows` by `cols` board.
///
/// `tiles` holds exactly `rows * cols` ASCII letters in row-major order
/// (case-insensitive, `Q` is the QU tile).
///
/// Returns a NULL-terminated, alphabetically sorted array of C strings.
/// Caller must free with `boggle_free_str_array`. Returns NULL on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn boggle_solve(
    handle: *const Solver,
    tiles: *const c_char,
    rows: usize,
    cols: usize,
) -> *mut *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(board) = c_arg(tiles).and_then(|t| board_from_tiles(t.to_bytes(), rows, cols)) else {
        return ptr::null_mut();
    };

    let mut words: Vec<String> = handle.solve(&board).into_iter().collect();
    words.sort_unstable();
    strings_to_c_array(words)
}

// ── Utility functions ───────────────────────────────────────────

/// Return the library version string.
///
/// The returned pointer is static. Do NOT free this pointer.
#[unsafe(no_mangle)]
pub extern "C" fn boggle_version() -> *const c_char {
    static VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "\0");
    VERSION.as_ptr().cast()
}

/// Free a heap-allocated C string returned by boggle functions.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn boggle_free_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

/// Free a NULL-terminated array of C strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn boggle_free_str_array(arr: *mut *mut c_char) {
    free_null_terminated_array(arr);
}

// ── Internal helpers ────────────────────────────────────────────

fn board_from_tiles(tiles: &[u8], rows: usize, cols: usize) -> Option<Board> {
    let cells = rows.checked_mul(cols)?;
    if cells == 0 || tiles.len() != cells || !dictionary::is_ascii_word(tiles) {
        return None;
    }
    Some(Board::new(rows, cols, tiles.to_ascii_uppercase()))
}

/// Borrow a NULL-terminated argument, or `None` for a NULL pointer.
fn c_arg<'a>(s: *const c_char) -> Option<&'a CStr> {
    (!s.is_null()).then(|| unsafe { CStr::from_ptr(s) })
}

/// Hand an owned string to the caller. Solved words are A-Z and error
/// messages carry no NUL, so the fallback to "" is never taken.
fn into_c_string(s: String) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

fn set_error(out: *mut *mut c_char, err: impl fmt::Display) {
    if let Some(slot) = unsafe { out.as_mut() } {
        *slot = into_c_string(err.to_string());
    }
}

fn strings_to_c_array(strings: Vec<String>) -> *mut *mut c_char {
    let slots: Box<[*mut c_char]> = strings
        .into_iter()
        .map(into_c_string)
        .chain(std::iter::once(ptr::null_mut()))
        .collect();
    Box::into_raw(slots).cast()
}

fn free_null_terminated_array(arr: *mut *mut c_char) {
    if arr.is_null() {
        return;
    }
    let mut len = 0;
    while !unsafe { *arr.add(len) }.is_null() {
        len += 1;
    }
    // The terminator is part of the allocation made by `strings_to_c_array`.
    let slots = unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(arr, len + 1)) };
    for &word in &slots[..len] {
        drop(unsafe { CString::from_raw(word) });
    }
}

//! Visible length of text that may carry embedded escape sequences.
//!
//! Only a complete select-graphic-rendition span (`ESC [`, parameters, `m`)
//! occupies no columns. Every other control sequence, an introducer that is
//! never closed, and a span broken by a control byte are counted as
//! ordinary text, escape byte included.

use tracing::trace;
use vte::{Params, Parser, Perform};

const ESC_BYTE: u8 = 0x1b;

/// Number of Unicode code points outside escape sequences.
pub fn visible_length(s: &str) -> usize {
    let mut length = 0;
    for_each_payload(s, |segment| length += segment.chars().count());
    length
}

/// The text of `s` with every graphic-rendition span removed.
pub fn strip_escapes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for_each_payload(s, |segment| out.push_str(segment));
    out
}

/// Call `payload` with every run of text between graphic-rendition spans.
fn for_each_payload<'a>(s: &'a str, payload: impl FnMut(&'a str)) {
    let mut parser = Parser::new();
    let mut scanner = PayloadScanner {
        text: s,
        start: 0,
        fed: 0,
        interrupted: false,
        payload,
    };

    for (index, &byte) in s.as_bytes().iter().enumerate() {
        if byte == ESC_BYTE {
            // a new escape abandons whatever the parser still holds
            scanner.fed = index;
            scanner.keep();
        } else {
            scanner.fed = index + 1;
        }
        parser.advance(&mut scanner, &[byte]);
    }

    scanner.fed = s.len();
    if scanner.start < s.len() {
        trace!(offset = scanner.start, "Unterminated escape sequence counted as text");
        scanner.keep();
    }
}

/// Tracks the bytes the parser has consumed but not yet classified.
struct PayloadScanner<'a, F: FnMut(&'a str)> {
    text: &'a str,
    start: usize,
    fed: usize,
    interrupted: bool,
    payload: F,
}

impl<'a, F: FnMut(&'a str)> PayloadScanner<'a, F> {
    fn pending(&self) -> &'a [u8] {
        &self.text.as_bytes()[self.start..self.fed.max(self.start)]
    }

    /// Hand every pending byte over as text.
    fn keep(&mut self) {
        if self.fed <= self.start {
            return;
        }
        // mid code point, wait for the rest
        let Some(segment) = self.text.get(self.start..self.fed) else {
            return;
        };
        (self.payload)(segment);
        self.start = self.fed;
        self.interrupted = false;
    }

    fn drop_span(&mut self) {
        self.start = self.fed;
        self.interrupted = false;
    }
}

impl<'a, F: FnMut(&'a str)> Perform for PayloadScanner<'a, F> {
    fn print(&mut self, _c: char) {
        self.keep();
    }

    fn execute(&mut self, _byte: u8) {
        if self.pending().first() == Some(&ESC_BYTE) {
            self.interrupted = true;
        } else {
            self.keep();
        }
    }

    fn hook(&mut self, _params: &Params, _intermediates: &[u8], _ignore: bool, _action: char) {
        self.keep();
    }

    fn put(&mut self, _byte: u8) {
        self.keep();
    }

    fn unhook(&mut self) {
        self.keep();
    }

    fn osc_dispatch(&mut self, _params: &[&[u8]], _bell_terminated: bool) {
        self.keep();
    }

    fn csi_dispatch(
        &mut self,
        _params: &Params,
        intermediates: &[u8],
        ignore: bool,
        action: char,
    ) {
        if action == 'm' && !ignore && intermediates.is_empty() && !self.interrupted {
            self.drop_span();
        } else {
            self.keep();
        }
    }

    fn esc_dispatch(&mut self, _intermediates: &[u8], _ignore: bool, _byte: u8) {
        self.keep();
    }
}

//! Splits ANSI-escaped text into styled segments.
//!
//! Uses `vte` for tokenizing. Printable characters and C0 controls become
//! segment text; every SGR sequence starts a new segment. Other escape
//! sequences carry no color information and are dropped.

use vte::{Params, Parser, Perform};

use super::handlers::style::Pen;
use super::types::StyledSegment;

/// Parse `content` into segments, in input order.
///
/// Segments never have an empty label: SGR sequences that are not followed
/// by text only update the pen.
pub fn parse(content: &str) -> Vec<StyledSegment> {
    let mut collector = SegmentCollector::default();
    let mut parser = Parser::new();
    parser.advance(&mut collector, content.as_bytes());
    collector.finish()
}

#[derive(Default)]
struct SegmentCollector {
    pen: Pen,
    label: String,
    label_chars: usize,
    offset: usize,
    segments: Vec<StyledSegment>,
}

impl SegmentCollector {
    fn push_char(&mut self, c: char) {
        self.label.push(c);
        self.label_chars += 1;
    }

    fn flush(&mut self) {
        if self.label.is_empty() {
            return;
        }
        let label = std::mem::take(&mut self.label);
        let len = std::mem::take(&mut self.label_chars);
        self.segments.push(StyledSegment {
            label,
            style: self.pen.style,
            fg: self.pen.fg.as_ref().map(|(c, _)| c.clone()),
            bg: self.pen.bg.as_ref().map(|(c, _)| c.clone()),
            color_mode: self.pen.color_mode(),
            offset: self.offset,
            len,
        });
        self.offset += len;
    }

    fn finish(mut self) -> Vec<StyledSegment> {
        self.flush();
        self.segments
    }
}

impl Perform for SegmentCollector {
    fn print(&mut self, c: char) {
        self.push_char(c);
    }

    fn execute(&mut self, byte: u8) {
        self.push_char(char::from(byte));
    }

    fn csi_dispatch(&mut self, params: &Params, intermediates: &[u8], ignore: bool, action: char) {
        if action != 'm' || !intermediates.is_empty() || ignore {
            tracing::debug!(?action, "Dropping non-SGR CSI sequence");
            return;
        }
        self.flush();
        let params: Vec<&[u16]> = params.iter().collect();
        self.pen.apply(&params);
    }

    fn esc_dispatch(&mut self, _intermediates: &[u8], _ignore: bool, byte: u8) {
        tracing::debug!(byte, "Dropping ESC sequence");
    }

    fn osc_dispatch(&mut self, params: &[&[u8]], _bell_terminated: bool) {
        tracing::debug!(count = params.len(), "Dropping OSC sequence");
    }

    fn hook(&mut self, _params: &Params, _intermediates: &[u8], _ignore: bool, action: char) {
        tracing::debug!(?action, "Dropping DCS sequence");
    }
}

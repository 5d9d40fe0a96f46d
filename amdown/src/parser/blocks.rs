//! Block matcher table
//!
//!     A block matcher recognises the first line of a multi-line element and
//!     then consumes as many lines as the element needs. Quote-like blocks
//!     (plain quotes, callouts, custom blocks) strip their `>` markers and
//!     parse the collected lines as a nested document.

use super::compile;
use super::inline::parse_inline;
use super::lists::{parse_bulleted_list, parse_numbered_list, parse_task_list};
use super::parse_lines;
use crate::elements::{
    BlockQuote, Callout, CalloutKind, Card, CodeBlock, Element, InlineText, LinkList, Table,
};
use crate::line_source::{LineSource, LineStream};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

pub(super) static CUSTOM_START: Lazy<Regex> =
    Lazy::new(|| compile(r"^>\s*\[!!([^\]|]+)((?:\|[^\]]*)?)\].*$"));
pub(super) static CALLOUT_START: Lazy<Regex> = Lazy::new(|| compile(r"^>\s*\[!([^\]]*)\]\s*(.*)$"));
pub(super) static CODE_FENCE: Lazy<Regex> = Lazy::new(|| compile(r"^\s*```\s*([^\s`]*)"));
pub(super) static QUOTE_LINE: Lazy<Regex> = Lazy::new(|| compile(r"^>"));
pub(super) static TASK_ITEM: Lazy<Regex> =
    Lazy::new(|| compile(r"^\s*[-*]\s+\[([ xX?])\](?:\s+(.*))?$"));
pub(super) static BULLET_ITEM: Lazy<Regex> = Lazy::new(|| compile(r"^[-*+]\s+(.*)$"));
pub(super) static NUMBERED_ITEM: Lazy<Regex> = Lazy::new(|| compile(r"^\d{1,3}[.)]\s+(.*)$"));
pub(super) static TABLE_ROW: Lazy<Regex> = Lazy::new(|| compile(r"^\s*\|.*\|\s*$"));

/// Block element kinds, in matching priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum BlockKind {
    Custom,
    Callout,
    Code,
    Quote,
    Task,
    Bulleted,
    Numbered,
    Table,
}

impl BlockKind {
    /// Priority order. Custom blocks come before callouts because every custom
    /// block opening line also reads as a callout.
    pub const ORDER: [BlockKind; 8] = [
        BlockKind::Custom,
        BlockKind::Callout,
        BlockKind::Code,
        BlockKind::Quote,
        BlockKind::Task,
        BlockKind::Bulleted,
        BlockKind::Numbered,
        BlockKind::Table,
    ];

    fn start(self) -> &'static Regex {
        match self {
            BlockKind::Custom => &*CUSTOM_START,
            BlockKind::Callout => &*CALLOUT_START,
            BlockKind::Code => &*CODE_FENCE,
            BlockKind::Quote => &*QUOTE_LINE,
            BlockKind::Task => &*TASK_ITEM,
            BlockKind::Bulleted => &*BULLET_ITEM,
            BlockKind::Numbered => &*NUMBERED_ITEM,
            BlockKind::Table => &*TABLE_ROW,
        }
    }

    /// First kind whose opening pattern matches `line`.
    pub fn detect(line: &str) -> Option<BlockKind> {
        Self::ORDER
            .into_iter()
            .find(|kind| kind.start().is_match(line))
    }

    pub fn parse<S: LineStream>(self, source: &mut LineSource<S>) -> Element {
        debug!(kind = ?self, "parsing block");
        match self {
            BlockKind::Custom => parse_custom_block(source),
            BlockKind::Callout => parse_callout(source),
            BlockKind::Code => parse_code_block(source),
            BlockKind::Quote => parse_block_quote(source),
            BlockKind::Task => parse_task_list(source),
            BlockKind::Bulleted => parse_bulleted_list(source),
            BlockKind::Numbered => parse_numbered_list(source),
            BlockKind::Table => parse_table(source),
        }
    }
}

fn parse_code_block<S: LineStream>(source: &mut LineSource<S>) -> Element {
    let fence = source.read(false).unwrap_or_default();
    let language = CODE_FENCE
        .captures(&fence)
        .map(|c| c[1].to_string())
        .filter(|lang| !lang.is_empty());
    let lines = source.read_until(|line| line.trim_start().starts_with("```"), false);
    if source.at_end() {
        debug!("code block is not closed");
    }
    source.skip();
    Element::CodeBlock(CodeBlock {
        text: lines.join("\n"),
        language,
    })
}

/// Consumes the quote lines and strips `>` plus one following space.
fn quote_lines<S: LineStream>(source: &mut LineSource<S>) -> Vec<String> {
    source
        .read_until(|line| !QUOTE_LINE.is_match(line), false)
        .into_iter()
        .map(|line| {
            let inner = line.strip_prefix('>').unwrap_or(&line);
            inner
                .strip_prefix(' ')
                .or_else(|| inner.strip_prefix('\t'))
                .unwrap_or(inner)
                .to_string()
        })
        .collect()
}

fn parse_block_quote<S: LineStream>(source: &mut LineSource<S>) -> Element {
    let lines = quote_lines(source);
    Element::BlockQuote(BlockQuote {
        children: parse_lines(lines),
    })
}

fn parse_callout<S: LineStream>(source: &mut LineSource<S>) -> Element {
    let (kind, title) = match source.peek().and_then(|line| CALLOUT_START.captures(line)) {
        Some(caps) => (CalloutKind::parse(&caps[1]), caps[2].trim().to_string()),
        None => (CalloutKind::Info, String::new()),
    };
    source.skip();
    let title = if title.is_empty() {
        InlineText::raw(kind.default_title())
    } else {
        parse_inline(&title)
    };
    let children = parse_lines(quote_lines(source));
    Element::Callout(Callout {
        kind,
        symbol: kind.symbol().to_string(),
        title,
        children,
    })
}

fn parse_custom_block<S: LineStream>(source: &mut LineSource<S>) -> Element {
    let (block_type, args) = match source.peek().and_then(|line| CUSTOM_START.captures(line)) {
        Some(caps) => {
            let args: Vec<String> = caps[2]
                .split('|')
                .map(str::trim)
                .filter(|arg| !arg.is_empty())
                .map(str::to_string)
                .collect();
            (caps[1].trim().to_string(), args)
        }
        None => (String::new(), Vec::new()),
    };
    source.skip();
    let children = parse_lines(quote_lines(source));
    match block_type.as_str() {
        "card" => Element::Card(Card {
            title: args.into_iter().next().unwrap_or_default(),
            children,
        }),
        "link_list" => Element::LinkList(LinkList { children }),
        other => {
            debug!(block_type = other, "unknown custom block, reading as quote");
            Element::BlockQuote(BlockQuote { children })
        }
    }
}

fn split_row(line: &str) -> Vec<InlineText> {
    let line = line.trim();
    let line = line.strip_prefix('|').unwrap_or(line);
    let line = line.strip_suffix('|').unwrap_or(line);
    line.split('|')
        .map(|cell| parse_inline(cell.trim()))
        .collect()
}

fn parse_table<S: LineStream>(source: &mut LineSource<S>) -> Element {
    let headings = source.read(false).map(|l| split_row(&l)).unwrap_or_default();
    let mut table = Table::new(headings);
    if source.peek().is_some_and(|line| TABLE_ROW.is_match(line)) {
        source.skip();
    }
    while let Some(line) = source.peek() {
        if !TABLE_ROW.is_match(line) {
            break;
        }
        let row = split_row(line);
        source.skip();
        table.add_row(row);
    }
    Element::Table(table)
}

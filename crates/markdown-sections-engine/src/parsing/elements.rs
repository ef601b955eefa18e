//! # Element Extractor & Typer
//!
//! Pulls typed elements out of a markdown fragment with pulldown-cmark's
//! offset iterator. Only top-level headings, paragraphs and lists become
//! elements; a paragraph made of nothing but images and links is split into
//! those. Links and images inside prose paragraphs and headings are kept on
//! the element as inline children. Code, block quotes, tables and HTML blocks stay in the fragment's
//! markdown and HTML without becoming elements.

use std::ops::Range;
use std::sync::OnceLock;

use pulldown_cmark::{CowStr, Event, HeadingLevel, Options, Parser, Tag};
use regex::Regex;

use crate::render::{HtmlRenderer, plain_text};
use crate::tree::{Element, ElementKind, ListItem};

type Spanned<'a> = (Event<'a>, Range<usize>);

pub struct Extractor<'r> {
    renderer: &'r dyn HtmlRenderer,
    options: Options,
}

impl<'r> Extractor<'r> {
    pub fn new(renderer: &'r dyn HtmlRenderer, options: Options) -> Self {
        Self { renderer, options }
    }

    pub fn renderer(&self) -> &'r dyn HtmlRenderer {
        self.renderer
    }

    /// Elements of `markdown`, in source order.
    pub fn extract(&self, markdown: &str) -> Vec<Element> {
        let events: Vec<Spanned<'_>> = Parser::new_ext(markdown, self.options)
            .into_offset_iter()
            .collect();
        let mut out = Vec::new();
        let mut i = 0;
        while i < events.len() {
            let end = matching_end(&events, i);
            let range = events[i].1.clone();
            match &events[i].0 {
                Event::Start(Tag::Heading { level, .. }) => out.push(
                    self.element(
                        ElementKind::Heading {
                            level: heading_level(*level),
                        },
                        &markdown[range],
                    )
                    .with_inline(self.inline_media(markdown, &events[i..=end])),
                ),
                Event::Start(Tag::Paragraph) => {
                    self.paragraph(markdown, &events[i + 1..end], range, &mut out)
                }
                Event::Start(Tag::List(start)) => {
                    out.push(self.list(markdown, &events[i..=end], start.is_some()))
                }
                _ => {}
            }
            i = end + 1;
        }
        out
    }

    /// Builds an element, rendering its markdown through the renderer.
    pub fn element(&self, kind: ElementKind, raw: &str) -> Element {
        let markdown = raw.trim().to_string();
        let html = self.renderer.render(&markdown);
        let text = plain_text(&html);
        Element::new(kind, markdown, html, text)
    }

    fn paragraph(
        &self,
        markdown: &str,
        inner: &[Spanned<'_>],
        range: Range<usize>,
        out: &mut Vec<Element>,
    ) {
        let mut media = Vec::new();
        let mut j = 0;
        while j < inner.len() {
            let end = matching_end(inner, j);
            match &inner[j].0 {
                Event::Start(Tag::Image { dest_url, .. }) => {
                    media.push(self.image(markdown, &inner[j..=end], dest_url));
                }
                Event::Start(Tag::Link { dest_url, .. }) => {
                    media.push(self.link(markdown, &inner[j..=end], dest_url));
                }
                Event::SoftBreak | Event::HardBreak => {}
                Event::Text(t) if t.trim().is_empty() => {}
                _ => {
                    let paragraph = self.element(ElementKind::Paragraph, &markdown[range]);
                    out.push(paragraph.with_inline(self.inline_media(markdown, inner)));
                    return;
                }
            }
            j = end + 1;
        }
        if media.is_empty() {
            out.push(self.element(ElementKind::Paragraph, &markdown[range]));
        } else {
            out.extend(media);
        }
    }

    fn image(&self, markdown: &str, events: &[Spanned<'_>], src: &CowStr<'_>) -> Element {
        let kind = ElementKind::Image {
            src: src.to_string(),
            alt: collect_text(events),
        };
        self.element(kind, &markdown[events[0].1.clone()])
    }

    fn link(&self, markdown: &str, events: &[Spanned<'_>], href: &CowStr<'_>) -> Element {
        let kind = ElementKind::Link {
            text: collect_text(events),
            href: href.to_string(),
        };
        self.element(kind, &markdown[events[0].1.clone()])
    }

    fn list(&self, markdown: &str, events: &[Spanned<'_>], ordered: bool) -> Element {
        let mut items = Vec::new();
        let mut k = 1;
        while k < events.len() {
            let end = matching_end(events, k);
            if let Event::Start(Tag::Item) = events[k].0 {
                items.push(self.list_item(markdown, &events[k..=end]));
            }
            k = end + 1;
        }
        self.element(
            ElementKind::List { ordered, items },
            &markdown[events[0].1.clone()],
        )
    }

    fn list_item(&self, markdown: &str, events: &[Spanned<'_>]) -> ListItem {
        let raw = markdown[events[0].1.clone()].trim_end();
        let content = strip_list_marker(raw).to_string();
        let html = self.renderer.render(&content);
        let (links, images): (Vec<Element>, Vec<Element>) = self
            .inline_media(markdown, events)
            .into_iter()
            .partition(|e| matches!(e.kind(), ElementKind::Link { .. }));
        ListItem {
            text: plain_text(&html),
            markdown: content,
            html,
            links,
            images,
        }
    }

    /// Every link and image in `events`, including ones nested in each other.
    fn inline_media(&self, markdown: &str, events: &[Spanned<'_>]) -> Vec<Element> {
        let mut media = Vec::new();
        for (n, (event, _)) in events.iter().enumerate() {
            match event {
                Event::Start(Tag::Link { dest_url, .. }) => {
                    let end = matching_end(events, n);
                    media.push(self.link(markdown, &events[n..=end], dest_url));
                }
                Event::Start(Tag::Image { dest_url, .. }) => {
                    let end = matching_end(events, n);
                    media.push(self.image(markdown, &events[n..=end], dest_url));
                }
                _ => {}
            }
        }
        media
    }
}

/// Index of the `End` matching the `Start` at `start`; `start` itself for
/// leaf events.
fn matching_end(events: &[Spanned<'_>], start: usize) -> usize {
    if !matches!(events[start].0, Event::Start(_)) {
        return start;
    }
    let mut depth = 0usize;
    for (j, (event, _)) in events.iter().enumerate().skip(start) {
        match event {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    return j;
                }
            }
            _ => {}
        }
    }
    events.len() - 1
}

fn collect_text(events: &[Spanned<'_>]) -> String {
    events
        .iter()
        .filter_map(|(event, _)| match event {
            Event::Text(t) | Event::Code(t) => Some(t.as_ref()),
            Event::SoftBreak | Event::HardBreak => Some(" "),
            _ => None,
        })
        .collect()
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

fn list_marker_regex() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| {
        Regex::new(r"^\s*(?:[-*+]|\d{1,9}[.)])(?:[ \t]+|$)").expect("list marker regex is valid")
    })
}

fn strip_list_marker(item: &str) -> &str {
    match list_marker_regex().find(item) {
        Some(m) => &item[m.end()..],
        None => item,
    }
}

//! DXF parser
//!
//! Top-level section state machine: the file is a sequence of
//! `0/SECTION ... 0/ENDSEC` blocks terminated by `0/EOF`. HEADER, TABLES,
//! BLOCKS and ENTITIES are parsed; any other section is skipped with a
//! notification. Unknown constructs never abort the parse — only a
//! desynchronized token stream does.

use crate::document::{DxfDocument, HeaderValue};
use crate::entities::Entity;
use crate::error::{DxfError, Result};
use crate::notification::{NotificationKind, Notifications};
use crate::scanner::GroupScanner;
use crate::types::Handle;

pub(crate) mod block;
pub(crate) mod common;
pub(crate) mod entity;
pub(crate) mod table;

/// Shared state threaded through the section parsers.
pub(crate) struct ParseCtx {
    pub notifications: Notifications,
    next_handle: u64,
}

impl ParseCtx {
    fn new() -> Self {
        ParseCtx {
            notifications: Notifications::new(),
            next_handle: 1,
        }
    }

    /// Keep the synthetic counter ahead of every handle seen in the file,
    /// so synthesized handles never collide with parsed ones.
    pub fn observe_handle(&mut self, handle: &Handle) {
        if let Some(v) = handle.as_u64() {
            if v >= self.next_handle {
                self.next_handle = v + 1;
            }
        }
    }

    /// Give an entity without a handle the next synthetic one.
    pub fn finish_entity(&mut self, entity: &mut Entity) {
        let common = entity.common_mut();
        match &common.handle {
            Some(h) => {
                let h = h.clone();
                self.observe_handle(&h);
            }
            None => {
                common.handle = Some(Handle::Synthetic(self.next_handle));
                self.next_handle += 1;
            }
        }
    }

    /// Give a block without a handle the next synthetic one.
    pub fn finish_block(&mut self, block: &mut crate::document::Block) {
        match &block.handle {
            Some(h) => {
                let h = h.clone();
                self.observe_handle(&h);
            }
            None => {
                block.handle = Some(Handle::Synthetic(self.next_handle));
                self.next_handle += 1;
            }
        }
    }

    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.notifications.notify(kind, message);
    }
}

/// Parse a DXF file from its full text.
pub fn parse(text: &str) -> Result<DxfDocument> {
    parse_scanner(GroupScanner::from_text(text))
}

/// Parse a DXF file from pre-split lines.
pub fn parse_lines(lines: Vec<String>) -> Result<DxfDocument> {
    parse_scanner(GroupScanner::new(lines))
}

fn parse_scanner(mut scanner: GroupScanner) -> Result<DxfDocument> {
    if !scanner.has_next() {
        return Err(DxfError::EmptyFile);
    }

    let mut doc = DxfDocument::new();
    let mut ctx = ParseCtx::new();

    while scanner.has_next() {
        let group = scanner.next()?;
        if group.is_eof() {
            break;
        }
        if group.is_start_of("SECTION") {
            read_section(&mut scanner, &mut doc, &mut ctx)?;
        }
        // stray groups between sections are ignored
    }

    // the EOF group is mandatory; input that simply runs out is malformed
    if !scanner.is_eof() {
        return Err(DxfError::UnterminatedInput {
            line: scanner.current_line(),
            reason: "input ended without the EOF group".to_string(),
        });
    }

    doc.notifications = ctx.notifications;
    Ok(doc)
}

fn read_section(scanner: &mut GroupScanner, doc: &mut DxfDocument, ctx: &mut ParseCtx) -> Result<()> {
    let name_group = scanner.next()?;
    if name_group.code != 2 {
        // section without a name record; skip to ENDSEC
        scanner.rewind(1);
        skip_section(scanner)?;
        ctx.notify(NotificationKind::Warning, "section without a name skipped");
        return Ok(());
    }
    let name = name_group.value.to_string();
    match name.as_str() {
        "HEADER" => read_header(scanner, doc)?,
        "TABLES" => table::read_tables(scanner, doc, ctx)?,
        "BLOCKS" => block::read_blocks(scanner, doc, ctx)?,
        "ENTITIES" => read_entities(scanner, doc, ctx)?,
        other => {
            ctx.notify(
                NotificationKind::Unsupported,
                format!("section {} skipped", other),
            );
            skip_section(scanner)?;
        }
    }
    Ok(())
}

/// Consume groups up to and including the matching `0/ENDSEC`.
fn skip_section(scanner: &mut GroupScanner) -> Result<()> {
    loop {
        let group = scanner.next()?;
        if group.is_start_of("ENDSEC") {
            return Ok(());
        }
        if group.is_eof() {
            // unterminated section; EOF wins
            scanner.rewind(1);
            return Ok(());
        }
    }
}

/// HEADER section: `9/$NAME` followed by the variable's value groups.
/// A code 10 after the name means a point variable (with the usual
/// optional z); anything else is a scalar. Trailing value groups a
/// variable carries beyond the first are dropped.
fn read_header(scanner: &mut GroupScanner, doc: &mut DxfDocument) -> Result<()> {
    let mut current: Option<String> = None;
    loop {
        let group = scanner.next()?;
        if group.is_start_of("ENDSEC") {
            return Ok(());
        }
        if group.is_eof() {
            scanner.rewind(1);
            return Ok(());
        }
        match group.code {
            9 => current = Some(group.value.to_string()),
            10 => {
                if let Some(name) = current.take() {
                    let x = group.value.as_f64().unwrap_or(0.0);
                    let point = scanner.read_point(10, x)?;
                    doc.header.insert(name, HeaderValue::Point(point));
                }
            }
            _ => {
                if let Some(name) = current.take() {
                    doc.header.insert(name, HeaderValue::from(group.value));
                }
            }
        }
    }
}

/// ENTITIES section: dispatch each `0/<TYPE>` record to its parser.
fn read_entities(scanner: &mut GroupScanner, doc: &mut DxfDocument, ctx: &mut ParseCtx) -> Result<()> {
    loop {
        let group = scanner.next()?;
        if group.is_start_of("ENDSEC") {
            return Ok(());
        }
        if group.is_eof() {
            scanner.rewind(1);
            return Ok(());
        }
        if group.code != 0 {
            continue;
        }
        let type_name = group.value.to_string();
        match entity::parse_entity(&type_name, scanner, ctx)? {
            Some(mut entity) => {
                ctx.finish_entity(&mut entity);
                doc.entities.push(entity);
            }
            None => {
                ctx.notify(
                    NotificationKind::Unsupported,
                    format!("entity type {} skipped", type_name),
                );
                entity::skip_entity(scanner)?;
            }
        }
    }
}

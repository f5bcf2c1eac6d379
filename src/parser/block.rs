//! BLOCKS section
//!
//! Each definition is `0/BLOCK, ...header..., entities, 0/ENDBLK`. Block
//! entities go through the same dispatch as top-level ones and keep their
//! block-local coordinates; expansion happens in the interpreter, not
//! here. A block without a name cannot be referenced, so it is dropped
//! with a warning.

use crate::document::{Block, DxfDocument};
use crate::error::Result;
use crate::notification::NotificationKind;
use crate::parser::common::{value_f64, value_i64, value_string};
use crate::parser::{entity, ParseCtx};
use crate::scanner::GroupScanner;
use crate::types::Handle;

pub(crate) fn read_blocks(
    scanner: &mut GroupScanner,
    doc: &mut DxfDocument,
    ctx: &mut ParseCtx,
) -> Result<()> {
    loop {
        let group = scanner.next()?;
        if group.is_start_of("ENDSEC") {
            return Ok(());
        }
        if group.is_eof() {
            scanner.rewind(1);
            return Ok(());
        }
        if group.is_start_of("BLOCK") {
            if let Some(block) = read_block(scanner, ctx)? {
                doc.blocks.insert(block.name.clone(), block);
            }
        }
    }
}

fn read_block(scanner: &mut GroupScanner, ctx: &mut ParseCtx) -> Result<Option<Block>> {
    let mut block = Block::default();
    // header codes up to the first entity or ENDBLK
    loop {
        let group = scanner.next()?;
        if group.code == 0 {
            scanner.rewind(1);
            break;
        }
        match group.code {
            1 => block.xref_path = value_string(&group),
            2 => block.name = value_string(&group),
            3 => block.name2 = value_string(&group),
            5 => block.handle = Some(Handle::Parsed(value_string(&group))),
            8 => block.layer = value_string(&group),
            10 => block.base_point = scanner.read_point(10, value_f64(&group))?,
            67 => block.in_paper_space = value_i64(&group) != 0,
            70 => block.flags = value_i64(&group) as i32,
            330 => block.owner_handle = Some(value_string(&group)),
            _ => {}
        }
    }
    // code 3 fills in when 2 is missing
    if block.name.is_empty() {
        block.name = block.name2.clone();
    }
    // contained entities
    loop {
        let group = scanner.next()?;
        if group.is_start_of("ENDBLK") {
            entity::skip_entity(scanner)?;
            break;
        }
        if group.is_eof() {
            scanner.rewind(1);
            break;
        }
        if group.code != 0 {
            continue;
        }
        let type_name = value_string(&group);
        match entity::parse_entity(&type_name, scanner, ctx)? {
            Some(mut e) => {
                ctx.finish_entity(&mut e);
                block.entities.push(e);
            }
            None => {
                ctx.notify(
                    NotificationKind::Unsupported,
                    format!("entity type {} skipped in block", type_name),
                );
                entity::skip_entity(scanner)?;
            }
        }
    }
    if block.name.is_empty() {
        ctx.notify(NotificationKind::Warning, "block without a name dropped");
        return Ok(None);
    }
    ctx.finish_block(&mut block);
    Ok(Some(block))
}

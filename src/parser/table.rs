//! TABLES section
//!
//! Each table is `0/TABLE, 2/<name>, ...header..., entries, 0/ENDTAB`.
//! Entry parsing is flush-on-marker: a `0/<Marker>` group closes the
//! record under construction and opens the next; ENDTAB closes the last.
//! The table header's code 70 declares an entry count; a mismatch with
//! the records actually present is recorded as a warning, and the actual
//! records always win.

use crate::document::DxfDocument;
use crate::error::Result;
use crate::notification::NotificationKind;
use crate::parser::common::{value_f64, value_i64, value_string};
use crate::parser::ParseCtx;
use crate::scanner::GroupScanner;
use crate::tables::{DimStyle, Layer, LayerFlags, LineType, TextStyle, VPort};
use crate::types::AciColor;

pub(crate) fn read_tables(
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
        if !group.is_start_of("TABLE") {
            continue;
        }
        let name_group = scanner.next()?;
        if name_group.code != 2 {
            scanner.rewind(1);
            skip_table(scanner)?;
            ctx.notify(NotificationKind::Warning, "table without a name skipped");
            continue;
        }
        let name = value_string(&name_group);
        match name.as_str() {
            "LAYER" => read_table_entries(scanner, doc, ctx, "LAYER", read_layer_entry, |d, e| {
                d.tables.layers.insert(e.name.clone(), e);
            })?,
            "LTYPE" => read_table_entries(scanner, doc, ctx, "LTYPE", read_linetype_entry, |d, e| {
                d.tables.line_types.insert(e.name.clone(), e);
            })?,
            "STYLE" => read_table_entries(scanner, doc, ctx, "STYLE", read_textstyle_entry, |d, e| {
                d.tables.text_styles.insert(e.name.clone(), e);
            })?,
            "DIMSTYLE" => {
                read_table_entries(scanner, doc, ctx, "DIMSTYLE", read_dimstyle_entry, |d, e| {
                    d.tables.dim_styles.insert(e.name.clone(), e);
                })?
            }
            "VPORT" => read_table_entries(scanner, doc, ctx, "VPORT", read_vport_entry, |d, e| {
                d.tables.viewports.insert(e.name.clone(), e);
            })?,
            other => {
                ctx.notify(
                    NotificationKind::Unsupported,
                    format!("table {} skipped", other),
                );
                skip_table(scanner)?;
            }
        }
    }
}

/// Consume groups up to and including `0/ENDTAB`.
fn skip_table(scanner: &mut GroupScanner) -> Result<()> {
    loop {
        let group = scanner.next()?;
        if group.is_start_of("ENDTAB") {
            return Ok(());
        }
        if group.is_eof() {
            scanner.rewind(1);
            return Ok(());
        }
    }
}

/// Generic entry loop shared by all five tables.
///
/// `read_entry` parses one record body (everything between its marker and
/// the next code 0); `store` puts the finished record into the document.
fn read_table_entries<T>(
    scanner: &mut GroupScanner,
    doc: &mut DxfDocument,
    ctx: &mut ParseCtx,
    marker: &str,
    read_entry: fn(&mut GroupScanner) -> Result<T>,
    store: fn(&mut DxfDocument, T),
) -> Result<()> {
    let mut declared: Option<i64> = None;
    let mut actual: i64 = 0;
    loop {
        let group = scanner.next()?;
        if group.is_start_of("ENDTAB") {
            break;
        }
        if group.is_eof() {
            scanner.rewind(1);
            break;
        }
        if group.is_start_of(marker) {
            store(doc, read_entry(scanner)?);
            actual += 1;
        } else if group.code == 70 && declared.is_none() {
            // table header's declared entry count
            declared = Some(value_i64(&group));
        }
    }
    if let Some(d) = declared {
        if d != actual {
            ctx.notify(
                NotificationKind::Warning,
                format!("table {} declared {} entries, found {}", marker, d, actual),
            );
        }
    }
    Ok(())
}

fn read_layer_entry(scanner: &mut GroupScanner) -> Result<Layer> {
    let mut layer = Layer::new();
    loop {
        let group = scanner.next()?;
        if group.code == 0 {
            scanner.rewind(1);
            break;
        }
        match group.code {
            2 => layer.name = value_string(&group),
            6 => layer.line_type = value_string(&group),
            62 => {
                layer.color_index = value_i64(&group) as i16;
                layer.color = AciColor::from_index(layer.color_index);
            }
            70 => layer.flags = LayerFlags::from_bits_truncate(value_i64(&group) as i32),
            370 => layer.lineweight = Some(value_i64(&group) as i16),
            _ => {}
        }
    }
    Ok(layer)
}

fn read_linetype_entry(scanner: &mut GroupScanner) -> Result<LineType> {
    let mut lt = LineType::new();
    loop {
        let group = scanner.next()?;
        if group.code == 0 {
            scanner.rewind(1);
            break;
        }
        match group.code {
            2 => lt.name = value_string(&group),
            3 => lt.description = value_string(&group),
            40 => lt.pattern_length = value_f64(&group),
            49 => lt.elements.push(value_f64(&group)),
            _ => {}
        }
    }
    Ok(lt)
}

fn read_textstyle_entry(scanner: &mut GroupScanner) -> Result<TextStyle> {
    let mut style = TextStyle::new();
    loop {
        let group = scanner.next()?;
        if group.code == 0 {
            scanner.rewind(1);
            break;
        }
        match group.code {
            2 => style.name = value_string(&group),
            3 => style.font_file = value_string(&group),
            4 => style.big_font_file = value_string(&group),
            40 => style.fixed_height = value_f64(&group),
            41 => style.width_factor = value_f64(&group),
            50 => style.oblique_angle = value_f64(&group),
            _ => {}
        }
    }
    Ok(style)
}

fn read_dimstyle_entry(scanner: &mut GroupScanner) -> Result<DimStyle> {
    let mut style = DimStyle::new();
    loop {
        let group = scanner.next()?;
        if group.code == 0 {
            scanner.rewind(1);
            break;
        }
        match group.code {
            2 => style.name = value_string(&group),
            40 => style.scale = value_f64(&group),
            41 => style.arrow_size = value_f64(&group),
            140 => style.text_height = value_f64(&group),
            _ => {}
        }
    }
    Ok(style)
}

fn read_vport_entry(scanner: &mut GroupScanner) -> Result<VPort> {
    let mut vport = VPort::new();
    loop {
        let group = scanner.next()?;
        if group.code == 0 {
            scanner.rewind(1);
            break;
        }
        match group.code {
            2 => vport.name = value_string(&group),
            10 => vport.lower_left = scanner.read_point(10, value_f64(&group))?,
            11 => vport.upper_right = scanner.read_point(11, value_f64(&group))?,
            12 => vport.center = scanner.read_point(12, value_f64(&group))?,
            40 => vport.height = value_f64(&group),
            41 => vport.aspect_ratio = value_f64(&group),
            _ => {}
        }
    }
    Ok(vport)
}

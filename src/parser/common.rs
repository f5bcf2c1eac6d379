//! Common entity property codes
//!
//! Every entity parser dispatches its type-specific codes first and falls
//! through to [`apply_common`] for the codes shared by all entities. The
//! return value tells the caller whether the group was consumed; an
//! unrecognized group is simply dropped by the caller, which is how
//! unknown codes stay non-fatal.

use crate::entities::EntityCommon;
use crate::error::Result;
use crate::scanner::{Group, GroupScanner};
use crate::types::{AciColor, Handle, Rgb};
use crate::xdata::ExtendedData;

/// Lenient value accessors: a group whose value failed numeric coercion
/// reads as the type's zero rather than failing the parse.
pub(crate) fn value_f64(group: &Group) -> f64 {
    group.value.as_f64().unwrap_or(0.0)
}

pub(crate) fn value_i64(group: &Group) -> i64 {
    group.value.as_i64().unwrap_or(0)
}

pub(crate) fn value_string(group: &Group) -> String {
    group.value.to_string()
}

/// Try to consume a group as a common entity property.
pub(crate) fn apply_common(
    common: &mut EntityCommon,
    group: &Group,
    scanner: &mut GroupScanner,
) -> Result<bool> {
    match group.code {
        5 => common.handle = Some(Handle::Parsed(value_string(group))),
        6 => common.line_type = Some(value_string(group)),
        8 => common.layer = value_string(group),
        48 => common.line_type_scale = value_f64(group),
        60 => common.visible = value_i64(group) == 0,
        62 => {
            let index = value_i64(group) as i16;
            common.color_index = Some(index);
            common.color = AciColor::from_index(index);
        }
        67 => common.in_paper_space = value_i64(group) != 0,
        100 => {} // subclass marker
        101 => skip_embedded_object(scanner)?,
        330 => common.owner_handle = Some(value_string(group)),
        347 => {} // material handle, consumed but not modeled
        370 => common.lineweight = Some(value_i64(group) as i16),
        420 => common.true_color = Some(Rgb::from_u32(value_i64(group) as u32)),
        code if code >= 1000 => apply_xdata(common, group),
        _ => return Ok(false),
    }
    Ok(true)
}

/// Code 101 marks an embedded object: everything up to the next code 0
/// belongs to it and is passed over.
pub(crate) fn skip_embedded_object(scanner: &mut GroupScanner) -> Result<()> {
    while scanner.has_next() {
        let group = scanner.next()?;
        if group.code == 0 {
            scanner.rewind(1);
            return Ok(());
        }
    }
    Ok(())
}

fn apply_xdata(common: &mut EntityCommon, group: &Group) {
    let xdata = common.extended_data.get_or_insert_with(ExtendedData::new);
    if group.code == 1001 {
        xdata.start_application(&group.value.to_string());
    } else {
        xdata.push(group.code, group.value.clone());
    }
}

//! Extended entity data (XDATA)
//!
//! Applications attach private data to entities via group codes 1000-1071.
//! A code 1001 names the registered application and starts a new record;
//! the groups that follow belong to it. The parser collects these as an
//! opaque side channel so consumers can inspect them, but nothing in the
//! geometry pipeline interprets them.

use crate::scanner::GroupValue;
use indexmap::IndexMap;

/// Extended data attached to a single entity, keyed by application name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtendedData {
    records: IndexMap<String, Vec<(i32, GroupValue)>>,
    /// Application the next pushed group belongs to.
    current: String,
}

impl ExtendedData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or reopen) the record for an application. A reopened
    /// application keeps accumulating under its original key.
    pub fn start_application(&mut self, name: &str) {
        self.records.entry(name.to_string()).or_default();
        self.current = name.to_string();
    }

    /// Append a group to the current application record.
    ///
    /// Groups seen before any code 1001 land under an empty application
    /// name, matching how permissive readers treat malformed XDATA.
    pub fn push(&mut self, code: i32, value: GroupValue) {
        self.records
            .entry(self.current.clone())
            .or_default()
            .push((code, value));
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Groups recorded for an application, if any.
    pub fn application(&self, name: &str) -> Option<&[(i32, GroupValue)]> {
        self.records.get(name).map(|v| v.as_slice())
    }

    /// Iterate over (application, groups) records in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[(i32, GroupValue)])> {
        self.records.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_records() {
        let mut xd = ExtendedData::new();
        xd.start_application("ACAD");
        xd.push(1000, GroupValue::Text("hello".into()));
        xd.push(1040, GroupValue::Double(1.5));

        let groups = xd.application("ACAD").unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, 1000);
    }

    #[test]
    fn test_reopened_application_keeps_its_key() {
        let mut xd = ExtendedData::new();
        xd.start_application("ACAD");
        xd.push(1000, GroupValue::Text("a".into()));
        xd.start_application("OTHER");
        xd.push(1000, GroupValue::Text("b".into()));
        // reopening must route groups back to the original record, not
        // whichever record happens to sit last in the map
        xd.start_application("ACAD");
        xd.push(1000, GroupValue::Text("c".into()));

        assert_eq!(xd.application("ACAD").unwrap().len(), 2);
        assert_eq!(xd.application("OTHER").unwrap().len(), 1);
    }

    #[test]
    fn test_orphan_groups_get_empty_key() {
        let mut xd = ExtendedData::new();
        xd.push(1070, GroupValue::Integer(7));
        assert!(xd.application("").is_some());
    }
}

//! Record assembly: one raw row in, one [`LiquorLicense`] out.

use std::collections::{BTreeMap, HashMap};

use csv::StringRecord;

use crate::error::{IngestionError, IngestionResult};
use crate::types::LiquorLicense;

use super::fields::{optional_string, parse_date, parse_int, parse_point};

/// Header names used by the registry extract.
pub mod columns {
    pub const LICENSE_PERMIT_ID: &str = "License Permit ID";
    pub const PREMISES_COUNTY: &str = "Premises County";
    pub const TYPE: &str = "Type";
    pub const CLASS: &str = "Class";
    pub const DESCRIPTION: &str = "Description";
    pub const LEGAL_NAME: &str = "LegalName";
    pub const DBA: &str = "DBA";
    pub const ADDRESS: &str = "Actual Address Of Premises";
    pub const ADDITIONAL_ADDRESS: &str = "Additional Address Information";
    pub const CITY: &str = "City";
    pub const STATE: &str = "State Name";
    pub const ZIP_CODE: &str = "Zip Code";
    pub const ORIGINAL_ISSUE_DATE: &str = "Original Issue Date";
    pub const LAST_ISSUE_DATE: &str = "Last Issue Date";
    pub const EFFECTIVE_DATE: &str = "Effective Date";
    pub const EXPIRATION_DATE: &str = "Expiration Date";
    pub const PARENT_LICENSE_ID: &str = "Parent License ID";
    pub const LEGACY_SERIAL_NUMBER: &str = "Legacy Serial Number";
    pub const AKA_ADDRESS: &str = "AKA Address";
    pub const GEOREFERENCE: &str = "Georeference";

    /// Every column the assembler reads, in extract order.
    pub const ALL: [&str; 20] = [
        LICENSE_PERMIT_ID,
        PREMISES_COUNTY,
        TYPE,
        CLASS,
        DESCRIPTION,
        LEGAL_NAME,
        DBA,
        ADDRESS,
        ADDITIONAL_ADDRESS,
        CITY,
        STATE,
        ZIP_CODE,
        ORIGINAL_ISSUE_DATE,
        LAST_ISSUE_DATE,
        EFFECTIVE_DATE,
        EXPIRATION_DATE,
        PARENT_LICENSE_ID,
        LEGACY_SERIAL_NUMBER,
        AKA_ADDRESS,
        GEOREFERENCE,
    ];
}

/// A source row addressed by column name.
///
/// `None` means the row has no value at all for `column`, which is a schema error. An empty
/// cell is `Some("")`.
pub trait RawRow {
    fn get(&self, column: &str) -> Option<&str>;
}

impl RawRow for HashMap<String, String> {
    fn get(&self, column: &str) -> Option<&str> {
        HashMap::get(self, column).map(String::as_str)
    }
}

impl RawRow for BTreeMap<String, String> {
    fn get(&self, column: &str) -> Option<&str> {
        BTreeMap::get(self, column).map(String::as_str)
    }
}

/// Column name -> CSV field index, resolved once from the header line.
#[derive(Debug, Clone)]
pub struct ColumnIndex {
    positions: HashMap<&'static str, usize>,
}

impl ColumnIndex {
    /// Resolve every expected column against `headers` (order can differ, extras are ignored).
    ///
    /// When a column name appears more than once, the first occurrence wins.
    pub fn from_headers(headers: &StringRecord) -> IngestionResult<Self> {
        let mut positions = HashMap::with_capacity(columns::ALL.len());
        for name in columns::ALL {
            match headers.iter().position(|h| h == name) {
                Some(idx) => {
                    positions.insert(name, idx);
                }
                None => {
                    return Err(IngestionError::SchemaMismatch {
                        message: format!(
                            "missing required column '{name}'. headers={:?}",
                            headers.iter().collect::<Vec<_>>()
                        ),
                    });
                }
            }
        }
        Ok(Self { positions })
    }

    /// View `record` as a [`RawRow`] through this index.
    pub fn row<'a>(&'a self, record: &'a StringRecord) -> IndexedRow<'a> {
        IndexedRow {
            index: self,
            record,
        }
    }
}

/// A CSV record paired with the header index it was read under.
#[derive(Debug, Clone, Copy)]
pub struct IndexedRow<'a> {
    index: &'a ColumnIndex,
    record: &'a StringRecord,
}

impl RawRow for IndexedRow<'_> {
    fn get(&self, column: &str) -> Option<&str> {
        self.index
            .positions
            .get(column)
            .and_then(|&idx| self.record.get(idx))
    }
}

impl LiquorLicense {
    /// Assemble a license from one raw row.
    ///
    /// `row_number` is only used in error messages (1-based, the header being row 1).
    pub fn from_row(row: &impl RawRow, row_number: usize) -> IngestionResult<Self> {
        let cells = Cells { row, row_number };

        Ok(Self {
            license_permit_id: cells.text(columns::LICENSE_PERMIT_ID)?,
            premises_county: cells.text(columns::PREMISES_COUNTY)?,
            license_type: cells.parse(columns::TYPE, parse_int)?,
            license_class: cells.text(columns::CLASS)?,
            description: cells.text(columns::DESCRIPTION)?,
            legal_name: cells.text(columns::LEGAL_NAME)?,
            dba: cells.optional(columns::DBA)?,
            address: cells.text(columns::ADDRESS)?,
            additional_address: cells.optional(columns::ADDITIONAL_ADDRESS)?,
            city: cells.text(columns::CITY)?,
            state: cells.text(columns::STATE)?,
            zip_code: cells.text(columns::ZIP_CODE)?,
            original_issue_date: cells.parse(columns::ORIGINAL_ISSUE_DATE, parse_date)?,
            last_issue_date: cells.parse(columns::LAST_ISSUE_DATE, parse_date)?,
            effective_date: cells.parse(columns::EFFECTIVE_DATE, parse_date)?,
            expiration_date: cells.parse(columns::EXPIRATION_DATE, parse_date)?,
            parent_license_id: cells.optional(columns::PARENT_LICENSE_ID)?,
            legacy_serial_number: cells.optional(columns::LEGACY_SERIAL_NUMBER)?,
            aka_address: cells.optional(columns::AKA_ADDRESS)?,
            georeference: parse_point(cells.raw(columns::GEOREFERENCE)?),
        })
    }
}

struct Cells<'r, R: RawRow> {
    row: &'r R,
    row_number: usize,
}

impl<'r, R: RawRow> Cells<'r, R> {
    fn raw(&self, column: &str) -> IngestionResult<&'r str> {
        self.row
            .get(column)
            .ok_or_else(|| IngestionError::SchemaMismatch {
                message: format!("row {} has no value for column '{column}'", self.row_number),
            })
    }

    fn text(&self, column: &str) -> IngestionResult<String> {
        self.raw(column).map(str::to_owned)
    }

    fn optional(&self, column: &str) -> IngestionResult<Option<String>> {
        self.raw(column).map(optional_string)
    }

    fn parse<T>(
        &self,
        column: &str,
        parser: impl FnOnce(&str) -> Result<T, String>,
    ) -> IngestionResult<T> {
        let raw = self.raw(column)?;
        parser(raw).map_err(|message| IngestionError::ParseError {
            row: self.row_number,
            column: column.to_owned(),
            raw: raw.to_owned(),
            message,
        })
    }
}
